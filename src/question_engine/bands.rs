//! Level bands: which operand ranges and operators each level may use.

use std::ops::RangeInclusive;

use crate::question_engine::models::{Level, Operator};

/// Range every division question draws from, regardless of band.
pub const DIVISION_RANGE: RangeInclusive<i64> = 1..=99;

/// Exponents offered by power-of-two questions.
pub const POWER_OF_TWO_EXPONENTS: RangeInclusive<u32> = 1..=8;

const BASIC: &[Operator] = &[Operator::Add, Operator::Subtract, Operator::Multiply];

const WITH_DIVISION: &[Operator] = &[
    Operator::Add, Operator::Subtract, Operator::Multiply, Operator::Divide,
];

const WITH_SQUARE: &[Operator] = &[
    Operator::Add, Operator::Subtract, Operator::Multiply, Operator::Divide,
    Operator::Square,
];

const ALL: &[Operator] = &[
    Operator::Add, Operator::Subtract, Operator::Multiply, Operator::Divide,
    Operator::Square, Operator::Cube, Operator::PowerOfTwo,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelBand {
    /// Levels 1–3.
    Primary,
    /// Levels 4–6.
    Elementary,
    /// Levels 7–8.
    Middle,
    /// Levels 9–12.
    Secondary,
    /// Anything above 12; same rules as `Secondary`.
    Beyond,
}

impl LevelBand {
    pub fn for_level(level: Level) -> LevelBand {
        match level.get() {
            0..=3  => LevelBand::Primary,
            4..=6  => LevelBand::Elementary,
            7..=8  => LevelBand::Middle,
            9..=12 => LevelBand::Secondary,
            _      => LevelBand::Beyond,
        }
    }

    /// Range for the left operand (and the single operand of squares/cubes).
    pub fn first_range(self) -> RangeInclusive<i64> {
        match self {
            LevelBand::Primary => 1..=9,
            _                  => 1..=20,
        }
    }

    /// Range for the right operand of binary operators.
    pub fn second_range(self) -> RangeInclusive<i64> {
        match self {
            LevelBand::Primary    => 1..=9,
            LevelBand::Elementary => 1..=20,
            _                     => 1..=11,
        }
    }

    pub fn operators(self) -> &'static [Operator] {
        match self {
            LevelBand::Primary    => BASIC,
            LevelBand::Elementary => WITH_DIVISION,
            LevelBand::Middle     => WITH_SQUARE,
            LevelBand::Secondary | LevelBand::Beyond => ALL,
        }
    }

    pub fn allows(self, operator: Operator) -> bool {
        self.operators().contains(&operator)
    }
}
