use std::fmt;
use serde::{Deserialize, Serialize};

use crate::error::{LevelError, ParseQuestionError};

// ---------------------------------------------------------------------------
// Level
// ---------------------------------------------------------------------------

/// User proficiency, 1 and up. Doubles as grade band and timer speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Level(u32);

impl Level {
    pub const MIN: Level = Level(1);

    /// Level assigned to a user who has never been calibrated.
    pub const DEFAULT: Level = Level(8);

    pub fn new(value: u32) -> Result<Self, LevelError> {
        if value == 0 {
            return Err(LevelError::Zero);
        }
        Ok(Level(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn raised_by(self, steps: u32) -> Level {
        Level(self.0.saturating_add(steps))
    }

    /// One level down, never below [`Level::MIN`].
    pub fn lowered(self) -> Level {
        Level(self.0.saturating_sub(1).max(1))
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::DEFAULT
    }
}

impl TryFrom<u32> for Level {
    type Error = LevelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Level::new(value)
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> u32 {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Square,
    Cube,
    PowerOfTwo,
}

impl Operator {
    /// Symbol used between the operands in the display text.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add        => "+",
            Operator::Subtract   => "-",
            Operator::Multiply   => "*",
            Operator::Divide     => "/",
            Operator::Square     => "^",
            Operator::Cube       => "^",
            Operator::PowerOfTwo => "^",
        }
    }

    /// Short tag used as the question id prefix.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Operator::Add        => "ADD",
            Operator::Subtract   => "SUB",
            Operator::Multiply   => "MUL",
            Operator::Divide     => "DIV",
            Operator::Square     => "SQR",
            Operator::Cube       => "CUB",
            Operator::PowerOfTwo => "POW",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operator::Add        => "Addition",
            Operator::Subtract   => "Subtraction",
            Operator::Multiply   => "Multiplication",
            Operator::Divide     => "Division",
            Operator::Square     => "Square",
            Operator::Cube       => "Cube",
            Operator::PowerOfTwo => "Power of Two",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Request / question types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub level: Level,
    /// `Some` makes the output reproducible; `None` draws from entropy.
    pub rng_seed: Option<u64>,
}

impl QuestionRequest {
    pub fn new(level: Level) -> Self {
        QuestionRequest { level, rng_seed: None }
    }

    pub fn seeded(level: Level, seed: u64) -> Self {
        QuestionRequest { level, rng_seed: Some(seed) }
    }
}

/// One arithmetic question and its exact answer.
///
/// Unary forms keep their fixed part in `operands`: squares are `(a, 2)`,
/// cubes `(a, 3)` and powers of two `(2, exponent)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub display_text: String,
    pub operands: (i64, i64),
    pub operator: Operator,
    pub answer: f64,
}

impl Question {
    /// Recover `(a, operator, b)` from display text such as `"12 / 4"` or `"2 ^ 5"`.
    ///
    /// A `^` with base 2 and an exponent other than 2 or 3 reads as a power of
    /// two; otherwise the exponent picks square or cube. `"2 ^ 2"` and
    /// `"2 ^ 3"` are ambiguous and read as square and cube.
    pub fn parse_display(text: &str) -> Result<(i64, Operator, i64), ParseQuestionError> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        let [a, sym, b] = parts.as_slice() else {
            return Err(ParseQuestionError::Shape(text.to_string()));
        };
        let a: i64 = a.parse().map_err(|_| ParseQuestionError::Operand(a.to_string()))?;
        let b: i64 = b.parse().map_err(|_| ParseQuestionError::Operand(b.to_string()))?;

        let operator = match *sym {
            "+" => Operator::Add,
            "-" => Operator::Subtract,
            "*" => Operator::Multiply,
            "/" => Operator::Divide,
            "^" => match (a, b) {
                (_, 2) => Operator::Square,
                (_, 3) => Operator::Cube,
                (2, _) => Operator::PowerOfTwo,
                _ => return Err(ParseQuestionError::Operator(sym.to_string())),
            },
            other => return Err(ParseQuestionError::Operator(other.to_string())),
        };
        Ok((a, operator, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_rejects_zero() {
        assert_eq!(Level::new(0), Err(LevelError::Zero));
        assert_eq!(Level::new(1).map(Level::get), Ok(1));
    }

    #[test]
    fn level_lowered_stops_at_one() {
        assert_eq!(Level::MIN.lowered(), Level::MIN);
        assert_eq!(Level::DEFAULT.lowered().get(), 7);
    }

    #[test]
    fn level_deserialises_through_validation() {
        let ok: Level = serde_json::from_str("4").unwrap();
        assert_eq!(ok.get(), 4);
        assert!(serde_json::from_str::<Level>("0").is_err());
    }

    #[test]
    fn parse_display_reads_every_shape() {
        assert_eq!(Question::parse_display("3 + 4"), Ok((3, Operator::Add, 4)));
        assert_eq!(Question::parse_display("3 - 9"), Ok((3, Operator::Subtract, 9)));
        assert_eq!(Question::parse_display("6 * 7"), Ok((6, Operator::Multiply, 7)));
        assert_eq!(Question::parse_display("84 / 12"), Ok((84, Operator::Divide, 12)));
        assert_eq!(Question::parse_display("17 ^ 2"), Ok((17, Operator::Square, 2)));
        assert_eq!(Question::parse_display("5 ^ 3"), Ok((5, Operator::Cube, 3)));
        assert_eq!(Question::parse_display("2 ^ 7"), Ok((2, Operator::PowerOfTwo, 7)));
    }

    #[test]
    fn parse_display_rejects_garbage() {
        assert!(matches!(Question::parse_display("3 +"), Err(ParseQuestionError::Shape(_))));
        assert!(matches!(Question::parse_display("x + 4"), Err(ParseQuestionError::Operand(_))));
        assert!(matches!(Question::parse_display("3 % 4"), Err(ParseQuestionError::Operator(_))));
        assert!(matches!(Question::parse_display("3 ^ 5"), Err(ParseQuestionError::Operator(_))));
    }
}
