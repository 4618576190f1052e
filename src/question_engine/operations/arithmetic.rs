use rand::Rng;

use crate::question_engine::{
    bands::LevelBand,
    helpers,
    models::{Operator, Question},
};

/// Binary add/subtract/multiply with both operands drawn from the band.
///
/// Subtraction is not reordered, so `3 - 8` (answer `-5`) is a legal question.
pub fn generate<R: Rng>(rng: &mut R, band: LevelBand, operator: Operator, id: String) -> Question {
    let a = rng.gen_range(band.first_range());
    let b = rng.gen_range(band.second_range());

    let answer = match operator {
        Operator::Add      => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        other => unreachable!("{other:?} is not a binary arithmetic operator"),
    };

    helpers::question(id, a, operator, b, answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn answers_match_operands() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            for op in [Operator::Add, Operator::Subtract, Operator::Multiply] {
                let q = generate(&mut rng, LevelBand::Middle, op, "T".into());
                let (a, b) = q.operands;
                let expected = match op {
                    Operator::Add => a + b,
                    Operator::Subtract => a - b,
                    _ => a * b,
                };
                assert_eq!(q.answer, expected as f64);
                assert!((1..=20).contains(&a) && (1..=11).contains(&b), "{q:?}");
            }
        }
    }
}
