//! Shared builder functions used by every operator generator.
//!
//! Each generator draws its operands and hands them here; the helpers format
//! the display text and assemble the final [`Question`], so the operator
//! modules contain only their drawing rules.

use rand::RngCore;

use crate::question_engine::models::{Operator, Question};

/// Build a question id from the operator prefix and one RNG draw (e.g. "DIV-1A2B3C4D").
pub fn question_id(operator: Operator, rng: &mut impl RngCore) -> String {
    format!("{}-{:08X}", operator.id_prefix(), rng.next_u32())
}

/// Format `"{a} {symbol} {b}"`.
pub fn display_text(a: i64, operator: Operator, b: i64) -> String {
    format!("{} {} {}", a, operator.symbol(), b)
}

/// Assemble the final [`Question`]. Always the last call in a generator.
pub fn question(id: String, a: i64, operator: Operator, b: i64, answer: i64) -> Question {
    Question {
        id,
        display_text: display_text(a, operator, b),
        operands: (a, b),
        operator,
        answer: answer as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn display_text_uses_single_spaces() {
        assert_eq!(display_text(12, Operator::Divide, 4), "12 / 4");
        assert_eq!(display_text(2, Operator::PowerOfTwo, 6), "2 ^ 6");
        assert_eq!(display_text(9, Operator::Square, 2), "9 ^ 2");
    }

    #[test]
    fn question_id_carries_prefix_and_eight_hex_digits() {
        let mut rng = StdRng::seed_from_u64(3);
        let id = question_id(Operator::Cube, &mut rng);
        let (prefix, hex) = id.split_once('-').unwrap();
        assert_eq!(prefix, "CUB");
        assert_eq!(hex.len(), 8);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
