//! Answer checking for free-text input.

use crate::question_engine::models::Question;

/// Maximum distance between a typed answer and the exact one.
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Parse raw input as a decimal number. Blank, non-numeric and non-finite
/// input yields `None`.
pub fn parse_answer(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Grade raw input against `question`. Anything unparsable is incorrect.
pub fn is_correct(question: &Question, input: &str, tolerance: f64) -> bool {
    parse_answer(input).is_some_and(|value| (value - question.answer).abs() < tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::models::Operator;

    fn q(answer: f64) -> Question {
        Question {
            id: "SUB-00000000".into(),
            display_text: "3 - 8".into(),
            operands: (3, 8),
            operator: Operator::Subtract,
            answer,
        }
    }

    #[test]
    fn accepts_exact_and_near_values() {
        assert!(is_correct(&q(-5.0), "-5", DEFAULT_TOLERANCE));
        assert!(is_correct(&q(-5.0), "  -5.0 ", DEFAULT_TOLERANCE));
        assert!(is_correct(&q(-5.0), "-5.0004", DEFAULT_TOLERANCE));
    }

    #[test]
    fn rejects_wrong_or_malformed_input() {
        assert!(!is_correct(&q(-5.0), "5", DEFAULT_TOLERANCE));
        assert!(!is_correct(&q(-5.0), "-5.01", DEFAULT_TOLERANCE));
        assert!(!is_correct(&q(-5.0), "", DEFAULT_TOLERANCE));
        assert!(!is_correct(&q(-5.0), "five", DEFAULT_TOLERANCE));
        assert!(!is_correct(&q(-5.0), "NaN", DEFAULT_TOLERANCE));
        assert!(!is_correct(&q(-5.0), "inf", DEFAULT_TOLERANCE));
    }
}
