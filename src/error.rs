//! Error types shared across the engine.
//!
//! Wrong or malformed answers are never errors; they are graded as incorrect.
//! The variants here cover invalid construction, misuse of a diagnostic
//! session, bad configuration and unparsable question text.

use thiserror::Error;

/// Rejected when building a [`Level`](crate::Level) from a raw integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LevelError {
    #[error("level must be at least 1")]
    Zero,
}

/// Rejected when picking a starting grade outside the offered range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GradeError {
    #[error("grade {0} is outside 1..=12")]
    OutOfRange(u32),
}

/// Errors emitted by diagnostic sessions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DiagnosticError {
    #[error("diagnostic has {answered} of {expected} questions resolved")]
    Incomplete { answered: usize, expected: usize },
    #[error("diagnostic already finished")]
    Finished,
}

/// Errors emitted while loading [`ProgressionRules`](crate::ProgressionRules).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid progression rules: {0}")]
    Invalid(String),
}

/// Returned by [`Question::parse_display`](crate::Question::parse_display).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseQuestionError {
    #[error("expected `<a> <op> <b>`, got {0:?}")]
    Shape(String),
    #[error("bad operand {0:?}")]
    Operand(String),
    #[error("unknown operator {0:?}")]
    Operator(String),
}
