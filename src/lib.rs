//! # arithmetic_drill
//!
//! An adaptive arithmetic-practice engine.
//!
//! The library generates randomised arithmetic questions matched to a user's
//! level, grades typed answers, and moves the level up or down from how the
//! user performs: once through a five-question diagnostic, then continuously
//! during practice.
//!
//! ## How it works
//!
//! 1. Build a [`QuestionRequest`] for a [`Level`] (optionally seeded) and call
//!    [`generate_question`]. The level's band decides the operand ranges and
//!    which operators may appear.
//! 2. For calibration, run a [`DiagnosticSession`]: five questions, eight
//!    seconds each, then [`evaluate_diagnostic`] turns accuracy and average
//!    time into a new level.
//! 3. For practice, drive a [`PracticeSession`]: present a question, then
//!    either submit an answer or tick the clock until it runs out. Every fifth
//!    correct answer in a row raises the level; five misses in a row lower it.
//! 4. Keep an [`AppState`] for the fields the surrounding app persists, and
//!    subscribe to it for change notifications.
//!
//! ## Quick start
//!
//! ```rust
//! use arithmetic_drill::{generate_question, time_budget_for_level, Level, QuestionRequest};
//!
//! let level = Level::new(7).unwrap();
//! let question = generate_question(QuestionRequest::seeded(level, 42));
//! println!("{} = ?  ({} s)", question.display_text, time_budget_for_level(level));
//! assert_eq!(question.answer.fract(), 0.0);
//! ```
//!
//! Pure decision functions are available for callers that keep their own
//! counters:
//!
//! ```rust
//! use arithmetic_drill::{evaluate_practice_answer, Level};
//!
//! let outcome = evaluate_practice_answer(Level::new(3).unwrap(), 4, 0, true);
//! assert!(outcome.leveled_up);
//! assert_eq!(outcome.new_level.get(), 4);
//! ```

pub mod app_state;
pub mod client_adapter;
pub mod config;
pub mod error;
pub mod progression;
pub mod question_engine;

// Convenience re-exports so callers can use `arithmetic_drill::generate_question`
// directly without reaching into sub-modules.
pub use app_state::{AppState, AppView, ProgressSnapshot, StateChange, SubscriptionId};
pub use client_adapter::{diagnostic_payload, practice_payload, question_payload};
pub use config::ProgressionRules;
pub use error::{ConfigError, DiagnosticError, GradeError, LevelError, ParseQuestionError};
pub use progression::{
    evaluate_diagnostic, evaluate_practice_answer, time_budget_for_level, AnswerReport,
    DiagnosticReport, DiagnosticSession, DiagnosticStep, LifetimeStats, PracticeOutcome,
    PracticePhase, PracticeSession, PresentedQuestion, RoundTicket, SessionTotals,
    SubmitOutcome, TickOutcome, DIAGNOSTIC_QUESTION_COUNT,
};
pub use question_engine::{
    generate_question, generate_question_with, is_correct, parse_answer, Level, LevelBand,
    Operator, Question, QuestionRequest,
};
