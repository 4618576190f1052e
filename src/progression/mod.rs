//! Level progression: diagnostic calibration, practice streaks and the
//! per-question clock.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `budget`     | `time_budget_for_level()`: seconds per practice question |
//! | `timer`      | Tick-driven `Countdown`, `RoundTicket` and single-resolution rounds |
//! | `diagnostic` | Five-question `DiagnosticSession` and `evaluate_diagnostic()` |
//! | `practice`   | `PracticeSession` and `evaluate_practice_answer()` |

pub mod budget;
pub mod diagnostic;
pub mod practice;
pub mod timer;

pub use budget::time_budget_for_level;
pub use diagnostic::{
    evaluate_diagnostic, evaluate_scores, DiagnosticEntry, DiagnosticReport, DiagnosticSession,
    DiagnosticStep, DIAGNOSTIC_QUESTION_COUNT,
};
pub use practice::{
    evaluate_practice_answer, AnswerReport, LifetimeStats, PracticeOutcome, PracticePhase,
    PracticeSession, PresentedQuestion, SessionTotals,
};
pub use timer::{Countdown, RoundTicket, SubmitOutcome, TickOutcome};
