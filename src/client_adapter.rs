use serde_json::{json, Value};

use crate::progression::{DiagnosticSession, PracticeSession, DIAGNOSTIC_QUESTION_COUNT};
use crate::question_engine::Question;

/// Map a question to the JSON object the UI renders.
///
/// The answer is never included; grading happens on this side.
pub fn question_payload(question: &Question, remaining_secs: Option<u32>) -> Value {
    json!({
        "id": question.id,
        "text": question.display_text,
        "operator": question.operator,
        "remainingSecs": remaining_secs,
    })
}

/// Practice screen state: level, counters and the outstanding question.
pub fn practice_payload(session: &PracticeSession) -> Value {
    let totals = session.totals();
    json!({
        "level": session.level().get(),
        "streak": session.streak(),
        "consecutiveWrong": session.consecutive_wrong(),
        "timeBudgetSecs": session.time_budget(),
        "session": { "answered": totals.answered, "correct": totals.correct },
        "ticket": session.current_ticket().map(|t| t.get()),
        "question": session
            .current_question()
            .map(|q| question_payload(q, session.remaining_secs())),
    })
}

/// Diagnostic screen state: "Question n of 5", score and the outstanding question.
pub fn diagnostic_payload(session: &DiagnosticSession) -> Value {
    json!({
        "questionNumber": (session.current_index() + 1).min(DIAGNOSTIC_QUESTION_COUNT),
        "totalQuestions": DIAGNOSTIC_QUESTION_COUNT,
        "score": session.score(),
        "complete": session.is_complete(),
        "ticket": session.current_ticket().map(|t| t.get()),
        "question": session
            .current_question()
            .map(|q| question_payload(q, session.remaining_secs())),
    })
}
