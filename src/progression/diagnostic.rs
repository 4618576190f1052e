//! Fixed-length diagnostic used once to calibrate the starting level.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ProgressionRules;
use crate::error::{ConfigError, DiagnosticError};
use crate::progression::timer::{RoundSlot, RoundTicket, SlotTick, SubmitOutcome, TickOutcome};
use crate::question_engine::{generate_question_with, grading, Level, Question};

/// Questions in every diagnostic.
pub const DIAGNOSTIC_QUESTION_COUNT: usize = 5;

/// One resolved diagnostic question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticEntry {
    pub question: Question,
    /// Raw input; `None` when the question timed out.
    pub user_answer: Option<String>,
    pub elapsed_secs: f64,
    pub correct: bool,
}

/// Progress after one diagnostic question is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticStep {
    pub index: usize,
    pub correct: bool,
    pub timed_out: bool,
    /// Set once the last question has been resolved.
    pub finished: bool,
}

/// Summary of a finished diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub starting_level: Level,
    pub correct_count: usize,
    pub accuracy: f64,
    pub average_secs: f64,
    pub new_level: Level,
}

/// Level after a diagnostic with `correct_count` right out of
/// [`DIAGNOSTIC_QUESTION_COUNT`] and `total_elapsed_secs` spent overall.
pub fn evaluate_scores(
    rules: &ProgressionRules,
    starting_level: Level,
    correct_count: usize,
    total_elapsed_secs: f64,
) -> Level {
    let total = DIAGNOSTIC_QUESTION_COUNT as f64;
    let accuracy = correct_count as f64 / total;
    let average = total_elapsed_secs / total;

    if accuracy >= rules.strong_accuracy && average < rules.fast_average_secs {
        starting_level.raised_by(2)
    } else if accuracy >= rules.pass_accuracy {
        starting_level.raised_by(1)
    } else {
        starting_level
    }
}

/// New level for a finished session.
pub fn evaluate_diagnostic(session: &DiagnosticSession) -> Result<Level, DiagnosticError> {
    session.report().map(|report| report.new_level)
}

/// A running diagnostic.
///
/// All questions are generated up front at the starting level. The first one
/// is presented immediately; each answer or timeout presents the next until
/// the session is complete.
#[derive(Debug)]
pub struct DiagnosticSession {
    rules: ProgressionRules,
    starting_level: Level,
    questions: Vec<Question>,
    entries: Vec<DiagnosticEntry>,
    rounds: RoundSlot,
}

impl DiagnosticSession {
    pub fn start<R: Rng>(rng: &mut R, starting_level: Level) -> Self {
        Self::begin(rng, starting_level, ProgressionRules::default())
    }

    /// Like [`start`](Self::start) with custom rules. Rules that fail
    /// [`ProgressionRules::validate`] are rejected before any question is drawn.
    pub fn start_with_rules<R: Rng>(
        rng: &mut R,
        starting_level: Level,
        rules: ProgressionRules,
    ) -> Result<Self, ConfigError> {
        rules.validate()?;
        Ok(Self::begin(rng, starting_level, rules))
    }

    fn begin<R: Rng>(rng: &mut R, starting_level: Level, rules: ProgressionRules) -> Self {
        let questions = (0..DIAGNOSTIC_QUESTION_COUNT)
            .map(|_| generate_question_with(&mut *rng, starting_level))
            .collect();
        let mut session = DiagnosticSession {
            rules,
            starting_level,
            questions,
            entries: Vec::with_capacity(DIAGNOSTIC_QUESTION_COUNT),
            rounds: RoundSlot::default(),
        };
        session.present_next();
        debug!(%starting_level, "diagnostic started");
        session
    }

    pub fn starting_level(&self) -> Level {
        self.starting_level
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn entries(&self) -> &[DiagnosticEntry] {
        &self.entries
    }

    /// Zero-based index of the question being asked (equals the count when done).
    pub fn current_index(&self) -> usize {
        self.entries.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.rounds.active().map(|round| &round.question)
    }

    pub fn current_ticket(&self) -> Option<RoundTicket> {
        self.rounds.active().map(|round| round.ticket)
    }

    pub fn remaining_secs(&self) -> Option<u32> {
        self.rounds.active().map(|round| round.countdown.remaining())
    }

    pub fn score(&self) -> usize {
        self.entries.iter().filter(|e| e.correct).count()
    }

    pub fn is_complete(&self) -> bool {
        self.entries.len() == DIAGNOSTIC_QUESTION_COUNT
    }

    /// Grade `input` for the round named by `ticket`. `elapsed` is raised to
    /// at least the seconds already ticked off and capped at the budget.
    pub fn submit_answer(
        &mut self,
        ticket: RoundTicket,
        input: &str,
        elapsed: Duration,
    ) -> SubmitOutcome<DiagnosticStep> {
        let Some(round) = self.rounds.claim(ticket) else {
            debug!(ticket = ticket.get(), "ignoring stale diagnostic answer");
            return SubmitOutcome::Ignored;
        };
        let budget = f64::from(self.rules.diagnostic_budget_secs);
        let ticked = f64::from(round.countdown.elapsed());
        let correct = grading::is_correct(&round.question, input, self.rules.answer_tolerance);
        let step = self.resolve(DiagnosticEntry {
            question: round.question,
            user_answer: Some(input.to_string()),
            elapsed_secs: elapsed.as_secs_f64().max(ticked).min(budget),
            correct,
        });
        SubmitOutcome::Accepted(step)
    }

    /// Answer whichever question is current, for callers that do not keep tickets.
    pub fn answer_current(
        &mut self,
        input: &str,
        elapsed: Duration,
    ) -> Result<DiagnosticStep, DiagnosticError> {
        let ticket = self.current_ticket().ok_or(DiagnosticError::Finished)?;
        self.submit_answer(ticket, input, elapsed)
            .accepted()
            .ok_or(DiagnosticError::Finished)
    }

    /// Advance the clock one second. Expiry scores the question wrong with the
    /// full budget credited and moves on.
    pub fn tick(&mut self) -> TickOutcome<DiagnosticStep> {
        match self.rounds.tick() {
            SlotTick::Idle => TickOutcome::Idle,
            SlotTick::Running(remaining) => TickOutcome::Running { remaining },
            SlotTick::Expired(round) => {
                debug!(ticket = round.ticket.get(), "diagnostic question timed out");
                let step = self.resolve(DiagnosticEntry {
                    question: round.question,
                    user_answer: None,
                    elapsed_secs: f64::from(round.countdown.budget()),
                    correct: false,
                });
                TickOutcome::TimedOut(step)
            }
        }
    }

    /// Stop the clock without finishing. The session can no longer be evaluated.
    pub fn abandon(&mut self) {
        self.rounds.cancel();
    }

    /// Accuracy, average time and the resulting level.
    pub fn report(&self) -> Result<DiagnosticReport, DiagnosticError> {
        if !self.is_complete() {
            return Err(DiagnosticError::Incomplete {
                answered: self.entries.len(),
                expected: DIAGNOSTIC_QUESTION_COUNT,
            });
        }
        let total_secs: f64 = self.entries.iter().map(|e| e.elapsed_secs).sum();
        let correct_count = self.score();
        let count = DIAGNOSTIC_QUESTION_COUNT as f64;
        Ok(DiagnosticReport {
            starting_level: self.starting_level,
            correct_count,
            accuracy: correct_count as f64 / count,
            average_secs: total_secs / count,
            new_level: evaluate_scores(&self.rules, self.starting_level, correct_count, total_secs),
        })
    }

    fn resolve(&mut self, entry: DiagnosticEntry) -> DiagnosticStep {
        let index = self.entries.len();
        let step = DiagnosticStep {
            index,
            correct: entry.correct,
            timed_out: entry.user_answer.is_none(),
            finished: index + 1 == DIAGNOSTIC_QUESTION_COUNT,
        };
        self.entries.push(entry);
        if step.finished {
            info!(
                starting_level = %self.starting_level,
                score = self.score(),
                "diagnostic finished"
            );
        } else {
            self.present_next();
        }
        step
    }

    fn present_next(&mut self) {
        if let Some(question) = self.questions.get(self.entries.len()) {
            self.rounds.present(question.clone(), self.rules.diagnostic_budget_secs);
        }
    }
}
