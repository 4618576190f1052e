//! Continuous practice: streak tracking, level changes and the question clock.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ProgressionRules;
use crate::error::ConfigError;
use crate::progression::budget::time_budget_for_level;
use crate::progression::timer::{RoundSlot, RoundTicket, SlotTick, SubmitOutcome, TickOutcome};
use crate::question_engine::{generate_question_with, grading, Level, Question};

/// Counter update after one practice answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeOutcome {
    pub new_level: Level,
    pub new_streak: u32,
    pub new_consecutive_wrong: u32,
    pub leveled_up: bool,
    pub leveled_down: bool,
}

/// Apply one answer to the practice counters using the default rules.
pub fn evaluate_practice_answer(
    current_level: Level,
    streak: u32,
    consecutive_wrong: u32,
    is_correct: bool,
) -> PracticeOutcome {
    ProgressionRules::default().evaluate_practice_answer(current_level, streak, consecutive_wrong, is_correct)
}

impl ProgressionRules {
    /// Apply one answer to the practice counters.
    ///
    /// The streak keeps counting past a level-up; another level-up fires at
    /// every multiple of `level_up_streak`. Reaching `level_down_misses`
    /// lowers the level (never below 1) and restarts the miss count.
    /// A `level_up_streak` of 0 never levels up.
    pub fn evaluate_practice_answer(
        &self,
        current_level: Level,
        streak: u32,
        consecutive_wrong: u32,
        is_correct: bool,
    ) -> PracticeOutcome {
        if is_correct {
            let new_streak = streak.saturating_add(1);
            let leveled_up = new_streak.checked_rem(self.level_up_streak) == Some(0);
            let new_level = if leveled_up { current_level.raised_by(1) } else { current_level };
            return PracticeOutcome {
                new_level,
                new_streak,
                new_consecutive_wrong: 0,
                leveled_up,
                leveled_down: false,
            };
        }

        let misses = consecutive_wrong.saturating_add(1);
        if misses >= self.level_down_misses {
            let new_level = current_level.lowered();
            PracticeOutcome {
                new_level,
                new_streak: 0,
                new_consecutive_wrong: 0,
                leveled_up: false,
                leveled_down: new_level < current_level,
            }
        } else {
            PracticeOutcome {
                new_level: current_level,
                new_streak: 0,
                new_consecutive_wrong: misses,
                leveled_up: false,
                leveled_down: false,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Totals that outlive a session. Owned and persisted by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifetimeStats {
    pub total_questions_answered: u64,
    pub correct_answers: u64,
    /// 0 until the first practice answer is recorded.
    pub highest_level: u32,
}

impl LifetimeStats {
    fn record(&mut self, correct: bool, level_after: Level) {
        self.total_questions_answered += 1;
        if correct {
            self.correct_answers += 1;
        }
        self.highest_level = self.highest_level.max(level_after.get());
    }
}

/// Totals for the current practice visit only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTotals {
    pub answered: u32,
    pub correct: u32,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PracticePhase {
    Idle,
    Presenting,
    Answered { correct: bool },
    TimedOut,
}

/// A question handed to the caller, with the ticket its answer must quote.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedQuestion {
    pub ticket: RoundTicket,
    pub question: Question,
    pub budget_secs: u32,
}

/// What happened to one resolved practice question.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerReport {
    pub ticket: RoundTicket,
    pub question: Question,
    /// Raw input; `None` when the question timed out.
    pub input: Option<String>,
    pub correct: bool,
    pub outcome: PracticeOutcome,
}

impl AnswerReport {
    pub fn timed_out(&self) -> bool {
        self.input.is_none()
    }
}

/// State of one practice screen visit.
///
/// Loop: [`next_question`](Self::next_question), then either
/// [`submit_answer`](Self::submit_answer) or enough [`tick`](Self::tick)s to
/// time out, then `next_question` again.
#[derive(Debug)]
pub struct PracticeSession {
    rules: ProgressionRules,
    level: Level,
    streak: u32,
    consecutive_wrong: u32,
    totals: SessionTotals,
    lifetime: LifetimeStats,
    phase: PracticePhase,
    rounds: RoundSlot,
}

impl PracticeSession {
    pub fn new(level: Level, lifetime: LifetimeStats) -> Self {
        PracticeSession {
            rules: ProgressionRules::default(),
            level,
            streak: 0,
            consecutive_wrong: 0,
            totals: SessionTotals::default(),
            lifetime,
            phase: PracticePhase::Idle,
            rounds: RoundSlot::default(),
        }
    }

    /// Replace the default rules. Rules that fail
    /// [`ProgressionRules::validate`] are rejected.
    pub fn with_rules(mut self, rules: ProgressionRules) -> Result<Self, ConfigError> {
        rules.validate()?;
        self.rules = rules;
        Ok(self)
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn consecutive_wrong(&self) -> u32 {
        self.consecutive_wrong
    }

    pub fn totals(&self) -> SessionTotals {
        self.totals
    }

    pub fn lifetime(&self) -> LifetimeStats {
        self.lifetime
    }

    pub fn phase(&self) -> PracticePhase {
        self.phase
    }

    pub fn time_budget(&self) -> u32 {
        time_budget_for_level(self.level)
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

    /// Present a fresh question at the current level and start its clock.
    ///
    /// A question still outstanding is dropped unscored.
    pub fn next_question<R: Rng>(&mut self, rng: &mut R) -> PresentedQuestion {
        let question = generate_question_with(rng, self.level);
        let budget_secs = self.time_budget();
        let ticket = self.rounds.present(question.clone(), budget_secs);
        self.phase = PracticePhase::Presenting;
        debug!(ticket = ticket.get(), budget_secs, "practice question presented");
        PresentedQuestion { ticket, question, budget_secs }
    }

    /// Grade `input` for the round named by `ticket`.
    ///
    /// Stale tickets (timed out, already answered, or torn down) are ignored
    /// and change nothing.
    pub fn submit_answer(&mut self, ticket: RoundTicket, input: &str) -> SubmitOutcome<AnswerReport> {
        let Some(round) = self.rounds.claim(ticket) else {
            debug!(ticket = ticket.get(), "ignoring stale practice answer");
            return SubmitOutcome::Ignored;
        };
        let correct = grading::is_correct(&round.question, input, self.rules.answer_tolerance);
        let outcome = self.apply(correct);
        self.phase = PracticePhase::Answered { correct };
        SubmitOutcome::Accepted(AnswerReport {
            ticket,
            question: round.question,
            input: Some(input.to_string()),
            correct,
            outcome,
        })
    }

    /// Advance the clock by one second; a round reaching zero is scored as a miss.
    pub fn tick(&mut self) -> TickOutcome<AnswerReport> {
        match self.rounds.tick() {
            SlotTick::Idle => TickOutcome::Idle,
            SlotTick::Running(remaining) => TickOutcome::Running { remaining },
            SlotTick::Expired(round) => {
                debug!(ticket = round.ticket.get(), "practice question timed out");
                let outcome = self.apply(false);
                self.phase = PracticePhase::TimedOut;
                TickOutcome::TimedOut(AnswerReport {
                    ticket: round.ticket,
                    question: round.question,
                    input: None,
                    correct: false,
                    outcome,
                })
            }
        }
    }

    /// Leave the practice screen. The outstanding round, if any, is dropped
    /// unscored and later ticks or answers do nothing.
    pub fn exit(&mut self) {
        if let Some(round) = self.rounds.cancel() {
            debug!(ticket = round.ticket.get(), "practice round cancelled");
        }
        self.phase = PracticePhase::Idle;
    }

    fn apply(&mut self, correct: bool) -> PracticeOutcome {
        let outcome = self.rules.evaluate_practice_answer(
            self.level,
            self.streak,
            self.consecutive_wrong,
            correct,
        );

        if outcome.leveled_up {
            info!(from = %self.level, to = %outcome.new_level, streak = outcome.new_streak, "level up");
        } else if outcome.leveled_down {
            info!(from = %self.level, to = %outcome.new_level, "level down");
        }

        self.level = outcome.new_level;
        self.streak = outcome.new_streak;
        self.consecutive_wrong = outcome.new_consecutive_wrong;
        self.totals.answered += 1;
        if correct {
            self.totals.correct += 1;
        }
        self.lifetime.record(correct, self.level);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn level(n: u32) -> Level {
        Level::new(n).unwrap()
    }

    fn right_answer(session: &PracticeSession) -> String {
        session.current_question().unwrap().answer.to_string()
    }

    #[test]
    fn five_correct_from_zero_levels_up_once() {
        let mut lvl = level(4);
        let (mut streak, mut wrong) = (0, 0);
        let mut ups = 0;
        for _ in 0..5 {
            let o = evaluate_practice_answer(lvl, streak, wrong, true);
            ups += o.leveled_up as u32;
            lvl = o.new_level;
            streak = o.new_streak;
            wrong = o.new_consecutive_wrong;
        }
        assert_eq!(ups, 1);
        assert_eq!(lvl, level(5));
        assert_eq!(streak % 5, 0);
    }

    #[test]
    fn five_wrong_levels_down_once_and_resets_misses() {
        let mut lvl = level(4);
        let (mut streak, mut wrong) = (3, 0);
        let mut downs = 0;
        for _ in 0..5 {
            let o = evaluate_practice_answer(lvl, streak, wrong, false);
            downs += o.leveled_down as u32;
            lvl = o.new_level;
            streak = o.new_streak;
            wrong = o.new_consecutive_wrong;
        }
        assert_eq!(downs, 1);
        assert_eq!(lvl, level(3));
        assert_eq!(wrong, 0);
        assert_eq!(streak, 0);
    }

    #[test]
    fn correct_answer_clears_misses_and_miss_clears_streak() {
        let o = evaluate_practice_answer(level(6), 2, 4, true);
        assert_eq!((o.new_streak, o.new_consecutive_wrong), (3, 0));
        let o = evaluate_practice_answer(level(6), 4, 0, false);
        assert_eq!((o.new_streak, o.new_consecutive_wrong), (0, 1));
        assert!(!o.leveled_down);
    }

    #[test]
    fn level_down_is_clamped_at_one() {
        let o = evaluate_practice_answer(Level::MIN, 0, 4, false);
        assert_eq!(o.new_level, Level::MIN);
        assert!(!o.leveled_down);
        assert_eq!(o.new_consecutive_wrong, 0);
    }

    #[test]
    fn custom_rules_change_thresholds() {
        let rules = ProgressionRules { level_up_streak: 2, level_down_misses: 1, ..Default::default() };
        assert!(rules.evaluate_practice_answer(level(3), 1, 0, true).leveled_up);
        assert!(rules.evaluate_practice_answer(level(3), 0, 0, false).leveled_down);
    }

    #[test]
    fn session_uses_custom_rules() {
        let mut rng = StdRng::seed_from_u64(11);
        let rules = ProgressionRules { level_up_streak: 2, ..Default::default() };
        let mut session = PracticeSession::new(level(3), LifetimeStats::default())
            .with_rules(rules)
            .unwrap();
        for _ in 0..2 {
            let presented = session.next_question(&mut rng);
            let answer = right_answer(&session);
            session.submit_answer(presented.ticket, &answer);
        }
        assert_eq!(session.level(), level(4));
    }

    #[test]
    fn zero_valued_rules_are_rejected() {
        let zero_streak = ProgressionRules { level_up_streak: 0, ..Default::default() };
        let zero_misses = ProgressionRules { level_down_misses: 0, ..Default::default() };
        for rules in [zero_streak, zero_misses] {
            let err = PracticeSession::new(level(3), LifetimeStats::default())
                .with_rules(rules)
                .unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{err:?}");
        }
    }

    #[test]
    fn zero_streak_rules_never_level_up() {
        let rules = ProgressionRules { level_up_streak: 0, ..Default::default() };
        for streak in [0, 4, 9] {
            let o = rules.evaluate_practice_answer(level(3), streak, 0, true);
            assert!(!o.leveled_up);
            assert_eq!(o.new_level, level(3));
            assert_eq!(o.new_streak, streak + 1);
        }
    }

    #[test]
    fn session_levels_up_after_five_correct_answers() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = PracticeSession::new(level(2), LifetimeStats::default());
        for _ in 0..5 {
            let presented = session.next_question(&mut rng);
            let answer = right_answer(&session);
            let report = session.submit_answer(presented.ticket, &answer).accepted().unwrap();
            assert!(report.correct);
        }
        assert_eq!(session.level(), level(3));
        assert_eq!(session.streak(), 5);
        assert_eq!(session.totals(), SessionTotals { answered: 5, correct: 5 });
        assert_eq!(session.lifetime().correct_answers, 5);
        assert_eq!(session.lifetime().highest_level, 3);
        assert_eq!(session.phase(), PracticePhase::Answered { correct: true });
    }

    #[test]
    fn malformed_input_counts_as_wrong() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut session = PracticeSession::new(level(5), LifetimeStats::default());
        let presented = session.next_question(&mut rng);
        let report = session.submit_answer(presented.ticket, "twelve").accepted().unwrap();
        assert!(!report.correct);
        assert_eq!(session.consecutive_wrong(), 1);
    }

    #[test]
    fn timeout_scores_a_miss_and_late_answer_is_ignored() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut session = PracticeSession::new(level(5), LifetimeStats::default());
        let presented = session.next_question(&mut rng);
        assert_eq!(presented.budget_secs, 9);

        for expected in (1..9).rev() {
            assert_eq!(session.tick(), TickOutcome::Running { remaining: expected });
        }
        let TickOutcome::TimedOut(report) = session.tick() else {
            panic!("expected timeout on the ninth tick");
        };
        assert!(report.timed_out());
        assert_eq!(session.phase(), PracticePhase::TimedOut);

        let late = presented.question.answer.to_string();
        assert_eq!(session.submit_answer(presented.ticket, &late), SubmitOutcome::Ignored);
        assert_eq!(session.totals(), SessionTotals { answered: 1, correct: 0 });
        assert_eq!(session.lifetime().total_questions_answered, 1);
        assert_eq!(session.streak(), 0);
        assert_eq!(session.tick(), TickOutcome::Idle);
    }

    #[test]
    fn answer_stops_the_clock() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut session = PracticeSession::new(level(5), LifetimeStats::default());
        let presented = session.next_question(&mut rng);
        session.tick();
        let answer = right_answer(&session);
        assert!(session.submit_answer(presented.ticket, &answer).accepted().is_some());
        for _ in 0..20 {
            assert_eq!(session.tick(), TickOutcome::Idle);
        }
        assert_eq!(session.totals().answered, 1);
    }

    #[test]
    fn exit_drops_outstanding_round() {
        let mut rng = StdRng::seed_from_u64(14);
        let mut session = PracticeSession::new(level(5), LifetimeStats::default());
        let presented = session.next_question(&mut rng);
        session.exit();
        assert_eq!(session.phase(), PracticePhase::Idle);
        assert_eq!(session.tick(), TickOutcome::Idle);
        assert_eq!(session.submit_answer(presented.ticket, "1"), SubmitOutcome::Ignored);
        assert_eq!(session.totals().answered, 0);
    }

    #[test]
    fn lifetime_stats_carry_over() {
        let mut rng = StdRng::seed_from_u64(15);
        let prior = LifetimeStats { total_questions_answered: 40, correct_answers: 30, highest_level: 11 };
        let mut session = PracticeSession::new(level(5), prior);
        let presented = session.next_question(&mut rng);
        session.submit_answer(presented.ticket, "nope");
        let lifetime = session.lifetime();
        assert_eq!(lifetime.total_questions_answered, 41);
        assert_eq!(lifetime.correct_answers, 30);
        assert_eq!(lifetime.highest_level, 11);
    }
}
