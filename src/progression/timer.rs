//! Countdown and round bookkeeping for the one outstanding question.
//!
//! The caller drives time with one `tick()` per second. A question is
//! resolved exactly once: answering and expiring both take the active round
//! out of its [`RoundSlot`], so whichever comes second finds nothing to
//! resolve and is reported as ignored.

use serde::{Deserialize, Serialize};

use crate::question_engine::Question;

/// Identifies one presented question. Answers must quote the ticket they
/// were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundTicket(u64);

impl RoundTicket {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    budget: u32,
    remaining: u32,
}

impl Countdown {
    pub fn start(budget_secs: u32) -> Self {
        Countdown { budget: budget_secs, remaining: budget_secs }
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn elapsed(&self) -> u32 {
        self.budget - self.remaining
    }

    /// Advance one second. Returns `true` once the countdown has reached zero.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }
}

#[derive(Debug, Clone)]
pub struct ActiveRound {
    pub ticket: RoundTicket,
    pub question: Question,
    pub countdown: Countdown,
}

/// Result of a submission against a round.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    Accepted(T),
    /// The ticket was stale: the round already timed out, was answered, or
    /// the session was torn down.
    Ignored,
}

impl<T> SubmitOutcome<T> {
    pub fn accepted(self) -> Option<T> {
        match self {
            SubmitOutcome::Accepted(value) => Some(value),
            SubmitOutcome::Ignored => None,
        }
    }
}

/// Result of one clock tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome<T> {
    /// Nothing outstanding.
    Idle,
    Running { remaining: u32 },
    TimedOut(T),
}

pub(crate) enum SlotTick {
    Idle,
    Running(u32),
    Expired(ActiveRound),
}

/// Holds at most one active round and hands out tickets.
#[derive(Debug, Default)]
pub(crate) struct RoundSlot {
    active: Option<ActiveRound>,
    next_ticket: u64,
}

impl RoundSlot {
    /// Arm a new round, dropping any round still outstanding.
    pub fn present(&mut self, question: Question, budget_secs: u32) -> RoundTicket {
        self.next_ticket += 1;
        let ticket = RoundTicket(self.next_ticket);
        self.active = Some(ActiveRound {
            ticket,
            question,
            countdown: Countdown::start(budget_secs),
        });
        ticket
    }

    pub fn active(&self) -> Option<&ActiveRound> {
        self.active.as_ref()
    }

    /// Take the active round if `ticket` still names it.
    pub fn claim(&mut self, ticket: RoundTicket) -> Option<ActiveRound> {
        if self.active.as_ref().is_some_and(|round| round.ticket == ticket) {
            self.active.take()
        } else {
            None
        }
    }

    pub fn tick(&mut self) -> SlotTick {
        let Some(round) = self.active.as_mut() else {
            return SlotTick::Idle;
        };
        if round.countdown.tick() {
            match self.active.take() {
                Some(round) => SlotTick::Expired(round),
                None => SlotTick::Idle,
            }
        } else {
            SlotTick::Running(round.countdown.remaining())
        }
    }

    pub fn cancel(&mut self) -> Option<ActiveRound> {
        self.active.take()
    }
}
