//! Application-level state shared by the screens that drive the engine.
//!
//! [`AppState`] is owned by the caller and passed by reference to whichever
//! component needs it. Every field has one setter, and each actual change is
//! announced to subscribers as a [`StateChange`]. Persisting the fields is the
//! caller's job; [`ProgressSnapshot`] is the shape to store.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::GradeError;
use crate::progression::{LifetimeStats, PracticeSession};
use crate::question_engine::Level;

/// Grades offered on the grade-selection screen.
pub const GRADES: std::ops::RangeInclusive<u32> = 1..=12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppView {
    GradeSelection,
    Diagnostic,
    Practice,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Level { from: Level, to: Level },
    View { from: AppView, to: AppView },
    DiagnosticCompleted(bool),
    Lifetime(LifetimeStats),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The persisted fields, as stored in the external key-value store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub user_level: Level,
    pub diagnostic_completed: bool,
    pub total_questions_answered: u64,
    pub correct_answers: u64,
    pub highest_level: u32,
}

impl Default for ProgressSnapshot {
    fn default() -> Self {
        ProgressSnapshot {
            user_level: Level::DEFAULT,
            diagnostic_completed: false,
            total_questions_answered: 0,
            correct_answers: 0,
            highest_level: 0,
        }
    }
}

impl ProgressSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Missing keys fall back to their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn lifetime(&self) -> LifetimeStats {
        LifetimeStats {
            total_questions_answered: self.total_questions_answered,
            correct_answers: self.correct_answers,
            highest_level: self.highest_level,
        }
    }
}

type Observer = Box<dyn FnMut(&StateChange)>;

pub struct AppState {
    user_level: Level,
    current_view: AppView,
    diagnostic_completed: bool,
    selected_grade: Option<Level>,
    lifetime: LifetimeStats,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("user_level", &self.user_level)
            .field("current_view", &self.current_view)
            .field("diagnostic_completed", &self.diagnostic_completed)
            .field("selected_grade", &self.selected_grade)
            .field("lifetime", &self.lifetime)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::from_snapshot(ProgressSnapshot::default())
    }
}

impl AppState {
    /// Restore from persisted fields. A user who finished the diagnostic
    /// lands on practice; everyone else on grade selection.
    pub fn from_snapshot(snapshot: ProgressSnapshot) -> Self {
        let current_view = if snapshot.diagnostic_completed {
            AppView::Practice
        } else {
            AppView::GradeSelection
        };
        AppState {
            user_level: snapshot.user_level,
            current_view,
            diagnostic_completed: snapshot.diagnostic_completed,
            selected_grade: None,
            lifetime: snapshot.lifetime(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            user_level: self.user_level,
            diagnostic_completed: self.diagnostic_completed,
            total_questions_answered: self.lifetime.total_questions_answered,
            correct_answers: self.lifetime.correct_answers,
            highest_level: self.lifetime.highest_level,
        }
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&StateChange) + 'static) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub fn user_level(&self) -> Level {
        self.user_level
    }

    pub fn current_view(&self) -> AppView {
        self.current_view
    }

    pub fn diagnostic_completed(&self) -> bool {
        self.diagnostic_completed
    }

    /// Grade chosen for the pending diagnostic, if any.
    pub fn selected_grade(&self) -> Option<Level> {
        self.selected_grade
    }

    pub fn lifetime(&self) -> LifetimeStats {
        self.lifetime
    }

    pub fn set_level(&mut self, level: Level) {
        if level == self.user_level {
            return;
        }
        let from = self.user_level;
        self.user_level = level;
        self.notify(StateChange::Level { from, to: level });
    }

    pub fn set_view(&mut self, view: AppView) {
        if view == self.current_view {
            return;
        }
        let from = self.current_view;
        self.current_view = view;
        debug!(?from, to = ?view, "view changed");
        self.notify(StateChange::View { from, to: view });
    }

    /// Pick the diagnostic's starting grade and move to the diagnostic.
    pub fn select_grade(&mut self, grade: u32) -> Result<Level, GradeError> {
        if !GRADES.contains(&grade) {
            return Err(GradeError::OutOfRange(grade));
        }
        let level = Level::new(grade).map_err(|_| GradeError::OutOfRange(grade))?;
        self.selected_grade = Some(level);
        self.set_view(AppView::Diagnostic);
        Ok(level)
    }

    /// Store the calibrated level, mark the diagnostic done and go to practice.
    pub fn complete_diagnostic(&mut self, new_level: Level) {
        info!(%new_level, "diagnostic completed");
        self.set_level(new_level);
        self.set_diagnostic_completed(true);
        self.selected_grade = None;
        self.set_view(AppView::Practice);
    }

    /// Copy level and lifetime totals out of a practice session.
    pub fn sync_practice(&mut self, session: &PracticeSession) {
        self.set_level(session.level());
        let lifetime = session.lifetime();
        if lifetime != self.lifetime {
            self.lifetime = lifetime;
            self.notify(StateChange::Lifetime(lifetime));
        }
    }

    /// Back to grade selection at level 1 with the diagnostic cleared.
    /// Lifetime totals are kept.
    pub fn reset(&mut self) {
        info!("progress reset");
        self.set_diagnostic_completed(false);
        self.set_level(Level::MIN);
        self.selected_grade = None;
        self.set_view(AppView::GradeSelection);
    }

    fn set_diagnostic_completed(&mut self, completed: bool) {
        if completed == self.diagnostic_completed {
            return;
        }
        self.diagnostic_completed = completed;
        self.notify(StateChange::DiagnosticCompleted(completed));
    }

    fn notify(&mut self, change: StateChange) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&change);
        }
    }
}
