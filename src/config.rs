//! Tunable progression thresholds.
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! gives the standard rules:
//!
//! ```rust
//! use arithmetic_drill::ProgressionRules;
//!
//! let rules = ProgressionRules::from_json_str(r#"{ "level_up_streak": 3 }"#).unwrap();
//! assert_eq!(rules.level_up_streak, 3);
//! assert_eq!(rules.level_down_misses, 5);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::question_engine::{Level, DEFAULT_TOLERANCE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionRules {
    /// Diagnostic accuracy needed (with a fast average) for a two-level jump.
    pub strong_accuracy: f64,
    /// Average seconds per diagnostic question must be strictly below this.
    pub fast_average_secs: f64,
    /// Diagnostic accuracy needed for a one-level raise.
    pub pass_accuracy: f64,
    /// Seconds allowed per diagnostic question.
    pub diagnostic_budget_secs: u32,
    /// Practice level-up fires every time the streak hits a multiple of this.
    pub level_up_streak: u32,
    /// Consecutive misses that trigger a practice level-down.
    pub level_down_misses: u32,
    pub answer_tolerance: f64,
    /// Level used before any diagnostic has run.
    pub default_level: Level,
}

impl Default for ProgressionRules {
    fn default() -> Self {
        ProgressionRules {
            strong_accuracy: 0.8,
            fast_average_secs: 5.0,
            pass_accuracy: 0.5,
            diagnostic_budget_secs: 8,
            level_up_streak: 5,
            level_down_misses: 5,
            answer_tolerance: DEFAULT_TOLERANCE,
            default_level: Level::DEFAULT,
        }
    }
}

impl ProgressionRules {
    /// Parse from JSON, filling missing keys with defaults, then validate.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let rules: ProgressionRules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = 0.0..=1.0;
        if !unit.contains(&self.strong_accuracy) || !unit.contains(&self.pass_accuracy) {
            return Err(invalid("accuracies must lie in [0, 1]"));
        }
        if self.pass_accuracy > self.strong_accuracy {
            return Err(invalid("pass_accuracy must not exceed strong_accuracy"));
        }
        if self.fast_average_secs.is_nan() || self.fast_average_secs <= 0.0 {
            return Err(invalid("fast_average_secs must be positive"));
        }
        if self.diagnostic_budget_secs == 0 {
            return Err(invalid("diagnostic_budget_secs must be positive"));
        }
        if self.level_up_streak == 0 || self.level_down_misses == 0 {
            return Err(invalid("level_up_streak and level_down_misses must be positive"));
        }
        if self.answer_tolerance.is_nan() || self.answer_tolerance <= 0.0 {
            return Err(invalid("answer_tolerance must be positive"));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> ConfigError {
    ConfigError::Invalid(reason.to_string())
}
