//! Engine configuration.
//!
//! A [`RulesConfig`] is fixed at engine construction and read-only
//! afterwards. Every field has a documented default, so a partial JSON
//! object deserializes into a fully-defaulted config.
//!
//! Construction performs no cross-field consistency check: `min > max`
//! is accepted silently, matching the documented engine behavior.
//! Callers that want the check opt in via [`RulesConfig::validate`].

use crate::models::CostLevel;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Business constraints for itinerary content generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Minimum activities per day (default: 3).
    pub min_activities_per_day: i32,
    /// Maximum activities per day (default: 5).
    pub max_activities_per_day: i32,
    /// Minimum single-activity duration in minutes (default: 15).
    pub min_activity_duration_minutes: i64,
    /// Maximum single-activity duration in minutes (default: 480).
    pub max_activity_duration_minutes: i64,
    /// Permitted cost tiers, in canonical order (default: all four).
    pub allowed_cost_levels: Vec<CostLevel>,
    /// Reserved. Read by no validator yet.
    pub strict_time_validation: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            min_activities_per_day: 3,
            max_activities_per_day: 5,
            min_activity_duration_minutes: 15,
            max_activity_duration_minutes: 480,
            allowed_cost_levels: CostLevel::ALL.to_vec(),
            strict_time_validation: false,
        }
    }
}

impl RulesConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-day activity count range.
    pub fn with_activities_per_day(mut self, min: i32, max: i32) -> Self {
        self.min_activities_per_day = min;
        self.max_activities_per_day = max;
        self
    }

    /// Sets the single-activity duration range (minutes).
    pub fn with_activity_duration_minutes(mut self, min: i64, max: i64) -> Self {
        self.min_activity_duration_minutes = min;
        self.max_activity_duration_minutes = max;
        self
    }

    /// Sets the permitted cost tiers.
    pub fn with_allowed_cost_levels(mut self, levels: Vec<CostLevel>) -> Self {
        self.allowed_cost_levels = levels;
        self
    }

    /// Sets the reserved strict-time-validation flag.
    pub fn with_strict_time_validation(mut self, strict: bool) -> Self {
        self.strict_time_validation = strict;
        self
    }

    /// Checks cross-field consistency.
    ///
    /// Construction never runs this; an inconsistent config (e.g.
    /// `min > max`) is accepted silently and validators report against
    /// it as configured. Returns all detected issues.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if self.min_activities_per_day > self.max_activities_per_day {
            errors.push(ConfigError::ActivityCountRange {
                min: self.min_activities_per_day,
                max: self.max_activities_per_day,
            });
        }
        if self.min_activity_duration_minutes > self.max_activity_duration_minutes {
            errors.push(ConfigError::ActivityDurationRange {
                min: self.min_activity_duration_minutes,
                max: self.max_activity_duration_minutes,
            });
        }
        if self.allowed_cost_levels.is_empty() {
            errors.push(ConfigError::NoCostLevels);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A configuration consistency issue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Per-day activity minimum exceeds the maximum.
    #[error("min_activities_per_day ({min}) exceeds max_activities_per_day ({max})")]
    ActivityCountRange { min: i32, max: i32 },
    /// Activity duration minimum exceeds the maximum.
    #[error("min_activity_duration_minutes ({min}) exceeds max_activity_duration_minutes ({max})")]
    ActivityDurationRange { min: i64, max: i64 },
    /// No cost tier is permitted.
    #[error("allowed_cost_levels is empty")]
    NoCostLevels,
}
