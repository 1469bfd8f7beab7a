//! Rule engine for LLM itinerary generation.
//!
//! Two responsibilities, both pure given a fixed [`RulesConfig`]:
//!
//! 1. Render the deterministic rules document that is concatenated into
//!    the generation prompt ([`RulesEngine::generate_rules_content`]).
//! 2. Spot-check candidate itinerary data the LLM returns: activity
//!    counts, durations, cost tokens, and time progression.
//!
//! The configuration is immutable after construction and every call
//! allocates fresh local state, so an engine can be shared freely
//! across threads.
//!
//! # Text stability
//!
//! The rendered document is consumed verbatim as a substring of a
//! larger prompt. Downstream consumers pattern-match on its headers and
//! indentation, so the exact bytes (section headers, the 3-space-hyphen
//! sub-item prefix, blank-line separators) are part of the contract.

use crate::models::{
    parse_minute_of_day, CostLevel, ItineraryActivity, RulesConfig, TimeSlot, MINUTES_PER_DAY,
};
use crate::validation::ValidationResult;
use thiserror::Error;

/// Shortest accepted trip, in days.
pub const MIN_TRIP_DURATION_DAYS: i64 = 1;
/// Longest accepted trip, in days.
pub const MAX_TRIP_DURATION_DAYS: i64 = 365;

/// Activities longer than this draw a split-it-up warning (minutes).
const LONG_ACTIVITY_WARNING_MINUTES: i64 = 240;

/// Errors from rules-document generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    /// Trip duration outside the accepted range. The message text is
    /// matched by downstream callers; keep it stable.
    #[error("Invalid trip duration: {0}. Must be between 1 and 365 days.")]
    InvalidTripDuration(i64),
}

/// Rule-based prompt and validation engine.
///
/// Stateless apart from its configuration snapshot; see the module docs
/// for the concurrency posture.
#[derive(Debug, Clone, Default)]
pub struct RulesEngine {
    config: RulesConfig,
}

impl RulesEngine {
    /// Creates an engine with the given configuration.
    ///
    /// No cross-field consistency check runs here; see
    /// [`RulesConfig::validate`] for the opt-in check.
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Returns a defensive copy of the configuration.
    pub fn config(&self) -> RulesConfig {
        self.config.clone()
    }

    /// Whether a trip duration is within the accepted 1-365 day range.
    pub fn is_valid_trip_duration(&self, days: i64) -> bool {
        (MIN_TRIP_DURATION_DAYS..=MAX_TRIP_DURATION_DAYS).contains(&days)
    }

    /// Parses a free-form budget hint into a cost level.
    ///
    /// Absent or unrecognized hints mean "no preference" (`None`),
    /// never an error.
    pub fn parse_budget_level(&self, budget: Option<&str>) -> Option<CostLevel> {
        budget.and_then(CostLevel::from_budget_hint)
    }

    /// Renders the rules document for a trip.
    ///
    /// Output is deterministic for identical (config, duration, budget)
    /// triples: four numbered sections in fixed order, sub-items
    /// prefixed by three spaces and a hyphen, sections separated by a
    /// blank line, opened by the literal
    /// `=== CONTENT GENERATION RULES ===` line.
    ///
    /// # Errors
    ///
    /// [`RulesError::InvalidTripDuration`] if the duration fails
    /// [`Self::is_valid_trip_duration`].
    pub fn generate_rules_content(
        &self,
        trip_duration: i64,
        budget: Option<&str>,
    ) -> Result<String, RulesError> {
        if !self.is_valid_trip_duration(trip_duration) {
            return Err(RulesError::InvalidTripDuration(trip_duration));
        }

        let mut lines = vec!["=== CONTENT GENERATION RULES ===".to_string(), String::new()];
        lines.extend(self.activity_requirements_section());
        lines.push(String::new());
        lines.extend(self.cost_rules_section(self.parse_budget_level(budget)));
        lines.push(String::new());
        lines.extend(self.time_slot_section());
        lines.push(String::new());
        lines.extend(self.trip_specific_section(trip_duration));

        Ok(lines.join("\n"))
    }

    fn activity_requirements_section(&self) -> Vec<String> {
        vec![
            "1. ACTIVITY REQUIREMENTS:".to_string(),
            format!(
                "   - Between {} and {} activities per day",
                self.config.min_activities_per_day, self.config.max_activities_per_day
            ),
            format!(
                "   - Each activity duration: {}-{} minutes",
                self.config.min_activity_duration_minutes,
                self.config.max_activity_duration_minutes
            ),
            "   - No overlapping activity times".to_string(),
            "   - Logical time progression throughout the day".to_string(),
        ]
    }

    fn cost_rules_section(&self, budget: Option<CostLevel>) -> Vec<String> {
        let mut lines = vec![
            "2. COST ESTIMATE RULES:".to_string(),
            format!("   - Allowed cost levels: {}", self.allowed_tokens()),
        ];
        if let Some(level) = budget {
            lines.push(format!("   - Preferred budget level: {}", level.token()));
            lines.push(format!("   - {}", level.guidance()));
        }
        // Price bands are always listed, regardless of allowed levels.
        for level in CostLevel::ALL {
            lines.push(format!("   - {}", level.price_band()));
        }
        lines
    }

    fn time_slot_section(&self) -> Vec<String> {
        let mut lines = vec!["3. TIME SLOT RULES:".to_string()];
        for slot in TimeSlot::ALL {
            lines.push(format!(
                "   - {} ({}): {}",
                slot.name(),
                slot.interval_label(),
                slot.example_activities()
            ));
        }
        lines
    }

    fn trip_specific_section(&self, trip_duration: i64) -> Vec<String> {
        vec![
            "4. TRIP-SPECIFIC RULES:".to_string(),
            format!("   - Total duration: {} days", trip_duration),
            format!(
                "   - Total activities: {}",
                self.calculate_total_activities(trip_duration)
            ),
            "   - Balance: 40% cultural, 30% food/dining, 20% outdoor, 10% relaxation"
                .to_string(),
        ]
    }

    /// Validates a per-day activity count against the configured range.
    ///
    /// A count exactly at the minimum stays valid but draws a warning.
    pub fn validate_activity_count(&self, count: i32) -> ValidationResult {
        let mut result = ValidationResult::valid();

        if count < self.config.min_activities_per_day {
            result.push_violation(format!(
                "Too few activities: {}. Minimum is {}",
                count, self.config.min_activities_per_day
            ));
        }
        if count > self.config.max_activities_per_day {
            result.push_violation(format!(
                "Too many activities: {}. Maximum is {}",
                count, self.config.max_activities_per_day
            ));
        }
        if count == self.config.min_activities_per_day {
            result.push_warning("Consider adding more activities for better experience");
        }

        result
    }

    /// Validates a single activity duration (minutes).
    ///
    /// The long-activity warning is independent of the range check, so
    /// an over-limit duration can carry both a violation and a warning.
    pub fn validate_activity_duration(&self, minutes: i64) -> ValidationResult {
        let mut result = ValidationResult::valid();

        if minutes < self.config.min_activity_duration_minutes {
            result.push_violation(format!(
                "Duration too short: {} minutes. Minimum is {} minutes",
                minutes, self.config.min_activity_duration_minutes
            ));
        }
        if minutes > self.config.max_activity_duration_minutes {
            result.push_violation(format!(
                "Duration too long: {} minutes. Maximum is {} minutes",
                minutes, self.config.max_activity_duration_minutes
            ));
        }
        if minutes > LONG_ACTIVITY_WARNING_MINUTES {
            result.push_warning("Consider splitting long activities into multiple sessions");
        }

        result
    }

    /// Validates a cost-estimate token against the allowed levels.
    ///
    /// Exact string match against the canonical tokens only.
    pub fn validate_cost_estimate(&self, token: &str) -> ValidationResult {
        let mut result = ValidationResult::valid();

        let allowed = self
            .config
            .allowed_cost_levels
            .iter()
            .any(|level| level.token() == token);
        if !allowed {
            result.push_violation(format!(
                "Invalid cost estimate: {}. Allowed values: {}",
                token,
                self.allowed_tokens()
            ));
        }

        result
    }

    /// Classifies a `HH:MM` time string into its time-of-day slot.
    ///
    /// Returns `None` for unparseable input.
    pub fn get_time_slot(&self, time: &str) -> Option<TimeSlot> {
        parse_minute_of_day(time).map(TimeSlot::from_minute)
    }

    /// Checks an ordered activity sequence for overlapping times.
    ///
    /// Trusts the input order: only adjacent pairs are compared, and the
    /// sequence is never sorted, so out-of-order input can hide
    /// non-adjacent overlaps. End times use minute-of-day arithmetic
    /// modulo 1440, so an activity whose end wraps past midnight
    /// compares as an early time and may escape detection. Both traits
    /// match the generation contract, which assumes same-day activities
    /// ending before midnight.
    ///
    /// An unparseable start time on a pair's first element is reported
    /// as a violation and its overlap check skipped; equal end/start
    /// boundaries (back-to-back activities) are allowed. Empty and
    /// single-element sequences are trivially valid.
    pub fn validate_time_progression(
        &self,
        activities: &[ItineraryActivity],
    ) -> ValidationResult {
        let mut result = ValidationResult::valid();

        for pair in activities.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);

            let Some(start) = parse_minute_of_day(&current.time) else {
                result.push_violation(format!("Invalid time format: {}", current.time));
                continue;
            };
            let Some(next_start) = parse_minute_of_day(&next.time) else {
                // Reported when it leads its own pair.
                continue;
            };

            let end = (start + current.duration_minutes).rem_euclid(MINUTES_PER_DAY);
            if end > next_start {
                result.push_violation(format!(
                    "Activity at {} ({} minutes) overlaps with activity at {}",
                    current.time, current.duration_minutes, next.time
                ));
            }
        }

        result
    }

    /// Formats the total-activity range for a trip as `"min-max"`.
    ///
    /// Plain integer multiplication against the configured per-day
    /// range. Does not gate on the 1-365 day range; only
    /// [`Self::generate_rules_content`] enforces it.
    pub fn calculate_total_activities(&self, trip_duration: i64) -> String {
        format!(
            "{}-{}",
            i64::from(self.config.min_activities_per_day) * trip_duration,
            i64::from(self.config.max_activities_per_day) * trip_duration
        )
    }

    fn allowed_tokens(&self) -> String {
        self.config
            .allowed_cost_levels
            .iter()
            .map(|level| level.token())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
