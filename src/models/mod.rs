//! Itinerary rules domain models.
//!
//! Core value types for the rule engine. Everything here is small,
//! immutable-after-construction data: configuration, closed enumerations
//! for cost tiers and time-of-day slots, and the activity record the
//! LLM hands back for validation.

mod config;
mod cost;
mod time;

pub use config::{ConfigError, RulesConfig};
pub use cost::CostLevel;
pub use time::{parse_minute_of_day, ItineraryActivity, TimeSlot, MINUTES_PER_DAY};
