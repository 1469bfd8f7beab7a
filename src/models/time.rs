//! Time-of-day model.
//!
//! All times are minutes since midnight in `[0, 1440)`. The day is
//! partitioned into five named slots, each a half-open minute interval;
//! Night wraps around midnight.
//!
//! # Slot intervals
//!
//! | Slot | Minutes | Clock |
//! |------|---------|-------|
//! | EarlyMorning | [300, 480) | 05:00-08:00 |
//! | Morning | [480, 720) | 08:00-12:00 |
//! | Afternoon | [720, 1020) | 12:00-17:00 |
//! | Evening | [1020, 1260) | 17:00-21:00 |
//! | Night | [1260, 1440) ∪ [0, 300) | 21:00-05:00 |

use serde::{Deserialize, Serialize};

/// Minutes in one day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Parses a `H:MM` or `HH:MM` clock time into minutes since midnight.
///
/// Accepts a 1-2 digit hour and an exactly 2 digit minute separated by a
/// single colon. Returns `None` for any other shape (extra colon
/// components, non-digits, missing leading zero on minutes) and for
/// hour > 23 or minute > 59.
pub fn parse_minute_of_day(time: &str) -> Option<i64> {
    let (hour, minute) = time.split_once(':')?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return None;
    }
    if !hour.bytes().all(|b| b.is_ascii_digit()) || !minute.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let h: i64 = hour.parse().ok()?;
    let m: i64 = minute.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

/// A named time-of-day slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    /// 05:00-08:00.
    EarlyMorning,
    /// 08:00-12:00.
    Morning,
    /// 12:00-17:00.
    Afternoon,
    /// 17:00-21:00.
    Evening,
    /// 21:00-05:00 (wraps midnight).
    Night,
}

impl TimeSlot {
    /// All slots in document order.
    pub const ALL: [TimeSlot; 5] = [
        TimeSlot::EarlyMorning,
        TimeSlot::Morning,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
        TimeSlot::Night,
    ];

    /// Classifies a minute-of-day into its slot.
    ///
    /// Total over all inputs: values outside `[0, 1440)` are reduced
    /// modulo one day first.
    pub fn from_minute(minute: i64) -> TimeSlot {
        match minute.rem_euclid(MINUTES_PER_DAY) {
            300..=479 => TimeSlot::EarlyMorning,
            480..=719 => TimeSlot::Morning,
            720..=1019 => TimeSlot::Afternoon,
            1020..=1259 => TimeSlot::Evening,
            _ => TimeSlot::Night,
        }
    }

    /// Human-readable slot name.
    pub fn name(&self) -> &'static str {
        match self {
            TimeSlot::EarlyMorning => "Early Morning",
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
            TimeSlot::Night => "Night",
        }
    }

    /// Clock-time rendering of the slot interval.
    pub fn interval_label(&self) -> &'static str {
        match self {
            TimeSlot::EarlyMorning => "05:00-08:00",
            TimeSlot::Morning => "08:00-12:00",
            TimeSlot::Afternoon => "12:00-17:00",
            TimeSlot::Evening => "17:00-21:00",
            TimeSlot::Night => "21:00-05:00",
        }
    }

    /// Fixed example-activities clause for the rules document.
    pub fn example_activities(&self) -> &'static str {
        match self {
            TimeSlot::EarlyMorning => "Breakfast spots, sunrise viewpoints, morning markets",
            TimeSlot::Morning => "Museums, sightseeing, walking tours",
            TimeSlot::Afternoon => "Lunch, shopping, major attractions",
            TimeSlot::Evening => "Dinner, shows, sunset spots",
            TimeSlot::Night => "Bars, night markets, evening entertainment",
        }
    }
}

/// A candidate itinerary activity, as returned by the LLM.
///
/// Carries no identity beyond its position in an ordered sequence.
/// Constructed per validation call, never persisted by this engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryActivity {
    /// Start time as a `HH:MM` clock string.
    pub time: String,
    /// Duration in minutes.
    pub duration_minutes: i64,
}

impl ItineraryActivity {
    /// Creates a new activity.
    pub fn new(time: impl Into<String>, duration_minutes: i64) -> Self {
        Self {
            time: time.into(),
            duration_minutes,
        }
    }
}
