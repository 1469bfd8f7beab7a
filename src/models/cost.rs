//! Cost tier model.
//!
//! Activities and budgets are annotated with one of four price bands,
//! each carrying a canonical token (`$` through `$$$$`). Tokens are used
//! for both display and equality comparison against LLM output, so the
//! mapping is an explicit, tested function rather than a serialization
//! detail. Ordering is fixed: Budget < Moderate < Expensive < Luxury.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A price band for activities and trip budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CostLevel {
    /// Cheapest tier (`$`).
    Budget,
    /// Mid-range tier (`$$`).
    Moderate,
    /// Upper tier (`$$$`).
    Expensive,
    /// Top tier (`$$$$`).
    Luxury,
}

impl CostLevel {
    /// All levels in canonical (ascending price) order.
    pub const ALL: [CostLevel; 4] = [
        CostLevel::Budget,
        CostLevel::Moderate,
        CostLevel::Expensive,
        CostLevel::Luxury,
    ];

    /// Canonical token for this level.
    pub fn token(&self) -> &'static str {
        match self {
            CostLevel::Budget => "$",
            CostLevel::Moderate => "$$",
            CostLevel::Expensive => "$$$",
            CostLevel::Luxury => "$$$$",
        }
    }

    /// Parses a free-form budget hint into a level.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace,
    /// but is otherwise exact — partial matches like `"lux"` are rejected.
    ///
    /// Recognized synonyms:
    /// - Budget: `budget`, `low`, `cheap`
    /// - Moderate: `moderate`, `medium`, `mid`
    /// - Expensive: `expensive`, `high`
    /// - Luxury: `luxury`, `premium`, `deluxe`
    pub fn from_budget_hint(hint: &str) -> Option<CostLevel> {
        match hint.trim().to_ascii_lowercase().as_str() {
            "budget" | "low" | "cheap" => Some(CostLevel::Budget),
            "moderate" | "medium" | "mid" => Some(CostLevel::Moderate),
            "expensive" | "high" => Some(CostLevel::Expensive),
            "luxury" | "premium" | "deluxe" => Some(CostLevel::Luxury),
            _ => None,
        }
    }

    /// Fixed guidance sentence for the rules document.
    pub fn guidance(&self) -> &'static str {
        match self {
            CostLevel::Budget => "Focus on free/cheap activities, local food, public transport",
            CostLevel::Moderate => {
                "Mix of paid attractions and free activities, local restaurants"
            }
            CostLevel::Expensive => "Premium attractions, guided tours, nice restaurants",
            CostLevel::Luxury => "Exclusive experiences, fine dining, private tours",
        }
    }

    /// Fixed price-band description line for the rules document.
    pub fn price_band(&self) -> &'static str {
        match self {
            CostLevel::Budget => "$ = Budget-friendly (under $20 per person)",
            CostLevel::Moderate => "$$ = Moderate ($20-50 per person)",
            CostLevel::Expensive => "$$$ = Expensive ($50-100 per person)",
            CostLevel::Luxury => "$$$$ = Luxury (over $100 per person)",
        }
    }
}

impl fmt::Display for CostLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
