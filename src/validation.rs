//! Validation results.
//!
//! Every validator returns a fresh [`ValidationResult`] distinguishing:
//! - **Violations**: hard rule failures (`is_valid` becomes `false`)
//! - **Warnings**: soft advisories that never block
//!
//! Messages are ordered strings because downstream consumers (logging,
//! retry decisions around LLM generation) treat them as display lines,
//! not as a matchable taxonomy.

use serde::{Deserialize, Serialize};

/// Outcome of a single validator call.
///
/// Never mutated after the validator returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether no violations were recorded.
    pub is_valid: bool,
    /// Hard rule failures, in detection order.
    pub violations: Vec<String>,
    /// Soft advisories, in detection order.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates an empty, valid result.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            violations: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Records a violation and marks the result invalid.
    pub fn push_violation(&mut self, message: impl Into<String>) {
        self.is_valid = false;
        self.violations.push(message.into());
    }

    /// Records a warning. Does not affect validity.
    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}
