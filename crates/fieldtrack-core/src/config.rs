use crate::compare::CompareOptions;
use crate::erasure::ErasurePolicy;
use crate::errors::{FieldTrackError, Result};
use serde::{Deserialize, Serialize};

/// Per-tracker configuration, fixed at construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// How erased fields are resolved (default `Fix`)
    pub erased_compare: ErasurePolicy,
    /// Ignore leading/trailing whitespace when comparing text (default off)
    pub trim_to_compare: bool,
}

impl TrackerConfig {
    pub fn with_erased_compare(mut self, policy: ErasurePolicy) -> Self {
        self.erased_compare = policy;
        self
    }

    pub fn with_trim_to_compare(mut self, trim: bool) -> Self {
        self.trim_to_compare = trim;
        self
    }

    /// Parse a configuration document; omitted keys keep their defaults
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the document is not a valid config object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| FieldTrackError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    pub(crate) fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            trim_to_compare: self.trim_to_compare,
        }
    }
}
