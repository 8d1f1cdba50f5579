use serde::{Deserialize, Serialize};

use super::defaults;

/// Per-field weights applied when folding feedback events into the
/// aggregate rating. An event missing a field contributes neither that
/// weight nor a value; the weight is not redistributed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub explicit_weight: f64,
    pub implicit_weight: f64,
    pub expert_weight: f64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            explicit_weight: defaults::DEFAULT_EXPLICIT_WEIGHT,
            implicit_weight: defaults::DEFAULT_IMPLICIT_WEIGHT,
            expert_weight: defaults::DEFAULT_EXPERT_WEIGHT,
        }
    }
}
