use serde::{Deserialize, Serialize};

use super::defaults;

/// Tier threshold configuration.
/// An entry rates into core at or above `core_threshold`, extended at or
/// above `extended_threshold`, temp otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TierConfig {
    pub core_threshold: f64,
    pub extended_threshold: f64,
}

impl TierConfig {
    /// The thresholds must be ordered and within [0, 1].
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.core_threshold)
            || !(0.0..=1.0).contains(&self.extended_threshold)
        {
            return Err("tier thresholds must lie within [0, 1]".to_string());
        }
        if self.extended_threshold >= self.core_threshold {
            return Err(format!(
                "tiers.extended_threshold ({}) must be below tiers.core_threshold ({})",
                self.extended_threshold, self.core_threshold
            ));
        }
        Ok(())
    }
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            core_threshold: defaults::DEFAULT_CORE_THRESHOLD,
            extended_threshold: defaults::DEFAULT_EXTENDED_THRESHOLD,
        }
    }
}
