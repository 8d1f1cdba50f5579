use serde::{Deserialize, Serialize};

use super::defaults;

/// Confidence-matrix configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    /// EMA smoothing factor: new = (1 - smoothing) * old + smoothing * observed.
    /// Must lie strictly inside (0, 1); tuning trades convergence speed for
    /// stability.
    pub smoothing: f64,
}

impl MatrixConfig {
    /// Validate the smoothing factor.
    pub fn validate(&self) -> Result<(), String> {
        if self.smoothing > 0.0 && self.smoothing < 1.0 {
            Ok(())
        } else {
            Err(format!(
                "matrix.smoothing must be in (0, 1), got {}",
                self.smoothing
            ))
        }
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            smoothing: defaults::DEFAULT_SMOOTHING,
        }
    }
}
