use serde::{Deserialize, Serialize};

use super::defaults;

/// Dispatcher routing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Confidence at or above which the single best backend is invoked
    /// alone; below it a collaborative round runs instead.
    pub routing_threshold: f64,
    /// Individual timeout applied to every backend call (ms).
    pub per_backend_timeout_ms: u64,
    /// Domain tried when the classified domain has no confidence cell.
    pub fallback_domain: String,
    /// Backend of last resort when no cell resolves at all.
    pub fallback_model: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            routing_threshold: defaults::DEFAULT_ROUTING_THRESHOLD,
            per_backend_timeout_ms: defaults::DEFAULT_PER_BACKEND_TIMEOUT_MS,
            fallback_domain: defaults::DEFAULT_FALLBACK_DOMAIN.to_string(),
            fallback_model: defaults::DEFAULT_FALLBACK_MODEL.to_string(),
        }
    }
}
