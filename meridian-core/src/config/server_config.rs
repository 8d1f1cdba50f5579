use serde::{Deserialize, Serialize};

use super::defaults;

/// HTTP server configuration for the daemon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Quality floor for serving a core-tier entry straight from cache.
    pub cache_serve_threshold: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: defaults::DEFAULT_BIND_ADDR.to_string(),
            cache_serve_threshold: defaults::DEFAULT_CACHE_SERVE_THRESHOLD,
        }
    }
}
