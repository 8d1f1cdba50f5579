use serde::{Deserialize, Serialize};

use super::defaults;

/// Tiered-store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Number of lock shards. Keys map to shards by hash modulo this count;
    /// mutations on the same key serialize, distinct keys run in parallel.
    pub shards: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            shards: defaults::DEFAULT_STORE_SHARDS,
        }
    }
}
