pub mod defaults;

mod feedback_config;
mod key_config;
mod matrix_config;
mod routing_config;
mod server_config;
mod store_config;
mod tier_config;

pub use feedback_config::FeedbackConfig;
pub use key_config::KeyConfig;
pub use matrix_config::MatrixConfig;
pub use routing_config::RoutingConfig;
pub use server_config::ServerConfig;
pub use store_config::StoreConfig;
pub use tier_config::TierConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{MeridianError, MeridianResult};

/// Full system configuration, TOML-loadable, every section defaulted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeridianConfig {
    pub routing: RoutingConfig,
    pub matrix: MatrixConfig,
    pub tiers: TierConfig,
    pub feedback: FeedbackConfig,
    pub key: KeyConfig,
    pub store: StoreConfig,
    pub server: ServerConfig,
}

impl MeridianConfig {
    /// Parse a TOML document and validate the numeric constraints.
    pub fn from_toml(raw: &str) -> MeridianResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| MeridianError::Config {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file from disk.
    pub fn load(path: &Path) -> MeridianResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| MeridianError::Config {
            reason: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml(&raw)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> MeridianResult<()> {
        self.matrix
            .validate()
            .and_then(|()| self.tiers.validate())
            .map_err(|reason| MeridianError::Config { reason })
    }
}
