//! meridiand - Meridian medical Q&A daemon.
//!
//! Loads configuration, wires the pipeline with the demo backends, and
//! serves the HTTP API.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use meridian_api::build_state;
use meridian_core::constants::VERSION;
use meridian_core::MeridianConfig;

/// Config path: first CLI argument, then `MERIDIAN_CONFIG`, else defaults.
fn config_path() -> Option<PathBuf> {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("MERIDIAN_CONFIG").ok())
        .map(PathBuf::from)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("meridiand v{VERSION} starting");

    let config = match config_path() {
        Some(path) => MeridianConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => MeridianConfig::default(),
    };

    let bind_addr = config.server.bind_addr.clone();
    let state = build_state(&config);

    meridian_api::serve(&bind_addr, state)
        .await
        .context("http server failed")?;

    Ok(())
}
