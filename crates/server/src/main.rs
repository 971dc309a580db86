//! Catalog page server.
//!
//! Configuration comes from `CATALOG_*` environment variables, optionally
//! layered over the JSON or TOML file named by `CATALOG_CONFIG`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use server::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,server=debug,pipeline=debug,sources=debug")),
        )
        .init();

    info!("Starting catalog server");

    let config_path = std::env::var_os("CATALOG_CONFIG").map(PathBuf::from);
    let config = ServerConfig::load(config_path.as_deref()).context("Invalid configuration")?;

    server::run(config).await
}
