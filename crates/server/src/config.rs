//! Server configuration.
//!
//! Settings are resolved in three layers, later layers winning:
//! 1. built-in defaults
//! 2. an optional config file (JSON or TOML, by extension)
//! 3. `CATALOG_*` environment variables, one per field
//!    (`CATALOG_BIND_ADDR`, `CATALOG_CURRENCY_LABEL`, ...)
//!
//! The CLI applies its own flags on top of the result.

use crate::render::RenderSettings;
use config::{Config, Environment, File};
use serde::Deserialize;
use sources::{FileSource, ProductSource, RemoteSource};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Prefix of the environment variables read by `ServerConfig::load`
pub const ENV_PREFIX: &str = "CATALOG";

/// Errors raised while resolving the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Everything the catalog server needs to start.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,
    /// Product REST endpoint
    pub api_url: String,
    /// When set, products are read from this JSON file instead of `api_url`
    pub products_file: Option<PathBuf>,
    /// Upper bound for one upstream fetch
    pub request_timeout_secs: u64,
    /// Suffix printed after every price
    pub currency_label: String,
    /// `<title>` of the page
    pub page_title: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            api_url: sources::DEFAULT_API_URL.to_string(),
            products_file: None,
            request_timeout_secs: sources::DEFAULT_TIMEOUT.as_secs(),
            currency_label: "dh".to_string(),
            page_title: "Catalogue de Produits".to_string(),
        }
    }
}

impl ServerConfig {
    /// Resolve the configuration from an optional file and the process
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_layers(path, None)
    }

    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// `env` stands in for the process environment when set
    fn load_layers(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            info!("Loading config from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .ignore_empty(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.api_url.trim().is_empty() {
            return Err(invalid("api_url", &self.api_url, "must not be empty"));
        }
        if self.request_timeout_secs == 0 {
            return Err(invalid("request_timeout_secs", "0", "must be positive"));
        }
        Ok(self)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The product source this configuration points at
    pub fn product_source(&self) -> ProductSource {
        match &self.products_file {
            Some(path) => ProductSource::File(FileSource::new(path.clone())),
            None => ProductSource::Remote(
                RemoteSource::new(self.api_url.clone()).with_timeout(self.request_timeout()),
            ),
        }
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            page_title: self.page_title.clone(),
            currency_label: self.currency_label.clone(),
        }
    }
}

fn invalid(key: &str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}
