//! Hierarchical configuration loading for the adapter.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::AdapterConfig;

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The instance URL was left empty.
    #[error("Instance URL cannot be empty")]
    EmptyUrl,

    /// The instance URL does not use an HTTP scheme.
    #[error("Invalid instance URL: {0}. Must start with http:// or https://")]
    InvalidUrl(String),

    /// The basic-auth username was left empty.
    #[error("Username cannot be empty")]
    EmptyUsername,

    /// The basic-auth password was left empty.
    #[error("Password cannot be empty")]
    EmptyPassword,

    /// The table name was left empty.
    #[error("Table name cannot be empty")]
    EmptyTable,

    /// The request timeout is zero.
    #[error("Invalid timeout: {0}. Must be at least 1 second")]
    InvalidTimeout(u64),
}

/// Configuration loader with hierarchical merging.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `snowline.yaml` in the working directory
    /// 3. Environment variables (`SNOWLINE_*` prefix, highest priority)
    pub fn load() -> Result<AdapterConfig> {
        let config: AdapterConfig = Figment::new()
            .merge(Serialized::defaults(AdapterConfig::default()))
            .merge(Yaml::file("snowline.yaml"))
            .merge(Env::prefixed("SNOWLINE_"))
            .extract()
            .context("Failed to extract adapter configuration")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<AdapterConfig> {
        let config: AdapterConfig = Figment::new()
            .merge(Serialized::defaults(AdapterConfig::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading.
    pub fn validate(config: &AdapterConfig) -> Result<(), ConfigError> {
        if config.url.is_empty() {
            return Err(ConfigError::EmptyUrl);
        }
        if !config.url.starts_with("http://") && !config.url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(config.url.clone()));
        }
        if config.username.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        if config.password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        if config.table.is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        if config.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.timeout_secs));
        }
        Ok(())
    }
}
