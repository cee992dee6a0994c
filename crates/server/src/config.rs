//! # Server Configuration
//!
//! Settings load in two layers: an optional `config.yml`, then the
//! process environment on top, so `PORT` and `DB_URL` override whatever
//! the file says.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    General(String),

    #[error("{0}")]
    NotFound(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The server settings, deserialized from the merged layers.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port the server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The SQLite database location handed to the provider.
    #[serde(default = "default_db_url")]
    pub db_url: String,
}

fn default_port() -> u16 {
    9090
}

fn default_db_url() -> String {
    "db/ragstack.db".to_string()
}

/// Resolves the configuration from `config.yml` plus the environment.
///
/// Without an override the file is looked up next to the crate manifest
/// and may be absent, in which case the defaults apply. An explicitly
/// requested path that does not exist is an error.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let default_path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.yml");
    let config_path = config_path_override.unwrap_or(default_path);

    let mut builder = ConfigBuilder::builder();
    if Path::new(config_path).exists() {
        info!("Loading configuration from '{config_path}'.");
        let raw = std::fs::read_to_string(config_path).map_err(|e| {
            ConfigError::General(format!("Failed to read config file '{config_path}': {e}"))
        })?;
        builder = builder.add_source(File::from_str(&raw, FileFormat::Yaml));
    } else if config_path_override.is_some() {
        return Err(ConfigError::NotFound(format!(
            "Config file not found at '{config_path}'."
        )));
    }

    // PORT and DB_URL from the environment win over the file layer.
    let settings = builder.add_source(Environment::default()).build()?;
    Ok(settings.try_deserialize()?)
}
