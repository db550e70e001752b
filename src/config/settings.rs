//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;
use std::time::Duration;
use serde::{Deserialize, Serialize};

/// Environment variable prefix, e.g. `FORUM_LOCALE__DATABASE__URL`
pub const ENV_PREFIX: &str = "FORUM_LOCALE";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub localization: LocalizationConfig,
    pub logging: LoggingConfig,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }
}

/// Localization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalizationConfig {
    /// Culture code of the undeletable fallback language
    pub default_language: String,
    /// Page size used by paged listings when the caller does not pick one
    pub page_size: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily rolling log files; stderr only when unset
    pub directory: Option<String>,
}

impl Settings {
    /// Load settings from `config.toml` (if present) and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::builder(config::File::with_name("config").required(false))
    }

    /// Load settings from an explicit file and environment variables
    pub fn from_file(path: &Path) -> Result<Self, config::ConfigError> {
        Self::builder(config::File::from(path).required(true))
    }

    fn builder<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Settings::default();
        let settings = config::Config::builder()
            .set_default("database.url", defaults.database.url)?
            .set_default("database.max_connections", defaults.database.max_connections)?
            .set_default("database.min_connections", defaults.database.min_connections)?
            .set_default("database.acquire_timeout_secs", defaults.database.acquire_timeout_secs)?
            .set_default("database.idle_timeout_secs", defaults.database.idle_timeout_secs)?
            .set_default("database.max_lifetime_secs", defaults.database.max_lifetime_secs)?
            .set_default("localization.default_language", defaults.localization.default_language)?
            .set_default("localization.page_size", defaults.localization.page_size)?
            .set_default("logging.level", defaults.logging.level)?
            .add_source(file)
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::LocaleError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "postgresql://localhost/forum".to_string(),
                max_connections: 10,
                min_connections: 1,
                acquire_timeout_secs: 30,
                idle_timeout_secs: 600,
                max_lifetime_secs: 1800,
            },
            localization: LocalizationConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: None,
            },
        }
    }
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            default_language: "en-GB".to_string(),
            page_size: 30,
        }
    }
}
