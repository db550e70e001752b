//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::i18n::culture::{is_culture_code, CultureCatalog};
use crate::utils::errors::{LocaleError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_database_config(&settings.database)?;
    validate_localization_config(&settings.localization)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(LocaleError::Config(
            "Database URL is required".to_string()
        ));
    }

    let parsed = url::Url::parse(&config.url)
        .map_err(|e| LocaleError::Config(format!("Invalid database URL: {}", e)))?;
    if !matches!(parsed.scheme(), "postgres" | "postgresql") {
        return Err(LocaleError::Config(
            format!("Unsupported database scheme: {}", parsed.scheme())
        ));
    }

    if config.max_connections == 0 {
        return Err(LocaleError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(LocaleError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    if config.acquire_timeout_secs == 0 {
        return Err(LocaleError::Config(
            "Acquire timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate localization configuration
fn validate_localization_config(config: &super::LocalizationConfig) -> Result<()> {
    if config.default_language.is_empty() {
        return Err(LocaleError::Config(
            "Default language is required".to_string()
        ));
    }

    if !is_culture_code(&config.default_language) {
        return Err(LocaleError::Config(
            format!("Default language is not a culture code: {}", config.default_language)
        ));
    }

    if CultureCatalog::get().resolve(&config.default_language).is_none() {
        return Err(LocaleError::Config(
            format!("Default language is not a known culture: {}", config.default_language)
        ));
    }

    if config.page_size == 0 {
        return Err(LocaleError::Config(
            "Page size must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(LocaleError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(LocaleError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
