//! Error handling for forum-locale
//!
//! This module defines the main error type used throughout the crate.
//! Policy violations (duplicates, protected deletes, missing rows) are
//! separate variants from wrapped lower-level store faults.

use thiserror::Error;
use uuid::Uuid;

/// Main error type for localization operations
#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Language already exists: {culture}")]
    LanguageAlreadyExists { culture: String },

    #[error("Resource key already exists: {name}")]
    ResourceKeyAlreadyExists { name: String },

    #[error("Cannot delete the default language: {culture}")]
    DefaultLanguageDelete { culture: String },

    #[error("Default language is not installed: {culture}")]
    DefaultLanguageMissing { culture: String },

    #[error("Language not found: {0}")]
    LanguageNotFound(String),

    #[error("Resource key not found: {0}")]
    ResourceKeyNotFound(String),

    #[error("Resource value not found for key '{key}' in language {language_id}")]
    ResourceNotFound { language_id: Uuid, key: String },

    #[error("Unknown culture: {0}")]
    UnknownCulture(String),

    #[error("Unable to delete {entity}: {source}")]
    DeleteFailed {
        entity: String,
        #[source]
        source: Box<LocaleError>,
    },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for localization operations
pub type Result<T> = std::result::Result<T, LocaleError>;

impl LocaleError {
    /// Expected outcomes of a policy check, as opposed to store or runtime faults
    pub fn is_policy_violation(&self) -> bool {
        matches!(
            self,
            LocaleError::LanguageAlreadyExists { .. }
                | LocaleError::ResourceKeyAlreadyExists { .. }
                | LocaleError::DefaultLanguageDelete { .. }
                | LocaleError::LanguageNotFound(_)
                | LocaleError::ResourceKeyNotFound(_)
                | LocaleError::ResourceNotFound { .. }
                | LocaleError::UnknownCulture(_)
                | LocaleError::InvalidInput(_)
        )
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LocaleError::Database(_) => ErrorSeverity::Critical,
            LocaleError::Migration(_) => ErrorSeverity::Critical,
            LocaleError::Config(_) => ErrorSeverity::Critical,
            LocaleError::ConfigLoad(_) => ErrorSeverity::Critical,
            LocaleError::DefaultLanguageMissing { .. } => ErrorSeverity::Critical,
            LocaleError::DefaultLanguageDelete { .. } => ErrorSeverity::Warning,
            LocaleError::LanguageAlreadyExists { .. } => ErrorSeverity::Warning,
            LocaleError::ResourceKeyAlreadyExists { .. } => ErrorSeverity::Warning,
            LocaleError::InvalidInput(_) => ErrorSeverity::Info,
            LocaleError::UnknownCulture(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// Wrap a store failure raised while deleting `entity`
    pub fn delete_failed(entity: impl Into<String>, source: LocaleError) -> Self {
        LocaleError::DeleteFailed {
            entity: entity.into(),
            source: Box::new(source),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_violations_are_distinguished() {
        let duplicate = LocaleError::LanguageAlreadyExists { culture: "en-GB".to_string() };
        assert!(duplicate.is_policy_violation());

        let wrapped = LocaleError::delete_failed("language en-GB", LocaleError::Store("boom".to_string()));
        assert!(!wrapped.is_policy_violation());
        assert!(wrapped.to_string().contains("boom"));
        assert!(std::error::Error::source(&wrapped).is_some());
    }

    #[test]
    fn test_severity_display() {
        let err = LocaleError::Config("missing".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(ErrorSeverity::Warning.to_string(), "WARN");
    }
}
