//! forum-locale
//!
//! Language and resource-string management for a discussion forum.
//! This library keeps a complete (language x resource key) value matrix,
//! enforces uniqueness of cultures and key names, protects the default
//! language, and moves resource strings in and out as `key,value` CSV.

pub mod config;
pub mod services;
pub mod models;
pub mod database;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{LocaleError, Result};

// Re-export main components for easy access
pub use database::{DatabaseService, InMemoryLocalizationStore};
pub use services::{LanguageContext, LocalizationService, ServiceFactory};
pub use i18n::{CsvReport, Translator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
