//! Internationalization module
//!
//! Culture catalog, the resource CSV format, and the in-memory translator
//! used to render strings with key fallback.

pub mod csv;
pub mod culture;
pub mod translator;

// Re-export commonly used i18n components
pub use csv::{CsvErrorWarningType, CsvReport, CsvReportItem};
pub use culture::{CultureCatalog, CultureInfo};
pub use translator::{Translator, TranslationParams, TranslationStats, LanguageStats};
