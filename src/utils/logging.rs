//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for forum-locale.

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::i18n::csv::CsvReport;
use crate::utils::errors::{LocaleError, Result};

/// Initialize logging based on configuration.
///
/// When a log directory is configured, events are also written there as JSON
/// lines and the returned guard must be kept alive for the writer to flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| LocaleError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "forum-locale.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| LocaleError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log administrative changes to languages and resource keys
pub fn log_admin_action(action: &str, target: &str, details: Option<&str>) {
    warn!(
        action = action,
        target = target,
        details = details,
        "Localization admin action performed"
    );
}

/// Log the outcome of a CSV import
pub fn log_import_report(culture: &str, report: &CsvReport) {
    if report.has_errors() {
        warn!(
            culture = culture,
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "CSV import finished with errors"
        );
    } else {
        info!(
            culture = culture,
            warnings = report.warnings.len(),
            "CSV import finished"
        );
    }
}

/// Log database operations
pub fn log_database_operation(operation: &str, table: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation completed"
        );
    } else {
        error!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation failed"
        );
    }
}
