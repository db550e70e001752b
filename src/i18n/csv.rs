//! Naive `key,value` CSV format for resource strings
//!
//! One line per resource key, no header row, no quoting. The first comma
//! separates key from value; later commas stay in the value. Export never
//! escapes commas or newlines, so values containing a newline do not survive
//! an export/import cycle.

use serde::Serialize;

/// Classification of a CSV import problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CsvErrorWarningType {
    BadDataFormat,
    DoesNotExist,
    AlreadyExists,
    ItemBad,
    MissingKeyOrValue,
    NewKeyCreated,
    GeneralError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvReportItem {
    pub kind: CsvErrorWarningType,
    pub message: String,
}

/// Diagnostics accumulated by an import, in the order they were raised
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CsvReport {
    pub errors: Vec<CsvReportItem>,
    pub warnings: Vec<CsvReportItem>,
}

impl CsvReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, kind: CsvErrorWarningType, message: impl Into<String>) {
        self.errors.push(CsvReportItem { kind, message: message.into() });
    }

    pub fn warning(&mut self, kind: CsvErrorWarningType, message: impl Into<String>) {
        self.warnings.push(CsvReportItem { kind, message: message.into() });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn count(&self, kind: CsvErrorWarningType) -> usize {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .filter(|item| item.kind == kind)
            .count()
    }
}

/// A line split into trimmed key and value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvEntry<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// Split a line on its first comma. `None` when the line has no comma.
/// The key is trimmed; the value is kept as written.
pub fn parse_line(line: &str) -> Option<CsvEntry<'_>> {
    let (key, value) = line.split_once(',')?;
    Some(CsvEntry {
        key: key.trim(),
        value,
    })
}

/// Format one export line, newline included
pub fn format_line(key: &str, value: &str) -> String {
    format!("{},{}\n", key, value)
}
