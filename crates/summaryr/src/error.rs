//! Error types for the summaryr library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for summaryr operations.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// An argument had the wrong runtime type.
    ///
    /// Raised by the dynamically typed entry points before any column is
    /// processed.
    #[error("{argument}: {expected} expected, got '{actual}'")]
    Type {
        argument: &'static str,
        expected: &'static str,
        actual: String,
    },

    /// A column's length does not match the rest of the dataset.
    #[error("Column '{column}' has {actual} values, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Two columns share a name.
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data to summarize.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SummaryError {
    /// Build a [`SummaryError::Type`] error.
    pub fn type_error(argument: &'static str, expected: &'static str, actual: impl Into<String>) -> Self {
        SummaryError::Type {
            argument,
            expected,
            actual: actual.into(),
        }
    }

    /// Returns true if this is an argument type error.
    pub fn is_type_error(&self) -> bool {
        matches!(self, SummaryError::Type { .. })
    }
}

/// Result type alias for summaryr operations.
pub type Result<T> = std::result::Result<T, SummaryError>;
