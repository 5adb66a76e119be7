//! Error types for data operations
//!
//! Import failures are faults and travel as [`DataError`]. Selection problems
//! are expected states of an interactive flow and are plain values
//! ([`SelectionError`]), never propagated with `?` out of the validator.

use thiserror::Error;
use uuid::Uuid;

// Re-export import limits from constants module for consistency
pub use crate::constants::{MAX_FILE_SIZE_MB, MAX_IMPORT_ROWS};

/// Errors that can occur while importing, decoding or storing sheets
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited text was not valid UTF-8
    #[error("File is not valid UTF-8 text: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Workbook could not be opened or a worksheet could not be parsed
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    /// File extension is not one of csv/xlsx/xls
    #[error("Unsupported file type: {extension}")]
    UnsupportedFormat { extension: String },

    /// File is too large to import
    #[error("File too large: {size_mb}MB (max {max_mb}MB)")]
    TooLarge { size_mb: u64, max_mb: usize },

    /// Too many rows to import
    #[error("Too many rows: {rows} (max {max_rows})")]
    TooManyRows { rows: usize, max_rows: usize },

    /// JSON encoding/decoding error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No stored sheet with this id
    #[error("Sheet not found: {0}")]
    NotFound(Uuid),
}

impl DataError {
    /// Whether this belongs to the I/O failure class (unreadable, undecodable
    /// or malformed source) as opposed to an unsupported format or lookup miss
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            DataError::Io(_)
                | DataError::Decode(_)
                | DataError::Workbook(_)
                | DataError::TooLarge { .. }
                | DataError::TooManyRows { .. }
                | DataError::Json(_)
        )
    }

    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, DataError::UnsupportedFormat { .. })
    }
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;

/// Reasons a column selection cannot produce a chart.
///
/// The display strings are the messages shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionError {
    #[error("No data available")]
    EmptyData,

    #[error("Need at least one data row (plus header)")]
    InsufficientRows,

    #[error("Invalid X-axis column selection")]
    InvalidXColumn,

    #[error("Invalid Y-axis column selection")]
    InvalidYColumn,

    #[error("X and Y axes must use different columns")]
    DuplicateColumns,

    #[error("Y-axis must contain numeric data")]
    YAxisNotNumeric,

    #[error("No valid data points found")]
    NoValidPoints,

    #[error("Need at least 2 data points to create a chart")]
    InsufficientPoints,
}
