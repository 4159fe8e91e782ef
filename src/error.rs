//! Error types for collection_remap

use thiserror::Error;

/// Unified error type for reading, fetching and writing collection data
#[derive(Debug, Error)]
pub enum RemapError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// CSV reader/writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// A required input column is not present in the header
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },
    /// A data row could not be read into an inventory row
    #[error("Invalid row at line {line}: {message}")]
    InvalidRow { line: u64, message: String },
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Failed to parse the deck JSON document
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Deck URL does not carry a user id and deck id
    #[error("Invalid deck URL '{url}': {reason}")]
    InvalidDeckUrl { url: String, reason: String },
    /// Condition or printing value without an output mapping (strict mode)
    #[error("Row {row}: no mapping for {field} '{value}'")]
    UnmappedValue {
        row: usize,
        field: &'static str,
        value: String,
    },
}

/// Result alias for collection_remap operations
pub type Result<T> = std::result::Result<T, RemapError>;
