//! Error types for the PeopleLens library.
//!
//! All fallible operations in the crate return [`Result`], whose error type
//! is the [`PeopleLensError`] enum. Variants are grouped by concern so that
//! callers can match on the failing layer (dataset loading, query handling,
//! serialization) without inspecting message strings.
//!
//! # Examples
//!
//! ```
//! use peoplelens::error::{PeopleLensError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PeopleLensError::query("Unsupported query form"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for PeopleLens operations.
#[derive(Error, Debug)]
pub enum PeopleLensError {
    /// I/O errors (file operations, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV reading errors from the underlying reader
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Dataset errors (missing columns, malformed rows, bad values)
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Value parse errors (dates, numbers) with row context
    #[error("Parse error: {0}")]
    Parse(String),

    /// Query handling errors
    #[error("Query error: {0}")]
    Query(String),

    /// Result table construction errors
    #[error("Table error: {0}")]
    Table(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with PeopleLensError.
pub type Result<T> = std::result::Result<T, PeopleLensError>;

impl PeopleLensError {
    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        PeopleLensError::Dataset(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        PeopleLensError::Parse(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        PeopleLensError::Query(msg.into())
    }

    /// Create a new table error.
    pub fn table<S: Into<String>>(msg: S) -> Self {
        PeopleLensError::Table(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        PeopleLensError::InvalidOperation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PeopleLensError::dataset("missing column `Salary`");
        assert_eq!(err.to_string(), "Dataset error: missing column `Salary`");

        let err = PeopleLensError::query("empty query");
        assert_eq!(err.to_string(), "Query error: empty query");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err: PeopleLensError = io_err.into();
        assert!(matches!(err, PeopleLensError::Io(_)));
    }
}
