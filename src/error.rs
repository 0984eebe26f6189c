//! Error types for the boolex library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`BoolexError`] enum. Absence of a match is never an error: lookups and
//! searches that find nothing return empty collections instead.
//!
//! # Examples
//!
//! ```
//! use boolex::error::{BoolexError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(BoolexError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for boolex operations.
#[derive(Error, Debug)]
pub enum BoolexError {
    /// I/O errors (corpus files, index files, reports)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Index-related errors
    #[error("Index error: {0}")]
    Index(String),

    /// Analysis-related errors (tokenization, filtering, stemming)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Query-related errors
    #[error("Query error: {0}")]
    Query(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// CSV writer errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with BoolexError.
pub type Result<T> = std::result::Result<T, BoolexError>;

impl BoolexError {
    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        BoolexError::Index(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        BoolexError::Analysis(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        BoolexError::Query(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        BoolexError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        BoolexError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        BoolexError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        BoolexError::Other(format!("Internal error: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = BoolexError::index("Test index error");
        assert_eq!(error.to_string(), "Index error: Test index error");

        let error = BoolexError::query("Test query error");
        assert_eq!(error.to_string(), "Query error: Test query error");

        let error = BoolexError::invalid_argument("missing path");
        assert_eq!(error.to_string(), "Error: Invalid argument: missing path");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let boolex_error = BoolexError::from(io_error);

        match boolex_error {
            BoolexError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
