//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error during read, write or delete.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// File content was not valid UTF-8.
    #[error("invalid UTF-8 in {name}")]
    InvalidUtf8 {
        /// File the content came from.
        name: String,
    },
    /// A file to remove was not found.
    #[error("file not found: {0}")]
    NotFound(String),
}
