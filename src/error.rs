//! Error types for the promoter report tool.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the promoter report tool.
#[derive(Error, Debug)]
pub enum Error {
    // Connection errors (endpoint unreachable, credentials rejected)
    #[error("ClickHouse connection failed: {0}")]
    Connection(String),

    // Query errors (malformed SQL, missing table/column, backend exceptions)
    #[error("Query failed: {0}")]
    Query(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
