//! Error types for the normdup core
//!
//! Only record ingestion can fail. Normalization and grouping are total
//! and never produce an `Error`.

use std::path::PathBuf;

use thiserror::Error;

/// normdup error types
#[derive(Debug, Error)]
pub enum Error {
    /// Source text could not be parsed into records at all
    #[error("Malformed source: {0}")]
    MalformedSource(String),

    /// Source file could not be read
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A report could not be rendered as JSON
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Result type alias for normdup operations
pub type Result<T> = std::result::Result<T, Error>;
