//! Error types for record loading
//!
//! Assembly itself is total and never fails; errors can only arise before
//! it, while reading and shaping the input record.

use thiserror::Error;

/// Errors that can occur while loading an essay record
#[derive(Error, Debug)]
pub enum RecordError {
    /// Required fields missing or of the wrong shape; raised before
    /// assembly begins, nothing is partially written
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// The file system denied reading the input source; surfaced to the
    /// caller unchanged, no retry
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        RecordError::InvalidRecord(err.to_string())
    }
}

/// Result type for record loading
pub type Result<T> = std::result::Result<T, RecordError>;
