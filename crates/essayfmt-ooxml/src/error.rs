//! Error types for OOXML operations

use thiserror::Error;

/// Errors that can occur while building or inspecting a DOCX archive
#[derive(Error, Debug)]
pub enum DocxError {
    /// Error reading or writing the ZIP archive
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Error reading or writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Required file not found in archive
    #[error("Required file not found: {0}")]
    MissingFile(String),
}

/// Result type for OOXML operations
pub type Result<T> = std::result::Result<T, DocxError>;
