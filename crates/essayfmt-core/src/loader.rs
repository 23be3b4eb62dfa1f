//! Record loading from JSON
//!
//! Deserialization failures (missing fields, wrong types) are mapped to
//! [`RecordError::InvalidRecord`] so nothing downstream ever sees a
//! half-shaped record.

use std::fs;
use std::path::Path;

use essayfmt_ast::EssayRecord;

use crate::error::Result;

/// Parse a record from a JSON string
pub fn record_from_str(json: &str) -> Result<EssayRecord> {
    let record = serde_json::from_str(json)?;
    Ok(record)
}

/// Load a record from a JSON file
pub fn record_from_file<P: AsRef<Path>>(path: P) -> Result<EssayRecord> {
    let json = fs::read_to_string(path)?;
    record_from_str(&json)
}
