//! Essay record input definitions
//!
//! The record mirrors the JSON interface: all metadata fields, the abstract
//! and keywords, the raw body content, and the caller-sorted reference list.

use serde::{Deserialize, Serialize};

/// Target audience for the generated paper
///
/// APA 7 distinguishes student papers (course/instructor/due-date block on
/// the title page) from professional papers (running head, no course block).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperMode {
    /// Student paper: title page carries course, instructor, and due date
    #[default]
    Student,
    /// Professional paper: running head in the header, no course block
    Professional,
}

/// A fully constructed essay, ready for assembly
///
/// The record is built (or deserialized) in full before `assemble` runs;
/// there is no streaming or incremental update path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EssayRecord {
    /// Paper title
    pub title: String,
    /// Author name
    pub author: String,
    /// Institutional affiliation
    pub institution: String,
    /// Course designation (student papers)
    pub course: String,
    /// Instructor name (student papers)
    pub instructor: String,
    /// Assignment due date (student papers)
    pub due_date: String,
    /// Abstract text; may be empty for student papers
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    /// Keywords listed below the abstract
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Body content, paragraphs separated by line breaks
    pub content: String,
    /// Fully formatted citations, already in the order they should appear
    #[serde(default)]
    pub references: Vec<String>,
    /// Paper mode; defaults to Student when absent from the JSON
    #[serde(default)]
    pub mode: PaperMode,
}

impl EssayRecord {
    /// Whether the abstract block should be emitted for this record
    pub fn wants_abstract(&self) -> bool {
        self.mode == PaperMode::Professional || !self.abstract_text.is_empty()
    }
}
