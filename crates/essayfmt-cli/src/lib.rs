//! essayfmt CLI - Command-line interface library
//!
//! This library provides the CLI functionality for essayfmt:
//! - Render: format a JSON essay record as an APA-styled DOCX
//! - Sample: render the built-in sample essay
//!
//! # Binary Usage
//!
//! ```bash
//! # Render a record to DOCX
//! essayfmt render essay.json --output final.docx
//!
//! # Professional paper with running head
//! essayfmt render essay.json --professional
//!
//! # Built-in sample dataset
//! essayfmt sample --output sample_essay.docx
//! ```

pub mod app;
pub mod sample;

// Re-export main entry point
pub use app::{render_command, run_cli, sample_command};
pub use sample::sample_record;
