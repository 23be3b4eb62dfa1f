//! essayfmt-core - APA document assembly
//!
//! This crate hosts the document assembler: a pure function from an
//! [`EssayRecord`](essayfmt_ast::EssayRecord) to a
//! [`DocumentTree`](essayfmt_ast::DocumentTree), plus the JSON record
//! loader that feeds it.
//!
//! ## Example
//!
//! ```no_run
//! use essayfmt_core::{loader, assemble};
//!
//! let record = loader::record_from_file("essay.json")?;
//! let tree = assemble(&record);
//! # Ok::<(), essayfmt_core::RecordError>(())
//! ```

pub mod assembler;
pub mod error;
pub mod loader;

pub use assembler::assemble;
pub use error::{RecordError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
