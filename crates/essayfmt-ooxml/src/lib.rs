//! # essayfmt-ooxml
//!
//! OOXML (Office Open XML) generation for essayfmt.
//!
//! This crate serializes an assembled
//! [`DocumentTree`](essayfmt_ast::DocumentTree) into a DOCX file: a ZIP
//! archive of XML parts covering the document body, styles, numbering,
//! header/footer regions, and package metadata.
//!
//! ## Example
//!
//! ```no_run
//! use essayfmt_ast::{DocumentMeta, DocumentTree};
//! use essayfmt_ooxml::DocxWriter;
//!
//! let tree = DocumentTree::new(DocumentMeta::default());
//! DocxWriter::write_file(&tree, "essay.docx")?;
//! # Ok::<(), essayfmt_ooxml::DocxError>(())
//! ```

pub mod archive;
pub mod error;
pub mod relationships;
pub mod writer;

pub use archive::OoxmlArchive;
pub use error::{DocxError, Result};
pub use relationships::Relationships;
pub use writer::DocxWriter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
