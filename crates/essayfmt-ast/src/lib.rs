//! essayfmt-ast - data model for APA document assembly
//!
//! This crate defines the two halves of the assembler's contract: the
//! immutable [`EssayRecord`] input and the [`DocumentTree`] output that the
//! OOXML writer serializes.

pub mod block;
pub mod document;
pub mod record;

pub use block::{Alignment, BlockNode, Length, ListKind, Paragraph, Run, SectionHeader};
pub use document::{DocumentMeta, DocumentProps, DocumentTree, PageMargins, PageNumberFooter};
pub use record::{EssayRecord, PaperMode};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
