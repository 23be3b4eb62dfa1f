//! Document tree and document-wide properties
//!
//! The tree is what the assembler returns and the OOXML writer consumes:
//! an ordered block list plus the global layout (margins, base font,
//! spacing) and the first-section header/footer regions.

use serde::{Deserialize, Serialize};

use crate::block::{Alignment, BlockNode, Length, Paragraph, SectionHeader};

/// Page margins for every section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMargins {
    pub top: Length,
    pub bottom: Length,
    pub left: Length,
    pub right: Length,
}

impl PageMargins {
    /// Uniform margins on all four sides
    pub fn uniform(length: Length) -> Self {
        PageMargins {
            top: length,
            bottom: length,
            left: length,
            right: length,
        }
    }
}

/// Document-wide layout properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentProps {
    /// Page margins applied to every section
    pub margins: PageMargins,
    /// Base font family
    pub font_family: String,
    /// Base font size in points
    pub font_size_pt: u32,
    /// Line spacing multiplier (2.0 = double)
    pub line_spacing: f32,
    /// Spacing after each paragraph, in points
    pub space_after_pt: u32,
}

impl Default for DocumentProps {
    /// APA layout: 1-inch margins, 12pt Times New Roman, double-spaced,
    /// no extra space after paragraphs
    fn default() -> Self {
        DocumentProps {
            margins: PageMargins::uniform(Length::inches(1.0)),
            font_family: "Times New Roman".to_string(),
            font_size_pt: 12,
            line_spacing: 2.0,
            space_after_pt: 0,
        }
    }
}

/// Document metadata surfaced to docProps/core.xml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Document title
    pub title: String,
    /// Document author
    pub author: String,
}

/// A dynamic page-number field in the first section's footer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageNumberFooter {
    /// Footer paragraph alignment
    pub align: Alignment,
}

/// The assembled document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentTree {
    /// Document metadata (title, author)
    pub meta: DocumentMeta,
    /// Global layout properties
    pub props: DocumentProps,
    /// Full header line for the first section, e.g.
    /// `Running head: SOME TITLE` (professional papers only)
    pub running_head: Option<String>,
    /// Page-number footer on the first section
    pub footer: Option<PageNumberFooter>,
    /// Ordered content blocks
    pub blocks: Vec<BlockNode>,
}

impl DocumentTree {
    /// Create an empty tree with default APA layout
    pub fn new(meta: DocumentMeta) -> Self {
        DocumentTree {
            meta,
            props: DocumentProps::default(),
            running_head: None,
            footer: None,
            blocks: Vec::new(),
        }
    }

    /// Append a block
    pub fn push(&mut self, block: BlockNode) {
        self.blocks.push(block);
    }

    /// Append a paragraph
    pub fn push_paragraph(&mut self, para: Paragraph) {
        self.blocks.push(BlockNode::Paragraph(para));
    }

    /// Append a section heading
    pub fn push_header(&mut self, text: impl Into<String>) {
        self.blocks
            .push(BlockNode::SectionHeader(SectionHeader::new(text)));
    }

    /// Append a page break
    pub fn push_page_break(&mut self) {
        self.blocks.push(BlockNode::PageBreak);
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the tree has no blocks
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Whether any paragraph is a list item (the writer needs to know
    /// whether to emit word/numbering.xml)
    pub fn has_list_items(&self) -> bool {
        self.blocks.iter().any(|b| match b {
            BlockNode::Paragraph(p) => p.list.is_some(),
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::ListKind;

    #[test]
    fn test_default_props_are_apa_layout() {
        let props = DocumentProps::default();
        assert_eq!(props.margins.top.twips(), 1440);
        assert_eq!(props.margins.left.twips(), 1440);
        assert_eq!(props.font_family, "Times New Roman");
        assert_eq!(props.font_size_pt, 12);
        assert_eq!(props.line_spacing, 2.0);
        assert_eq!(props.space_after_pt, 0);
    }

    #[test]
    fn test_tree_push_operations() {
        let mut tree = DocumentTree::new(DocumentMeta::default());
        assert!(tree.is_empty());
        tree.push_paragraph(Paragraph::plain("body"));
        tree.push_header("References");
        tree.push_page_break();
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_has_list_items() {
        let mut tree = DocumentTree::new(DocumentMeta::default());
        tree.push_paragraph(Paragraph::plain("plain"));
        assert!(!tree.has_list_items());
        tree.push_paragraph(Paragraph::plain("item").with_list(ListKind::Numbered));
        assert!(tree.has_list_items());
    }
}
