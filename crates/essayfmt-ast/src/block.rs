//! Block-level nodes of the assembled document
//!
//! A document is an ordered sequence of these nodes; formatting lives on the
//! paragraph (alignment, indents, list membership) and on its runs
//! (bold/italic), never in global mutable state.

use serde::{Deserialize, Serialize};

/// A length in twentieths of a point (twips), the unit OOXML measures
/// indents and margins in. 1 inch = 1440 twips. Negative values are valid
/// and express hanging first-line indents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Length(i32);

impl Length {
    /// Construct from inches
    pub fn inches(value: f64) -> Self {
        Length((value * 1440.0).round() as i32)
    }

    /// Raw twips value
    pub fn twips(self) -> i32 {
        self.0
    }

    /// Whether this length is negative (hanging indent when used as a
    /// first-line indent)
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

/// Paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// List membership of a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListKind {
    /// Bulleted list item
    Bullet,
    /// Numbered list item
    Numbered,
}

/// A run of text with character formatting
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Run {
    /// Run text
    pub text: String,
    /// Bold flag
    pub bold: bool,
    /// Italic flag
    pub italic: bool,
}

impl Run {
    /// A plain run
    pub fn plain(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            ..Default::default()
        }
    }

    /// A bold run
    pub fn bold(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            bold: true,
            italic: false,
        }
    }

    /// An italic run
    pub fn italic(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            bold: false,
            italic: true,
        }
    }
}

/// A paragraph of formatted text
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs within the paragraph
    pub runs: Vec<Run>,
    /// Paragraph alignment
    pub align: Alignment,
    /// First-line indent; negative = hanging
    pub first_line_indent: Option<Length>,
    /// Left indent of the whole paragraph
    pub left_indent: Option<Length>,
    /// List membership, if this paragraph is a list item
    pub list: Option<ListKind>,
}

impl Paragraph {
    /// A left-aligned paragraph with a single plain run
    pub fn plain(text: impl Into<String>) -> Self {
        Paragraph {
            runs: vec![Run::plain(text)],
            ..Default::default()
        }
    }

    /// A centered paragraph with a single plain run
    pub fn centered(text: impl Into<String>) -> Self {
        Paragraph {
            runs: vec![Run::plain(text)],
            align: Alignment::Center,
            ..Default::default()
        }
    }

    /// Set the alignment
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set the first-line indent
    pub fn with_first_line_indent(mut self, indent: Length) -> Self {
        self.first_line_indent = Some(indent);
        self
    }

    /// Set the left indent
    pub fn with_left_indent(mut self, indent: Length) -> Self {
        self.left_indent = Some(indent);
        self
    }

    /// Tag this paragraph as a list item
    pub fn with_list(mut self, kind: ListKind) -> Self {
        self.list = Some(kind);
        self
    }

    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A section heading, rendered as a centered bold paragraph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionHeader {
    /// Heading text
    pub text: String,
}

impl SectionHeader {
    /// Create a heading
    pub fn new(text: impl Into<String>) -> Self {
        SectionHeader { text: text.into() }
    }
}

/// Block-level content element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockNode {
    /// A paragraph of text
    Paragraph(Paragraph),
    /// A centered bold section heading ("Abstract", "References")
    SectionHeader(SectionHeader),
    /// A hard page break
    PageBreak,
}
