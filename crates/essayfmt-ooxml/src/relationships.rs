//! Relationships for OOXML documents
//!
//! OOXML uses relationship files (_rels/*.rels) to map IDs to targets.
//! The writer allocates IDs for the styles, numbering, header, and footer
//! parts and serializes them into word/_rels/document.xml.rels.

/// OOXML namespace for relationships
pub const RELATIONSHIPS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// Common relationship type URIs
impl Relationships {
    /// Styles relationship type
    pub const TYPE_STYLES: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    /// Numbering relationship type
    pub const TYPE_NUMBERING: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
    /// Header relationship type
    pub const TYPE_HEADER: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/header";
    /// Footer relationship type
    pub const TYPE_FOOTER: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer";
}

/// A single relationship entry
#[derive(Debug, Clone)]
struct Relationship {
    id: String,
    rel_type: String,
    target: String,
}

/// Document relationships, kept in insertion order for deterministic
/// XML serialization
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    entries: Vec<Relationship>,
}

impl Relationships {
    /// Create an empty relationships map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship, returning its generated ID (rId1, rId2, ...)
    pub fn add(&mut self, target: impl Into<String>, rel_type: impl Into<String>) -> String {
        let id = format!("rId{}", self.entries.len() + 1);
        self.entries.push(Relationship {
            id: id.clone(),
            rel_type: rel_type.into(),
            target: target.into(),
        });
        id
    }

    /// Number of relationships
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no relationships
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to .rels XML
    pub fn to_xml(&self) -> String {
        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<Relationships xmlns="{}">"#, RELATIONSHIPS_NS));
        xml.push('\n');

        for rel in &self.entries {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                rel.id, rel.rel_type, rel.target
            ));
            xml.push('\n');
        }

        xml.push_str("</Relationships>");
        xml
    }
}
