//! DOCX Writer
//!
//! This module writes an `essayfmt_ast::DocumentTree` to DOCX format,
//! generating the full part set from scratch: document body, styles,
//! numbering, header/footer regions, relationships, and package metadata.
//!
//! # Example
//!
//! ```ignore
//! use essayfmt_ooxml::DocxWriter;
//!
//! let bytes = DocxWriter::generate(&tree)?;
//! std::fs::write("essay.docx", bytes)?;
//! ```

use std::io::Cursor;
use std::path::Path;

use quick_xml::escape::escape;

use essayfmt_ast::{
    Alignment, BlockNode, DocumentMeta, DocumentProps, DocumentTree, ListKind, Paragraph, Run,
    SectionHeader,
};

use crate::archive::OoxmlArchive;
use crate::error::Result;
use crate::relationships::Relationships;

/// US Letter page size in twips
const PAGE_WIDTH_TWIPS: i32 = 12240;
const PAGE_HEIGHT_TWIPS: i32 = 15840;

/// Distance of header/footer regions from the page edge, in twips
const HEADER_FOOTER_MARGIN_TWIPS: i32 = 720;

/// Numbering IDs referenced from list paragraphs (word/numbering.xml)
const NUM_ID_BULLET: u32 = 1;
const NUM_ID_DECIMAL: u32 = 2;

/// DOCX writer for generating files from an assembled document tree
pub struct DocxWriter {
    /// XML output buffer for word/document.xml
    output: String,
    /// Document relationships (word/_rels/document.xml.rels)
    relationships: Relationships,
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxWriter {
    /// Create a new DocxWriter
    pub fn new() -> Self {
        Self {
            output: String::new(),
            relationships: Relationships::new(),
        }
    }

    /// Generate a DOCX file from a document tree
    ///
    /// # Returns
    ///
    /// The generated DOCX file as bytes
    pub fn generate(tree: &DocumentTree) -> Result<Vec<u8>> {
        let mut writer = DocxWriter::new();
        let mut archive = OoxmlArchive::new();

        writer
            .relationships
            .add("styles.xml", Relationships::TYPE_STYLES);

        let has_numbering = tree.has_list_items();
        if has_numbering {
            writer
                .relationships
                .add("numbering.xml", Relationships::TYPE_NUMBERING);
        }

        let header_rel = tree.running_head.as_ref().map(|head| {
            let id = writer
                .relationships
                .add("header1.xml", Relationships::TYPE_HEADER);
            archive.set_string("word/header1.xml", generate_header_xml(head));
            id
        });

        let footer_rel = tree.footer.map(|footer| {
            let id = writer
                .relationships
                .add("footer1.xml", Relationships::TYPE_FOOTER);
            archive.set_string("word/footer1.xml", generate_footer_xml(footer.align));
            id
        });

        let document_xml =
            writer.generate_document_xml(tree, header_rel.as_deref(), footer_rel.as_deref());
        archive.set_string("word/document.xml", document_xml);
        archive.set_string("word/styles.xml", generate_styles_xml(&tree.props));
        if has_numbering {
            archive.set_string("word/numbering.xml", generate_numbering_xml());
        }

        archive.set_string(
            "word/_rels/document.xml.rels",
            writer.relationships.to_xml(),
        );
        archive.set_string("_rels/.rels", root_rels_xml());
        archive.set_string(
            "[Content_Types].xml",
            content_types_xml(has_numbering, header_rel.is_some(), footer_rel.is_some()),
        );
        archive.set_string("docProps/core.xml", core_properties_xml(&tree.meta));

        // Write to output buffer
        let mut output = Cursor::new(Vec::new());
        archive.write_to(&mut output)?;

        Ok(output.into_inner())
    }

    /// Generate a DOCX file and persist it to a path
    pub fn write_file<P: AsRef<Path>>(tree: &DocumentTree, path: P) -> Result<()> {
        let bytes = Self::generate(tree)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Generate the complete document.xml content
    fn generate_document_xml(
        &mut self,
        tree: &DocumentTree,
        header_rel: Option<&str>,
        footer_rel: Option<&str>,
    ) -> String {
        self.output.clear();

        self.output
            .push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        self.output.push('\n');
        self.output.push_str(r#"<w:document "#);
        self.output
            .push_str(r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#);
        self.output.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );
        self.output.push('\n');
        self.output.push_str("<w:body>\n");

        for block in &tree.blocks {
            self.generate_block(block);
        }

        self.generate_sect_pr(&tree.props, header_rel, footer_rel);

        self.output.push_str("</w:body>\n");
        self.output.push_str("</w:document>");

        self.output.clone()
    }

    /// Generate XML for a single block
    fn generate_block(&mut self, block: &BlockNode) {
        match block {
            BlockNode::Paragraph(para) => self.generate_paragraph(para),
            BlockNode::SectionHeader(header) => self.generate_section_header(header),
            BlockNode::PageBreak => self.generate_page_break(),
        }
    }

    /// Generate XML for a paragraph
    fn generate_paragraph(&mut self, para: &Paragraph) {
        self.output.push_str("<w:p>\n");

        let needs_ppr = para.align != Alignment::Left
            || para.first_line_indent.is_some()
            || para.left_indent.is_some()
            || para.list.is_some();

        if needs_ppr {
            self.output.push_str("<w:pPr>\n");

            if let Some(kind) = para.list {
                self.output
                    .push_str("<w:pStyle w:val=\"ListParagraph\"/>\n");
                let num_id = match kind {
                    ListKind::Bullet => NUM_ID_BULLET,
                    ListKind::Numbered => NUM_ID_DECIMAL,
                };
                self.output.push_str("<w:numPr>\n<w:ilvl w:val=\"0\"/>\n");
                self.output
                    .push_str(&format!("<w:numId w:val=\"{}\"/>\n", num_id));
                self.output.push_str("</w:numPr>\n");
            }

            if para.align != Alignment::Left {
                self.output
                    .push_str(&format!("<w:jc w:val=\"{}\"/>\n", jc_value(para.align)));
            }

            self.generate_indents(para);

            self.output.push_str("</w:pPr>\n");
        }

        for run in &para.runs {
            self.generate_run(run);
        }

        self.output.push_str("</w:p>\n");
    }

    /// Generate the w:ind element for a paragraph's indents
    ///
    /// Negative first-line indents are expressed as w:hanging, which is how
    /// OOXML encodes hanging indents (the value is positive there).
    fn generate_indents(&mut self, para: &Paragraph) {
        if para.first_line_indent.is_none() && para.left_indent.is_none() {
            return;
        }

        self.output.push_str("<w:ind");
        if let Some(left) = para.left_indent {
            self.output
                .push_str(&format!(" w:left=\"{}\"", left.twips()));
        }
        if let Some(first) = para.first_line_indent {
            if first.is_negative() {
                self.output
                    .push_str(&format!(" w:hanging=\"{}\"", -first.twips()));
            } else {
                self.output
                    .push_str(&format!(" w:firstLine=\"{}\"", first.twips()));
            }
        }
        self.output.push_str("/>\n");
    }

    /// Generate XML for a text run
    fn generate_run(&mut self, run: &Run) {
        self.output.push_str("<w:r>\n");

        if run.bold || run.italic {
            self.output.push_str("<w:rPr>\n");
            if run.bold {
                self.output.push_str("<w:b/>\n");
            }
            if run.italic {
                self.output.push_str("<w:i/>\n");
            }
            self.output.push_str("</w:rPr>\n");
        }

        self.output.push_str(&format!(
            "<w:t xml:space=\"preserve\">{}</w:t>\n",
            escape(&run.text)
        ));

        self.output.push_str("</w:r>\n");
    }

    /// Generate a centered bold heading paragraph ("Abstract", "References")
    fn generate_section_header(&mut self, header: &SectionHeader) {
        self.output.push_str("<w:p>\n");
        self.output.push_str("<w:pPr>\n<w:jc w:val=\"center\"/>\n</w:pPr>\n");
        self.output.push_str("<w:r>\n<w:rPr>\n<w:b/>\n</w:rPr>\n");
        self.output.push_str(&format!(
            "<w:t xml:space=\"preserve\">{}</w:t>\n",
            escape(&header.text)
        ));
        self.output.push_str("</w:r>\n");
        self.output.push_str("</w:p>\n");
    }

    /// Generate a hard page break
    fn generate_page_break(&mut self) {
        self.output.push_str("<w:p>\n<w:r>\n");
        self.output.push_str("<w:br w:type=\"page\"/>\n");
        self.output.push_str("</w:r>\n</w:p>\n");
    }

    /// Generate the section properties: page size, margins, and the
    /// header/footer references for the first section
    fn generate_sect_pr(
        &mut self,
        props: &DocumentProps,
        header_rel: Option<&str>,
        footer_rel: Option<&str>,
    ) {
        self.output.push_str("<w:sectPr>\n");

        if let Some(id) = header_rel {
            self.output.push_str(&format!(
                "<w:headerReference w:type=\"default\" r:id=\"{}\"/>\n",
                id
            ));
        }
        if let Some(id) = footer_rel {
            self.output.push_str(&format!(
                "<w:footerReference w:type=\"default\" r:id=\"{}\"/>\n",
                id
            ));
        }

        self.output.push_str(&format!(
            "<w:pgSz w:w=\"{}\" w:h=\"{}\"/>\n",
            PAGE_WIDTH_TWIPS, PAGE_HEIGHT_TWIPS
        ));

        let margins = &props.margins;
        self.output.push_str(&format!(
            "<w:pgMar w:top=\"{}\" w:right=\"{}\" w:bottom=\"{}\" w:left=\"{}\" w:header=\"{}\" w:footer=\"{}\" w:gutter=\"0\"/>\n",
            margins.top.twips(),
            margins.right.twips(),
            margins.bottom.twips(),
            margins.left.twips(),
            HEADER_FOOTER_MARGIN_TWIPS,
            HEADER_FOOTER_MARGIN_TWIPS,
        ));

        self.output.push_str("</w:sectPr>\n");
    }
}

/// Map an alignment to its w:jc value
fn jc_value(align: Alignment) -> &'static str {
    match align {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
    }
}

/// Generate word/styles.xml with document defaults carrying the base font,
/// size, spacing-after, and line spacing
fn generate_styles_xml(props: &DocumentProps) -> String {
    // Half-points for w:sz, 240ths of a line for w:line
    let size_half_points = props.font_size_pt * 2;
    let line = (props.line_spacing * 240.0).round() as i32;
    let space_after_twips = props.space_after_pt * 20;
    let font = escape(&props.font_family).into_owned();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:docDefaults>
<w:rPrDefault>
<w:rPr>
<w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}"/>
<w:sz w:val="{sz}"/>
<w:szCs w:val="{sz}"/>
</w:rPr>
</w:rPrDefault>
<w:pPrDefault>
<w:pPr>
<w:spacing w:after="{after}" w:line="{line}" w:lineRule="auto"/>
</w:pPr>
</w:pPrDefault>
</w:docDefaults>
<w:style w:type="paragraph" w:styleId="Normal" w:default="1">
<w:name w:val="Normal"/>
</w:style>
<w:style w:type="paragraph" w:styleId="Header">
<w:name w:val="header"/>
<w:basedOn w:val="Normal"/>
<w:pPr><w:spacing w:after="0" w:line="240" w:lineRule="auto"/></w:pPr>
</w:style>
<w:style w:type="paragraph" w:styleId="Footer">
<w:name w:val="footer"/>
<w:basedOn w:val="Normal"/>
<w:pPr><w:spacing w:after="0" w:line="240" w:lineRule="auto"/></w:pPr>
</w:style>
<w:style w:type="paragraph" w:styleId="ListParagraph">
<w:name w:val="List Paragraph"/>
<w:basedOn w:val="Normal"/>
</w:style>
</w:styles>"#,
        font = font,
        sz = size_half_points,
        after = space_after_twips,
        line = line,
    )
}

/// Generate word/numbering.xml with one bullet and one decimal definition
fn generate_numbering_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:abstractNum w:abstractNumId="{bullet}">
<w:lvl w:ilvl="0">
<w:start w:val="1"/>
<w:numFmt w:val="bullet"/>
<w:lvlText w:val="&#8226;"/>
<w:lvlJc w:val="left"/>
</w:lvl>
</w:abstractNum>
<w:abstractNum w:abstractNumId="{decimal}">
<w:lvl w:ilvl="0">
<w:start w:val="1"/>
<w:numFmt w:val="decimal"/>
<w:lvlText w:val="%1."/>
<w:lvlJc w:val="left"/>
</w:lvl>
</w:abstractNum>
<w:num w:numId="{bullet}"><w:abstractNumId w:val="{bullet}"/></w:num>
<w:num w:numId="{decimal}"><w:abstractNumId w:val="{decimal}"/></w:num>
</w:numbering>"#,
        bullet = NUM_ID_BULLET,
        decimal = NUM_ID_DECIMAL,
    )
}

/// Generate word/header1.xml carrying the running head line
fn generate_header_xml(text: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:hdr xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:p>
<w:pPr><w:pStyle w:val="Header"/></w:pPr>
<w:r><w:t xml:space="preserve">{}</w:t></w:r>
</w:p>
</w:hdr>"#,
        escape(text)
    )
}

/// Generate word/footer1.xml holding the dynamic page-number field
fn generate_footer_xml(align: Alignment) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:ftr xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:p>
<w:pPr><w:pStyle w:val="Footer"/><w:jc w:val="{}"/></w:pPr>
<w:fldSimple w:instr="PAGE"><w:r><w:t>1</w:t></w:r></w:fldSimple>
</w:p>
</w:ftr>"#,
        jc_value(align)
    )
}

/// Generate the package-level _rels/.rels
fn root_rels_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
</Relationships>"#
        .to_string()
}

/// Generate [Content_Types].xml for the parts actually present
fn content_types_xml(has_numbering: bool, has_header: bool, has_footer: bool) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
"#,
    );

    if has_numbering {
        xml.push_str("<Override PartName=\"/word/numbering.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml\"/>\n");
    }
    if has_header {
        xml.push_str("<Override PartName=\"/word/header1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml\"/>\n");
    }
    if has_footer {
        xml.push_str("<Override PartName=\"/word/footer1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml\"/>\n");
    }

    xml.push_str("</Types>");
    xml
}

/// Generate docProps/core.xml with document metadata
fn core_properties_xml(meta: &DocumentMeta) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/"><dc:title>{}</dc:title><dc:creator>{}</dc:creator></cp:coreProperties>"#,
        escape(&meta.title),
        escape(&meta.author)
    )
}
