//! Integration tests for the document assembler
//!
//! These exercise the observable structure of the assembled tree: title
//! page shape, abstract conditionality, list detection, reference
//! formatting, and pagination.

use essayfmt_ast::{
    Alignment, BlockNode, EssayRecord, Length, ListKind, PaperMode, Paragraph,
};
use essayfmt_core::assemble;

fn record(mode: PaperMode) -> EssayRecord {
    EssayRecord {
        title: "Giotto and Early Renaissance Painting".to_string(),
        author: "T. Gibbs".to_string(),
        institution: "University of Oklahoma".to_string(),
        course: "LSTD 3173".to_string(),
        instructor: "A. Palmer".to_string(),
        due_date: "June 17, 2024".to_string(),
        abstract_text: String::new(),
        keywords: vec![],
        content: "Giotto and Early Renaissance Painting\nBody paragraph one.".to_string(),
        references: vec![],
        mode,
    }
}

fn paragraphs(blocks: &[BlockNode]) -> Vec<&Paragraph> {
    blocks
        .iter()
        .filter_map(|b| match b {
            BlockNode::Paragraph(p) => Some(p),
            _ => None,
        })
        .collect()
}

#[test]
fn title_page_is_followed_by_exactly_one_page_break() {
    let tree = assemble(&record(PaperMode::Student));

    // Student title page: title, author, institution, course, instructor,
    // due date, then the break
    for block in &tree.blocks[..6] {
        assert!(matches!(block, BlockNode::Paragraph(_)));
    }
    assert!(matches!(tree.blocks[6], BlockNode::PageBreak));
    assert!(!matches!(tree.blocks[7], BlockNode::PageBreak));
}

#[test]
fn professional_title_page_omits_course_block() {
    let tree = assemble(&record(PaperMode::Professional));
    // Professional: title, author, institution, then the break
    assert!(matches!(tree.blocks[3], BlockNode::PageBreak));

    let paras = paragraphs(&tree.blocks);
    assert!(!paras.iter().any(|p| p.text() == "LSTD 3173"));
}

#[test]
fn title_paragraph_is_centered_and_bold() {
    let tree = assemble(&record(PaperMode::Student));
    let title = match &tree.blocks[0] {
        BlockNode::Paragraph(p) => p,
        other => panic!("expected paragraph, got {:?}", other),
    };
    assert_eq!(title.align, Alignment::Center);
    assert!(title.runs[0].bold);
}

#[test]
fn abstract_present_iff_professional_or_nonempty() {
    let has_abstract = |tree: &essayfmt_ast::DocumentTree| {
        tree.blocks.iter().any(|b| {
            matches!(b, BlockNode::SectionHeader(h) if h.text == "Abstract")
        })
    };

    assert!(!has_abstract(&assemble(&record(PaperMode::Student))));
    assert!(has_abstract(&assemble(&record(PaperMode::Professional))));

    let mut student = record(PaperMode::Student);
    student.abstract_text = "A short abstract.".to_string();
    assert!(has_abstract(&assemble(&student)));
}

#[test]
fn abstract_block_ends_with_page_break() {
    let mut rec = record(PaperMode::Professional);
    rec.abstract_text = "Summary.".to_string();
    rec.keywords = vec!["giotto".to_string(), "fresco".to_string()];
    let tree = assemble(&rec);

    let keywords_pos = tree
        .blocks
        .iter()
        .position(|b| matches!(b, BlockNode::Paragraph(p) if p.text().starts_with("Keywords: ")))
        .expect("keywords paragraph");
    assert!(matches!(tree.blocks[keywords_pos + 1], BlockNode::PageBreak));

    // Joined keyword list is italic
    let keywords = match &tree.blocks[keywords_pos] {
        BlockNode::Paragraph(p) => p,
        _ => unreachable!(),
    };
    assert_eq!(keywords.runs[1].text, "giotto, fresco");
    assert!(keywords.runs[1].italic);
}

#[test]
fn running_head_only_for_professional_mode() {
    assert!(assemble(&record(PaperMode::Student)).running_head.is_none());

    let tree = assemble(&record(PaperMode::Professional));
    assert_eq!(
        tree.running_head.as_deref(),
        Some("Running head: GIOTTO AND EARLY RENAISSANCE PAINTING")
    );
}

#[test]
fn running_head_truncates_long_titles_to_50_chars() {
    let mut rec = record(PaperMode::Professional);
    rec.title = "x".repeat(60);
    let tree = assemble(&rec);
    let expected = format!("Running head: {}", "X".repeat(50));
    assert_eq!(tree.running_head.as_deref(), Some(expected.as_str()));
}

#[test]
fn references_preserve_input_order() {
    let mut rec = record(PaperMode::Student);
    rec.references = vec!["B, A. (2020).".to_string(), "A, Z. (2019).".to_string()];
    let tree = assemble(&rec);

    let heading_pos = tree
        .blocks
        .iter()
        .position(|b| matches!(b, BlockNode::SectionHeader(h) if h.text == "References"))
        .expect("references heading");

    let texts: Vec<String> = paragraphs(&tree.blocks[heading_pos..])
        .iter()
        .map(|p| p.text())
        .collect();
    assert_eq!(texts, vec!["B, A. (2020).", "A, Z. (2019)."]);
}

#[test]
fn every_reference_has_hanging_indent() {
    let mut rec = record(PaperMode::Student);
    rec.references = vec![
        "Adams, L. S. (2013). Italian Renaissance Art.".to_string(),
        "Zucker, S., & Harris, B. (2020).".to_string(),
    ];
    let tree = assemble(&rec);

    let heading_pos = tree
        .blocks
        .iter()
        .position(|b| matches!(b, BlockNode::SectionHeader(h) if h.text == "References"))
        .unwrap();

    for para in paragraphs(&tree.blocks[heading_pos..]) {
        assert_eq!(para.left_indent, Some(Length::inches(0.5)));
        assert_eq!(para.first_line_indent, Some(Length::inches(-0.5)));
    }
}

#[test]
fn body_list_scenario() {
    let mut rec = record(PaperMode::Student);
    rec.content = "Intro line\n- item one\n- item two\nClosing line".to_string();
    let tree = assemble(&rec);

    // Body starts after the title-page break
    let break_pos = tree
        .blocks
        .iter()
        .position(|b| matches!(b, BlockNode::PageBreak))
        .unwrap();
    let body = paragraphs(&tree.blocks[break_pos + 1..]);

    let intro = body[0];
    assert_eq!(intro.text(), "Intro line");
    assert_eq!(intro.align, Alignment::Center);

    for item in [body[1], body[2]] {
        assert_eq!(item.list, Some(ListKind::Bullet));
        assert_eq!(item.left_indent, Some(Length::inches(0.5)));
        assert_eq!(item.first_line_indent, Some(Length::inches(-0.25)));
    }
    assert_eq!(body[1].text(), "item one");
    assert_eq!(body[2].text(), "item two");

    let closing = body[3];
    assert_eq!(closing.text(), "Closing line");
    assert_eq!(closing.align, Alignment::Left);
    assert_eq!(closing.list, None);
    assert_eq!(closing.left_indent, None);
    assert_eq!(closing.first_line_indent, Some(Length::inches(0.5)));
}

#[test]
fn first_item_of_a_run_sets_the_list_style() {
    let mut rec = record(PaperMode::Student);
    rec.content = "Title\n1. first\n- still numbered\nplain\n- bullet now".to_string();
    let tree = assemble(&rec);

    let break_pos = tree
        .blocks
        .iter()
        .position(|b| matches!(b, BlockNode::PageBreak))
        .unwrap();
    let body = paragraphs(&tree.blocks[break_pos + 1..]);

    assert_eq!(body[1].list, Some(ListKind::Numbered));
    assert_eq!(body[2].list, Some(ListKind::Numbered));
    assert_eq!(body[3].list, None);
    assert_eq!(body[4].list, Some(ListKind::Bullet));
}

#[test]
fn degenerate_record_still_assembles() {
    let mut rec = record(PaperMode::Student);
    rec.title = String::new();
    rec.content = String::new();
    rec.references = vec![];
    let tree = assemble(&rec);

    assert!(tree
        .blocks
        .iter()
        .any(|b| matches!(b, BlockNode::SectionHeader(h) if h.text == "References")));
    assert!(tree.footer.is_some());
}

#[test]
fn footer_is_right_aligned_page_number() {
    let tree = assemble(&record(PaperMode::Student));
    assert_eq!(tree.footer.unwrap().align, Alignment::Right);
}
