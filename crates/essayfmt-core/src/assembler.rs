//! Document assembly
//!
//! This module maps an [`EssayRecord`] onto an ordered block tree following
//! APA formatting conventions: title page, optional abstract, body content
//! with ad hoc list detection, references, and pagination. The whole pass
//! is a pure function; persistence belongs to the caller.

use essayfmt_ast::{
    Alignment, DocumentMeta, DocumentTree, EssayRecord, Length, ListKind, PageNumberFooter,
    PaperMode, Paragraph, Run,
};

/// Maximum length of the professional running head, in characters
const RUNNING_HEAD_LIMIT: usize = 50;

/// List-detection state threaded through the body fold
#[derive(Debug, Clone, Copy, PartialEq)]
enum ListState {
    NotInList,
    InList(ListKind),
}

/// Assemble a complete document tree from an essay record
///
/// Total over well-formed records: malformed business-level input (empty
/// title, no references) produces a degenerate but structurally valid
/// document rather than an error.
pub fn assemble(record: &EssayRecord) -> DocumentTree {
    let mut tree = DocumentTree::new(DocumentMeta {
        title: record.title.clone(),
        author: record.author.clone(),
    });

    if record.mode == PaperMode::Professional {
        tree.running_head = Some(running_head(&record.title));
    }
    tree.footer = Some(PageNumberFooter {
        align: Alignment::Right,
    });

    push_title_page(record, &mut tree);
    tree.push_page_break();

    if record.wants_abstract() {
        push_abstract(record, &mut tree);
        tree.push_page_break();
    }

    push_body(&record.content, &mut tree);
    tree.push_page_break();

    push_references(&record.references, &mut tree);

    tree
}

/// Build the first-section header line for professional papers:
/// uppercase title, truncated to at most 50 characters
fn running_head(title: &str) -> String {
    let head: String = title.to_uppercase().chars().take(RUNNING_HEAD_LIMIT).collect();
    format!("Running head: {}", head)
}

fn push_title_page(record: &EssayRecord, tree: &mut DocumentTree) {
    tree.push_paragraph(Paragraph {
        runs: vec![Run::bold(record.title.as_str())],
        align: Alignment::Center,
        ..Default::default()
    });

    tree.push_paragraph(Paragraph::centered(record.author.as_str()));
    tree.push_paragraph(Paragraph::centered(record.institution.as_str()));

    // Professional papers omit the course block per APA 7
    if record.mode == PaperMode::Student {
        for field in [&record.course, &record.instructor, &record.due_date] {
            tree.push_paragraph(Paragraph::centered(field.as_str()));
        }
    }
}

fn push_abstract(record: &EssayRecord, tree: &mut DocumentTree) {
    tree.push_header("Abstract");

    // Abstract text carries no first-line indent
    tree.push_paragraph(Paragraph::plain(record.abstract_text.as_str()));

    tree.push_paragraph(Paragraph {
        runs: vec![
            Run::plain("Keywords: "),
            Run::italic(record.keywords.join(", ")),
        ],
        ..Default::default()
    });
}

/// Render body content, one paragraph per line, folding a list state
/// across consecutive units
fn push_body(content: &str, tree: &mut DocumentTree) {
    let mut state = ListState::NotInList;
    let mut first = true;

    for line in content.lines() {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        // The leading unit is the repeated title line, centered
        if first {
            tree.push_paragraph(Paragraph::centered(text));
            first = false;
            continue;
        }

        state = match list_marker(text) {
            Some((detected, rest)) => {
                // The first item of a contiguous run sets the list style
                let kind = match state {
                    ListState::InList(kind) => kind,
                    ListState::NotInList => detected,
                };
                tree.push_paragraph(
                    Paragraph::plain(rest)
                        .with_left_indent(Length::inches(0.5))
                        .with_first_line_indent(Length::inches(-0.25))
                        .with_list(kind),
                );
                ListState::InList(kind)
            }
            None => {
                tree.push_paragraph(
                    Paragraph::plain(text).with_first_line_indent(Length::inches(0.5)),
                );
                ListState::NotInList
            }
        };
    }
}

fn push_references(references: &[String], tree: &mut DocumentTree) {
    tree.push_header("References");

    // Input order preserved; alphabetical sorting is the caller's job
    for reference in references {
        tree.push_paragraph(
            Paragraph::plain(reference.as_str())
                .with_left_indent(Length::inches(0.5))
                .with_first_line_indent(Length::inches(-0.5)),
        );
    }
}

/// Detect a list marker on a trimmed body line
///
/// Markers: a leading `-`, `*`, or `•` (bullet), or leading digits followed
/// by `.` where the dot falls within the first three characters (numbered).
/// Returns the kind and the line text with the marker stripped.
pub fn list_marker(text: &str) -> Option<(ListKind, &str)> {
    if let Some(rest) = text.strip_prefix(['-', '*', '•']) {
        return Some((ListKind::Bullet, rest.trim_start()));
    }

    let digits = text.chars().take_while(|c| c.is_ascii_digit()).count();
    if (1..=2).contains(&digits) {
        if let Some(rest) = text[digits..].strip_prefix('.') {
            return Some((ListKind::Numbered, rest.trim_start()));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_markers() {
        assert_eq!(list_marker("- item"), Some((ListKind::Bullet, "item")));
        assert_eq!(list_marker("* item"), Some((ListKind::Bullet, "item")));
        assert_eq!(list_marker("• item"), Some((ListKind::Bullet, "item")));
    }

    #[test]
    fn test_numbered_markers() {
        assert_eq!(list_marker("1. first"), Some((ListKind::Numbered, "first")));
        assert_eq!(list_marker("10. tenth"), Some((ListKind::Numbered, "tenth")));
    }

    #[test]
    fn test_dot_outside_window_is_plain_text() {
        assert_eq!(list_marker("100. hundredth"), None);
        assert_eq!(list_marker("1998 was a year."), None);
    }

    #[test]
    fn test_plain_lines_have_no_marker() {
        assert_eq!(list_marker("An ordinary sentence."), None);
        assert_eq!(list_marker(""), None);
    }

    #[test]
    fn test_stripping_is_idempotent() {
        let (_, stripped) = list_marker("- item one").unwrap();
        assert_eq!(list_marker(stripped), None);
    }

    #[test]
    fn test_running_head_truncates_uppercase() {
        let title = "a".repeat(60);
        let head = running_head(&title);
        assert_eq!(head, format!("Running head: {}", "A".repeat(50)));
    }

    #[test]
    fn test_running_head_short_title_untouched() {
        assert_eq!(running_head("Short"), "Running head: SHORT");
    }
}
