//! Integration tests for the essayfmt CLI
//!
//! These run the command functions end to end: JSON record in, DOCX file
//! out, then reopen the archive to verify the rendered content.

use std::fs;

use essayfmt_cli::{render_command, sample_command};
use essayfmt_ooxml::OoxmlArchive;
use tempfile::TempDir;

const RECORD_JSON: &str = r#"{
    "title": "A Study of Things",
    "author": "R. Researcher",
    "institution": "Test University",
    "course": "TST 100",
    "instructor": "P. Professor",
    "due_date": "March 3, 2025",
    "abstract": "",
    "keywords": ["testing"],
    "content": "A Study of Things\nFirst body paragraph.\n- point one\n- point two",
    "references": ["Researcher, R. (2024). Prior work."]
}"#;

#[test]
fn render_produces_valid_docx() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("essay.json");
    let output = dir.path().join("essay.docx");
    fs::write(&input, RECORD_JSON).unwrap();

    render_command(&input, Some(&output), false).unwrap();

    let archive = OoxmlArchive::open(&output).unwrap();
    let document = archive.get_string("word/document.xml").unwrap().unwrap();
    assert!(document.contains("A Study of Things"));
    assert!(document.contains("point one"));
    assert!(document.contains("Researcher, R. (2024). Prior work."));

    // Student paper: no running head
    assert!(!archive.contains("word/header1.xml"));
}

#[test]
fn render_defaults_output_next_to_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("essay.json");
    fs::write(&input, RECORD_JSON).unwrap();

    render_command(&input, None, false).unwrap();
    assert!(dir.path().join("essay.docx").exists());
}

#[test]
fn professional_flag_adds_running_head() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("essay.json");
    let output = dir.path().join("essay.docx");
    fs::write(&input, RECORD_JSON).unwrap();

    render_command(&input, Some(&output), true).unwrap();

    let archive = OoxmlArchive::open(&output).unwrap();
    let header = archive.get_string("word/header1.xml").unwrap().unwrap();
    assert!(header.contains("Running head: A STUDY OF THINGS"));

    // Professional papers always carry an abstract block
    let document = archive.get_string("word/document.xml").unwrap().unwrap();
    assert!(document.contains("Abstract"));
}

#[test]
fn render_rejects_malformed_record() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("essay.json");
    let output = dir.path().join("essay.docx");
    fs::write(&input, r#"{"title": "only a title"}"#).unwrap();

    assert!(render_command(&input, Some(&output), false).is_err());
    assert!(!output.exists());
}

#[test]
fn render_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.json");
    assert!(render_command(&input, None, false).is_err());
}

#[test]
fn sample_renders_builtin_essay() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("sample.docx");

    sample_command(&output, false).unwrap();

    let archive = OoxmlArchive::open(&output).unwrap();
    let document = archive.get_string("word/document.xml").unwrap().unwrap();
    assert!(document.contains("Giotto di Bondone"));
    assert!(document.contains("References"));
}
