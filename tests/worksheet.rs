//! Integration tests for loading worksheet files.

use gpa_calc::core::worksheet::{load_session, Worksheet};
use gpa_calc::core::{Cgpa, WorksheetError};
use std::fs;
use tempfile::TempDir;

const FALL_TERM: &str = r#"
[[course]]
name = "Calculus I"
credits = 3
grade = "A"

[[course]]
name = "Physics"
credits = "4"
grade = "B"

[[course]]
name = "Audit"
credits = 0
grade = "A"

[[semester]]
gpa = 3.5
credits = 15

[[semester]]
gpa = "3.0"
credits = "12"
"#;

fn write_worksheet(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write worksheet");
    path
}

#[test]
fn loads_courses_and_semesters() {
    let dir = TempDir::new().unwrap();
    let path = write_worksheet(&dir, "fall.toml", FALL_TERM);

    let session = load_session(&path).unwrap();
    assert_eq!(session.courses().len(), 3);
    assert_eq!(session.courses()[0].name, "Calculus I");
    assert!(!session.courses()[2].is_countable());

    let current = session.current();
    assert_eq!(current.gpa, Some(3.43));
    assert_eq!(current.total_credit_hours, 7.0);

    assert_eq!(session.archive().len(), 2);
    assert_eq!(session.cgpa(), Cgpa::Value(3.28));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_session(dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, WorksheetError::Io { .. }));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_worksheet(&dir, "broken.toml", "[[course]\nname = ");
    assert!(matches!(
        load_session(path),
        Err(WorksheetError::Parse(_))
    ));
}

#[test]
fn semester_missing_credits_is_rejected_by_layout() {
    let result = Worksheet::from_toml("[[semester]]\ngpa = 3.0\n");
    assert!(result.is_err());
}

#[test]
fn commit_flag_moves_courses_into_archive() {
    let dir = TempDir::new().unwrap();
    let content = format!("commit = true\n{FALL_TERM}");
    let path = write_worksheet(&dir, "committed.toml", &content);

    let session = load_session(path).unwrap();
    assert_eq!(session.archive().len(), 3);
    assert_eq!(session.archive().semesters()[2].gpa(), 3.43);
    assert_eq!(session.courses().len(), 1);
    assert!(session.courses()[0].is_blank());
}
