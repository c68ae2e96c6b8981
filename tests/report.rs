//! Integration tests for report export.

use gpa_calc::core::report::{
    default_output_path, export, ReportFormat, ReportOptions, ReportTheme,
};
use gpa_calc::core::{ExportError, Session};
use std::fs;
use tempfile::TempDir;

fn sample_session() -> Session {
    let mut session = Session::new();
    let blank = session.courses()[0].id;
    session.remove_course(blank);
    session.add_course_with("Math", "3", "A");
    session.add_course_with("Physics", "4", "B");
    session.add_semester("3.5", "15").unwrap();
    session.add_semester("3.0", "12").unwrap();
    session
}

#[test]
fn markdown_export_writes_all_sections() {
    let dir = TempDir::new().unwrap();
    let path = default_output_path(dir.path(), ReportFormat::Markdown);

    export(
        &sample_session().snapshot(),
        ReportFormat::Markdown,
        &path,
        &ReportOptions::default(),
    )
    .unwrap();

    assert!(path.ends_with("GPA_CGPA_Report.md"));
    let md = fs::read_to_string(&path).unwrap();
    assert!(md.starts_with("# GPA & CGPA Report"));
    assert!(md.contains("- Math | 3 CH | Grade: A"));
    assert!(md.contains("- Physics | 4 CH | Grade: B"));
    assert!(md.contains("**Semester GPA:** 3.43"));
    assert!(md.contains("**Status:** Good"));
    assert!(md.contains("3.28"));
    assert!(md.contains("- Semester 1: GPA 3.5, Credits 15"));
    assert!(md.contains("- Semester 2: GPA 3, Credits 12"));
}

#[test]
fn html_export_uses_theme() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.html");
    let options = ReportOptions {
        theme: ReportTheme::Dark,
        pdf_converter: None,
    };

    export(
        &sample_session().snapshot(),
        ReportFormat::Html,
        &path,
        &options,
    )
    .unwrap();

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("background: #1f2937"));
    assert!(html.contains("Math | 3 CH | Grade: A"));
    assert!(html.contains("<p class=\"cgpa\">3.28</p>"));
}

#[test]
fn current_block_is_omitted_without_gpa() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.md");
    export(
        &Session::new().snapshot(),
        ReportFormat::Markdown,
        &path,
        &ReportOptions::default(),
    )
    .unwrap();

    let md = fs::read_to_string(path).unwrap();
    assert!(!md.contains("Semester GPA"));
    assert!(md.contains("N/A"));
}

#[test]
fn failed_export_leaves_session_untouched() {
    let session = sample_session();
    let before = session.snapshot();
    let dir = TempDir::new().unwrap();

    // Parent directory does not exist
    let path = dir.path().join("missing").join("report.md");
    let result = export(
        &session.snapshot(),
        ReportFormat::Markdown,
        &path,
        &ReportOptions::default(),
    );
    assert!(matches!(result, Err(ExportError::Io(_))));

    let options = ReportOptions {
        theme: ReportTheme::Light,
        pdf_converter: Some("/nonexistent/chrome-for-tests".to_string()),
    };
    let pdf = dir.path().join("report.pdf");
    let result = export(&session.snapshot(), ReportFormat::Pdf, &pdf, &options);
    assert!(matches!(result, Err(ExportError::ConversionFailed { .. })));
    assert!(!pdf.exists());

    assert_eq!(session.snapshot(), before);
}
