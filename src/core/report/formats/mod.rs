//! Report format implementations
//!
//! Provides exporters for different report formats: Markdown, HTML, and PDF.

pub mod html;
pub mod markdown;
pub mod pdf;

pub use html::HtmlReporter;
pub use markdown::MarkdownReporter;
pub use pdf::PdfReporter;

use crate::core::report::{CourseLine, ReportSnapshot, SemesterLine};
use std::fmt;
use std::str::FromStr;

/// Display-ready values shared by the Markdown and HTML templates
#[derive(Debug, Clone)]
pub struct ReportView {
    /// Course rows
    pub courses: Vec<CourseLine>,
    /// Whether the current semester block is shown
    pub has_current: bool,
    /// Semester GPA, two decimals
    pub semester_gpa: String,
    /// Credit hours of counted rows
    pub total_credits: String,
    /// Standing label
    pub standing: String,
    /// CGPA or `N/A`
    pub cgpa: String,
    /// Archived semesters
    pub semesters: Vec<SemesterLine>,
}

impl From<&ReportSnapshot> for ReportView {
    fn from(snapshot: &ReportSnapshot) -> Self {
        Self {
            courses: snapshot.course_lines(),
            has_current: snapshot.has_current(),
            semester_gpa: snapshot.semester_gpa_text(),
            total_credits: snapshot.total_credits_text(),
            standing: snapshot.standing_text(),
            cgpa: snapshot.cgpa.to_string(),
            semesters: snapshot.semester_lines(),
        }
    }
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Markdown format
    Markdown,
    /// Self-contained HTML page
    Html,
    /// PDF format (generated from HTML)
    Pdf,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
            Self::Pdf => "pdf",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(Self::Markdown),
            "html" | "htm" => Ok(Self::Html),
            "pdf" => Ok(Self::Pdf),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Html => write!(f, "html"),
            Self::Pdf => write!(f, "pdf"),
        }
    }
}
