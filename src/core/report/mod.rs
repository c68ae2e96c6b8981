//! Report generation for GPA/CGPA results
//!
//! Reports are rendered from a [`ReportSnapshot`], an owned copy of the
//! session taken at export time. Rendering never touches the session, so
//! a failed export leaves calculator state exactly as it was.

pub mod formats;

use crate::core::error::ExportError;
use crate::core::gpa::Cgpa;
use crate::core::models::{CourseEntry, SemesterSummary};
use crate::core::session::CurrentSemester;
use crate::{error, info};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub use formats::{HtmlReporter, MarkdownReporter, PdfReporter, ReportFormat};

/// Base file name used when no output path is given
pub const DEFAULT_REPORT_STEM: &str = "GPA_CGPA_Report";

/// Everything a report shows, detached from the live session
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSnapshot {
    /// Course rows, including rows that do not count
    pub courses: Vec<CourseEntry>,
    /// Derived values for the current rows
    pub current: CurrentSemester,
    /// Archived semesters in insertion order
    pub semesters: Vec<SemesterSummary>,
    /// Cumulative GPA over `semesters`
    pub cgpa: Cgpa,
}

/// A course row prepared for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseLine {
    /// Course name
    pub name: String,
    /// Credit hours as typed
    pub credits: String,
    /// Letter grade as typed
    pub grade: String,
    /// Row does not count toward the GPA
    pub excluded: bool,
}

/// An archived semester prepared for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterLine {
    /// 1-based semester number
    pub number: usize,
    /// GPA as shown
    pub gpa: String,
    /// Credit hours as shown
    pub credits: String,
}

impl ReportSnapshot {
    /// Whether the current rows produce a GPA
    #[must_use]
    pub const fn has_current(&self) -> bool {
        self.current.gpa.is_some()
    }

    /// Current GPA with two decimals, or an empty string
    #[must_use]
    pub fn semester_gpa_text(&self) -> String {
        self.current
            .gpa
            .map_or_else(String::new, |gpa| format!("{gpa:.2}"))
    }

    /// Current standing label, or an empty string
    #[must_use]
    pub fn standing_text(&self) -> String {
        self.current
            .standing
            .map_or_else(String::new, |s| s.label().to_string())
    }

    /// Current credit total
    #[must_use]
    pub fn total_credits_text(&self) -> String {
        format_credits(self.current.total_credit_hours)
    }

    /// Course rows for display
    #[must_use]
    pub fn course_lines(&self) -> Vec<CourseLine> {
        self.courses
            .iter()
            .map(|c| CourseLine {
                name: c.name.clone(),
                credits: c.credits.clone(),
                grade: c.grade.clone(),
                excluded: !c.is_countable(),
            })
            .collect()
    }

    /// Archived semesters for display
    #[must_use]
    pub fn semester_lines(&self) -> Vec<SemesterLine> {
        self.semesters
            .iter()
            .enumerate()
            .map(|(idx, s)| SemesterLine {
                number: idx + 1,
                gpa: s.gpa().to_string(),
                credits: format_credits(s.credit_hours()),
            })
            .collect()
    }
}

/// Format credit hours without a trailing `.0`
#[must_use]
pub fn format_credits(credits: f64) -> String {
    credits.to_string()
}

/// Colour theme for HTML/PDF output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportTheme {
    /// White background
    #[default]
    Light,
    /// Dark grey background
    Dark,
}

impl ReportTheme {
    /// Page background colour
    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Light => "#ffffff",
            Self::Dark => "#1f2937",
        }
    }

    /// Text colour
    #[must_use]
    pub const fn foreground(self) -> &'static str {
        match self {
            Self::Light => "#111827",
            Self::Dark => "#f9fafb",
        }
    }

    /// Card background colour
    #[must_use]
    pub const fn panel(self) -> &'static str {
        match self {
            Self::Light => "#eff6ff",
            Self::Dark => "#374151",
        }
    }
}

impl FromStr for ReportTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" | "" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("Unknown theme: '{s}' (use light or dark)")),
        }
    }
}

impl fmt::Display for ReportTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if rendering or writing the file fails
    fn generate(&self, snapshot: &ReportSnapshot, output_path: &Path) -> Result<(), ExportError>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, snapshot: &ReportSnapshot) -> Result<String, ExportError>;
}

/// Settings shared by all report formats
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Colour theme for HTML and PDF
    pub theme: ReportTheme,
    /// Explicit PDF converter command; auto-detected when `None`
    pub pdf_converter: Option<String>,
}

/// Default output path for a format inside `dir`
#[must_use]
pub fn default_output_path(dir: &Path, format: ReportFormat) -> PathBuf {
    dir.join(format!("{DEFAULT_REPORT_STEM}.{}", format.extension()))
}

/// Write `snapshot` as a `format` report to `output_path`.
///
/// # Errors
/// Returns an `ExportError` if rendering, writing or PDF conversion fails.
pub fn export(
    snapshot: &ReportSnapshot,
    format: ReportFormat,
    output_path: &Path,
    options: &ReportOptions,
) -> Result<(), ExportError> {
    let result = match format {
        ReportFormat::Markdown => MarkdownReporter::new().generate(snapshot, output_path),
        ReportFormat::Html => HtmlReporter::new(options.theme).generate(snapshot, output_path),
        ReportFormat::Pdf => {
            let reporter = options.pdf_converter.as_deref().map_or_else(
                || PdfReporter::new(options.theme),
                |converter| PdfReporter::with_converter(options.theme, converter),
            );
            reporter.generate(snapshot, output_path)
        }
    };

    match &result {
        Ok(()) => info!("{format} report exported to: {}", output_path.display()),
        Err(e) => error!(
            "{format} report export to {} failed: {e}",
            output_path.display()
        ),
    }
    result
}
