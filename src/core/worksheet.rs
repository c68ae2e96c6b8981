//! Worksheet loader
//!
//! A worksheet is a TOML file describing the rows of the current semester
//! and any past semesters:
//!
//! ```toml
//! commit = false
//!
//! [[course]]
//! name = "Calculus I"
//! credits = 3
//! grade = "A"
//!
//! [[semester]]
//! gpa = 3.5
//! credits = 15
//! ```

use crate::core::error::WorksheetError;
use crate::core::models::SemesterSummary;
use crate::core::session::Session;
use crate::{info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// A number typed either as a TOML number or as a string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Integer literal
    Integer(i64),
    /// Float literal
    Float(f64),
    /// Text, kept as typed
    Text(String),
}

impl Default for RawValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

/// One `[[course]]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseRow {
    /// Course name
    #[serde(default)]
    pub name: String,
    /// Credit hours
    #[serde(default)]
    pub credits: RawValue,
    /// Letter grade
    #[serde(default)]
    pub grade: String,
}

/// One `[[semester]]` table
#[derive(Debug, Clone, Deserialize)]
pub struct SemesterRow {
    /// Semester GPA
    pub gpa: RawValue,
    /// Semester credit hours
    pub credits: RawValue,
}

/// Parsed worksheet document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Worksheet {
    /// Commit the listed courses into the archive after loading
    #[serde(default)]
    pub commit: bool,
    /// Current semester rows
    #[serde(default, rename = "course")]
    pub courses: Vec<CourseRow>,
    /// Past semesters
    #[serde(default, rename = "semester")]
    pub semesters: Vec<SemesterRow>,
}

impl Worksheet {
    /// Parse a worksheet from TOML text
    ///
    /// # Errors
    /// Returns an error if the text is not valid TOML or does not match the
    /// worksheet layout.
    pub fn from_toml(toml_str: &str) -> Result<Self, WorksheetError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read and parse a worksheet file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WorksheetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| WorksheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Build a session from this worksheet.
    ///
    /// Semesters failing manual-entry validation are skipped with a warning.
    /// With no `[[course]]` rows the session keeps its single blank row.
    #[must_use]
    pub fn into_session(self) -> Session {
        let mut session = Session::new();

        if !self.courses.is_empty() {
            let blank = session.courses()[0].id;
            for row in &self.courses {
                session.add_course_with(&row.name, &row.credits.to_string(), &row.grade);
            }
            session.remove_course(blank);
        }

        for (idx, row) in self.semesters.iter().enumerate() {
            match SemesterSummary::parse(&row.gpa.to_string(), &row.credits.to_string()) {
                Ok(summary) => {
                    session.push_semester(summary);
                }
                Err(e) => warn!("skipping semester {} in worksheet: {e}", idx + 1),
            }
        }

        if self.commit && session.commit_current().is_none() {
            warn!("worksheet asks to commit but no course row counts toward a GPA");
        }

        info!(
            "worksheet loaded: {} course rows, {} past semesters",
            session.courses().len(),
            session.archive().len()
        );
        session
    }
}

/// Load a worksheet file straight into a session
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_session<P: AsRef<Path>>(path: P) -> Result<Session, WorksheetError> {
    Ok(Worksheet::from_path(path)?.into_session())
}
