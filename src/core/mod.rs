//! Core module: calculation engine, stores, reports and configuration

pub mod config;
pub mod error;
pub mod gpa;
pub mod models;
pub mod report;
pub mod session;
pub mod worksheet;

pub use error::{ExportError, ValidationError, WorksheetError};
pub use gpa::{compute_cgpa, compute_semester_gpa, Cgpa, SemesterResult};
pub use session::{CurrentSemester, Session};

/// Returns the current version of the `gpa-calc` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
