//! Calculator session: the course sheet, the semester archive, and the
//! operations that move results from one to the other.
//!
//! Derived values (current GPA, standing, CGPA) are never cached. They are
//! recomputed from the stores on read, and change notification is explicit
//! through [`Session::subscribe_courses`] and [`Session::subscribe_archive`].

pub mod archive;
pub mod sheet;
pub mod signal;

pub use archive::{ArchiveEvent, SemesterArchive};
pub use sheet::{CourseSheet, SheetEvent};
pub use signal::{Signal, SubscriptionId};

use crate::core::error::ValidationError;
use crate::core::gpa::{compute_semester_gpa, Cgpa, SemesterResult};
use crate::core::models::{CourseEntry, CourseField, CourseId, SemesterSummary, Standing};
use crate::core::report::ReportSnapshot;
use crate::{debug, info, warn};
use serde::Serialize;

/// Derived values for the semester being edited
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrentSemester {
    /// Rounded GPA, `None` when no row counts
    pub gpa: Option<f64>,
    /// Standing for `gpa`
    pub standing: Option<Standing>,
    /// Credit hours of the counted rows
    pub total_credit_hours: f64,
}

impl From<SemesterResult> for CurrentSemester {
    fn from(result: SemesterResult) -> Self {
        Self {
            gpa: result.gpa,
            standing: result.standing(),
            total_credit_hours: result.total_credit_hours,
        }
    }
}

/// Single-user calculator state
#[derive(Debug, Default)]
pub struct Session {
    sheet: CourseSheet,
    archive: SemesterArchive,
}

impl Session {
    /// Fresh session: one blank course row, empty archive
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Course rows in display order
    #[must_use]
    pub fn courses(&self) -> &[CourseEntry] {
        self.sheet.entries()
    }

    /// The course sheet store
    #[must_use]
    pub const fn sheet(&self) -> &CourseSheet {
        &self.sheet
    }

    /// The archive store
    #[must_use]
    pub const fn archive(&self) -> &SemesterArchive {
        &self.archive
    }

    /// Append a blank course row
    pub fn add_course(&mut self) -> CourseId {
        self.sheet.add()
    }

    /// Append a course row with the given raw values
    pub fn add_course_with(&mut self, name: &str, credits: &str, grade: &str) -> CourseId {
        self.sheet.add_filled(name, credits, grade)
    }

    /// Overwrite one field of a course row. Returns `false` for an unknown id.
    pub fn edit_course(&mut self, id: CourseId, field: CourseField, value: &str) -> bool {
        self.sheet.edit(id, field, value)
    }

    /// Delete a course row. Returns `false` for an unknown id.
    pub fn remove_course(&mut self, id: CourseId) -> bool {
        self.sheet.remove(id)
    }

    /// Semester result computed from the current rows
    #[must_use]
    pub fn semester_result(&self) -> SemesterResult {
        compute_semester_gpa(self.sheet.entries())
    }

    /// GPA, standing and credit total of the current rows
    #[must_use]
    pub fn current(&self) -> CurrentSemester {
        self.semester_result().into()
    }

    /// Cumulative GPA over the archive
    #[must_use]
    pub fn cgpa(&self) -> Cgpa {
        self.archive.cgpa()
    }

    /// Move the current semester into the archive.
    ///
    /// Requires a GPA to exist for the current rows. On success the sheet is
    /// reset to a single blank row and the archived summary is returned;
    /// otherwise nothing changes and `None` is returned.
    pub fn commit_current(&mut self) -> Option<SemesterSummary> {
        let result = self.semester_result();
        let summary = result
            .gpa
            .and_then(|gpa| SemesterSummary::new(gpa, result.total_credit_hours).ok());

        let Some(summary) = summary else {
            debug!("commit skipped: no countable course rows");
            return None;
        };

        self.archive.push(summary);
        self.sheet.reset();
        info!(
            "semester committed: GPA {:.2} over {} credit hours",
            summary.gpa(),
            summary.credit_hours()
        );
        Some(summary)
    }

    /// Archive a semester typed in by hand.
    ///
    /// # Errors
    /// Returns a `ValidationError` when the GPA is not a number in
    /// `[0.0, 4.0]` or the credits are not a positive number. The archive
    /// is left unchanged in that case.
    pub fn add_semester(
        &mut self,
        gpa: &str,
        credit_hours: &str,
    ) -> Result<SemesterSummary, ValidationError> {
        let summary = SemesterSummary::parse(gpa, credit_hours)
            .inspect_err(|e| warn!("manual semester rejected: {e}"))?;
        self.archive.push(summary);
        Ok(summary)
    }

    /// Archive an already validated semester
    pub fn push_semester(&mut self, summary: SemesterSummary) -> usize {
        self.archive.push(summary)
    }

    /// Listen for course sheet changes
    pub fn subscribe_courses<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&SheetEvent) + 'static,
    {
        self.sheet.subscribe(listener)
    }

    /// Stop listening for course sheet changes
    pub fn unsubscribe_courses(&mut self, id: SubscriptionId) -> bool {
        self.sheet.unsubscribe(id)
    }

    /// Listen for archive appends
    pub fn subscribe_archive<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ArchiveEvent) + 'static,
    {
        self.archive.subscribe(listener)
    }

    /// Stop listening for archive appends
    pub fn unsubscribe_archive(&mut self, id: SubscriptionId) -> bool {
        self.archive.unsubscribe(id)
    }

    /// Owned copy of everything a report needs
    #[must_use]
    pub fn snapshot(&self) -> ReportSnapshot {
        ReportSnapshot {
            courses: self.sheet.entries().to_vec(),
            current: self.current(),
            semesters: self.archive.semesters().to_vec(),
            cgpa: self.cgpa(),
        }
    }
}
