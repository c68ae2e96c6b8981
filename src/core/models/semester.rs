//! Semester summary model

use crate::core::error::ValidationError;
use serde::Serialize;
use std::fmt;

/// Highest GPA on the scale
pub const MAX_GPA: f64 = 4.0;

/// A completed semester: GPA and credit hours.
///
/// Only built through validating constructors, so every value held by an
/// archive satisfies `0.0 <= gpa <= 4.0` and `credit_hours > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SemesterSummary {
    gpa: f64,
    credit_hours: f64,
}

impl SemesterSummary {
    /// Build a summary from numeric values
    ///
    /// # Errors
    /// Returns a `ValidationError` if the GPA is not in `[0.0, 4.0]` or the
    /// credit hours are not a finite positive number.
    pub fn new(gpa: f64, credit_hours: f64) -> Result<Self, ValidationError> {
        if !gpa.is_finite() || !(0.0..=MAX_GPA).contains(&gpa) {
            return Err(ValidationError::GpaOutOfRange(gpa));
        }
        if !credit_hours.is_finite() || credit_hours <= 0.0 {
            return Err(ValidationError::NonPositiveCredits(credit_hours));
        }
        Ok(Self { gpa, credit_hours })
    }

    /// Build a summary from user-typed text
    ///
    /// # Errors
    /// Returns `ValidationError::Unparseable` when a field is not a number,
    /// otherwise the same errors as [`SemesterSummary::new`].
    pub fn parse(gpa: &str, credit_hours: &str) -> Result<Self, ValidationError> {
        let gpa = parse_number("gpa", gpa)?;
        let credit_hours = parse_number("credits", credit_hours)?;
        Self::new(gpa, credit_hours)
    }

    /// Semester GPA
    #[must_use]
    pub const fn gpa(&self) -> f64 {
        self.gpa
    }

    /// Credit hours for the semester
    #[must_use]
    pub const fn credit_hours(&self) -> f64 {
        self.credit_hours
    }

    /// `gpa * credit_hours`
    #[must_use]
    pub fn quality_points(&self) -> f64 {
        self.gpa * self.credit_hours
    }
}

impl fmt::Display for SemesterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPA {}, Credits {}", self.gpa, self.credit_hours)
    }
}

fn parse_number(field: &'static str, input: &str) -> Result<f64, ValidationError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::Unparseable {
            field,
            input: input.to_string(),
        })
}
