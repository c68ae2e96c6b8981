//! GPA and CGPA calculation
//!
//! Both calculators are credit-weighted means rounded to two decimals. They
//! are pure reductions; accumulation happens in input order so rounding is
//! reproducible.

use crate::core::models::{classify, CourseEntry, SemesterSummary, Standing};
use serde::Serialize;
use std::fmt;

/// Round to two decimal places, half away from zero
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A weighted mean exists only for finite totals with positive weight
fn has_weight(points: f64, credits: f64) -> bool {
    points.is_finite() && credits.is_finite() && credits > 0.0
}

/// Result of the semester calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SemesterResult {
    /// Rounded GPA, `None` when no row counted
    pub gpa: Option<f64>,
    /// Sum of credit hours of the counted rows
    pub total_credit_hours: f64,
}

impl SemesterResult {
    /// Result with no counted rows
    pub const EMPTY: Self = Self {
        gpa: None,
        total_credit_hours: 0.0,
    };

    /// Standing for the rounded GPA
    #[must_use]
    pub fn standing(&self) -> Option<Standing> {
        self.gpa.map(classify)
    }
}

/// Compute the credit-weighted semester GPA.
///
/// Rows whose credits do not parse to a positive number, or whose grade is
/// not on the scale, are skipped. Totals that overflow `f64` give no result.
#[must_use]
pub fn compute_semester_gpa(entries: &[CourseEntry]) -> SemesterResult {
    let (points, credits) = entries
        .iter()
        .filter_map(|entry| Some((entry.grade_entry()?, entry.credit_hours()?)))
        .fold((0.0_f64, 0.0_f64), |(points, credits), (grade, hours)| {
            (points + grade.point * hours, credits + hours)
        });

    if has_weight(points, credits) {
        SemesterResult {
            gpa: Some(round2(points / credits)),
            total_credit_hours: credits,
        }
    } else {
        SemesterResult::EMPTY
    }
}

/// Cumulative GPA over an archive
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Cgpa {
    /// No semesters to average
    NotApplicable,
    /// Rounded weighted average
    Value(f64),
}

impl Cgpa {
    /// Numeric value if there is one
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::NotApplicable => None,
            Self::Value(v) => Some(v),
        }
    }
}

impl fmt::Display for Cgpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotApplicable => write!(f, "N/A"),
            Self::Value(v) => write!(f, "{v:.2}"),
        }
    }
}

/// Compute the credit-weighted cumulative GPA.
///
/// Returns [`Cgpa::NotApplicable`] for an empty slice, and when the totals
/// overflow `f64`.
#[must_use]
pub fn compute_cgpa(summaries: &[SemesterSummary]) -> Cgpa {
    let (points, credits) = summaries
        .iter()
        .fold((0.0_f64, 0.0_f64), |(points, credits), s| {
            (points + s.quality_points(), credits + s.credit_hours())
        });

    if has_weight(points, credits) {
        Cgpa::Value(round2(points / credits))
    } else {
        Cgpa::NotApplicable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CourseId;

    fn course(id: u64, credits: &str, grade: &str) -> CourseEntry {
        CourseEntry::new(CourseId(id), "", credits, grade)
    }

    #[test]
    fn test_round2() {
        assert!((round2(3.428_571) - 3.43).abs() < f64::EPSILON);
        assert!((round2(2.0) - 2.0).abs() < f64::EPSILON);
        assert!((round2(3.666_666) - 3.67).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weighted_semester_gpa() {
        let result = compute_semester_gpa(&[course(1, "3", "A"), course(2, "4", "B")]);
        assert_eq!(result.gpa, Some(3.43));
        assert!((result.total_credit_hours - 7.0).abs() < f64::EPSILON);
        assert_eq!(result.standing(), Some(Standing::Good));
    }

    #[test]
    fn test_invalid_rows_are_skipped() {
        let result = compute_semester_gpa(&[
            course(1, "3", "A"),
            course(2, "", "B"),
            course(3, "4", ""),
            course(4, "0", "C"),
            course(5, "2", "Z"),
        ]);
        assert_eq!(result.gpa, Some(4.0));
        assert!((result.total_credit_hours - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_countable_rows() {
        assert_eq!(compute_semester_gpa(&[]), SemesterResult::EMPTY);
        assert_eq!(
            compute_semester_gpa(&[course(1, "abc", "A"), course(2, "3", "")]),
            SemesterResult::EMPTY
        );
        assert_eq!(SemesterResult::EMPTY.standing(), None);
    }

    #[test]
    fn test_all_f_is_zero_not_missing() {
        let result = compute_semester_gpa(&[course(1, "3", "F")]);
        assert_eq!(result.gpa, Some(0.0));
        assert_eq!(result.standing(), Some(Standing::Fail));
    }

    #[test]
    fn test_standing_uses_rounded_gpa() {
        // 3.666.. rounds to 3.67 which is Excellent
        let result = compute_semester_gpa(&[
            course(1, "1", "A"),
            course(2, "1", "A"),
            course(3, "1", "B"),
        ]);
        assert_eq!(result.gpa, Some(3.67));
        assert_eq!(result.standing(), Some(Standing::Excellent));
    }

    #[test]
    fn test_overflowing_totals_have_no_result() {
        assert_eq!(
            compute_semester_gpa(&[course(1, "1e308", "A")]),
            SemesterResult::EMPTY
        );
        assert_eq!(
            compute_semester_gpa(&[course(1, "1e308", "B"), course(2, "1e308", "B")]),
            SemesterResult::EMPTY
        );
        // all-F points stay finite but the credit total does not
        assert_eq!(
            compute_semester_gpa(&[course(1, "1e308", "F"), course(2, "1e308", "F")]),
            SemesterResult::EMPTY
        );

        let huge = SemesterSummary::new(4.0, 1e308).unwrap();
        assert_eq!(compute_cgpa(&[huge, huge]), Cgpa::NotApplicable);
    }

    #[test]
    fn test_cgpa() {
        assert_eq!(compute_cgpa(&[]), Cgpa::NotApplicable);
        assert_eq!(Cgpa::NotApplicable.to_string(), "N/A");

        let semesters = [
            SemesterSummary::new(3.5, 15.0).unwrap(),
            SemesterSummary::new(3.0, 12.0).unwrap(),
        ];
        // (52.5 + 36) / 27 = 3.2777..
        let cgpa = compute_cgpa(&semesters);
        assert_eq!(cgpa, Cgpa::Value(3.28));
        assert_eq!(cgpa.to_string(), "3.28");
        assert_eq!(cgpa.value(), Some(3.28));
    }
}
