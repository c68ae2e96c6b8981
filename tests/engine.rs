//! Integration tests for the GPA/CGPA calculators and standing bands.

use gpa_calc::core::gpa::{compute_cgpa, compute_semester_gpa, round2, Cgpa};
use gpa_calc::core::models::{classify, CourseEntry, CourseId, GradeScale, SemesterSummary, Standing};
use proptest::prelude::*;

fn course(id: u64, credits: &str, grade: &str) -> CourseEntry {
    CourseEntry::new(CourseId(id), "", credits, grade)
}

fn summary(gpa: f64, credits: f64) -> SemesterSummary {
    SemesterSummary::new(gpa, credits).unwrap()
}

#[test]
fn weighted_semester_gpa() {
    let result = compute_semester_gpa(&[course(1, "3", "A"), course(2, "4", "B")]);
    assert_eq!(result.gpa, Some(3.43));
    assert_eq!(result.total_credit_hours, 7.0);
    assert_eq!(result.standing(), Some(Standing::Good));
}

#[test]
fn invalid_rows_are_excluded() {
    let entries = [
        course(1, "3", "A"),
        course(2, "", "B"),
        course(3, "0", "A"),
        course(4, "-2", "A"),
        course(5, "3", "E"),
        course(6, "abc", "A"),
        course(7, "3", "a"),
    ];
    let result = compute_semester_gpa(&entries);
    assert_eq!(result.gpa, Some(4.0));
    assert_eq!(result.total_credit_hours, 3.0);
}

#[test]
fn empty_and_all_invalid_sheets_have_no_gpa() {
    assert_eq!(compute_semester_gpa(&[]).gpa, None);

    let result = compute_semester_gpa(&[course(1, "", ""), course(2, "x", "Z")]);
    assert_eq!(result.gpa, None);
    assert_eq!(result.total_credit_hours, 0.0);
    assert_eq!(result.standing(), None);
}

#[test]
fn fractional_credits_count() {
    let result = compute_semester_gpa(&[course(1, "1.5", "A"), course(2, "1.5", "C")]);
    assert_eq!(result.gpa, Some(3.0));
    assert_eq!(result.total_credit_hours, 3.0);
}

#[test]
fn typographic_minus_is_accepted() {
    let result = compute_semester_gpa(&[course(1, "3", "A\u{2212}")]);
    assert_eq!(result.gpa, Some(3.67));
    assert_eq!(result.standing(), Some(Standing::Excellent));
}

#[test]
fn standing_boundaries() {
    assert_eq!(classify(4.0), Standing::Excellent);
    assert_eq!(classify(3.67), Standing::Excellent);
    assert_eq!(classify(3.66), Standing::Good);
    assert_eq!(classify(3.0), Standing::Good);
    assert_eq!(classify(2.99), Standing::Satisfactory);
    assert_eq!(classify(2.33), Standing::Satisfactory);
    assert_eq!(classify(2.32), Standing::PoorButPassing);
    assert_eq!(classify(1.0), Standing::PoorButPassing);
    assert_eq!(classify(0.99), Standing::Fail);
    assert_eq!(classify(0.0), Standing::Fail);
    assert_eq!(classify(1.0).label(), "Poor but passing");
}

#[test]
fn scale_is_ordered_and_complete() {
    let letters: Vec<&str> = GradeScale::entries().iter().map(|e| e.letter).collect();
    assert_eq!(
        letters,
        ["A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D+", "D", "F"]
    );
    assert!(GradeScale::entries()
        .windows(2)
        .all(|pair| pair[0].point > pair[1].point));
    assert_eq!(GradeScale::point_of("Q").point, 0.0);
    assert!(!GradeScale::is_valid("Q"));
}

#[test]
fn cgpa_of_nothing_is_not_applicable() {
    assert_eq!(compute_cgpa(&[]), Cgpa::NotApplicable);
    assert_eq!(compute_cgpa(&[]).to_string(), "N/A");
}

#[test]
fn cgpa_is_credit_weighted() {
    let cgpa = compute_cgpa(&[summary(3.5, 15.0), summary(3.0, 12.0)]);
    // (52.5 + 36) / 27 = 3.2777...
    assert_eq!(cgpa, Cgpa::Value(3.28));
    assert_eq!(cgpa.to_string(), "3.28");
}

#[test]
fn cgpa_shows_two_decimals() {
    assert_eq!(compute_cgpa(&[summary(3.0, 12.0)]).to_string(), "3.00");
}

#[test]
fn overflowing_credits_never_leave_the_scale() {
    for rows in [
        vec![course(1, "1e308", "A")],
        vec![course(1, "1e308", "B"), course(2, "1e308", "B")],
        vec![course(1, "3", "A"), course(2, "1.7e308", "A-")],
    ] {
        let result = compute_semester_gpa(&rows);
        assert_eq!(result.gpa, None, "{rows:?}");
        assert_eq!(result.standing(), None);
    }

    // a large but finite sheet still averages normally
    let result = compute_semester_gpa(&[course(1, "1e300", "A"), course(2, "1e300", "B")]);
    assert_eq!(result.gpa, Some(3.5));

    let huge = summary(4.0, 1e308);
    let cgpa = compute_cgpa(&[huge, huge]);
    assert_eq!(cgpa, Cgpa::NotApplicable);
    assert_eq!(cgpa.to_string(), "N/A");
}

proptest! {
    #[test]
    fn semester_gpa_stays_on_scale(
        rows in prop::collection::vec((0usize..11, 1u32..7), 1..12)
    ) {
        let entries: Vec<CourseEntry> = rows
            .iter()
            .enumerate()
            .map(|(idx, (grade, credits))| {
                let letter = GradeScale::entries()[*grade].letter;
                course(idx as u64, &credits.to_string(), letter)
            })
            .collect();

        let result = compute_semester_gpa(&entries);
        let gpa = result.gpa.unwrap();
        prop_assert!((0.0..=4.0).contains(&gpa));

        let points: f64 = rows
            .iter()
            .map(|(grade, credits)| GradeScale::entries()[*grade].point * f64::from(*credits))
            .sum();
        let credits: f64 = rows.iter().map(|(_, credits)| f64::from(*credits)).sum();
        prop_assert_eq!(result.total_credit_hours, credits);
        prop_assert!((gpa - round2(points / credits)).abs() < 1e-9);
    }

    #[test]
    fn cgpa_is_order_independent(
        semesters in prop::collection::vec((0u32..=400, 1u32..=24), 1..10)
    ) {
        let summaries: Vec<SemesterSummary> = semesters
            .iter()
            .map(|(gpa, credits)| summary(f64::from(*gpa) / 100.0, f64::from(*credits)))
            .collect();
        let mut reversed = summaries.clone();
        reversed.reverse();

        let forward = compute_cgpa(&summaries).value().unwrap();
        let backward = compute_cgpa(&reversed).value().unwrap();
        // each order is rounded on its own, so a mean on a rounding
        // boundary may land one cent apart
        prop_assert!((forward - backward).abs() <= 0.01 + 1e-9);
        prop_assert!((0.0..=4.0).contains(&forward));
    }
}
