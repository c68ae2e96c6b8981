//! Grade scale and standing lookups

use gpa_calc::core::models::{classify, GradeScale, MAX_GPA};

/// Print the letter-grade scale as a table
pub fn print_scale() {
    println!("{:<6} {:>6}  Standing", "Grade", "Points");
    for entry in GradeScale::entries() {
        println!(
            "{:<6} {:>6.2}  {}",
            entry.letter, entry.point, entry.standing_label
        );
    }
}

/// Print the standing for a GPA typed on the command line.
///
/// The value is classified as typed, without rounding. Returns `false`
/// when `input` is not a GPA in `[0, 4]`.
pub fn print_standing(input: &str) -> bool {
    match standing_line(input) {
        Some(line) => {
            println!("{line}");
            true
        }
        None => {
            eprintln!("✗ Invalid GPA: '{input}' (expected a number between 0 and {MAX_GPA})");
            false
        }
    }
}

fn standing_line(input: &str) -> Option<String> {
    let gpa = parse_gpa(input)?;
    Some(format!("{}: {}", input.trim(), classify(gpa)))
}

fn parse_gpa(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|gpa| (0.0..=MAX_GPA).contains(gpa))
}
