//! Letter-grade scale

use serde::Serialize;

/// One row of the grade scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeEntry {
    /// Letter grade key (e.g. "A", "B+", "C-")
    pub letter: &'static str,
    /// Grade point on the 4.0 scale
    pub point: f64,
    /// Standing label attached to this letter
    pub standing_label: &'static str,
}

/// Result of a point lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradePoint {
    /// Grade point on the 4.0 scale
    pub point: f64,
    /// Standing label, empty for unrecognized letters
    pub standing_label: &'static str,
}

impl GradePoint {
    /// Zero point returned for unrecognized letters
    pub const ZERO: Self = Self {
        point: 0.0,
        standing_label: "",
    };
}

const SCALE: [GradeEntry; 11] = [
    GradeEntry { letter: "A", point: 4.0, standing_label: "Excellent" },
    GradeEntry { letter: "A-", point: 3.67, standing_label: "Good" },
    GradeEntry { letter: "B+", point: 3.33, standing_label: "Good" },
    GradeEntry { letter: "B", point: 3.0, standing_label: "Good" },
    GradeEntry { letter: "B-", point: 2.67, standing_label: "Satisfactory" },
    GradeEntry { letter: "C+", point: 2.33, standing_label: "Satisfactory" },
    GradeEntry { letter: "C", point: 2.0, standing_label: "Satisfactory" },
    GradeEntry { letter: "C-", point: 1.67, standing_label: "Poor but passing" },
    GradeEntry { letter: "D+", point: 1.33, standing_label: "Poor but passing" },
    GradeEntry { letter: "D", point: 1.0, standing_label: "Fail" },
    GradeEntry { letter: "F", point: 0.0, standing_label: "Fail" },
];

/// The fixed letter-grade scale
pub struct GradeScale;

impl GradeScale {
    /// All entries, highest grade first
    #[must_use]
    pub const fn entries() -> &'static [GradeEntry] {
        &SCALE
    }

    /// Look up a letter grade.
    ///
    /// Surrounding whitespace is ignored and the typographic minus (U+2212)
    /// and en dash (U+2013) are read as `-`. Matching is case-sensitive.
    #[must_use]
    pub fn lookup(letter: &str) -> Option<&'static GradeEntry> {
        let key = normalize(letter);
        SCALE.iter().find(|entry| entry.letter == key)
    }

    /// Point value and standing label for a letter, or [`GradePoint::ZERO`]
    #[must_use]
    pub fn point_of(letter: &str) -> GradePoint {
        Self::lookup(letter).map_or(GradePoint::ZERO, |entry| GradePoint {
            point: entry.point,
            standing_label: entry.standing_label,
        })
    }

    /// Whether `letter` is a key of the scale
    #[must_use]
    pub fn is_valid(letter: &str) -> bool {
        Self::lookup(letter).is_some()
    }
}

fn normalize(letter: &str) -> String {
    letter.trim().replace(['\u{2212}', '\u{2013}'], "-")
}
