//! Academic standing bands

use serde::Serialize;
use std::fmt;

/// Standing category derived from a GPA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Standing {
    /// GPA >= 3.67
    Excellent,
    /// GPA >= 3.00
    Good,
    /// GPA >= 2.33
    Satisfactory,
    /// GPA >= 1.00
    PoorButPassing,
    /// GPA < 1.00
    Fail,
}

/// Lower bounds, evaluated top-down; first match wins
const BANDS: [(f64, Standing); 4] = [
    (3.67, Standing::Excellent),
    (3.0, Standing::Good),
    (2.33, Standing::Satisfactory),
    (1.0, Standing::PoorButPassing),
];

/// Classify a GPA into a standing band (inclusive lower bounds)
#[must_use]
pub fn classify(gpa: f64) -> Standing {
    BANDS
        .iter()
        .find(|(lower, _)| gpa >= *lower)
        .map_or(Standing::Fail, |(_, standing)| *standing)
}

impl Standing {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Satisfactory => "Satisfactory",
            Self::PoorButPassing => "Poor but passing",
            Self::Fail => "Fail",
        }
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
