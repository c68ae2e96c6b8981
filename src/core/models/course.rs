//! Course entry model

use super::grade::{GradeEntry, GradeScale};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Identifier of a course row, unique within a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CourseId(pub u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CourseId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .trim_start_matches('#')
            .parse::<u64>()
            .map(Self)
            .map_err(|_| format!("Invalid course id: '{s}'"))
    }
}

/// Editable field of a course row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    /// Free-text course name
    Name,
    /// Credit hours as typed
    Credits,
    /// Letter grade as typed
    Grade,
}

impl FromStr for CourseField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "credits" | "credit" | "ch" => Ok(Self::Credits),
            "grade" => Ok(Self::Grade),
            _ => Err(format!("Unknown course field: '{s}' (use name, credits or grade)")),
        }
    }
}

impl fmt::Display for CourseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Credits => write!(f, "credits"),
            Self::Grade => write!(f, "grade"),
        }
    }
}

/// A course row of the current semester.
///
/// `credits` and `grade` hold the raw input; they are only interpreted when
/// the GPA is computed, so a half-typed row is representable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseEntry {
    /// Row identifier
    pub id: CourseId,
    /// Course name (not used in calculation)
    pub name: String,
    /// Credit hours as typed
    pub credits: String,
    /// Letter grade as typed (empty when not selected yet)
    pub grade: String,
}

impl CourseEntry {
    /// Create a blank row
    #[must_use]
    pub const fn blank(id: CourseId) -> Self {
        Self {
            id,
            name: String::new(),
            credits: String::new(),
            grade: String::new(),
        }
    }

    /// Create a filled row
    #[must_use]
    pub fn new(id: CourseId, name: &str, credits: &str, grade: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            credits: credits.to_string(),
            grade: grade.to_string(),
        }
    }

    /// Overwrite one field
    pub fn set(&mut self, field: CourseField, value: &str) {
        let slot = match field {
            CourseField::Name => &mut self.name,
            CourseField::Credits => &mut self.credits,
            CourseField::Grade => &mut self.grade,
        };
        value.clone_into(slot);
    }

    /// Credit hours if they parse to a finite positive number
    #[must_use]
    pub fn credit_hours(&self) -> Option<f64> {
        self.credits
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|c| c.is_finite() && *c > 0.0)
    }

    /// Grade scale entry if the grade is a valid key
    #[must_use]
    pub fn grade_entry(&self) -> Option<&'static GradeEntry> {
        GradeScale::lookup(&self.grade)
    }

    /// Whether this row contributes to the GPA
    #[must_use]
    pub fn is_countable(&self) -> bool {
        self.credit_hours().is_some() && self.grade_entry().is_some()
    }

    /// Whether every field is empty
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.credits.is_empty() && self.grade.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_entry() {
        let entry = CourseEntry::blank(CourseId(7));
        assert!(entry.is_blank());
        assert!(!entry.is_countable());
        assert_eq!(entry.id.to_string(), "7");
    }

    #[test]
    fn test_credit_hours_parsing() {
        let mut entry = CourseEntry::new(CourseId(1), "Lab", "1.5", "A");
        assert_eq!(entry.credit_hours(), Some(1.5));

        entry.set(CourseField::Credits, " 3 ");
        assert_eq!(entry.credit_hours(), Some(3.0));

        for bad in ["", "0", "-2", "abc", "inf", "NaN", "3 credits"] {
            entry.set(CourseField::Credits, bad);
            assert_eq!(entry.credit_hours(), None, "credits '{bad}' should not count");
        }
    }

    #[test]
    fn test_countable_requires_valid_grade() {
        let mut entry = CourseEntry::new(CourseId(1), "Math", "3", "");
        assert!(!entry.is_countable());
        entry.set(CourseField::Grade, "E");
        assert!(!entry.is_countable());
        entry.set(CourseField::Grade, "B+");
        assert!(entry.is_countable());
    }

    #[test]
    fn test_set_name_does_not_touch_other_fields() {
        let mut entry = CourseEntry::new(CourseId(1), "Math", "3", "A");
        entry.set(CourseField::Name, "Calculus");
        assert_eq!(entry.name, "Calculus");
        assert_eq!(entry.credits, "3");
        assert_eq!(entry.grade, "A");
    }

    #[test]
    fn test_field_and_id_parsing() {
        assert_eq!("Credits".parse::<CourseField>(), Ok(CourseField::Credits));
        assert_eq!("grade".parse::<CourseField>(), Ok(CourseField::Grade));
        assert!("room".parse::<CourseField>().is_err());
        assert_eq!("#12".parse::<CourseId>(), Ok(CourseId(12)));
        assert!("x".parse::<CourseId>().is_err());
    }
}
