//! Data models for `gpa-calc`

pub mod course;
pub mod grade;
pub mod semester;
pub mod standing;

pub use course::{CourseEntry, CourseField, CourseId};
pub use grade::{GradeEntry, GradePoint, GradeScale};
pub use semester::{SemesterSummary, MAX_GPA};
pub use standing::{classify, Standing};
