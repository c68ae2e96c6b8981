//! Library for `gpa-calc`
//! Contains the GPA/CGPA engine, session stores, reports and configuration
//! used by the `gpacalc` command-line interface.

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
