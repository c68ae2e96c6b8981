//! CLI command handlers for `gpacalc`.
//!
//! Each command is implemented in its own submodule.

pub mod calc;
pub mod config;
pub mod grades;
pub mod shell;
