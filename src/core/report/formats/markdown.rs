//! Markdown report generator
//!
//! Renders `templates/report.md`. The output reads well as plain text and
//! renders in GitHub, GitLab and VS Code.

use super::ReportView;
use crate::core::error::ExportError;
use crate::core::report::{ReportGenerator, ReportSnapshot};
use askama::Template;
use std::fs;
use std::path::Path;

#[derive(Template)]
#[template(path = "report.md")]
struct MarkdownTemplate {
    view: ReportView,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, snapshot: &ReportSnapshot, output_path: &Path) -> Result<(), ExportError> {
        let report_content = self.render(snapshot)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, snapshot: &ReportSnapshot) -> Result<String, ExportError> {
        let template = MarkdownTemplate {
            view: ReportView::from(snapshot),
        };
        Ok(template.render()?)
    }
}
