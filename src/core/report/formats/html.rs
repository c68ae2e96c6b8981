//! HTML report generator
//!
//! Renders `templates/report.html` into a self-contained page with embedded
//! CSS. The page is also the input of the PDF reporter.

use super::ReportView;
use crate::core::error::ExportError;
use crate::core::report::{ReportGenerator, ReportSnapshot, ReportTheme};
use askama::Template;
use std::fs;
use std::path::Path;

#[derive(Template)]
#[template(path = "report.html")]
struct HtmlTemplate {
    view: ReportView,
    background: &'static str,
    foreground: &'static str,
    panel: &'static str,
}

/// HTML report generator
pub struct HtmlReporter {
    theme: ReportTheme,
}

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new(theme: ReportTheme) -> Self {
        Self { theme }
    }

    /// Theme used for rendering
    #[must_use]
    pub const fn theme(&self) -> ReportTheme {
        self.theme
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new(ReportTheme::default())
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, snapshot: &ReportSnapshot, output_path: &Path) -> Result<(), ExportError> {
        let report_content = self.render(snapshot)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, snapshot: &ReportSnapshot) -> Result<String, ExportError> {
        let template = HtmlTemplate {
            view: ReportView::from(snapshot),
            background: self.theme.background(),
            foreground: self.theme.foreground(),
            panel: self.theme.panel(),
        };
        Ok(template.render()?)
    }
}
