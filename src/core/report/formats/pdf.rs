//! PDF report generator via HTML-to-PDF conversion
//!
//! Renders the HTML report to a temporary file and prints it to PDF with
//! headless Chrome/Chromium (auto-detected, or an explicit converter).

use super::html::HtmlReporter;
use crate::core::error::ExportError;
use crate::core::report::{ReportGenerator, ReportSnapshot, ReportTheme};
use crate::debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Executables probed, in order, when no converter is configured
const CHROME_CANDIDATES: [&str; 8] = [
    "google-chrome",
    "chrome",
    "chromium",
    "chromium-browser",
    "google-chrome-stable",
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
    "C:\\Program Files\\Google\\Chrome\\Application\\chrome.exe",
    "C:\\Program Files (x86)\\Google\\Chrome\\Application\\chrome.exe",
];

/// PDF report generator using HTML-to-PDF conversion
pub struct PdfReporter {
    html: HtmlReporter,
    converter: Option<String>,
}

impl PdfReporter {
    /// Create a PDF reporter that auto-detects Chrome/Chromium
    #[must_use]
    pub const fn new(theme: ReportTheme) -> Self {
        Self {
            html: HtmlReporter::new(theme),
            converter: None,
        }
    }

    /// Create a PDF reporter with a custom converter command
    #[must_use]
    pub fn with_converter(theme: ReportTheme, converter: &str) -> Self {
        Self {
            html: HtmlReporter::new(theme),
            converter: Some(converter.to_owned()),
        }
    }

    fn detect_chrome() -> Option<String> {
        CHROME_CANDIDATES
            .iter()
            .find(|candidate| {
                Command::new(candidate)
                    .arg("--version")
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status()
                    .is_ok_and(|status| status.success())
            })
            .map(|candidate| (*candidate).to_owned())
    }

    fn html_to_pdf(converter: &str, html_path: &Path, pdf_path: &Path) -> Result<(), ExportError> {
        debug!("converting {} with {converter}", html_path.display());
        let status = Command::new(converter)
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--run-all-compositor-stages-before-draw")
            .arg("--no-pdf-header-footer")
            .arg(format!("--print-to-pdf={}", pdf_path.display()))
            .arg(format!("file://{}", html_path.canonicalize()?.display()))
            .stderr(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .map_err(|_| ExportError::ConversionFailed {
                converter: converter.to_owned(),
            })?;

        if !status.success() {
            return Err(ExportError::ConversionFailed {
                converter: converter.to_owned(),
            });
        }
        Ok(())
    }

    fn temp_html_path() -> PathBuf {
        std::env::temp_dir().join(format!("gpacalc_report_{}.html", std::process::id()))
    }
}

impl ReportGenerator for PdfReporter {
    fn generate(&self, snapshot: &ReportSnapshot, output_path: &Path) -> Result<(), ExportError> {
        let converter = match &self.converter {
            Some(converter) => converter.clone(),
            None => Self::detect_chrome().ok_or(ExportError::ConverterNotFound)?,
        };

        let html_path = Self::temp_html_path();
        self.html.generate(snapshot, &html_path)?;
        let result = Self::html_to_pdf(&converter, &html_path, output_path);
        let _ = fs::remove_file(&html_path);
        result
    }

    /// The HTML page that gets printed to PDF
    fn render(&self, snapshot: &ReportSnapshot) -> Result<String, ExportError> {
        self.html.render(snapshot)
    }
}
