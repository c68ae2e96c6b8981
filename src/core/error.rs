//! Error types for the calculation engine, worksheet loading and report export.
//!
//! None of these are fatal to a session: a `ValidationError` means the
//! archive was left untouched, an `ExportError` means no file was produced.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Rejected manual semester input. No state was mutated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The field did not parse as a finite number.
    #[error("{field} is not a number: '{input}'")]
    Unparseable {
        /// Field name (`gpa` or `credits`)
        field: &'static str,
        /// Raw user input
        input: String,
    },

    /// GPA outside of `[0.0, 4.0]`.
    #[error("GPA must be between 0.00 and 4.00, got {0}")]
    GpaOutOfRange(f64),

    /// Credit hours of zero or below.
    #[error("credit hours must be positive, got {0}")]
    NonPositiveCredits(f64),
}

/// Failure to load a worksheet file.
#[derive(Debug, Error)]
pub enum WorksheetError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Worksheet path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The file is not a valid worksheet.
    #[error("invalid worksheet: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Failure to produce a report. Calculator state is never affected.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing or reading a report file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Template rendering failed.
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    /// No Chrome/Chromium executable was found for PDF conversion.
    #[error(
        "PDF conversion failed: Chrome/Chromium not found. \
         Install Chrome or Chromium, or set a converter with `gpacalc config set pdf_converter <PATH>`"
    )]
    ConverterNotFound,

    /// The converter ran but did not succeed.
    #[error("PDF conversion with '{converter}' failed")]
    ConversionFailed {
        /// Converter command that was run
        converter: String,
    },
}
