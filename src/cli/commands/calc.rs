//! Calc command handler
//!
//! Loads worksheet files, prints the current semester and CGPA, and
//! optionally exports a report per file.

use gpa_calc::config::Config;
use gpa_calc::core::report::{default_output_path, export, ReportFormat, DEFAULT_REPORT_STEM};
use gpa_calc::core::worksheet::load_session;
use gpa_calc::core::Session;
use gpa_calc::{error, info, verbose};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the calc command for one or more worksheets.
///
/// # Arguments
/// * `input_files` - Worksheet TOML files
/// * `report` - Optional report format name
/// * `output_files` - Optional report paths; must match inputs 1:1 when provided
/// * `config` - Configuration with the reports directory and report settings
///
/// Returns `false` if any file failed.
pub fn run(
    input_files: &[PathBuf],
    report: Option<&str>,
    output_files: &[PathBuf],
    config: &Config,
) -> bool {
    if input_files.is_empty() {
        eprintln!("✗ No input files provided.");
        return false;
    }

    if !output_files.is_empty() && output_files.len() != input_files.len() {
        eprintln!(
            "✗ When using -o/--output, provide one output path per input file ({} inputs, {} outputs).",
            input_files.len(),
            output_files.len()
        );
        return false;
    }

    let format = match report.map(ReportFormat::from_str).transpose() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("✗ {e}");
            return false;
        }
    };

    let options = config.report_options();
    let mut all_ok = true;
    for (idx, input_file) in input_files.iter().enumerate() {
        let session = match load_session(input_file) {
            Ok(session) => session,
            Err(e) => {
                error!("Failed to load worksheet {}: {e}", input_file.display());
                eprintln!("✗ Failed to load {}: {e}", input_file.display());
                all_ok = false;
                continue;
            }
        };

        verbose!("✓ Worksheet loaded from: {}", input_file.display());
        print_summary(input_file, &session);

        let Some(format) = format else {
            continue;
        };
        let output_path = match output_files.get(idx) {
            Some(path) => path.clone(),
            None => match default_report_path(input_file, input_files.len(), format, config) {
                Ok(path) => path,
                Err(e) => {
                    eprintln!("{e}");
                    all_ok = false;
                    continue;
                }
            },
        };

        match export(&session.snapshot(), format, &output_path, &options) {
            Ok(()) => println!("✓ Report generated: {}", output_path.display()),
            Err(e) => {
                eprintln!("✗ Failed to export {format} report: {e}");
                all_ok = false;
            }
        }
    }
    all_ok
}

/// Print the results of one worksheet
pub fn print_summary(input_file: &Path, session: &Session) {
    let snapshot = session.snapshot();
    println!("\n=== {} ===", input_file.display());

    if snapshot.has_current() {
        println!("Semester GPA: {}", snapshot.semester_gpa_text());
        println!("Credit Hours: {}", snapshot.total_credits_text());
        println!("Status:       {}", snapshot.standing_text());
    } else {
        println!("Semester GPA: -- (no course row counts yet)");
    }

    let excluded = snapshot
        .course_lines()
        .iter()
        .filter(|line| line.excluded)
        .count();
    if excluded > 0 {
        println!("Excluded rows: {excluded}");
    }

    for line in snapshot.semester_lines() {
        println!(
            "Semester {}: GPA {}, Credits {}",
            line.number, line.gpa, line.credits
        );
    }
    println!("CGPA:         {}", snapshot.cgpa);
}

/// Report path inside `paths.reports_dir`.
///
/// With several inputs the worksheet stem prefixes the file name so the
/// reports do not overwrite each other.
fn default_report_path(
    input_file: &Path,
    input_count: usize,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;
    info!("Reports directory: {}", reports_dir.display());

    if input_count == 1 {
        return Ok(default_output_path(&reports_dir, format));
    }
    let stem = input_file
        .file_stem()
        .map_or_else(|| "worksheet".into(), |s| s.to_string_lossy());
    Ok(reports_dir.join(format!(
        "{stem}_{DEFAULT_REPORT_STEM}.{}",
        format.extension()
    )))
}
