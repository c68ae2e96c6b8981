//! CLI argument definitions for `gpacalc`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use gpa_calc::config::ConfigOverrides;
use gpa_calc::logger::Level;

/// `--log-level` / `--config-level` values
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Progress messages
    Info,
    /// Everything
    Debug,
}

impl LogLevelArg {
    /// Runtime logger level
    pub const fn level(self) -> Level {
        match self {
            Self::Error => Level::Error,
            Self::Warn => Level::Warn,
            Self::Info => Level::Info,
            Self::Debug => Level::Debug,
        }
    }

    /// Name as stored in `logging.level`, same as the flag value
    pub fn config_value(self) -> String {
        self.to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default()
    }
}

/// `gpacalc config ...`
#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Print one setting, or all of them when KEY is omitted
    Get {
        /// level, file, verbose, reports_dir, theme or pdf_converter
        key: Option<String>,
    },
    /// Change a setting and save the config file
    Set {
        /// Setting name; dashes work too (`reports-dir`)
        key: String,
        /// New value
        value: String,
    },
    /// Put a setting back to its default and save
    Unset {
        /// Setting name
        key: String,
    },
    /// Delete the config file after asking for confirmation
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Calculate GPA and CGPA from worksheet files.
    ///
    /// Each TOML worksheet lists course rows and past semesters; the
    /// results are printed and optionally exported as a report.
    Calc {
        /// Paths to worksheet TOML files (supports multiple)
        #[arg(value_name = "FILES", num_args = 1..)]
        input_files: Vec<PathBuf>,

        /// Export a report in the specified format (markdown, html, pdf)
        #[arg(long, value_name = "FORMAT")]
        report: Option<String>,

        /// Report output paths (optional; defaults to config `reports_dir` when omitted)
        ///
        /// When provided, must match the number of input files 1:1.
        #[arg(short, long, value_name = "FILES", num_args = 1..)]
        output: Vec<PathBuf>,
    },
    /// Interactive calculator shell.
    ///
    /// Starts from an empty sheet, or from a worksheet when FILE is given.
    Shell {
        /// Optional worksheet to preload
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,
    },
    /// Print the letter-grade scale.
    Scale,
    /// Classify a GPA into an academic standing.
    Standing {
        /// GPA on the 4.0 scale, classified as typed (not rounded)
        #[arg(value_name = "GPA")]
        gpa: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gpacalc",
    about = "GPA and CGPA calculator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Log level for this run; `logging.level` is used when omitted
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Print extra progress output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Same as `--log-level debug`
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Append log messages to this file instead of the terminal
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // Per-run overrides of config values. Never saved.
    /// `logging.level` for this run
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// `logging.file` for this run
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// `logging.verbose` for this run (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// `paths.reports_dir` for this run
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Same as `--config-reports-dir`
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// `report.theme` for this run (light/dark)
    #[arg(long = "config-theme", value_name = "THEME")]
    pub config_theme: Option<String>,

    /// Same as `--config-theme`
    #[arg(long = "theme", value_name = "THEME")]
    pub theme: Option<String>,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

fn path_text(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl Cli {
    /// Per-run config overrides from the flags.
    ///
    /// `--reports-dir` and `--theme` win over their `--config-*` spellings.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let reports_dir = self.reports_dir.as_ref().or(self.config_reports_dir.as_ref());
        ConfigOverrides {
            level: self.config_level.map(LogLevelArg::config_value),
            file: self.config_log_file.as_deref().map(path_text),
            verbose: self.config_verbose,
            reports_dir: reports_dir.map(|dir| path_text(dir)),
            theme: self.theme.as_ref().or(self.config_theme.as_ref()).cloned(),
        }
    }
}
