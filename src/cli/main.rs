//! Command-line interface entry point for `gpacalc`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gpa_calc::config::Config;
use gpa_calc::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use gpa_calc::{debug, info};
use std::path::PathBuf;
use std::process::ExitCode;

/// Effective level: `--debug`, then `--log-level`, then `logging.level`, then warn
fn effective_level(args: &Cli, config: &Config) -> Level {
    if args.debug_flag {
        return Level::Debug;
    }
    args.log_level
        .map(args::LogLevelArg::level)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn)
}

/// Apply level, verbose and log file settings to the global logger
fn init_logging(args: &Cli, config: &Config) {
    let level = effective_level(args, config);
    if level == Level::Debug {
        enable_debug();
    }
    set_level(level);

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }

    let log_path = args.log_file.clone().or_else(|| {
        let configured = config.logging.file.trim();
        (!configured.is_empty()).then(|| PathBuf::from(configured))
    });
    let Some(log_path) = log_path else {
        return;
    };
    if !init_file_logging(&log_path) {
        eprintln!("✗ Failed to initialize file logging at: {}", log_path.display());
    } else if verbose {
        eprintln!("✓ Logging to: {}", log_path.display());
    } else {
        info!("Logging to: {}", log_path.display());
    }
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let defaults = Config::from_defaults();
    // `config` subcommands edit the stored file, never the per-run overrides
    let mut stored = Config::load();
    let mut config = stored.clone();
    config.apply_overrides(&args.to_config_overrides());
    init_logging(&args, &config);
    debug!("Effective configuration:\n{config}");

    let ok = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut stored, &defaults),
        Command::Calc {
            input_files,
            report,
            output,
        } => commands::calc::run(&input_files, report.as_deref(), &output, &config),
        Command::Shell { input_file } => {
            commands::shell::run(input_file.as_deref(), &config);
            true
        }
        Command::Scale => {
            commands::grades::print_scale();
            true
        }
        Command::Standing { gpa } => commands::grades::print_standing(&gpa),
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
