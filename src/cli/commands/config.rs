//! Config command handler
//!
//! Each subcommand produces the line to print or an error message;
//! [`run`] does the printing and saving.

use crate::args::ConfigSubcommand;
use gpa_calc::config::{Config, ConfigKey};
use std::io::{self, BufRead, Write};

/// Dispatch a config subcommand. Returns `false` on failure.
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) -> bool {
    let outcome = match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => Ok(show_all(config)),
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_key(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => {
            set_key(config, &key, &value).and_then(|line| persist(config).map(|()| line))
        }
        Some(ConfigSubcommand::Unset { key }) => {
            unset_key(config, defaults, &key).and_then(|line| persist(config).map(|()| line))
        }
        Some(ConfigSubcommand::Reset) => reset_interactive(&mut io::stdin().lock()),
    };

    match outcome {
        Ok(line) => {
            println!("{line}");
            true
        }
        Err(e) => {
            eprintln!("✗ {e}");
            false
        }
    }
}

/// Every setting plus the file it lives in
fn show_all(config: &Config) -> String {
    format!(
        "\n=== Configuration ===\n\n{config}\n  (file: {})",
        Config::get_config_file_path().display()
    )
}

fn show_key(config: &Config, key: &str) -> Result<String, String> {
    let key: ConfigKey = key.parse()?;
    Ok(config.value(key))
}

/// Stored value is echoed back since themes are normalized on set
fn set_key(config: &mut Config, key: &str, value: &str) -> Result<String, String> {
    let parsed: ConfigKey = key.parse()?;
    config.set(key, value)?;
    Ok(format!("✓ Set {} = {}", parsed.name(), config.value(parsed)))
}

fn unset_key(config: &mut Config, defaults: &Config, key: &str) -> Result<String, String> {
    let parsed: ConfigKey = key.parse()?;
    config.unset(key, defaults)?;
    Ok(format!(
        "✓ Reset {} to default ({})",
        parsed.name(),
        config.value(parsed)
    ))
}

fn persist(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))
}

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Ask before deleting the config file
fn reset_interactive(input: &mut impl BufRead) -> Result<String, String> {
    if !Config::get_config_file_path().exists() {
        return Ok("✓ Config is already at defaults".to_string());
    }

    print!("Reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|e| format!("Failed to read answer: {e}"))?;
    if !is_yes(&answer) {
        return Ok("✗ Reset cancelled".to_string());
    }

    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    Ok("✓ Config reset to defaults".to_string())
}
