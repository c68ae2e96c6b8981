//! Configuration for `gpacalc`
//!
//! Settings live in a TOML file under the platform config directory
//! (`dconfig.toml` for debug builds, `config.toml` for release builds).
//! The compiled-in defaults from `assets/` seed the file on first run and
//! back-fill settings that older files lack.

use crate::core::report::{ReportOptions, ReportTheme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory
const DIR_VARIABLE: &str = "$GPA_CALC";

/// `[logging]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path, empty for terminal only
    #[serde(default)]
    pub file: String,
    /// Verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// `[paths]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Where reports go when no output path is given
    #[serde(default)]
    pub reports_dir: String,
}

/// `[report]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// `light` or `dark`
    #[serde(default)]
    pub theme: String,
    /// Chrome/Chromium executable for PDF export, empty to auto-detect
    #[serde(default)]
    pub pdf_converter: String,
}

/// Full configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Output locations
    #[serde(default)]
    pub paths: PathsConfig,
    /// Report rendering
    #[serde(default)]
    pub report: ReportConfig,
}

/// Values given on the command line for a single run. `None` keeps the
/// configured value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// `logging.level`
    pub level: Option<String>,
    /// `logging.file`
    pub file: Option<String>,
    /// `logging.verbose`
    pub verbose: Option<bool>,
    /// `paths.reports_dir`
    pub reports_dir: Option<String>,
    /// `report.theme`
    pub theme: Option<String>,
}

/// Keys understood by `config get/set/unset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// `logging.level`
    Level,
    /// `logging.file`
    File,
    /// `logging.verbose`
    Verbose,
    /// `paths.reports_dir`
    ReportsDir,
    /// `report.theme`
    Theme,
    /// `report.pdf_converter`
    PdfConverter,
}

impl ConfigKey {
    /// Every key, in display order
    pub const ALL: [Self; 6] = [
        Self::Level,
        Self::File,
        Self::Verbose,
        Self::ReportsDir,
        Self::Theme,
        Self::PdfConverter,
    ];

    /// Key as typed on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::File => "file",
            Self::Verbose => "verbose",
            Self::ReportsDir => "reports_dir",
            Self::Theme => "theme",
            Self::PdfConverter => "pdf_converter",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = String;

    /// Dashes are accepted in place of underscores
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| format!("Unknown config key: '{s}'"))
    }
}

impl Config {
    /// The `$GPA_CALC` directory: `gpacalc` under the platform config dir
    /// (`~/.config`, `~/Library/Application Support`, `%APPDATA%`).
    #[must_use]
    pub fn get_gpacalc_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gpacalc")
    }

    /// User config file inside [`Config::get_gpacalc_dir`]
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_gpacalc_dir().join(CONFIG_FILE_NAME)
    }

    fn expand_variables(value: &str) -> String {
        if !value.contains(DIR_VARIABLE) {
            return value.to_string();
        }
        let dir = Self::get_gpacalc_dir();
        value.replace(DIR_VARIABLE, &dir.to_string_lossy())
    }

    /// Parse a config document, expanding `$GPA_CALC` in path values.
    ///
    /// Missing sections and fields take their serde defaults.
    ///
    /// # Errors
    /// Returns an error if the TOML is invalid or does not fit the layout.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;
        for path in [
            &mut config.logging.file,
            &mut config.paths.reports_dir,
            &mut config.report.pdf_converter,
        ] {
            *path = Self::expand_variables(path);
        }
        Ok(config)
    }

    /// The compiled-in defaults for this build profile
    ///
    /// # Panics
    /// Panics if the bundled defaults are not valid TOML, which the test
    /// suite rules out.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load the user config, creating it from defaults on first run.
    ///
    /// Settings missing from an existing file are back-filled from the
    /// defaults and written back. An unreadable or invalid file falls back
    /// to the defaults without touching the file.
    #[must_use]
    pub fn load() -> Self {
        let defaults = Self::from_defaults();
        let config_file = Self::get_config_file_path();

        if !config_file.exists() {
            let _ = defaults.save();
            return defaults;
        }

        let parsed = fs::read_to_string(&config_file)
            .ok()
            .and_then(|content| Self::from_toml(&content).ok());
        match parsed {
            Some(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save();
                }
                config
            }
            None => defaults,
        }
    }

    /// Write this config to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config
    /// cannot be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Delete the user config file so the next [`Config::load`] starts
    /// from defaults. A missing file is not an error.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        match fs::remove_file(Self::get_config_file_path()) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    /// Fill empty text settings from `defaults`.
    ///
    /// Returns `true` if anything changed.
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;
        for key in ConfigKey::ALL {
            let Some(slot) = self.text_slot(key) else {
                continue;
            };
            let default = defaults.value(key);
            if slot.is_empty() && !default.is_empty() {
                *slot = default;
                changed = true;
            }
        }
        changed
    }

    /// Apply command-line overrides for this run only
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        let text = [
            (ConfigKey::Level, &overrides.level),
            (ConfigKey::File, &overrides.file),
            (ConfigKey::ReportsDir, &overrides.reports_dir),
            (ConfigKey::Theme, &overrides.theme),
        ];
        for (key, value) in text {
            if let (Some(slot), Some(value)) = (self.text_slot(key), value) {
                slot.clone_from(value);
            }
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
    }

    fn text_slot(&mut self, key: ConfigKey) -> Option<&mut String> {
        match key {
            ConfigKey::Level => Some(&mut self.logging.level),
            ConfigKey::File => Some(&mut self.logging.file),
            ConfigKey::Verbose => None,
            ConfigKey::ReportsDir => Some(&mut self.paths.reports_dir),
            ConfigKey::Theme => Some(&mut self.report.theme),
            ConfigKey::PdfConverter => Some(&mut self.report.pdf_converter),
        }
    }

    /// Current value of `key` as text
    #[must_use]
    pub fn value(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::Level => self.logging.level.clone(),
            ConfigKey::File => self.logging.file.clone(),
            ConfigKey::Verbose => self.logging.verbose.to_string(),
            ConfigKey::ReportsDir => self.paths.reports_dir.clone(),
            ConfigKey::Theme => self.report.theme.clone(),
            ConfigKey::PdfConverter => self.report.pdf_converter.clone(),
        }
    }

    /// Value of a key given by name, `None` for unknown keys
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        key.parse().ok().map(|key| self.value(key))
    }

    /// Set a key by name. Only changes memory; call [`Config::save`] to persist.
    ///
    /// # Errors
    /// Returns an error for an unknown key, a non-boolean `verbose`, or a
    /// theme other than `light`/`dark`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.assign(key.parse()?, value)
    }

    /// Restore a key to its value in `defaults`. Only changes memory.
    ///
    /// # Errors
    /// Returns an error for an unknown key.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        let key: ConfigKey = key.parse()?;
        match self.text_slot(key) {
            Some(slot) => *slot = defaults.value(key),
            None => self.logging.verbose = defaults.logging.verbose,
        }
        Ok(())
    }

    fn assign(&mut self, key: ConfigKey, value: &str) -> Result<(), String> {
        match key {
            ConfigKey::Verbose => {
                self.logging.verbose = value
                    .parse()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            ConfigKey::Theme => {
                self.report.theme = value.parse::<ReportTheme>()?.to_string();
            }
            _ => {
                if let Some(slot) = self.text_slot(key) {
                    value.clone_into(slot);
                }
            }
        }
        Ok(())
    }

    /// Report settings derived from this config.
    ///
    /// An unknown theme falls back to light; an empty converter means auto-detect.
    #[must_use]
    pub fn report_options(&self) -> ReportOptions {
        let pdf_converter = self.report.pdf_converter.trim();
        ReportOptions {
            theme: self.report.theme.parse().unwrap_or_default(),
            pdf_converter: (!pdf_converter.is_empty()).then(|| pdf_converter.to_string()),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections: [(&str, &[ConfigKey]); 3] = [
            (
                "logging",
                &[ConfigKey::Level, ConfigKey::File, ConfigKey::Verbose],
            ),
            ("paths", &[ConfigKey::ReportsDir]),
            ("report", &[ConfigKey::Theme, ConfigKey::PdfConverter]),
        ];
        for (idx, (section, keys)) in sections.into_iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            writeln!(f, "[{section}]")?;
            for &key in keys {
                // verbose is a TOML boolean, the rest are strings
                if key == ConfigKey::Verbose {
                    writeln!(f, "  {} = {}", key.name(), self.value(key))?;
                } else {
                    writeln!(f, "  {} = \"{}\"", key.name(), self.value(key))?;
                }
            }
        }
        Ok(())
    }
}
