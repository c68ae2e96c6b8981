//! Config parsing, editing and override behaviour

use gpa_calc::config::{Config, ConfigKey, ConfigOverrides};
use gpa_calc::core::report::ReportTheme;
use std::fs;

const FULL: &str = r#"
[logging]
level = "info"
file = "/var/log/gpacalc.log"
verbose = true

[paths]
reports_dir = "./reports"

[report]
theme = "dark"
pdf_converter = "/usr/bin/chromium"
"#;

#[test]
fn bundled_defaults_are_complete() {
    let defaults = Config::from_defaults();
    for key in ConfigKey::ALL {
        if matches!(key, ConfigKey::File | ConfigKey::PdfConverter) {
            continue;
        }
        assert!(
            !defaults.value(key).is_empty(),
            "default for {} is empty",
            key.name()
        );
    }
    assert_eq!(defaults.report_options().theme, ReportTheme::Light);
    assert!(defaults.report_options().pdf_converter.is_none());
}

#[test]
fn every_section_is_read() {
    let config = Config::from_toml(FULL).unwrap();
    let expected = [
        (ConfigKey::Level, "info"),
        (ConfigKey::File, "/var/log/gpacalc.log"),
        (ConfigKey::Verbose, "true"),
        (ConfigKey::ReportsDir, "./reports"),
        (ConfigKey::Theme, "dark"),
        (ConfigKey::PdfConverter, "/usr/bin/chromium"),
    ];
    for (key, value) in expected {
        assert_eq!(config.value(key), value, "{}", key.name());
    }
}

#[test]
fn missing_sections_fall_back_to_empty() {
    let config = Config::from_toml("[report]\ntheme = \"dark\"\n").unwrap();
    assert!(config.logging.level.is_empty());
    assert!(!config.logging.verbose);
    assert!(config.paths.reports_dir.is_empty());
    assert_eq!(config.report.theme, "dark");

    assert!(Config::from_toml("").is_ok());
    assert!(Config::from_toml("[logging]\nverbose = \"often\"\n").is_err());
}

#[test]
fn dir_variable_is_expanded_in_paths() {
    let config = Config::from_toml(
        "[logging]\nfile = \"$GPA_CALC/run.log\"\n[paths]\nreports_dir = \"$GPA_CALC/out\"\n",
    )
    .unwrap();
    let dir = Config::get_gpacalc_dir();
    assert_eq!(config.logging.file, dir.join("run.log").to_string_lossy());
    assert_eq!(config.paths.reports_dir, dir.join("out").to_string_lossy());
}

#[test]
fn set_validates_typed_keys() {
    let mut config = Config::from_defaults();

    config.set("verbose", "true").unwrap();
    assert!(config.logging.verbose);
    let err = config.set("verbose", "sometimes").unwrap_err();
    assert!(err.contains("verbose"));
    assert!(config.logging.verbose);

    config.set("theme", "DARK").unwrap();
    assert_eq!(config.get("theme").as_deref(), Some("dark"));
    assert!(config.set("theme", "solarized").is_err());
    assert_eq!(config.report_options().theme, ReportTheme::Dark);
}

#[test]
fn set_accepts_dashed_key_names() {
    let mut config = Config::from_defaults();
    config.set("reports-dir", "/srv/reports").unwrap();
    config.set("pdf-converter", "chromium").unwrap();
    assert_eq!(config.get("reports_dir").as_deref(), Some("/srv/reports"));
    assert_eq!(
        config.report_options().pdf_converter.as_deref(),
        Some("chromium")
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let mut config = Config::from_defaults();
    let defaults = config.clone();
    assert_eq!(config.get("db_token"), None);
    assert_eq!(
        config.set("db_token", "x").unwrap_err(),
        "Unknown config key: 'db_token'"
    );
    assert!(config.unset("db_token", &defaults).is_err());
}

#[test]
fn unset_restores_each_key() {
    let defaults = Config::from_defaults();
    let mut config = Config::from_toml(FULL).unwrap();
    for key in ConfigKey::ALL {
        config.unset(key.name(), &defaults).unwrap();
        assert_eq!(config.value(key), defaults.value(key), "{}", key.name());
    }
}

#[test]
fn saved_text_parses_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("level", "error").unwrap();
    config.set("theme", "dark").unwrap();
    fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

    let reloaded = Config::from_toml(&fs::read_to_string(&path).unwrap()).unwrap();
    for key in ConfigKey::ALL {
        assert_eq!(reloaded.value(key), config.value(key));
    }
}

#[test]
fn overrides_replace_only_given_values() {
    let defaults = Config::from_defaults();
    let mut config = defaults.clone();
    config.apply_overrides(&ConfigOverrides {
        theme: Some("dark".into()),
        verbose: Some(true),
        ..ConfigOverrides::default()
    });
    assert_eq!(config.report.theme, "dark");
    assert!(config.logging.verbose);
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);

    config.apply_overrides(&ConfigOverrides {
        level: Some("error".into()),
        file: Some("/tmp/run.log".into()),
        reports_dir: Some("./out".into()),
        ..ConfigOverrides::default()
    });
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/tmp/run.log");
    assert_eq!(config.paths.reports_dir, "./out");
    assert_eq!(config.report.theme, "dark");
}

#[test]
fn display_groups_keys_by_section() {
    let text = Config::from_toml(FULL).unwrap().to_string();
    let logging = text.find("[logging]").unwrap();
    let paths = text.find("[paths]").unwrap();
    let report = text.find("[report]").unwrap();
    assert!(logging < paths && paths < report);
    assert!(text.contains("  verbose = true\n"));
    assert!(text.contains("  theme = \"dark\"\n"));
    assert!(text.contains("  pdf_converter = \"/usr/bin/chromium\"\n"));
}

#[test]
fn merge_fills_gaps_from_older_files() {
    // written before the [report] section existed
    let mut config = Config::from_toml("[logging]\nlevel = \"error\"\n").unwrap();
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.report.theme, defaults.report.theme);
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn merge_keeps_user_values() {
    let mut config = Config::from_toml(FULL).unwrap();
    assert!(!config.merge_defaults(&Config::from_defaults()));
    assert_eq!(config.report.theme, "dark");
    assert_eq!(config.logging.file, "/var/log/gpacalc.log");
}

#[test]
fn config_file_lives_in_gpacalc_dir() {
    let dir = Config::get_gpacalc_dir();
    let file = Config::get_config_file_path();
    assert!(dir.ends_with("gpacalc"));
    assert_eq!(file.parent(), Some(dir.as_path()));
    let name = file.file_name().unwrap().to_string_lossy().to_string();
    assert!(name == "config.toml" || name == "dconfig.toml");
}
