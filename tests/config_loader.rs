mod common;

use common::temp_config;
use keycalc::config::{Config, ConfigError, LoggingConfig, ThemeName, UiConfig};
use std::path::PathBuf;

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.ui.theme, ThemeName::Dark);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(config.ui.show_hints);
    assert_eq!(config.ui.flash_ms, 150);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("keycalc/config.toml"));
}

#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validation_fails_zero_tick_rate() {
    let config = Config {
        ui: UiConfig {
            tick_rate_ms: 0,
            ..UiConfig::default()
        },
        logging: LoggingConfig::default(),
    };

    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("tick_rate_ms"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_fails_unknown_log_level() {
    let config = Config {
        ui: UiConfig::default(),
        logging: LoggingConfig {
            level: "chatty".to_string(),
            file: None,
        },
    };

    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("chatty"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_load_full_config() {
    let (_dir, path) = temp_config(
        r#"
[ui]
theme = "light"
tick_rate_ms = 100
show_hints = false
flash_ms = 300

[logging]
level = "debug"
file = "/tmp/keycalc.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.theme, ThemeName::Light);
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert!(!config.ui.show_hints);
    assert_eq!(config.ui.flash_ms, 300);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/keycalc.log")));
}

#[test]
fn test_missing_sections_use_defaults() {
    let (_dir, path) = temp_config("[ui]\ntheme = \"light\"\n");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.theme, ThemeName::Light);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_empty_file_is_default() {
    let (_dir, path) = temp_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_parse_error_reports_path() {
    let (_dir, path) = temp_config("[ui\ntheme = ");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_unknown_theme_is_parse_error() {
    let (_dir, path) = temp_config("[ui]\ntheme = \"sepia\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_invalid_values_fail_validation_on_load() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_missing_explicit_file_is_read_error() {
    let (dir, _path) = temp_config("");
    let missing = dir.path().join("nope.toml");
    assert!(matches!(
        Config::load_from(&missing),
        Err(ConfigError::ReadError { .. })
    ));
}
