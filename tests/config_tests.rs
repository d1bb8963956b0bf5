//! Integration tests for configuration management

use grade_tracker::config::{Config, ConfigOverrides, STUDENT_FILE_NAME};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.data_dir.is_empty(),
        "Default data_dir should not be empty"
    );
    assert!(!config.paths.data_dir.contains("$GRADE_TRACKER"));
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
data_dir = "./grades"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_dir, "./grades");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"

[paths]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.paths.data_dir, "");
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$GRADE_TRACKER/test.log"

[paths]
data_dir = "$GRADE_TRACKER/data"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("gradetracker"));
    assert!(!config.logging.file.contains("$GRADE_TRACKER"));
    assert!(config.paths.data_dir.ends_with("data"));
    assert!(!config.paths.data_dir.contains("$GRADE_TRACKER"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "DEBUG").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config.set("verbose", "true").expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config.set("data-dir", "/srv/grades").expect("Failed to set data dir");
    assert_eq!(config.get("data_dir").unwrap(), "/srv/grades");

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
    assert!(config.set("level", "trace").is_err());
    assert!(config.set("verbose", "maybe").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("data_dir", "/elsewhere").expect("Failed to set data_dir");
    config
        .unset("data_dir", &defaults)
        .expect("Failed to unset data_dir");
    assert_eq!(config.paths.data_dir, defaults.paths.data_dir);

    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded_config = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded_config.logging.level, "info");
    assert_eq!(loaded_config.paths.data_dir, config.paths.data_dir);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        data_dir: Some("./custom_data".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_dir, "./custom_data");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let data_dir = config.paths.data_dir.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.data_dir, data_dir);
}

#[test]
fn test_student_file_path() {
    let mut config = Config::from_defaults();
    config.set("data_dir", "/srv/grades").unwrap();
    assert_eq!(
        config.student_file_path(),
        PathBuf::from("/srv/grades").join(STUDENT_FILE_NAME)
    );
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("level"));
    assert!(display_str.contains("verbose"));
    assert!(display_str.contains("data_dir"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false

[paths]
data_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.paths.data_dir, defaults.paths.data_dir);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false

[paths]
data_dir = "/my/data"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    assert!(!config.merge_defaults(&defaults));
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.paths.data_dir, "/my/data");
}

#[test]
fn test_get_gradetracker_dir() {
    let dir = Config::get_gradetracker_dir();

    assert!(dir.to_string_lossy().contains("gradetracker"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
