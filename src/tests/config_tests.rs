// src/tests/config_tests.rs

use crate::config::{Config, ConfigError};
use crate::tests::utils::date;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn write_config(tag: &str, json: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "trailwatch_config_{tag}_{}.json",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::write(&path, json).expect("Failed to write test config");
    path
}

#[test]
fn defaults_used_without_config_file() {
    let config = Config::load(None).unwrap();

    assert_eq!(config.min_spaces, 2);
    assert!(config.exclude.is_empty());
    assert_eq!(config.start_date, date(2020, 6, 1));
    assert_eq!(config.end_date, date(2020, 10, 5));
    assert!(config.output_path.is_some());
    assert!(config.webhook_enabled);
}

#[test]
fn json_file_overrides_defaults() {
    let path = write_config(
        "overrides",
        r#"{
            "min_spaces": 5,
            "exclude": ["Sunrise Lakes"],
            "start_date": "2021-07-01",
            "end_date": "2021-09-15",
            "output_path": null,
            "webhook_enabled": false
        }"#,
    );

    let config = Config::load(path.to_str()).unwrap();

    assert_eq!(config.min_spaces, 5);
    assert_eq!(config.exclude, vec!["Sunrise Lakes".to_string()]);
    assert_eq!(config.start_date, date(2021, 7, 1));
    assert!(config.output_path.is_none());
    assert!(!config.webhook_enabled);
    // untouched fields keep their defaults
    assert_eq!(config.min_report_date, date(2020, 1, 1));
    assert_eq!(config.timeout_secs, 30);

    let _ = fs::remove_file(&path);
}

#[test]
fn unknown_fields_are_rejected() {
    let path = write_config("typo", r#"{"min_space": 5}"#);
    let err = Config::load(path.to_str()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    let _ = fs::remove_file(&path);
}

#[test]
fn inverted_date_range_is_rejected() {
    let path = write_config(
        "inverted",
        r#"{"start_date": "2020-10-05", "end_date": "2020-06-01"}"#,
    );
    let err = Config::load(path.to_str()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRange(_)));
    let _ = fs::remove_file(&path);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Config::load(Some("/nonexistent/trailwatch.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn criteria_mirrors_config_fields() {
    let config = Config::load(None).unwrap();
    let criteria = config.criteria();

    assert_eq!(criteria.start, config.start_date);
    assert_eq!(criteria.end, config.end_date);
    assert_eq!(criteria.min_spaces, config.min_spaces);
    assert_eq!(criteria.exclude, config.exclude);
}
