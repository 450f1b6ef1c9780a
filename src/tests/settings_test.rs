//! Unit tests for settings loading and saving

use crate::settings::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_default_endpoint_url() {
    let settings = AppSettings::default();
    assert_eq!(
        settings.endpoint_url(),
        "http://localhost:8080/api/personal-cause-submissions/submit"
    );
}

#[test]
fn test_endpoint_url_joins_with_one_slash() {
    let mut settings = AppSettings::default();
    settings.api_connection.base_url = "https://causes.example.org/".to_string();
    assert_eq!(
        settings.endpoint_url(),
        "https://causes.example.org/api/personal-cause-submissions/submit"
    );

    settings.api_connection.submit_path = "v2/submit".to_string();
    assert_eq!(settings.endpoint_url(), "https://causes.example.org/v2/submit");
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = AppSettings::load_from(&dir.path().join("settings.json"));
    assert_eq!(settings, AppSettings::default());
}

#[test]
fn test_invalid_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();
    assert_eq!(AppSettings::load_from(&path), AppSettings::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "api_connection": { "base_url": "http://10.0.0.5:9000" } }"#).unwrap();

    let settings = AppSettings::load_from(&path);
    assert_eq!(settings.api_connection.base_url, "http://10.0.0.5:9000");
    assert_eq!(
        settings.api_connection.submit_path,
        "/api/personal-cause-submissions/submit"
    );
}

#[test]
fn test_save_creates_directories_and_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut settings = AppSettings::default();
    settings.api_connection.base_url = "http://backend:8080".to_string();
    settings.save_to(&path).unwrap();

    assert!(path.exists());
    assert_eq!(AppSettings::load_from(&path), settings);
}
