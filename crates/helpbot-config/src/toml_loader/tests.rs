//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_helpbot_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, helpbot_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[api]
base_url = "https://support.example.com/api/v1"
request_timeout_secs = 15

[chat]
timestamp_format = "%H:%M"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.api.base_url, "https://support.example.com/api/v1");
    assert_eq!(config.api.request_timeout_secs, 15);
    assert_eq!(config.chat.timestamp_format, "%H:%M");
    // Defaults preserved
    assert_eq!(config.api.connect_timeout_secs, 10);
    assert_eq!(config.admin.api_key, "admin-secret-key");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, helpbot_common::ConfigError::ParseError(_)));
}

#[test]
fn load_does_not_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[api]
request_timeout_secs = 0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.api.request_timeout_secs, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("helpbot").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:8000/api/v1");
    assert_eq!(config.chat.queue_capacity, 32);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::HelpbotConfig;

    let config: HelpbotConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config.chat.history_limit, 50);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("helpbot"));
        assert!(path_str.ends_with("config.toml"));
    }
}
