//! Tests for TOML config loading and priority resolution

use cookery_common::config::{load_toml_config, ConfigOverrides, ServerConfig, TomlConfig};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_load_explicit_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
port = 9090
database = "/var/lib/cookery/platform.db"
enforce_foreign_keys = true
"#,
    )
    .unwrap();

    let file = load_toml_config(Some(&path)).expect("Config should load");
    assert_eq!(file.port, Some(9090));
    assert_eq!(file.enforce_foreign_keys, Some(true));

    let config = ServerConfig::resolve(ConfigOverrides::default(), file);
    assert_eq!(config.port, 9090);
    assert_eq!(
        config.database_path,
        PathBuf::from("/var/lib/cookery/platform.db")
    );
    assert!(config.enforce_foreign_keys);
    // Unset keys fall back to compiled defaults
    assert_eq!(config.static_dir, PathBuf::from("./static"));
}

#[test]
fn test_missing_explicit_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let result = load_toml_config(Some(&path));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Configuration error"));
}

#[test]
fn test_invalid_toml_is_rejected() {
    assert!(TomlConfig::from_toml_str("port = \"not a number\"").is_err());
    assert!(TomlConfig::from_toml_str("unknown_key = 1").is_err());
}

#[test]
fn test_priority_cli_env_over_file_over_default() {
    let file = TomlConfig {
        host: Some("10.0.0.1".to_string()),
        port: Some(7000),
        index_file: Some(PathBuf::from("/srv/www/index.html")),
        ..Default::default()
    };
    let overrides = ConfigOverrides {
        port: Some(7100),
        enforce_foreign_keys: Some(true),
        ..Default::default()
    };

    let config = ServerConfig::resolve(overrides, file);
    assert_eq!(config.host, "10.0.0.1");
    assert_eq!(config.port, 7100);
    assert_eq!(config.index_file, PathBuf::from("/srv/www/index.html"));
    assert!(config.enforce_foreign_keys);
    assert_eq!(config.bind_address(), "10.0.0.1:7100");
}
