//! Configuration loading
//!
//! Each setting resolves in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Steps 1 and 2 arrive together as [`ConfigOverrides`] (clap merges the flag
//! and its environment variable); this module layers them over the file.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE: &str = "./cooking_platform.db";
pub const DEFAULT_INDEX_FILE: &str = "./index.html";
pub const DEFAULT_STATIC_DIR: &str = "./static";

/// Optional settings read from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub index_file: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub enforce_foreign_keys: Option<bool>,
}

impl TomlConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid config file: {}", e)))
    }
}

/// Values supplied on the command line or through environment variables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub index_file: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub enforce_foreign_keys: Option<bool>,
}

/// Fully resolved server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub index_file: PathBuf,
    pub static_dir: PathBuf,
    pub enforce_foreign_keys: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::resolve(ConfigOverrides::default(), TomlConfig::default())
    }
}

impl ServerConfig {
    /// Layer overrides over file values over compiled defaults
    pub fn resolve(overrides: ConfigOverrides, file: TomlConfig) -> Self {
        Self {
            host: overrides
                .host
                .or(file.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(file.port).unwrap_or(DEFAULT_PORT),
            database_path: overrides
                .database
                .or(file.database)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE)),
            index_file: overrides
                .index_file
                .or(file.index_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_FILE)),
            static_dir: overrides
                .static_dir
                .or(file.static_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            enforce_foreign_keys: overrides
                .enforce_foreign_keys
                .or(file.enforce_foreign_keys)
                .unwrap_or(false),
        }
    }

    /// `host:port` string suitable for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Per-user config file location (`~/.config/cookery/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cookery").join("config.toml"))
}

/// Load the TOML config file
///
/// An explicitly named file must exist and parse. Without one, the per-user
/// default location is used when present; otherwise all file values are unset.
pub fn load_toml_config(explicit: Option<&Path>) -> Result<TomlConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(TomlConfig::default()),
        },
    };

    let content = std::fs::read_to_string(&path).map_err(|e| {
        Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
    })?;

    info!("Loaded config file: {}", path.display());
    TomlConfig::from_toml_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ServerConfig::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DATABASE));
        assert!(!config.enforce_foreign_keys);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_override_beats_file() {
        let file = TomlConfig {
            port: Some(9000),
            host: Some("127.0.0.1".to_string()),
            ..Default::default()
        };
        let overrides = ConfigOverrides {
            port: Some(9100),
            ..Default::default()
        };

        let config = ServerConfig::resolve(overrides, file);
        assert_eq!(config.port, 9100);
        assert_eq!(config.host, "127.0.0.1");
    }
}
