// Configuration utilities and TOML parsing

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::utils::error::{ErthError, Result};

/// URL of the live waiting-time page
pub const DEFAULT_PAGE_URL: &str =
    "https://erlangen.de/themenseite/service/buerger/aktuelle-wartezeit";
/// Address the metrics endpoint binds by default
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:12080";
/// Default snapshot cache time-to-live in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 30;
/// Default page request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the HTTP server binds
    pub listen: String,
    /// URL of the waiting-time page
    pub page_url: String,
    /// Snapshot cache time-to-live in seconds
    pub cache_ttl_secs: u64,
    /// Page request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            listen: DEFAULT_LISTEN_ADDR.to_string(),
            page_url: DEFAULT_PAGE_URL.to_string(),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Validate the resolved configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.listen.parse::<SocketAddr>().is_err() {
            return Err(format!(
                "Invalid listen address '{}' - expected host:port, e.g. 127.0.0.1:12080",
                self.listen
            ));
        }

        if !self.page_url.starts_with("http://") && !self.page_url.starts_with("https://") {
            return Err(format!(
                "Invalid page URL '{}' - must start with http:// or https://",
                self.page_url
            ));
        }

        if self.cache_ttl_secs == 0 {
            return Err("Cache TTL must be greater than 0".to_string());
        }

        if self.request_timeout_secs == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// On-disk TOML representation of [`Config`]; every key is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigToml {
    pub listen: Option<String>,
    pub page_url: Option<String>,
    pub cache_ttl_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}

impl From<ConfigToml> for Config {
    fn from(file: ConfigToml) -> Self {
        let defaults = Config::default();
        Config {
            listen: file.listen.unwrap_or(defaults.listen),
            page_url: file.page_url.unwrap_or(defaults.page_url),
            cache_ttl_secs: file.cache_ttl_secs.unwrap_or(defaults.cache_ttl_secs),
            request_timeout_secs: file
                .request_timeout_secs
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}

impl From<Config> for ConfigToml {
    fn from(config: Config) -> Self {
        ConfigToml {
            listen: Some(config.listen),
            page_url: Some(config.page_url),
            cache_ttl_secs: Some(config.cache_ttl_secs),
            request_timeout_secs: Some(config.request_timeout_secs),
        }
    }
}

/// Configuration parsing and validation utilities
pub struct ConfigParser;

impl ConfigParser {
    /// Default location of the config file (`~/.config/erth/erth.toml`)
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("erth").join("erth.toml"))
    }

    /// Load and validate a configuration file
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ErthError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            ErthError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse_config(&content)
    }

    /// Resolve configuration from an optional explicit path.
    ///
    /// An explicit path must exist; the default path is used only when
    /// present, otherwise built-in defaults apply.
    pub fn load_config_or_default(path: Option<&Path>) -> Result<Config> {
        if let Some(path) = path {
            return Self::load_config(path);
        }

        match Self::default_config_path() {
            Some(default) if default.exists() => Self::load_config(default),
            _ => Ok(Config::default()),
        }
    }

    /// Parse configuration from a TOML string with validation
    pub fn parse_config(content: &str) -> Result<Config> {
        let config_toml: ConfigToml = toml::from_str(content)
            .map_err(|e| ErthError::ConfigError(format!("Invalid TOML syntax: {}", e)))?;

        let config = Config::from(config_toml);

        config.validate().map_err(ErthError::ValidationError)?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_config<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
        let path = path.as_ref();

        config.validate().map_err(ErthError::ValidationError)?;

        let config_toml = ConfigToml::from(config.clone());

        let content = toml::to_string_pretty(&config_toml).map_err(|e| {
            ErthError::ConfigError(format!("Failed to serialize configuration: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            ErthError::ConfigError(format!("Failed to write {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}
