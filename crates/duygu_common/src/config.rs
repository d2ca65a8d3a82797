//! Duygu Configuration
//!
//! User configuration for the prediction endpoint and logging.
//! Config file: $XDG_CONFIG_HOME/duygu/config.toml or ~/.config/duygu/config.toml

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Public hosted prediction service
pub const DEFAULT_ENDPOINT: &str = "https://fastapi-production-8770.up.railway.app/predict";

/// Env var that overrides `[service] endpoint`
pub const ENDPOINT_ENV: &str = "DUYGU_ENDPOINT";

const LOG_FILE_NAME: &str = "duyguctl.log";

/// Prediction service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Full URL of the predict endpoint; the sentence is appended as a query parameter
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when DUYGU_LOG is not set
    #[serde(default = "default_level")]
    pub level: String,

    /// Explicit log file for the TUI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

/// Main Duygu configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DuyguConfig {
    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DuyguConfig {
    /// Default user config path, None when neither XDG_CONFIG_HOME nor HOME is set
    pub fn user_config_path() -> Option<PathBuf> {
        config_path_with(|key| std::env::var(key).ok())
    }

    /// Load from the user config path, falling back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        match Self::user_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: DuyguConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply DUYGU_ENDPOINT from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_with(|key| std::env::var(key).ok());
    }

    /// Apply env overrides using the given lookup
    pub fn apply_overrides_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            self.service.endpoint = endpoint.trim().to_string();
        }
    }

    /// Endpoint must be an absolute http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_endpoint(&self.service.endpoint)
    }

    /// Resolve where the TUI writes its log
    ///
    /// Priority:
    /// 1. `[logging] file`
    /// 2. $XDG_STATE_HOME/duygu/duyguctl.log
    /// 3. ~/.local/state/duygu/duyguctl.log
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_path_with(|key| std::env::var(key).ok())
    }

    pub fn log_path_with<F>(&self, lookup: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(file) = &self.logging.file {
            return Some(file.clone());
        }

        if let Some(state_home) = lookup("XDG_STATE_HOME").filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(state_home).join("duygu").join(LOG_FILE_NAME));
        }

        lookup("HOME").filter(|v| !v.is_empty()).map(|home| {
            PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("duygu")
                .join(LOG_FILE_NAME)
        })
    }
}

fn config_path_with<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(config_home) = lookup("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(config_home).join("duygu").join("config.toml"));
    }

    lookup("HOME").filter(|v| !v.is_empty()).map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("duygu")
            .join("config.toml")
    })
}

/// Check that `url` is an absolute http or https URL
pub fn validate_endpoint(url: &str) -> Result<(), ConfigError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| ConfigError::Endpoint {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::Endpoint {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = DuyguConfig::default();
        assert_eq!(config.service.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: DuyguConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.service.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_toml_serialization() {
        let toml = toml::to_string(&DuyguConfig::default()).unwrap();
        assert!(toml.contains("[service]"));
        assert!(toml.contains("endpoint"));
        assert!(toml.contains("[logging]"));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DuyguConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, DuyguConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[service]\nendpoint = \"http://127.0.0.1:8000/predict\"\n",
        )
        .unwrap();

        let config = DuyguConfig::load_from(&path).unwrap();
        assert_eq!(config.service.endpoint, "http://127.0.0.1:8000/predict");
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[service\nendpoint = ").unwrap();

        let err = DuyguConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_rejects_bad_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[service]\nendpoint = \"ftp://example.com/predict\"\n").unwrap();

        let err = DuyguConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Endpoint { .. }));
    }

    #[test]
    fn test_validate_endpoint() {
        assert!(validate_endpoint("http://localhost:8000/predict").is_ok());
        assert!(validate_endpoint("https://example.com/predict").is_ok());
        assert!(validate_endpoint("not a url").is_err());
        assert!(validate_endpoint("/predict").is_err());
    }

    #[test]
    fn test_env_override() {
        let mut config = DuyguConfig::default();
        config.apply_overrides_with(env(&[(ENDPOINT_ENV, "http://10.0.0.5/predict")]));
        assert_eq!(config.service.endpoint, "http://10.0.0.5/predict");

        // Blank values are ignored
        config.apply_overrides_with(env(&[(ENDPOINT_ENV, "  ")]));
        assert_eq!(config.service.endpoint, "http://10.0.0.5/predict");
    }

    #[test]
    fn test_config_path_priority() {
        let xdg = config_path_with(env(&[("XDG_CONFIG_HOME", "/x"), ("HOME", "/home/u")]));
        assert_eq!(xdg, Some(PathBuf::from("/x/duygu/config.toml")));

        let home = config_path_with(env(&[("HOME", "/home/u")]));
        assert_eq!(home, Some(PathBuf::from("/home/u/.config/duygu/config.toml")));

        assert_eq!(config_path_with(env(&[])), None);
    }

    #[test]
    fn test_log_path_priority() {
        let mut config = DuyguConfig::default();
        let lookup = env(&[("XDG_STATE_HOME", "/state"), ("HOME", "/home/u")]);
        assert_eq!(
            config.log_path_with(&lookup),
            Some(PathBuf::from("/state/duygu/duyguctl.log"))
        );

        assert_eq!(
            config.log_path_with(env(&[("HOME", "/home/u")])),
            Some(PathBuf::from("/home/u/.local/state/duygu/duyguctl.log"))
        );

        config.logging.file = Some(PathBuf::from("/tmp/duygu.log"));
        assert_eq!(config.log_path_with(&lookup), Some(PathBuf::from("/tmp/duygu.log")));
    }
}
