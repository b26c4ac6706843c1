//! Configuration handling for the TUI

use crate::api::DEFAULT_API_URL;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the prediction endpoint
pub const API_URL_ENV: &str = "HEALTHQUEST_API_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Prediction endpoint URL
    pub api_url: Option<String>,
    /// Where log output goes (the terminal is taken by the UI)
    pub log_file: Option<PathBuf>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "healthquest", "healthquest-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file gives the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Endpoint to post to: environment, then config file, then the default
    pub fn resolved_api_url(&self) -> String {
        self.resolve_api_url(std::env::var(API_URL_ENV).ok())
    }

    fn resolve_api_url(&self, from_env: Option<String>) -> String {
        from_env
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Log file path: configured, or `healthquest-tui.log` in the data dir
    pub fn resolved_log_file(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_local_dir().join("healthquest-tui.log"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.api_url.is_none());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            api_url: Some("http://127.0.0.1:8000/api/predict".to_string()),
            log_file: Some(PathBuf::from("/tmp/hq.log")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.api_url,
            Some("http://127.0.0.1:8000/api/predict".to_string())
        );
        assert_eq!(parsed.log_file, Some(PathBuf::from("/tmp/hq.log")));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.api_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"api_url": "http://x/api/predict", "theme": "dark"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.api_url, Some("http://x/api/predict".to_string()));
    }

    #[test]
    fn test_load_from_missing_file_gives_default() {
        let path = std::env::temp_dir().join("healthquest-tui-missing-config.json");
        let _ = fs::remove_file(&path);
        let config = TuiConfig::load_from(&path).unwrap();
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "healthquest-tui-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"api_url": "http://10.0.0.2:5000/api/predict"}"#).unwrap();
        let config = TuiConfig::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(
            config.api_url,
            Some("http://10.0.0.2:5000/api/predict".to_string())
        );
    }

    #[test]
    fn test_load_from_invalid_file_errors() {
        let path = std::env::temp_dir().join(format!(
            "healthquest-tui-bad-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, "not json").unwrap();
        let result = TuiConfig::load_from(&path);
        let _ = fs::remove_file(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_api_url_resolution_order() {
        let config = TuiConfig {
            api_url: Some("http://file/api/predict".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_api_url(Some("http://env/api/predict".to_string())),
            "http://env/api/predict"
        );
        assert_eq!(config.resolve_api_url(Some("  ".to_string())), "http://file/api/predict");
        assert_eq!(config.resolve_api_url(None), "http://file/api/predict");
        assert_eq!(TuiConfig::default().resolve_api_url(None), DEFAULT_API_URL);
    }

    #[test]
    fn test_configured_log_file_wins() {
        let config = TuiConfig {
            log_file: Some(PathBuf::from("/var/log/hq.log")),
            ..Default::default()
        };
        assert_eq!(config.resolved_log_file(), Some(PathBuf::from("/var/log/hq.log")));
    }
}
