use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::request::{DEFAULT_BASE_URL, Endpoint};

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// # base_url = "https://api.weatherapi.com/v1/current.json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// WeatherAPI.com key sent with every lookup.
    pub api_key: Option<String>,

    /// Overrides the default "current weather" endpoint.
    pub base_url: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// The endpoint every lookup is sent to.
    pub fn endpoint(&self) -> Result<Endpoint> {
        let api_key = self.api_key.as_deref().filter(|k| !k.trim().is_empty()).ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `weather configure` and enter your WeatherAPI.com key."
            )
        })?;

        let base_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        Endpoint::with_base_url(base_url, api_key.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_errors_when_key_not_set() {
        let cfg = Config::default();
        let err = cfg.endpoint().unwrap_err();

        assert!(err.to_string().contains("No API key configured"));
        assert!(err.to_string().contains("Hint: run `weather configure`"));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let mut cfg = Config::default();
        cfg.set_api_key("   ".into());

        assert!(!cfg.is_configured());
        assert!(cfg.endpoint().is_err());
    }

    #[test]
    fn endpoint_uses_default_base_url() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".into());

        let endpoint = cfg.endpoint().expect("endpoint must build");
        assert_eq!(endpoint.base_url().as_str(), DEFAULT_BASE_URL);
        assert!(cfg.is_configured());
    }

    #[test]
    fn endpoint_honors_base_url_override() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            base_url: Some("http://localhost:8080/v1/current.json".into()),
        };

        let endpoint = cfg.endpoint().expect("endpoint must build");
        assert_eq!(endpoint.base_url().as_str(), "http://localhost:8080/v1/current.json");
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let cfg = Config { api_key: Some("KEY".into()), base_url: Some("::nope::".into()) };

        let err = cfg.endpoint().unwrap_err();
        assert!(err.to_string().contains("Invalid weather endpoint URL"));
    }

    #[test]
    fn load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load_from_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.set_api_key("SAVED_KEY".into());
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_key.as_deref(), Some("SAVED_KEY"));
        assert_eq!(loaded.base_url, None);
    }

    #[test]
    fn malformed_file_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_key = [not toml").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
