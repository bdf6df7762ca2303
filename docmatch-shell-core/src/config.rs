//! Shell configuration
//!
//! Read from `<config_dir>/docmatch-shell/config.json`. A missing file means
//! defaults; a malformed one is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ShellError, ShellResult};
use crate::types::ThemePreference;

const MAX_TOAST_TTL_SECS: i64 = 24 * 60 * 60;

/// Get the configuration directory path
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("docmatch-shell")
}

/// Get the configuration file path
pub fn config_file() -> PathBuf {
    config_dir().join("config.json")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShellConfig {
    /// Theme used when no preference has been stored yet
    pub default_theme: ThemePreference,
    /// How long a confirmation toast stays visible
    pub toast_ttl_secs: u64,
    /// Write theme changes through to `preferences.json`
    pub persist_theme: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemePreference::Dark,
            toast_ttl_secs: 3,
            persist_theme: true,
        }
    }
}

impl ShellConfig {
    /// Load from the default location
    pub fn load() -> ShellResult<Self> {
        Self::load_from(&config_file())
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> ShellResult<Self> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ShellError::Config(format!("{}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ShellError::Config(format!("{}: {e}", path.display())))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Toast lifetime, capped at one day
    pub fn toast_ttl(&self) -> chrono::Duration {
        let secs = i64::try_from(self.toast_ttl_secs).unwrap_or(i64::MAX);
        chrono::Duration::seconds(secs.min(MAX_TOAST_TTL_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShellConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "defaultTheme": "light" }"#).unwrap();

        let config = ShellConfig::load_from(&path).unwrap();
        assert_eq!(config.default_theme, ThemePreference::Light);
        assert_eq!(config.toast_ttl_secs, 3);
        assert!(config.persist_theme);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ShellConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ShellError::Config(_)));
        assert!(!err.is_expected());
    }

    #[test]
    fn toast_ttl_in_seconds() {
        let config = ShellConfig {
            toast_ttl_secs: 5,
            ..ShellConfig::default()
        };
        assert_eq!(config.toast_ttl().num_seconds(), 5);

        let huge = ShellConfig {
            toast_ttl_secs: u64::MAX,
            ..ShellConfig::default()
        };
        assert_eq!(huge.toast_ttl().num_seconds(), 86_400);
    }
}
