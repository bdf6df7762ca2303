//! Theme preference store backed by a JSON file

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::config_dir;
use crate::error::{ShellError, ShellResult};
use crate::traits::PreferenceStore;
use crate::types::ThemePreference;

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreferences {
    theme: ThemePreference,
}

/// JSON file preference store
///
/// Storage location: `<config_dir>/docmatch-shell/preferences.json`
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default per-user location
    pub fn default_location() -> Self {
        Self::new(config_dir().join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn load(&self) -> ShellResult<Option<ThemePreference>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| ShellError::Storage(e.to_string()))?;
        let stored: StoredPreferences = serde_json::from_str(&content)
            .map_err(|e| ShellError::Serialization(e.to_string()))?;

        Ok(Some(stored.theme))
    }

    fn save(&self, preference: ThemePreference) -> ShellResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| ShellError::Storage(e.to_string()))?;
            }
        }

        let content = serde_json::to_string_pretty(&StoredPreferences { theme: preference })
            .map_err(|e| ShellError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| ShellError::Storage(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPreferenceStore::new(dir.path().join("preferences.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPreferenceStore::new(dir.path().join("nested/shell/preferences.json"));
        store.save(ThemePreference::Light).unwrap();
        assert_eq!(store.load().unwrap(), Some(ThemePreference::Light));

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"light\""));
    }

    #[test]
    fn corrupt_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{"theme":"sepia"}"#).unwrap();
        let store = JsonPreferenceStore::new(path);
        assert!(matches!(store.load(), Err(ShellError::Serialization(_))));
    }
}
