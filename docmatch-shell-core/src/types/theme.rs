//! Theme preference

use std::fmt;

use serde::{Deserialize, Serialize};

use super::IconId;

/// Process-wide theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// Get all theme options
    pub fn all() -> &'static [ThemePreference] {
        &[ThemePreference::Light, ThemePreference::Dark]
    }

    /// The other theme
    #[must_use]
    pub fn toggled(self) -> ThemePreference {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase mode name, as used in user-facing messages
    pub fn mode_name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon shown on the toggle control: the mode you would switch to.
    pub fn toggle_icon(self) -> IconId {
        match self {
            Self::Dark => IconId::Sun,
            Self::Light => IconId::Moon,
        }
    }

    /// Parse a mode name (case-insensitive)
    pub fn from_name(name: &str) -> Option<ThemePreference> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mode_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_twice_is_identity() {
        for pref in ThemePreference::all() {
            assert_eq!(pref.toggled().toggled(), *pref);
            assert_ne!(pref.toggled(), *pref);
        }
    }

    #[test]
    fn toggle_icon_points_at_other_mode() {
        assert_eq!(ThemePreference::Dark.toggle_icon(), IconId::Sun);
        assert_eq!(ThemePreference::Light.toggle_icon(), IconId::Moon);
    }

    #[test]
    fn from_name_accepts_mixed_case() {
        assert_eq!(ThemePreference::from_name(" Dark "), Some(ThemePreference::Dark));
        assert_eq!(ThemePreference::from_name("LIGHT"), Some(ThemePreference::Light));
        assert_eq!(ThemePreference::from_name("sepia"), None);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemePreference::Light).unwrap(), "\"light\"");
    }
}
