//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Shell layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ShellError {
    /// Two navigation entries share a label
    #[error("Duplicate navigation label: {0}")]
    DuplicateLabel(String),

    /// Two navigation entries resolve to the same destination
    #[error("Duplicate navigation target: {0}")]
    DuplicateTarget(String),

    /// Malformed locator (e.g. a path carrying the fragment separator)
    #[error("Invalid locator: {0}")]
    InvalidLocator(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// The process-wide theme store refused the change
    #[error("Theme store unavailable: {0}")]
    ThemeStoreUnavailable(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ShellError {
    /// Whether it is expected behavior (bad input, collaborator temporarily gone), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::DuplicateLabel(_)
            | Self::DuplicateTarget(_)
            | Self::InvalidLocator(_)
            | Self::Validation(_)
            | Self::ThemeStoreUnavailable(_) => true,
            Self::Storage(_) | Self::Serialization(_) | Self::Config(_) => false,
        }
    }

    /// Log this error at the level picked by [`ShellError::is_expected`].
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

/// Shell layer Result type alias
pub type ShellResult<T> = std::result::Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collaborator_outages_are_expected() {
        assert!(ShellError::ThemeStoreUnavailable("gone".into()).is_expected());
        assert!(ShellError::DuplicateLabel("Home".into()).is_expected());
        assert!(!ShellError::Storage("disk full".into()).is_expected());
        assert!(!ShellError::Config("bad json".into()).is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(ShellError::InvalidLocator("/a#b".into())).unwrap();
        assert_eq!(json["code"], "InvalidLocator");
        assert_eq!(json["details"], "/a#b");
    }
}
