//! Navigable destinations and the router-reported location

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ShellError, ShellResult};

/// Separator between a path and its fragment in the textual form.
pub const FRAGMENT_SEPARATOR: char = '#';

/// Composite comparison key: the path plus the fragment, if any.
///
/// Compared structurally so that a path containing the separator can never
/// alias a `path#fragment` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompositeKey<'a> {
    pub path: &'a str,
    pub fragment: Option<&'a str>,
}

impl fmt::Display for CompositeKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fragment {
            Some(fragment) => write!(f, "{}{FRAGMENT_SEPARATOR}{fragment}", self.path),
            None => f.write_str(self.path),
        }
    }
}

/// Empty fragments mean "no fragment".
fn normalize_fragment(fragment: Option<String>) -> Option<String> {
    fragment.filter(|f| !f.is_empty())
}

/// A path plus an optional fragment identifying a navigable destination.
///
/// Serialized in its textual form, e.g. `"/#upload"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locator {
    pub(crate) path: String,
    pub(crate) fragment: Option<String>,
}

impl Locator {
    /// Create a locator, rejecting paths that carry the fragment separator.
    pub fn new(path: impl Into<String>, fragment: Option<&str>) -> ShellResult<Self> {
        let path = path.into();
        if path.contains(FRAGMENT_SEPARATOR) {
            return Err(ShellError::InvalidLocator(format!(
                "path `{path}` must not contain `{FRAGMENT_SEPARATOR}`"
            )));
        }
        Ok(Self {
            path,
            fragment: normalize_fragment(fragment.map(str::to_string)),
        })
    }

    /// Parse the textual form (`/`, `/#upload`, `/admin`), splitting on the first separator.
    pub fn parse(text: &str) -> ShellResult<Self> {
        match text.split_once(FRAGMENT_SEPARATOR) {
            Some((path, fragment)) => Self::new(path, Some(fragment)),
            None => Self::new(text, None),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn key(&self) -> CompositeKey<'_> {
        CompositeKey {
            path: &self.path,
            fragment: self.fragment.as_deref(),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.key().fmt(f)
    }
}

impl TryFrom<String> for Locator {
    type Error = ShellError;

    fn try_from(text: String) -> ShellResult<Self> {
        Self::parse(&text)
    }
}

impl From<Locator> for String {
    fn from(locator: Locator) -> Self {
        locator.to_string()
    }
}

/// Where the router says the application currently is.
///
/// Taken verbatim from the routing collaborator; only the empty fragment is
/// normalized to "no fragment".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CurrentLocation {
    pub path: String,
    pub fragment: Option<String>,
}

impl CurrentLocation {
    pub fn new(path: impl Into<String>, fragment: Option<&str>) -> Self {
        Self {
            path: path.into(),
            fragment: normalize_fragment(fragment.map(str::to_string)),
        }
    }

    /// Root path without a fragment.
    pub fn root() -> Self {
        Self::new("/", None)
    }

    pub fn key(&self) -> CompositeKey<'_> {
        CompositeKey {
            path: &self.path,
            fragment: self.fragment.as_deref().filter(|f| !f.is_empty()),
        }
    }
}

impl From<&Locator> for CurrentLocation {
    fn from(locator: &Locator) -> Self {
        Self {
            path: locator.path.clone(),
            fragment: locator.fragment.clone(),
        }
    }
}

impl fmt::Display for CurrentLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.key().fmt(f)
    }
}
