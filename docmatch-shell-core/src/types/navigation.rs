//! Navigation model: the fixed, ordered list of application sections

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{IconId, Locator};
use crate::error::{ShellError, ShellResult};

/// One side-panel entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub label: String,
    pub target: Locator,
    pub icon: IconId,
}

impl NavigationEntry {
    pub fn new(label: impl Into<String>, target: Locator, icon: IconId) -> Self {
        Self {
            label: label.into(),
            target,
            icon,
        }
    }
}

/// Ordered navigation entries with unique labels and unique targets.
///
/// Immutable once built; iteration always follows declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationModel {
    entries: Vec<NavigationEntry>,
}

impl NavigationModel {
    /// Validate and build a model.
    ///
    /// # Errors
    /// `Validation` for an empty label, `DuplicateLabel` / `DuplicateTarget`
    /// when two entries collide.
    pub fn new(entries: Vec<NavigationEntry>) -> ShellResult<Self> {
        let mut labels = HashSet::new();
        let mut targets = HashSet::new();

        for entry in &entries {
            if entry.label.trim().is_empty() {
                return Err(ShellError::Validation(format!(
                    "navigation entry for `{}` has an empty label",
                    entry.target
                )));
            }
            if !labels.insert(entry.label.as_str()) {
                return Err(ShellError::DuplicateLabel(entry.label.clone()));
            }
            if !targets.insert(entry.target.key()) {
                return Err(ShellError::DuplicateTarget(entry.target.to_string()));
            }
        }

        Ok(Self { entries })
    }

    /// The DocMatch sections.
    pub fn docmatch() -> Self {
        let entry = |label: &str, path: &str, fragment: Option<&str>, icon| NavigationEntry {
            label: label.to_string(),
            target: Locator {
                path: path.to_string(),
                fragment: fragment.map(str::to_string),
            },
            icon,
        };

        Self {
            entries: vec![
                entry("Home", "/", None, IconId::Home),
                entry("Upload Documents", "/", Some("upload"), IconId::Upload),
                entry("Match Documents", "/", Some("match"), IconId::Search),
                entry("My Documents", "/", Some("documents"), IconId::FileText),
                entry("Credits", "/", Some("credits"), IconId::CreditCard),
                entry("Admin Dashboard", "/admin", None, IconId::Settings),
            ],
        }
    }

    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NavigationEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NavigationEntry> {
        self.entries.get(index)
    }

    /// Index of the entry with this label
    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.label == label)
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::docmatch()
    }
}

impl<'a> IntoIterator for &'a NavigationModel {
    type Item = &'a NavigationEntry;
    type IntoIter = std::slice::Iter<'a, NavigationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, target: &str) -> NavigationEntry {
        NavigationEntry::new(label, Locator::parse(target).unwrap(), IconId::Home)
    }

    #[test]
    fn docmatch_table_is_valid() {
        let model = NavigationModel::docmatch();
        // Re-validating the built-in table must succeed.
        let rebuilt = NavigationModel::new(model.entries().to_vec()).unwrap();
        assert_eq!(rebuilt, model);
        assert_eq!(model.len(), 6);
    }

    #[test]
    fn docmatch_order_is_fixed() {
        let labels: Vec<_> = NavigationModel::docmatch()
            .iter()
            .map(|e| e.label.clone())
            .collect();
        assert_eq!(
            labels,
            [
                "Home",
                "Upload Documents",
                "Match Documents",
                "My Documents",
                "Credits",
                "Admin Dashboard"
            ]
        );
    }

    #[test]
    fn docmatch_targets() {
        let model = NavigationModel::docmatch();
        let targets: Vec<_> = model.iter().map(|e| e.target.to_string()).collect();
        assert_eq!(
            targets,
            ["/", "/#upload", "/#match", "/#documents", "/#credits", "/admin"]
        );
    }

    #[test]
    fn duplicate_label_rejected() {
        let err = NavigationModel::new(vec![entry("Home", "/"), entry("Home", "/admin")]).unwrap_err();
        assert!(matches!(err, ShellError::DuplicateLabel(label) if label == "Home"));
    }

    #[test]
    fn duplicate_target_rejected() {
        let err = NavigationModel::new(vec![entry("Home", "/"), entry("Start", "/#")]).unwrap_err();
        assert!(matches!(err, ShellError::DuplicateTarget(target) if target == "/"));
    }

    #[test]
    fn blank_label_rejected() {
        let err = NavigationModel::new(vec![entry("  ", "/")]).unwrap_err();
        assert!(matches!(err, ShellError::Validation(_)));
    }

    #[test]
    fn position_by_label() {
        let model = NavigationModel::docmatch();
        assert_eq!(model.position("Credits"), Some(4));
        assert_eq!(model.position("Billing"), None);
    }

    #[test]
    fn empty_model_is_allowed() {
        let model = NavigationModel::new(Vec::new()).unwrap();
        assert!(model.is_empty());
        assert!(model.get(0).is_none());
    }
}
