//! Active route matching
//!
//! Maps the router-reported location to at most one navigation entry.

use crate::types::{CurrentLocation, NavigationEntry};

/// Index of the first entry whose target equals `current`, in declaration order.
pub fn active_index(entries: &[NavigationEntry], current: &CurrentLocation) -> Option<usize> {
    let key = current.key();
    entries.iter().position(|entry| entry.target.key() == key)
}

/// The entry to highlight for `current`, or `None` when nothing matches.
pub fn match_active<'a>(
    entries: &'a [NavigationEntry],
    current: &CurrentLocation,
) -> Option<&'a NavigationEntry> {
    active_index(entries, current).map(|i| &entries[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IconId, Locator, NavigationModel};

    fn entry(label: &str, target: &str) -> NavigationEntry {
        NavigationEntry::new(label, Locator::parse(target).unwrap(), IconId::Home)
    }

    #[test]
    fn root_matches_home() {
        let entries = [entry("Home", "/"), entry("Admin", "/admin")];
        let active = match_active(&entries, &CurrentLocation::root());
        assert_eq!(active.map(|e| e.label.as_str()), Some("Home"));
    }

    #[test]
    fn fragment_without_entry_matches_nothing() {
        let entries = [entry("Home", "/"), entry("Admin", "/admin")];
        let current = CurrentLocation::new("/", Some("upload"));
        assert!(match_active(&entries, &current).is_none());
    }

    #[test]
    fn fragment_with_entry_matches_it() {
        let entries = [entry("Home", "/"), entry("Upload", "/#upload"), entry("Admin", "/admin")];
        let current = CurrentLocation::new("/", Some("upload"));
        assert_eq!(active_index(&entries, &current), Some(1));
    }

    #[test]
    fn empty_fragment_matches_root_entry() {
        let entries = [entry("Home", "/"), entry("Upload", "/#upload")];
        let current = CurrentLocation {
            path: "/".to_string(),
            fragment: Some(String::new()),
        };
        assert_eq!(active_index(&entries, &current), Some(0));
    }

    #[test]
    fn path_carrying_separator_does_not_alias() {
        let entries = [entry("Upload", "/#upload")];
        let current = CurrentLocation::new("/#upload", None);
        assert!(match_active(&entries, &current).is_none());
    }

    #[test]
    fn first_declared_wins_on_shared_key() {
        // Only reachable by bypassing NavigationModel validation.
        let entries = [entry("First", "/admin"), entry("Second", "/admin")];
        let current = CurrentLocation::new("/admin", None);
        assert_eq!(active_index(&entries, &current), Some(0));
    }

    #[test]
    fn at_most_one_active_for_every_docmatch_location() {
        let model = NavigationModel::docmatch();
        let probes = [
            CurrentLocation::root(),
            CurrentLocation::new("/", Some("upload")),
            CurrentLocation::new("/", Some("match")),
            CurrentLocation::new("/", Some("documents")),
            CurrentLocation::new("/", Some("credits")),
            CurrentLocation::new("/", Some("pricing")),
            CurrentLocation::new("/admin", None),
            CurrentLocation::new("/admin", Some("users")),
            CurrentLocation::new("/missing", None),
        ];
        for current in &probes {
            let hits: Vec<_> = model
                .iter()
                .filter(|e| e.target.key() == current.key())
                .collect();
            assert!(hits.len() <= 1);
            assert_eq!(match_active(model.entries(), current), hits.first().copied());
        }
    }

    #[test]
    fn no_entries_no_match() {
        assert!(match_active(&[], &CurrentLocation::root()).is_none());
    }
}
