//! Routing collaborator abstract Trait

use std::sync::{Mutex, PoisonError};

use crate::types::{CurrentLocation, Locator};

/// Router Trait
///
/// The shell reads `current()` on every render and never caches it.
/// Provides a default memory implementation of `MemoryRouter`.
pub trait Router: Send + Sync {
    /// Location as the router reports it right now
    fn current(&self) -> CurrentLocation;

    /// Request navigation to a destination
    ///
    /// # Arguments
    /// * `target` - Destination path plus optional fragment
    fn navigate(&self, target: &Locator);
}

/// In-memory router with a history stack
///
/// Used by the terminal front end and by tests.
pub struct MemoryRouter {
    history: Mutex<Vec<CurrentLocation>>,
}

impl MemoryRouter {
    /// Create a router positioned at `start`
    #[must_use]
    pub fn new(start: CurrentLocation) -> Self {
        Self {
            history: Mutex::new(vec![start]),
        }
    }

    /// Go to the previous location. Returns `false` when already at the first one.
    pub fn back(&self) -> bool {
        let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        if history.len() > 1 {
            history.pop();
            log::debug!("router back to {}", history.last().map(ToString::to_string).unwrap_or_default());
            true
        } else {
            false
        }
    }

    /// Number of locations in the history stack
    pub fn depth(&self) -> usize {
        self.history.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new(CurrentLocation::root())
    }
}

impl Router for MemoryRouter {
    fn current(&self) -> CurrentLocation {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
            .unwrap_or_else(CurrentLocation::root)
    }

    fn navigate(&self, target: &Locator) {
        let next = CurrentLocation::from(target);
        let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        // Re-activating the current destination does not grow the history.
        if history.last() != Some(&next) {
            log::debug!("router navigate to {next}");
            history.push(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_root() {
        let router = MemoryRouter::default();
        assert_eq!(router.current(), CurrentLocation::root());
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn navigate_then_back() {
        let router = MemoryRouter::default();
        router.navigate(&Locator::parse("/#upload").unwrap());
        assert_eq!(router.current(), CurrentLocation::new("/", Some("upload")));

        assert!(router.back());
        assert_eq!(router.current(), CurrentLocation::root());
        assert!(!router.back());
    }

    #[test]
    fn repeated_navigation_is_not_recorded_twice() {
        let router = MemoryRouter::default();
        let admin = Locator::parse("/admin").unwrap();
        router.navigate(&admin);
        router.navigate(&admin);
        assert_eq!(router.depth(), 2);
    }
}
