//! Theme preference persistence abstract Trait

use std::sync::{Mutex, PoisonError};

use crate::error::{ShellError, ShellResult};
use crate::types::ThemePreference;

/// Preference store Trait
///
/// Platform implementation:
/// - Terminal: `JsonPreferenceStore` (JSON file in the user config dir)
/// - Tests: `MemoryPreferenceStore`
pub trait PreferenceStore: Send + Sync {
    /// Load the stored preference, `None` if nothing was stored yet
    fn load(&self) -> ShellResult<Option<ThemePreference>>;

    /// Save the preference
    ///
    /// # Arguments
    /// * `preference` - New preference
    fn save(&self, preference: ThemePreference) -> ShellResult<()>;
}

/// In-memory preference store
///
/// Can be switched offline to simulate an unavailable store.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    value: Mutex<Option<ThemePreference>>,
    offline: Mutex<bool>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new(initial: Option<ThemePreference>) -> Self {
        Self {
            value: Mutex::new(initial),
            offline: Mutex::new(false),
        }
    }

    /// Make every subsequent `load`/`save` fail (or succeed again)
    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock().unwrap_or_else(PoisonError::into_inner) = offline;
    }

    fn check_online(&self) -> ShellResult<()> {
        if *self.offline.lock().unwrap_or_else(PoisonError::into_inner) {
            return Err(ShellError::ThemeStoreUnavailable(
                "memory store is offline".to_string(),
            ));
        }
        Ok(())
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> ShellResult<Option<ThemePreference>> {
        self.check_online()?;
        Ok(*self.value.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn save(&self, preference: ThemePreference) -> ShellResult<()> {
        self.check_online()?;
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = Some(preference);
        Ok(())
    }
}
