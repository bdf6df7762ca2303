//! Process-wide theme state
//!
//! One `watch` channel per process. Every clone of [`SharedTheme`] points at
//! the same channel, so a toggle through any handle is seen by all readers
//! before `toggle` returns.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;

use crate::error::{ShellError, ShellResult};
use crate::traits::{PreferenceStore, ThemeController};
use crate::types::ThemePreference;

struct SharedThemeInner {
    sender: watch::Sender<ThemePreference>,
    store: Option<Arc<dyn PreferenceStore>>,
    /// Serializes toggles so the store and the channel never disagree
    toggle_lock: Mutex<()>,
}

/// Cloneable handle to the process-wide theme preference.
#[derive(Clone)]
pub struct SharedTheme {
    inner: Arc<SharedThemeInner>,
}

impl SharedTheme {
    /// In-memory theme state starting at `initial`
    #[must_use]
    pub fn new(initial: ThemePreference) -> Self {
        Self::build(initial, None)
    }

    /// Theme state backed by a store.
    ///
    /// The stored preference is read once; if the store is empty or fails,
    /// `fallback` is used. Every toggle is written through to the store.
    pub fn initialize(store: Arc<dyn PreferenceStore>, fallback: ThemePreference) -> Self {
        let initial = match store.load() {
            Ok(Some(stored)) => {
                log::info!("Theme preference restored: {stored}");
                stored
            }
            Ok(None) => {
                log::info!("No stored theme preference, using {fallback}");
                fallback
            }
            Err(e) => {
                e.log("Failed to load theme preference");
                fallback
            }
        };
        Self::build(initial, Some(store))
    }

    fn build(initial: ThemePreference, store: Option<Arc<dyn PreferenceStore>>) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            inner: Arc::new(SharedThemeInner {
                sender,
                store,
                toggle_lock: Mutex::new(()),
            }),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.inner.sender.receiver_count()
    }
}

impl ThemeController for SharedTheme {
    fn current(&self) -> ThemePreference {
        *self.inner.sender.borrow()
    }

    fn toggle(&self) -> ShellResult<ThemePreference> {
        let _guard = self
            .inner
            .toggle_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let next = self.current().toggled();

        if let Some(store) = &self.inner.store {
            store.save(next).map_err(|e| match e {
                ShellError::ThemeStoreUnavailable(msg) => ShellError::ThemeStoreUnavailable(msg),
                other => ShellError::ThemeStoreUnavailable(other.to_string()),
            })?;
        }

        self.inner.sender.send_replace(next);
        log::info!("Theme switched to {next}");
        Ok(next)
    }

    fn subscribe(&self) -> watch::Receiver<ThemePreference> {
        self.inner.sender.subscribe()
    }
}
