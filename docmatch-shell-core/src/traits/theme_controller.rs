//! Theme preference controller abstract Trait

use tokio::sync::watch;

use crate::error::ShellResult;
use crate::types::ThemePreference;

/// Process-wide theme controller Trait
///
/// Owns the one theme preference shared by every shell in the process.
/// `toggle` is the single mutator; readers either call `current` or hold a
/// subscription.
pub trait ThemeController: Send + Sync {
    /// Current preference
    fn current(&self) -> ThemePreference;

    /// Flip Light/Dark and return the new preference.
    ///
    /// The new value is visible to every reader before this returns. On error
    /// the preference is left unchanged.
    fn toggle(&self) -> ShellResult<ThemePreference>;

    /// Subscribe to preference changes
    fn subscribe(&self) -> watch::Receiver<ThemePreference>;
}
