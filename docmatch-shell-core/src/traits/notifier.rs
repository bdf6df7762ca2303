//! Notification collaborator abstract Trait

/// Notification sink Trait
///
/// Fire-and-forget: surfaces one short confirmation message to the user.
pub trait Notifier: Send + Sync {
    /// Surface a transient message
    ///
    /// # Arguments
    /// * `message` - Short user-facing text
    fn notify(&self, message: &str);
}
