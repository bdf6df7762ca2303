//! In-memory toast queue
//!
//! `Notifier` implementation for front ends that draw their own toasts.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::traits::Notifier;

/// Older toasts are dropped beyond this many
const MAX_TOASTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>, ttl: chrono::Duration) -> bool {
        now - self.created_at >= ttl
    }
}

#[derive(Default)]
pub struct ToastQueue {
    toasts: Mutex<VecDeque<Toast>>,
}

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent toast
    pub fn latest(&self) -> Option<Toast> {
        self.lock().back().cloned()
    }

    /// Remove expired toasts, returns how many were removed
    pub fn prune(&self, now: DateTime<Utc>, ttl: chrono::Duration) -> usize {
        let mut toasts = self.lock();
        let before = toasts.len();
        toasts.retain(|t| !t.is_expired(now, ttl));
        before - toasts.len()
    }

    /// Take every toast, oldest first
    pub fn drain(&self) -> Vec<Toast> {
        self.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Toast>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, message: &str) {
        let mut toasts = self.lock();
        toasts.push_back(Toast::new(message));
        while toasts.len() > MAX_TOASTS {
            toasts.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_appends_and_latest_is_newest() {
        let queue = ToastQueue::new();
        queue.notify("first");
        queue.notify("second");
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.latest().unwrap().message, "second");
    }

    #[test]
    fn prune_drops_expired_only() {
        let queue = ToastQueue::new();
        queue.notify("old");
        let ttl = chrono::Duration::seconds(3);

        assert_eq!(queue.prune(Utc::now(), ttl), 0);
        assert_eq!(queue.prune(Utc::now() + chrono::Duration::seconds(10), ttl), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn capacity_is_bounded() {
        let queue = ToastQueue::new();
        for i in 0..20 {
            queue.notify(&format!("toast {i}"));
        }
        let drained = queue.drain();
        assert_eq!(drained.len(), MAX_TOASTS);
        assert_eq!(drained[0].message, "toast 12");
        assert!(queue.is_empty());
    }
}
