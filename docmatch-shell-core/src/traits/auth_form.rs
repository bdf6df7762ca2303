//! Authentication form collaborator abstract Trait

use std::cell::Cell;
use std::rc::Rc;

/// Authentication form Trait
///
/// Mounted only while the session dialog is open. Each mount gets a fresh
/// value, so nothing typed into a previous instance survives a close.
pub trait AuthForm {
    /// Build a fresh form
    ///
    /// # Arguments
    /// * `close` - The form's only capability: asking the dialog to close
    fn mount(close: CloseHandle) -> Self;
}

/// Shared between the dialog and the handles it gives out.
#[derive(Debug, Default)]
pub(crate) struct CloseSlot {
    generation: Cell<u64>,
    pending: Cell<bool>,
}

impl CloseSlot {
    /// Start a new mount; handles from older mounts stop working.
    pub(crate) fn next_generation(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        self.pending.set(false);
        next
    }

    /// Take the pending close request, if any
    pub(crate) fn take_pending(&self) -> bool {
        self.pending.replace(false)
    }
}

/// Zero-argument close request handed to a mounted form.
#[derive(Debug, Clone)]
pub struct CloseHandle {
    slot: Rc<CloseSlot>,
    generation: u64,
}

impl CloseHandle {
    pub(crate) fn new(slot: Rc<CloseSlot>, generation: u64) -> Self {
        Self { slot, generation }
    }

    /// Ask the dialog to close. Ignored if this form was already unmounted.
    pub fn request(&self) {
        if self.is_live() {
            self.slot.pending.set(true);
        }
    }

    /// Whether the form holding this handle is still the mounted one
    pub fn is_live(&self) -> bool {
        self.slot.generation.get() == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_handle_is_ignored() {
        let slot = Rc::new(CloseSlot::default());
        let first = CloseHandle::new(Rc::clone(&slot), slot.next_generation());
        let second = CloseHandle::new(Rc::clone(&slot), slot.next_generation());

        first.request();
        assert!(!first.is_live());
        assert!(!slot.take_pending());

        second.request();
        assert!(slot.take_pending());
        assert!(!slot.take_pending());
    }
}
