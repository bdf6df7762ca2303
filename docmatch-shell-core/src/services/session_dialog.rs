//! Session dialog state machine
//!
//! `Closed` ⇄ `Open`, starting `Closed`. Visibility is derived from whether a
//! form is mounted, so a mounted-but-closed dialog cannot be represented.

use std::rc::Rc;

use serde::Serialize;

use crate::traits::{AuthForm, CloseHandle, CloseSlot};

/// Dialog visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DialogVisibility {
    #[default]
    Closed,
    Open,
}

impl DialogVisibility {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl From<bool> for DialogVisibility {
    fn from(open: bool) -> Self {
        if open {
            Self::Open
        } else {
            Self::Closed
        }
    }
}

/// Authentication dialog owned by one shell instance.
pub struct SessionDialog<F: AuthForm> {
    form: Option<F>,
    slot: Rc<CloseSlot>,
    mount_count: u64,
}

impl<F: AuthForm> SessionDialog<F> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: None,
            slot: Rc::new(CloseSlot::default()),
            mount_count: 0,
        }
    }

    pub fn visibility(&self) -> DialogVisibility {
        DialogVisibility::from(self.form.is_some())
    }

    pub fn is_open(&self) -> bool {
        self.form.is_some()
    }

    /// Mount a fresh form. No-op while already open.
    pub fn open(&mut self) {
        if self.form.is_some() {
            return;
        }
        let generation = self.slot.next_generation();
        self.form = Some(F::mount(CloseHandle::new(Rc::clone(&self.slot), generation)));
        self.mount_count += 1;
        log::debug!("session dialog opened (mount #{})", self.mount_count);
    }

    /// Unmount the form. No-op while already closed.
    pub fn close(&mut self) {
        if self.form.take().is_some() {
            // Invalidate the handle the dropped form was holding.
            self.slot.next_generation();
            log::debug!("session dialog closed");
        }
    }

    /// Visibility change coming from the dialog itself (escape, backdrop).
    pub fn set_visibility(&mut self, open: bool) {
        if open {
            self.open();
        } else {
            self.close();
        }
    }

    /// Apply a close request made through the form's handle.
    ///
    /// Returns `true` if the dialog closed.
    pub fn settle(&mut self) -> bool {
        if self.slot.take_pending() && self.form.is_some() {
            self.close();
            true
        } else {
            false
        }
    }

    /// The mounted form, only while open
    pub fn form(&self) -> Option<&F> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut F> {
        self.form.as_mut()
    }

    /// How many times a form has been mounted
    pub fn mount_count(&self) -> u64 {
        self.mount_count
    }
}

impl<F: AuthForm> Default for SessionDialog<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Form with some internal state and a cancel button.
    struct ProbeForm {
        close: CloseHandle,
        typed: String,
    }

    impl AuthForm for ProbeForm {
        fn mount(close: CloseHandle) -> Self {
            Self {
                close,
                typed: String::new(),
            }
        }
    }

    impl ProbeForm {
        fn cancel(&self) {
            self.close.request();
        }
    }

    #[test]
    fn starts_closed() {
        let dialog: SessionDialog<ProbeForm> = SessionDialog::new();
        assert_eq!(dialog.visibility(), DialogVisibility::Closed);
        assert!(dialog.form().is_none());
        assert_eq!(dialog.mount_count(), 0);
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut dialog: SessionDialog<ProbeForm> = SessionDialog::new();
        dialog.close();
        assert_eq!(dialog.visibility(), DialogVisibility::Closed);

        dialog.open();
        dialog.form_mut().unwrap().typed.push('x');
        dialog.open();
        assert!(dialog.is_open());
        assert_eq!(dialog.mount_count(), 1);
        assert_eq!(dialog.form().unwrap().typed, "x");

        dialog.close();
        dialog.close();
        assert!(!dialog.is_open());
    }

    #[test]
    fn reopen_mounts_fresh_form() {
        let mut dialog: SessionDialog<ProbeForm> = SessionDialog::new();
        dialog.open();
        dialog.form_mut().unwrap().typed.push_str("alice@example.com");
        dialog.close();
        assert!(dialog.form().is_none());

        dialog.open();
        assert_eq!(dialog.form().unwrap().typed, "");
        assert_eq!(dialog.mount_count(), 2);
    }

    #[test]
    fn form_close_affordance_closes_dialog() {
        let mut dialog: SessionDialog<ProbeForm> = SessionDialog::new();
        dialog.open();
        dialog.form().unwrap().cancel();
        assert!(dialog.settle());
        assert_eq!(dialog.visibility(), DialogVisibility::Closed);
        assert!(dialog.form().is_none());
        assert!(!dialog.settle());
    }

    #[test]
    fn stale_handle_cannot_close_new_mount() {
        let mut dialog: SessionDialog<ProbeForm> = SessionDialog::new();
        dialog.open();
        let old_handle = dialog.form().unwrap().close.clone();
        dialog.close();
        dialog.open();

        old_handle.request();
        assert!(!dialog.settle());
        assert!(dialog.is_open());
    }

    #[test]
    fn set_visibility_follows_dialog_gestures() {
        let mut dialog: SessionDialog<ProbeForm> = SessionDialog::new();
        dialog.set_visibility(true);
        assert!(dialog.is_open());
        dialog.set_visibility(false);
        assert!(!dialog.is_open());
        dialog.set_visibility(false);
        assert_eq!(dialog.visibility(), DialogVisibility::Closed);
    }
}
