//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single key binding
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// Whether the key event matches this binding
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default key map
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // Top bar
    pub const TOGGLE_THEME: KeyBinding = KeyBinding::key(KeyCode::Char('t'));
    pub const OPEN_AUTH: KeyBinding = KeyBinding::key(KeyCode::Char('l'));

    // Panel focus
    pub const FOCUS_NEXT: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const FOCUS_LEFT: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const FOCUS_RIGHT: KeyBinding = KeyBinding::key(KeyCode::Right);

    // Session dialog
    pub const DIALOG_DISMISS: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const DIALOG_TOGGLE_MODE: KeyBinding = KeyBinding::ctrl(KeyCode::Char('t'));
    pub const DIALOG_TOGGLE_MODE_ALT: KeyBinding = KeyBinding::key(KeyCode::F(2));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_must_match_exactly() {
        let plain_t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE);
        let ctrl_t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);

        assert!(DefaultKeymap::TOGGLE_THEME.matches(&plain_t));
        assert!(!DefaultKeymap::TOGGLE_THEME.matches(&ctrl_t));
        assert!(DefaultKeymap::DIALOG_TOGGLE_MODE.matches(&ctrl_t));
    }
}
