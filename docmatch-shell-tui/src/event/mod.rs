//!
//! src/event/mod.rs
//! Event layer: turns terminal input into messages
//!
//!     src/event/mod.rs
//!         mod handler;        // event dispatch
//!         mod keymap;         // key bindings
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!     · poll_event      called by the main loop (app.rs); blocks for at most `timeout`
//!     · handle_event    maps an Event to an AppMessage
//!
//!         Event::Key(KeyEvent)        → handle_key_event()
//!         Event::Resize(w, h)         → Noop, the next frame redraws
//!         anything else               → Noop
//!
//!     Key dispatch order:
//!         1. session dialog open      → handle_dialog_keys (captures everything)
//!         2. global shortcuts         q / Ctrl+C quit, Esc back, t theme, l login
//!         3. focus keys               Tab, ←, →
//!         4. focused panel            handle_navigation_keys / handle_content_keys
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! Session dialog keys
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Esc / Ctrl+C        → DialogMessage::Dismiss
//!     Tab / ↓             → DialogMessage::NextField
//!     Shift+Tab / ↑       → DialogMessage::PrevField
//!     Ctrl+T / F2         → DialogMessage::ToggleMode
//!     Enter               → DialogMessage::Confirm
//!     character           → DialogMessage::Input(c)
//!     Backspace           → DialogMessage::Backspace
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
