//!
//! src/model/mod.rs
//! Model layer: application state
//!
//! The single source of truth. Only plain data lives here; every change goes
//! through the Update layer.
//!
//!     src/model/mod.rs
//!         mod app;        // main state (App)
//!         mod focus;      // focused panel (Navigation / Content)
//!         mod form;       // login / sign-up form mounted in the session dialog
//!         mod page;       // routed page resolved from the location
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! App
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     pub struct App {
//!         pub should_quit: bool,
//!         pub focus: FocusPanel,
//!         pub cursor: usize,                   // keyboard selection in the side panel
//!         pub content_scroll: u16,
//!         pub shell: Shell<LoginForm>,         // navigation + theme + session dialog
//!         pub router: Arc<MemoryRouter>,
//!         pub theme_rx: Option<watch::Receiver<ThemePreference>>,
//!         pub toasts: Arc<ToastQueue>,
//!         pub toast_ttl: chrono::Duration,
//!     }
//!
//!     The highlighted side-panel entry is never stored: it is derived from the
//!     router's location each time the shell renders. `cursor` is only where the
//!     keyboard is; pressing Enter turns it into a navigation.
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! Session dialog
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     The shell owns the dialog. While it is open a fresh `LoginForm` is
//!     mounted; closing drops it, so reopening starts from empty fields.
//!
//!         user presses `l`
//!             ↓
//!         AppMessage::OpenAuth
//!             ↓
//!         app.shell.open_dialog()
//!             ↓
//!         view/components/dialog.rs draws the form on top
//!

mod app;
mod focus;
mod form;
mod page;

pub use app::App;
pub use focus::FocusPanel;
pub use form::{AuthMode, FormField, LoginForm};
pub use page::Page;
