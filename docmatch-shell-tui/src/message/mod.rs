//!
//! src/message/mod.rs
//! Message layer: bridge between Event and Update
//!
//! Raw terminal events are translated into messages here; the Update layer
//! only ever sees messages.
//!
//!     src/message/mod.rs
//!         mod app;            // AppMessage, the top-level enum
//!         mod content;        // routed page
//!         mod dialog;         // session dialog
//!         mod navigation;     // side panel
//!
//!     pub enum AppMessage {
//!         Quit,
//!         ToggleFocus,
//!         ToggleTheme,                        // top bar theme toggle
//!         OpenAuth,                           // top bar "Login / Sign Up"
//!         Navigation(NavigationMessage),
//!         Content(ContentMessage),
//!         Dialog(DialogMessage),
//!         GoBack,
//!         Tick,
//!         Noop,                               // stands in for Option::None
//!     }
//!

mod app;
mod content;
mod dialog;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use dialog::DialogMessage;
pub use navigation::NavigationMessage;
