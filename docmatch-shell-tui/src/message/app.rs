//! Main application message

use super::{ContentMessage, DialogMessage, NavigationMessage};

#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Exit the application
    Quit,

    /// Switch focus between side panel and page
    ToggleFocus,

    /// Theme toggle in the top bar
    ToggleTheme,

    /// "Login / Sign Up" in the top bar
    OpenAuth,

    /// Side panel messages
    Navigation(NavigationMessage),

    /// Routed page messages
    Content(ContentMessage),

    /// Session dialog messages
    Dialog(DialogMessage),

    /// Router history back
    GoBack,

    /// Periodic housekeeping (toast expiry)
    Tick,

    /// No-op (ignored events)
    Noop,
}
