//! DocMatch Shell Core Library
//!
//! State logic for the application shell that frames every DocMatch page:
//! - Navigation model and active route matching
//! - Process-wide theme preference and its toggle
//! - Session (login / sign-up) dialog visibility
//! - Shell composer turning all of the above into a renderable frame
//!
//! UI-toolkit independent: collaborators (router, theme store, notifier,
//! authentication form) are reached through traits.

pub mod adapters;
pub mod config;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

// Re-export common types
pub use config::ShellConfig;
pub use error::{ShellError, ShellResult};
pub use services::{DialogVisibility, SessionDialog, SharedTheme, Shell, ShellBuilder, ShellFrame};
pub use traits::{AuthForm, CloseHandle, Notifier, PreferenceStore, Router, ThemeController};
pub use types::{CurrentLocation, IconId, Locator, NavigationEntry, NavigationModel, ThemePreference};
