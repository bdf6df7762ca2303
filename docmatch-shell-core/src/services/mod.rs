//! Shell logic services

pub mod route_matcher;
mod session_dialog;
mod shared_theme;
mod shell;

pub use route_matcher::{active_index, match_active};
pub use session_dialog::{DialogVisibility, SessionDialog};
pub use shared_theme::SharedTheme;
pub use shell::{
    AuthEntryView, ContentSlot, Shell, ShellBuilder, ShellFrame, SidePanel, SidePanelItem,
    ThemeToggleView, TopBar, AUTH_ENTRY_LABEL, BRAND, NAVIGATION_GROUP, THEME_TOGGLE_LABEL,
};
