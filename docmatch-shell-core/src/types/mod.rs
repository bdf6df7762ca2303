//! Type definitions

mod icon;
mod locator;
mod navigation;
mod theme;

pub use icon::IconId;
pub use locator::{CompositeKey, CurrentLocation, Locator, FRAGMENT_SEPARATOR};
pub use navigation::{NavigationEntry, NavigationModel};
pub use theme::ThemePreference;
