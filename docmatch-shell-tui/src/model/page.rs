//! Routed pages
//!
//! The shell only hands over a location; which page fills the content slot
//! is decided here.

use docmatch_shell_core::CurrentLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Upload,
    Match,
    Documents,
    Credits,
    Admin,
    NotFound,
}

impl Page {
    /// Resolve the page for a location.
    ///
    /// Sections of the landing page are anchors on `/`; an unknown anchor
    /// still shows the landing page.
    pub fn from_location(location: &CurrentLocation) -> Self {
        match (location.path.as_str(), location.fragment.as_deref()) {
            ("/", Some("upload")) => Page::Upload,
            ("/", Some("match")) => Page::Match,
            ("/", Some("documents")) => Page::Documents,
            ("/", Some("credits")) => Page::Credits,
            ("/", _) => Page::Home,
            ("/admin", _) => Page::Admin,
            _ => Page::NotFound,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Upload => "Upload Documents",
            Page::Match => "Match Documents",
            Page::Documents => "My Documents",
            Page::Credits => "Credits",
            Page::Admin => "Admin Dashboard",
            Page::NotFound => "Not Found",
        }
    }
}
