//!
//! src/view/mod.rs
//! View layer: draws the Model, never changes it
//!
//!     src/view/mod.rs
//!         mod components;     // title bar, side panel, status bar, session dialog
//!         mod icons;          // IconId → glyph
//!         mod layout;         // frame layout
//!         mod pages;          // pages placed in the content slot
//!         mod theme;          // colors per ThemePreference
//!
//!         pub use layout::render;
//!
//!     ┌──────────────────────────────────────────────────────────────┐
//!     │ ▥ DocMatch                    ☾ Toggle theme  ⇥ Login / Sign Up │  title bar
//!     ├──────────────┬───────────────────────────────────────────────┤
//!     │ Navigation   │                                               │
//!     │ ⌂ Home       │              routed page                      │
//!     │ ⇪ Upload …   │                                               │
//!     ├──────────────┴───────────────────────────────────────────────┤
//!     │ hints                                  latest toast          │  status bar
//!     └──────────────────────────────────────────────────────────────┘
//!
//!     The session dialog is drawn last, centered over everything.
//!

mod components;
mod icons;
mod layout;
mod pages;
mod theme;

pub use layout::render;
