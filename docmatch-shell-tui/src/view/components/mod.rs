//! Shell chrome widgets

pub mod dialog;
pub mod navigation;
pub mod statusbar;
pub mod topbar;
