//! Pages rendered into the shell's content slot

pub mod admin;
pub mod home;
pub mod not_found;
pub mod section;
