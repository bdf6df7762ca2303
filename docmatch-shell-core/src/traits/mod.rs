//! Collaborator abstraction trait definition

mod auth_form;
mod notifier;
mod preference_store;
mod router;
mod theme_controller;

pub(crate) use auth_form::CloseSlot;
pub use auth_form::{AuthForm, CloseHandle};
pub use notifier::Notifier;
pub use preference_store::{MemoryPreferenceStore, PreferenceStore};
pub use router::{MemoryRouter, Router};
pub use theme_controller::ThemeController;
