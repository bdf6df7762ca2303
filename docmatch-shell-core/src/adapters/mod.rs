//! Collaborator implementations shipped with the core

mod json_preference_store;
mod toast_queue;

pub use json_preference_store::JsonPreferenceStore;
pub use toast_queue::{Toast, ToastQueue};
