//! Core domain models for Selection Translator.

mod direction;
mod preferences;
mod view;

// Re-export all models
pub use direction::{Direction, DirectionProfile};
pub use preferences::{Credentials, Preferences};
pub use view::{Toast, ToastStyle, ViewState};
