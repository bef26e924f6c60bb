//! # Translator Core
//!
//! Business logic behind the two translation commands.
//!
//! ```text
//! translator-core/src/
//! ├── translation/
//! │   ├── host.rs        # PreferenceStore / SelectionSource / Notifier seams
//! │   ├── selection.rs   # get_input_text
//! │   ├── prompt.rs      # English / Japanese prompt templates
//! │   ├── controller.rs  # TranslationFlow state machine
//! │   └── view.rs        # DetailView projection
//! └── modules/
//!     ├── config.rs      # preferences.json store + env overrides
//!     └── logger.rs      # tracing-subscriber setup
//! ```

// Test-only lints: allow panic!, println!, etc. in test code
#![cfg_attr(test, allow(clippy::panic, clippy::print_stdout, clippy::unwrap_used))]

pub mod modules;
pub mod translation;

// Re-export commonly used types
pub use modules::config::FilePreferenceStore;
pub use translation::{
    render, DetailView, Host, Notifier, PreferenceStore, SelectionSource, TranslationFlow,
    ViewAction,
};
pub use translator_types::{Direction, Preferences, Toast, ToastStyle, TranslateError, ViewState};
