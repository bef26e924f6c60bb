//! Selection → prompt → generation, and the view projected from it.

pub mod controller;
pub mod host;
pub mod prompt;
pub mod selection;
pub mod view;

pub use controller::{TranslationFlow, TRANSLATION_COMPLETE, TRANSLATION_FAILED};
pub use host::{Host, Notifier, PreferenceStore, SelectionSource};
pub use prompt::{build_english_prompt, build_japanese_prompt, build_prompt};
pub use selection::get_input_text;
pub use view::{render, DetailView, ViewAction};
