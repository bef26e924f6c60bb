//! # Translator Types
//!
//! Core types, models, and error definitions for Selection Translator.
//!
//! This crate provides the foundational type system for the workspace:
//!
//! - **`error`** - Typed error hierarchy for translation, configuration, and selection
//! - **`models`** - Domain models (Direction, Preferences, ViewState, Toast)
//! - **`protocol`** - Gemini GenerateContent wire types
//!
//! ## Architecture Role
//!
//! `translator-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!                translator-types (this crate)
//!                        │
//!            ┌───────────┴───────────┐
//!            ▼                       ▼
//!   translator-client  ───▶  translator-core
//!                                    │
//!                                    ▼
//!                             translator-cli
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for config files and JSON output
//! - **Clone** for cheap sharing across async boundaries
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;
pub mod protocol;

// Re-export error types for convenience
pub use error::{ConfigError, Result, SelectionError, TranslateError};

// Re-export core model types
pub use models::{
    Credentials, Direction, DirectionProfile, Preferences, Toast, ToastStyle, ViewState,
};
