//! Host selection errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures reported by a host selection source.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum SelectionError {
    /// The host has no selectable context (nothing focused, nothing piped).
    #[error("Selection unavailable: {0}")]
    Unavailable(String),

    /// Reading the selection failed.
    #[error("Selection read failed: {0}")]
    Read(String),
}
