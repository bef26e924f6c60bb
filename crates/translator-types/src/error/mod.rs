//! Typed error definitions for Selection Translator.
//!
//! `TranslateError` is the taxonomy every translation failure is reduced to
//! before it reaches the user. Its `Display` output is the user-facing
//! message shown in the error view and the failure toast.

mod config;
mod selection;

pub use config::ConfigError;
pub use selection::SelectionError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that end a translation invocation.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum TranslateError {
    /// API key or model name absent; raised before any I/O.
    #[error("API Key or Model not configured in preferences.")]
    ConfigMissing,

    /// No usable selected text.
    #[error("No Text Selected")]
    NoSelection,

    /// Upstream content filter triggered.
    #[error(
        "Blocked due to safety settings. Please adjust your prompt or safety settings. Reason: {0}"
    )]
    SafetyBlocked(String),

    /// Upstream rejected the credentials.
    #[error("Invalid API Key. Please check your Gemini API Key in preferences.")]
    InvalidApiKey,

    /// Response shape matched no known extraction path.
    #[error("Could not extract valid text from response.")]
    MalformedResponse,

    /// Any other network/API failure, message passed through.
    #[error("{0}")]
    UpstreamError(String),
}

impl TranslateError {
    /// Whether the user must change configuration before retrying.
    pub fn is_config_problem(&self) -> bool {
        matches!(self, Self::ConfigMissing | Self::InvalidApiKey)
    }

    /// Whether the user must change the input before retrying.
    pub fn is_input_problem(&self) -> bool {
        matches!(self, Self::NoSelection | Self::SafetyBlocked(_))
    }

    /// Whether the failure originated at the generation provider.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::SafetyBlocked(_)
                | Self::InvalidApiKey
                | Self::MalformedResponse
                | Self::UpstreamError(_)
        )
    }
}

impl From<SelectionError> for TranslateError {
    fn from(_: SelectionError) -> Self {
        Self::NoSelection
    }
}

/// Standard Result type using TranslateError.
pub type Result<T> = std::result::Result<T, TranslateError>;
