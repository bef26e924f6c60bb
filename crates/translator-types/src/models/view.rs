//! View state and user notifications.

use serde::{Deserialize, Serialize};

/// State of a single command invocation. `Result` and `Error` are terminal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum ViewState {
    #[default]
    Loading,
    Result(String),
    Error(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    /// Translated text, when in `Result`.
    pub fn result_text(&self) -> Option<&str> {
        match self {
            Self::Result(text) => Some(text),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Toast style understood by the host notification API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToastStyle {
    Animated,
    Success,
    Failure,
}

/// A transient, non-blocking status message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toast {
    pub style: ToastStyle,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Toast {
    pub fn animated(title: impl Into<String>) -> Self {
        Self { style: ToastStyle::Animated, title: title.into(), message: None }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self { style: ToastStyle::Success, title: title.into(), message: None }
    }

    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { style: ToastStyle::Failure, title: title.into(), message: Some(message.into()) }
    }
}
