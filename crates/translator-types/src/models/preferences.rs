//! Host preferences.

use serde::{Deserialize, Serialize};

use crate::error::TranslateError;

/// Values the host preference store exposes to the commands.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Gemini API key (secret)
    #[serde(default)]
    pub gemini_api_key: String,
    /// Gemini model name, e.g. `gemini-2.0-flash`
    #[serde(default)]
    pub gemini_model: String,
}

/// Validated credentials: both fields non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub api_key: &'a str,
    pub model: &'a str,
}

impl Preferences {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self { gemini_api_key: api_key.into(), gemini_model: model.into() }
    }

    /// Both fields present, trimmed; otherwise `ConfigMissing`.
    pub fn credentials(&self) -> Result<Credentials<'_>, TranslateError> {
        let api_key = self.gemini_api_key.trim();
        let model = self.gemini_model.trim();
        if api_key.is_empty() || model.is_empty() {
            return Err(TranslateError::ConfigMissing);
        }
        Ok(Credentials { api_key, model })
    }

    /// API key safe for display.
    pub fn masked_api_key(&self) -> String {
        mask_key(&self.gemini_api_key)
    }
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
