//! Client configuration.

/// Public Gemini API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variable that overrides [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";

/// Configuration for the Gemini client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Gemini API, without the version segment.
    pub base_url: String,
    /// API key sent as `x-goog-api-key`.
    pub api_key: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Default endpoint and timeout bound to `api_key`.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), ..Default::default() }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: resolve_base_url(std::env::var(BASE_URL_ENV).ok()),
            api_key: String::new(),
            timeout_secs: 120,
        }
    }
}

pub(crate) fn resolve_base_url(explicit: Option<String>) -> String {
    let Some(raw) = explicit else {
        return DEFAULT_BASE_URL.to_string();
    };
    let url = raw.trim().trim_end_matches('/').to_string();
    if url.is_empty() {
        tracing::warn!("{} is empty, using default endpoint", BASE_URL_ENV);
        return DEFAULT_BASE_URL.to_string();
    }
    if url::Url::parse(&url).is_err() {
        tracing::warn!("{} is not a valid URL, using default endpoint", BASE_URL_ENV);
        return DEFAULT_BASE_URL.to_string();
    }
    tracing::info!("Using custom Gemini endpoint");
    url
}

/// `gemini-2.0-flash` → `models/gemini-2.0-flash`; names that already carry
/// a resource prefix (`models/…`, `tunedModels/…`) pass through.
pub fn model_resource(model: &str) -> String {
    let model = model.trim();
    if model.contains('/') {
        model.to_string()
    } else {
        format!("models/{}", model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_base_url() {
        assert_eq!(resolve_base_url(None), DEFAULT_BASE_URL);
        assert_eq!(resolve_base_url(Some("  ".to_string())), DEFAULT_BASE_URL);
        assert_eq!(resolve_base_url(Some("not a url".to_string())), DEFAULT_BASE_URL);
        assert_eq!(
            resolve_base_url(Some("http://127.0.0.1:9000/".to_string())),
            "http://127.0.0.1:9000"
        );
    }

    #[test]
    fn test_model_resource() {
        assert_eq!(model_resource("gemini-2.0-flash"), "models/gemini-2.0-flash");
        assert_eq!(model_resource("models/gemini-pro"), "models/gemini-pro");
        assert_eq!(model_resource("tunedModels/my-model"), "tunedModels/my-model");
    }
}
