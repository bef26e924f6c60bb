use crate::error::ClientError;
use crate::types::{model_resource, ClientConfig};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use translator_types::protocol::gemini::{
    GenerateContentRequest, GenerateContentResponse, GoogleErrorEnvelope,
};

/// Anything that can answer a `generateContent` request.
///
/// [`GeminiClient`] talks HTTP; tests substitute stubs.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ClientError>;
}

/// Builds a backend bound to one API key. Called once per invocation so a
/// fresh key from the preference store is always used.
pub trait BackendConnector: Send + Sync {
    fn connect(&self, api_key: &str) -> Result<Arc<dyn GenerationBackend>, ClientError>;
}

pub struct GeminiClient {
    client: Client,
    config: ClientConfig,
}

impl GeminiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        url::Url::parse(&config.base_url)
            .map_err(|e| ClientError::Setup(format!("invalid base URL {}: {}", config.base_url, e)))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("selection-translator/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model_resource(model)
        )
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ClientError> {
        let url = self.endpoint(model);
        tracing::debug!("POST {}", url);

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: api_error_message(&body, status),
            });
        }

        resp.json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

/// Message from the Google error envelope, falling back to the raw body and
/// then to the status reason.
fn api_error_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(envelope) = serde_json::from_str::<GoogleErrorEnvelope>(body) {
        if !envelope.error.message.is_empty() {
            return envelope.error.message;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.canonical_reason().unwrap_or("Unknown error").to_string()
    } else {
        trimmed.to_string()
    }
}

/// Connector producing [`GeminiClient`]s from a template config.
#[derive(Debug, Clone, Default)]
pub struct GeminiConnector {
    template: ClientConfig,
}

impl GeminiConnector {
    pub fn new(template: ClientConfig) -> Self {
        Self { template }
    }
}

impl BackendConnector for GeminiConnector {
    fn connect(&self, api_key: &str) -> Result<Arc<dyn GenerationBackend>, ClientError> {
        let config = ClientConfig { api_key: api_key.to_string(), ..self.template.clone() };
        Ok(Arc::new(GeminiClient::new(config)?))
    }
}
