//! Single-shot text generation with failure classification.

use crate::client::{GeminiClient, GenerationBackend};
use crate::error::ClientError;
use crate::types::ClientConfig;
use translator_types::protocol::gemini::{GenerateContentRequest, GenerateContentResponse};
use translator_types::TranslateError;

/// Finish reason Gemini reports when a candidate was withheld by the filter.
const SAFETY_FINISH_REASON: &str = "SAFETY";

/// Build a client bound to `api_key` and generate once.
pub async fn call_generation(
    prompt: &str,
    api_key: &str,
    model_name: &str,
) -> Result<String, TranslateError> {
    let client = GeminiClient::new(ClientConfig::with_api_key(api_key)).map_err(classify_error)?;
    generate_text(&client, model_name, prompt).await
}

/// Send `prompt` as one user message with the fixed safety policy and return
/// the trimmed output text. Exactly one request is issued.
pub async fn generate_text(
    backend: &dyn GenerationBackend,
    model_name: &str,
    prompt: &str,
) -> Result<String, TranslateError> {
    let request = GenerateContentRequest::from_prompt(prompt);
    let response = backend
        .generate_content(model_name, &request)
        .await
        .map_err(|e| {
            tracing::error!("Gemini API error: {}", e);
            classify_error(e)
        })?;
    extract_text(&response)
}

/// Output text of `response`, or the reason there is none.
pub fn extract_text(response: &GenerateContentResponse) -> Result<String, TranslateError> {
    if let Some(text) = response.output_text() {
        return Ok(text);
    }
    if let Some(reason) = response.block_reason() {
        tracing::warn!("Blocked by safety settings: {:?}", response.prompt_feedback);
        return Err(TranslateError::SafetyBlocked(reason.to_string()));
    }
    if response.finish_reason() == Some(SAFETY_FINISH_REASON) {
        tracing::warn!("Candidate withheld by safety settings");
        return Err(TranslateError::SafetyBlocked(SAFETY_FINISH_REASON.to_string()));
    }
    tracing::warn!("Response structure might have changed or text is empty: {:?}", response);
    Err(TranslateError::MalformedResponse)
}

/// Map a client failure onto the user-facing taxonomy by its message.
pub fn classify_error(error: ClientError) -> TranslateError {
    classify_message(error.to_string())
}

fn classify_message(message: String) -> TranslateError {
    if message.contains("SAFETY") || message.contains("Blocked due") {
        TranslateError::SafetyBlocked(message)
    } else if message.contains("API key not valid") {
        TranslateError::InvalidApiKey
    } else {
        TranslateError::UpstreamError(message)
    }
}
