//! Error types for the Gemini client.

use thiserror::Error;

/// Transport- and protocol-level failures of a single `generateContent`
/// call. These are reclassified into `TranslateError` by
/// [`crate::generate_text`].
#[derive(Error, Debug)]
pub enum ClientError {
    /// Client could not be constructed (bad base URL, TLS init failure).
    #[error("Client setup failed: {0}")]
    Setup(String),

    /// HTTP request failed.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("[{status}] {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the Google error envelope, or the raw body.
        message: String,
    },

    /// Server returned an invalid or unparseable response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
