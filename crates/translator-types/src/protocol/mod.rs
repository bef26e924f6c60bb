//! Protocol definitions for the generation provider.
//!
//! Only the Google Gemini GenerateContent API is spoken; the types cover the
//! request fields this workspace sends and the response fields it reads.

pub mod gemini;

pub use gemini::{
    GeminiCandidate, GeminiContent, GeminiPart, GeminiRole, GenerateContentRequest,
    GenerateContentResponse, HarmBlockThreshold, HarmCategory, PromptFeedback, SafetySetting,
    SAFETY_POLICY,
};
