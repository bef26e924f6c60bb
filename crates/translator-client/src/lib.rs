#![doc = include_str!("../README.md")]

mod client;
mod error;
mod generation;
mod types;

pub use client::{BackendConnector, GeminiClient, GeminiConnector, GenerationBackend};
pub use error::ClientError;
pub use generation::{call_generation, classify_error, extract_text, generate_text};
pub use types::*;
