//! Generative-service clients for recipe text and images.
//!
//! Trait seams keep the network edge mockable: `GeminiClient` is the real
//! implementation, the fakes support tests without network access.

mod client;
mod config;
mod fake;
pub mod prompts;

pub use client::{GeminiClient, ImageGenerator, InlineImage, TextGenerator};
pub use config::{GenAiConfig, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
pub use fake::{FakeImageGenerator, FakeTextGenerator};

use thiserror::Error;

/// Error type for generative-service calls.
#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("No inline image in response")]
    NoImage,

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}
