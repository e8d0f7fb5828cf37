//! Generative-service configuration from environment variables.

use std::env;

use super::GenAiError;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for recipe text generation.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";

/// Default model for recipe image generation.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Generative-service client configuration.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// API key for the Gemini API.
    pub api_key: String,
    /// Model used for schema-constrained recipe text.
    pub text_model: String,
    /// Model used for recipe illustrations.
    pub image_model: String,
    /// Base URL for the API.
    pub base_url: String,
}

impl GenAiConfig {
    /// Create a configuration with the default models and base URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `GEMINI_API_KEY`: API key for the Gemini API
    ///
    /// Optional:
    /// - `QUICKBITE_TEXT_MODEL`: text model name (default: "gemini-3-flash-preview")
    /// - `QUICKBITE_IMAGE_MODEL`: image model name (default: "gemini-2.5-flash-image")
    /// - `QUICKBITE_GENAI_BASE_URL`: API base URL
    pub fn from_env() -> Result<Self, GenAiError> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GenAiError::NotConfigured("GEMINI_API_KEY not set".to_string()))?;

        let text_model =
            env::var("QUICKBITE_TEXT_MODEL").unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string());

        let image_model =
            env::var("QUICKBITE_IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string());

        let base_url =
            env::var("QUICKBITE_GENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            text_model,
            image_model,
            base_url,
        })
    }
}
