//! Gemini API client for text and image generation.

use std::fmt;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{GenAiConfig, GenAiError};

/// Trait for schema-constrained text generation.
#[async_trait]
pub trait TextGenerator: Send + Sync + fmt::Debug {
    /// Send a prompt and return the raw text of the response.
    ///
    /// The service is asked for JSON output conforming to `schema`. The
    /// returned string is not parsed here and may be empty if the service
    /// produced no text parts; the caller decides what that means.
    async fn generate_text(&self, prompt: &str, schema: &Value) -> Result<String, GenAiError>;

    /// Model identifier used for text generation.
    fn model_name(&self) -> &str;
}

/// One inline image returned by an image model.
#[derive(Debug, Clone)]
pub struct InlineImage {
    /// Raw image bytes.
    pub data: Vec<u8>,
    /// Media type declared by the service, e.g. "image/png".
    pub mime_type: String,
}

/// Trait for one-shot image generation.
#[async_trait]
pub trait ImageGenerator: Send + Sync + fmt::Debug {
    /// Request a single illustrative image for the prompt.
    ///
    /// Returns the first inline image payload of the response, or
    /// `GenAiError::NoImage` if the response carried none.
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
    ) -> Result<InlineImage, GenAiError>;
}

/// Gemini API client. Implements both generator traits.
#[derive(Debug)]
pub struct GeminiClient {
    config: GenAiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a new GeminiClient with the given configuration.
    pub fn new(config: GenAiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client from environment configuration.
    pub fn from_env() -> Result<Self, GenAiError> {
        Ok(Self::new(GenAiConfig::from_env()?))
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.config.base_url, model)
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenAiError> {
        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| GenAiError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();

        let body = response
            .text()
            .await
            .map_err(|e| GenAiError::RequestFailed(e.to_string()))?;

        if status != 200 {
            // Try to parse the structured error response
            if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(&body) {
                return Err(GenAiError::ApiError {
                    status,
                    message: error_response.error.message,
                });
            }
            return Err(GenAiError::ApiError {
                status,
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| GenAiError::ParseError(e.to_string()))
    }
}

/// Gemini generateContent request format.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn user(text: &str) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(text.to_string()),
                inline_data: None,
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

/// Inline binary payload with its declared media type.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    /// Base64-encoded payload.
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
}

/// Gemini generateContent response format.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Error response from the Gemini API.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiErrorBody,
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str, schema: &Value) -> Result<String, GenAiError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(prompt)],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema.clone()),
                image_config: None,
            }),
        };

        let response = self
            .generate_content(&self.config.text_model, &request)
            .await?;

        // Concatenate the text parts of the first candidate
        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.config.text_model
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
    ) -> Result<InlineImage, GenAiError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(prompt)],
            generation_config: Some(GenerationConfig {
                response_mime_type: None,
                response_schema: None,
                image_config: Some(ImageConfig {
                    aspect_ratio: aspect_ratio.to_string(),
                }),
            }),
        };

        let response = self
            .generate_content(&self.config.image_model, &request)
            .await?;

        let inline = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|content| content.parts.into_iter().find_map(|p| p.inline_data))
            .ok_or(GenAiError::NoImage)?;

        let data = BASE64
            .decode(inline.data.as_bytes())
            .map_err(|e| GenAiError::ParseError(format!("invalid image payload: {}", e)))?;

        Ok(InlineImage {
            data,
            mime_type: inline.mime_type,
        })
    }
}
