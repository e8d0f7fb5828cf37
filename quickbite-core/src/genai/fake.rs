//! Fake generators for testing.
//!
//! Deterministic stand-ins for the Gemini client, allowing tests to run
//! without network access or API costs.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use super::{GenAiError, ImageGenerator, InlineImage, TextGenerator};

/// A fake text generator.
///
/// Responses are matched by checking if the prompt contains a registered
/// substring. If no match is found, returns the default response or errors.
#[derive(Debug, Default)]
pub struct FakeTextGenerator {
    /// Map of prompt substring -> response
    responses: HashMap<String, String>,
    /// Default response if no match found
    default_response: Option<String>,
}

impl FakeTextGenerator {
    /// Create a FakeTextGenerator with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator that returns `response` for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut generator = Self::new();
        generator.add_response(prompt_contains, response);
        generator
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Create a generator that always returns a complete, valid recipe payload.
    pub fn with_recipe_response() -> Self {
        Self::new().with_default_response(SAMPLE_RECIPE_JSON)
    }
}

/// A valid recipe payload in the shape the schema requires.
const SAMPLE_RECIPE_JSON: &str = r#"{
    "title": "Lemon Garlic Pasta",
    "description": "Bright, zesty pasta tossed in a garlicky butter sauce.",
    "prepTime": "10 mins",
    "cookTime": "15 mins",
    "servings": 2,
    "ingredients": ["200g spaghetti", "2 cloves garlic", "1 lemon", "30g butter"],
    "instructions": ["Boil the spaghetti.", "Saute the garlic in butter.", "Toss with lemon juice and serve."],
    "nutrition": {"calories": "520 kcal", "protein": "14g", "carbs": "78g", "fat": "16g"}
}"#;

#[async_trait]
impl TextGenerator for FakeTextGenerator {
    async fn generate_text(&self, prompt: &str, _schema: &Value) -> Result<String, GenAiError> {
        // Find first matching pattern (case-insensitive)
        let prompt_lower = prompt.to_lowercase();
        for (pattern, response) in &self.responses {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(GenAiError::RequestFailed(format!(
                "FakeTextGenerator: no response configured for prompt (first 100 chars): {}",
                &prompt[..prompt.len().min(100)]
            ))),
        }
    }

    fn model_name(&self) -> &str {
        "fake-text-model"
    }
}

/// A fake image generator that returns a fixed image, or always fails.
#[derive(Debug)]
pub struct FakeImageGenerator {
    mode: FakeImageMode,
}

#[derive(Debug)]
enum FakeImageMode {
    Returning(InlineImage),
    WithoutImage,
    Failing,
}

impl FakeImageGenerator {
    /// A generator that returns the given payload on every call.
    pub fn returning(mime_type: &str, data: &[u8]) -> Self {
        Self {
            mode: FakeImageMode::Returning(InlineImage {
                data: data.to_vec(),
                mime_type: mime_type.to_string(),
            }),
        }
    }

    /// A generator whose responses never contain an image part.
    pub fn without_image() -> Self {
        Self {
            mode: FakeImageMode::WithoutImage,
        }
    }

    /// A generator whose requests always fail at the transport layer.
    pub fn failing() -> Self {
        Self {
            mode: FakeImageMode::Failing,
        }
    }
}

#[async_trait]
impl ImageGenerator for FakeImageGenerator {
    async fn generate_image(
        &self,
        _prompt: &str,
        _aspect_ratio: &str,
    ) -> Result<InlineImage, GenAiError> {
        match &self.mode {
            FakeImageMode::Returning(image) => Ok(image.clone()),
            FakeImageMode::WithoutImage => Err(GenAiError::NoImage),
            FakeImageMode::Failing => Err(GenAiError::RequestFailed(
                "fake transport failure".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_fake_text_matching() {
        let generator = FakeTextGenerator::with_response("hello", "world");
        let result = generator
            .generate_text("Say hello to the user", &json!({}))
            .await
            .unwrap();
        assert_eq!(result, "world");
    }

    #[tokio::test]
    async fn test_fake_text_case_insensitive() {
        let generator = FakeTextGenerator::with_response("HELLO", "world");
        let result = generator.generate_text("hello there", &json!({})).await;
        assert_eq!(result.unwrap(), "world");
    }

    #[tokio::test]
    async fn test_fake_text_no_match_errors() {
        let generator = FakeTextGenerator::new();
        let result = generator.generate_text("random prompt", &json!({})).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fake_text_default_response() {
        let generator = FakeTextGenerator::new().with_default_response("default");
        let result = generator
            .generate_text("random prompt", &json!({}))
            .await
            .unwrap();
        assert_eq!(result, "default");
    }

    #[tokio::test]
    async fn test_recipe_response_is_valid_json() {
        let generator = FakeTextGenerator::with_recipe_response();
        let text = generator.generate_text("anything", &json!({})).await.unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["title"], "Lemon Garlic Pasta");
    }

    #[tokio::test]
    async fn test_fake_image_returning() {
        let generator = FakeImageGenerator::returning("image/png", b"fake-bytes");
        let image = generator.generate_image("a photo", "4:3").await.unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, b"fake-bytes");
    }

    #[tokio::test]
    async fn test_fake_image_without_image() {
        let generator = FakeImageGenerator::without_image();
        let result = generator.generate_image("a photo", "4:3").await;
        assert!(matches!(result, Err(GenAiError::NoImage)));
    }
}
