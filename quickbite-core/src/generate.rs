//! The recipe generation flow.
//!
//! One schema-constrained text call, then at most one image call, in that
//! order. Image failure never aborts a successful text result; text
//! failures propagate unchanged. No retries anywhere.

use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::genai::prompts::{
    recipe_schema, render_image_prompt, render_recipe_prompt, IMAGE_ASPECT_RATIO,
};
use crate::genai::{GenAiError, ImageGenerator, TextGenerator};
use crate::image::{data_uri, placeholder_image_url};
use crate::types::{AppLanguage, MealCategory, Nutrition, Recipe};

/// Error type for recipe generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The underlying service call failed (transport error or non-2xx).
    #[error("generation request failed: {0}")]
    Service(#[from] GenAiError),

    /// The text service returned no usable text.
    #[error("empty response from text generation")]
    EmptyResponse,

    /// The returned text did not parse into the expected recipe shape.
    #[error("malformed recipe response: {0}")]
    MalformedResponse(String),
}

/// Recipe fields as returned by the text model: everything except the id,
/// category, and image, which are supplied at assembly.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedFields {
    title: String,
    description: String,
    prep_time: String,
    cook_time: String,
    servings: u32,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    nutrition: Nutrition,
}

impl GeneratedFields {
    /// The schema constrains shape, not substance. Reject values that would
    /// violate the Recipe invariants.
    fn check(&self) -> Result<(), GenerateError> {
        if self.title.trim().is_empty() {
            return Err(GenerateError::MalformedResponse("empty title".to_string()));
        }
        if self.servings == 0 {
            return Err(GenerateError::MalformedResponse(
                "servings must be positive".to_string(),
            ));
        }
        if self.ingredients.is_empty() {
            return Err(GenerateError::MalformedResponse(
                "no ingredients".to_string(),
            ));
        }
        if self.instructions.is_empty() {
            return Err(GenerateError::MalformedResponse(
                "no instructions".to_string(),
            ));
        }
        Ok(())
    }
}

/// Generate one recipe for the category, written in the display language.
///
/// Issues exactly one text-generation call and, on success, exactly one
/// image-generation call. Image failure is logged and replaced with a
/// deterministic placeholder URL derived from the title.
pub async fn generate_recipe(
    text: &dyn TextGenerator,
    image: &dyn ImageGenerator,
    category: MealCategory,
    language: AppLanguage,
) -> Result<Recipe, GenerateError> {
    let prompt = render_recipe_prompt(category, language);
    let raw = text.generate_text(&prompt, recipe_schema()).await?;

    let raw = raw.trim();
    if raw.is_empty() {
        return Err(GenerateError::EmptyResponse);
    }

    let fields: GeneratedFields =
        serde_json::from_str(raw).map_err(|e| GenerateError::MalformedResponse(e.to_string()))?;
    fields.check()?;

    let image_prompt = render_image_prompt(&fields.title, &fields.description);
    let image_url = match image.generate_image(&image_prompt, IMAGE_ASPECT_RATIO).await {
        Ok(inline) => data_uri(&inline.mime_type, &inline.data),
        Err(e) => {
            tracing::warn!(
                error = %e,
                title = %fields.title,
                "image generation failed, using placeholder"
            );
            placeholder_image_url(&fields.title)
        }
    };

    Ok(Recipe {
        id: Uuid::new_v4().to_string(),
        title: fields.title,
        category,
        description: fields.description,
        prep_time: fields.prep_time,
        cook_time: fields.cook_time,
        servings: fields.servings,
        ingredients: fields.ingredients,
        instructions: fields.instructions,
        nutrition: fields.nutrition,
        image_url: Some(image_url),
    })
}
