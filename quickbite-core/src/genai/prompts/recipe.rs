//! Recipe generation prompts and the structured-output schema.

use std::sync::LazyLock;

use serde_json::{json, Value};

use crate::types::{AppLanguage, MealCategory};

/// Aspect ratio requested for recipe illustrations.
pub const IMAGE_ASPECT_RATIO: &str = "4:3";

static RECIPE_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string", "description": "Name of the dish" },
            "description": { "type": "string", "description": "Short appetizing description" },
            "prepTime": { "type": "string", "description": "Preparation time (e.g., 5 mins)" },
            "cookTime": { "type": "string", "description": "Cooking time (e.g., 10 mins)" },
            "servings": { "type": "number", "description": "Number of servings" },
            "ingredients": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of ingredients with quantities"
            },
            "instructions": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Numbered step-by-step cooking instructions"
            },
            "nutrition": {
                "type": "object",
                "properties": {
                    "calories": { "type": "string" },
                    "protein": { "type": "string" },
                    "carbs": { "type": "string" },
                    "fat": { "type": "string" }
                },
                "required": ["calories", "protein", "carbs", "fat"]
            }
        },
        "required": [
            "title", "description", "prepTime", "cookTime",
            "servings", "ingredients", "instructions", "nutrition"
        ]
    })
});

/// The schema recipe text output must conform to. Static, never derived per call.
pub fn recipe_schema() -> &'static Value {
    &RECIPE_SCHEMA
}

/// Render the recipe generation prompt for a category and display language.
pub fn render_recipe_prompt(category: MealCategory, language: AppLanguage) -> String {
    format!(
        "Generate a creative, delicious, and quick {category} recipe that can be made in under 30 minutes. \
         The recipe MUST be written entirely in the {language} language. \
         Focus on high quality, fresh ingredients and clear instructions. \
         Return the result in JSON format according to the provided schema.",
        category = category.as_str(),
        language = language.as_str(),
    )
}

/// Render the illustration prompt for a generated recipe.
pub fn render_image_prompt(title: &str, description: &str) -> String {
    format!(
        "Professional food photography of {title}. {description}. \
         Natural lighting, high resolution, gourmet presentation."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_prompt_mentions_category_and_language() {
        let prompt = render_recipe_prompt(MealCategory::Dinner, AppLanguage::Turkish);
        assert!(prompt.contains("Dinner"));
        assert!(prompt.contains("Turkish"));
        assert!(prompt.contains("under 30 minutes"));
    }

    #[test]
    fn test_recipe_prompt_is_deterministic() {
        let a = render_recipe_prompt(MealCategory::Vegan, AppLanguage::Spanish);
        let b = render_recipe_prompt(MealCategory::Vegan, AppLanguage::Spanish);
        assert_eq!(a, b);
    }

    #[test]
    fn test_schema_lists_required_keys() {
        let schema = recipe_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        for key in [
            "title",
            "description",
            "prepTime",
            "cookTime",
            "servings",
            "ingredients",
            "instructions",
            "nutrition",
        ] {
            assert!(required.contains(&key), "missing required key {key}");
        }

        assert_eq!(schema["properties"]["servings"]["type"], "number");
        assert_eq!(
            schema["properties"]["nutrition"]["required"]
                .as_array()
                .unwrap()
                .len(),
            4
        );
    }

    #[test]
    fn test_schema_is_the_same_instance() {
        assert!(std::ptr::eq(recipe_schema(), recipe_schema()));
    }

    #[test]
    fn test_image_prompt_includes_title_and_description() {
        let prompt = render_image_prompt("Shakshuka", "Eggs poached in spiced tomato sauce");
        assert!(prompt.contains("Shakshuka"));
        assert!(prompt.contains("spiced tomato sauce"));
        assert!(prompt.contains("food photography"));
    }
}
