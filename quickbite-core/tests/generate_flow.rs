//! End-to-end tests of the recipe generation flow over fake generators.

use quickbite_core::{
    generate_recipe, AppLanguage, FakeImageGenerator, FakeTextGenerator, GenAiError,
    GenerateError, MealCategory,
};

const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47];

#[tokio::test]
async fn generates_complete_recipe_with_inline_image() {
    let text = FakeTextGenerator::with_recipe_response();
    let image = FakeImageGenerator::returning("image/png", PNG_BYTES);

    let recipe = generate_recipe(&text, &image, MealCategory::Dinner, AppLanguage::English)
        .await
        .unwrap();

    assert!(!recipe.id.is_empty());
    assert_eq!(recipe.category, MealCategory::Dinner);
    assert!(!recipe.title.is_empty());
    assert!(!recipe.ingredients.is_empty());
    assert!(!recipe.instructions.is_empty());
    assert!(recipe.servings > 0);
    assert!(!recipe.nutrition.calories.is_empty());
    assert!(!recipe.nutrition.protein.is_empty());
    assert!(!recipe.nutrition.carbs.is_empty());
    assert!(!recipe.nutrition.fat.is_empty());

    // Data URI carries the declared media type
    let url = recipe.image_url.unwrap();
    assert!(url.starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn works_for_every_category_and_language() {
    let text = FakeTextGenerator::with_recipe_response();
    let image = FakeImageGenerator::returning("image/jpeg", PNG_BYTES);

    for category in MealCategory::ALL {
        for language in AppLanguage::ALL {
            let recipe = generate_recipe(&text, &image, *category, *language)
                .await
                .unwrap();
            assert_eq!(recipe.category, *category);
        }
    }
}

#[tokio::test]
async fn image_failure_falls_back_to_deterministic_placeholder() {
    let text = FakeTextGenerator::with_recipe_response();
    let image = FakeImageGenerator::failing();

    let first = generate_recipe(&text, &image, MealCategory::Lunch, AppLanguage::English)
        .await
        .unwrap();
    let second = generate_recipe(&text, &image, MealCategory::Lunch, AppLanguage::English)
        .await
        .unwrap();

    // Same title, same placeholder; the failure never surfaced
    let first_url = first.image_url.unwrap();
    assert!(first_url.starts_with("https://picsum.photos/seed/"));
    assert_eq!(Some(first_url), second.image_url);
}

#[tokio::test]
async fn missing_image_part_is_also_non_fatal() {
    let text = FakeTextGenerator::with_recipe_response();
    let image = FakeImageGenerator::without_image();

    let recipe = generate_recipe(&text, &image, MealCategory::Dessert, AppLanguage::Spanish)
        .await
        .unwrap();

    assert!(recipe
        .image_url
        .unwrap()
        .starts_with("https://picsum.photos/seed/"));
}

#[tokio::test]
async fn identical_calls_mint_distinct_ids() {
    let text = FakeTextGenerator::with_recipe_response();
    let image = FakeImageGenerator::returning("image/png", PNG_BYTES);

    let first = generate_recipe(&text, &image, MealCategory::Snack, AppLanguage::English)
        .await
        .unwrap();
    let second = generate_recipe(&text, &image, MealCategory::Snack, AppLanguage::English)
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn empty_text_response_is_an_error() {
    let text = FakeTextGenerator::new().with_default_response("");
    let image = FakeImageGenerator::returning("image/png", PNG_BYTES);

    let result = generate_recipe(&text, &image, MealCategory::Dinner, AppLanguage::English).await;
    assert!(matches!(result, Err(GenerateError::EmptyResponse)));
}

#[tokio::test]
async fn whitespace_only_response_counts_as_empty() {
    let text = FakeTextGenerator::new().with_default_response("  \n\t ");
    let image = FakeImageGenerator::returning("image/png", PNG_BYTES);

    let result = generate_recipe(&text, &image, MealCategory::Dinner, AppLanguage::English).await;
    assert!(matches!(result, Err(GenerateError::EmptyResponse)));
}

#[tokio::test]
async fn unparseable_payload_is_malformed() {
    let text = FakeTextGenerator::new().with_default_response("this is not json");
    let image = FakeImageGenerator::returning("image/png", PNG_BYTES);

    let result = generate_recipe(&text, &image, MealCategory::Dinner, AppLanguage::English).await;
    assert!(matches!(result, Err(GenerateError::MalformedResponse(_))));
}

#[tokio::test]
async fn missing_required_field_is_malformed() {
    // No instructions key at all
    let text = FakeTextGenerator::new().with_default_response(
        r#"{
            "title": "Toast", "description": "d", "prepTime": "1 min", "cookTime": "2 mins",
            "servings": 1, "ingredients": ["bread"],
            "nutrition": {"calories": "90 kcal", "protein": "3g", "carbs": "15g", "fat": "1g"}
        }"#,
    );
    let image = FakeImageGenerator::returning("image/png", PNG_BYTES);

    let result = generate_recipe(&text, &image, MealCategory::Breakfast, AppLanguage::English).await;
    assert!(matches!(result, Err(GenerateError::MalformedResponse(_))));
}

#[tokio::test]
async fn zero_servings_is_malformed() {
    let text = FakeTextGenerator::new().with_default_response(
        r#"{
            "title": "Toast", "description": "d", "prepTime": "1 min", "cookTime": "2 mins",
            "servings": 0, "ingredients": ["bread"], "instructions": ["toast it"],
            "nutrition": {"calories": "90 kcal", "protein": "3g", "carbs": "15g", "fat": "1g"}
        }"#,
    );
    let image = FakeImageGenerator::returning("image/png", PNG_BYTES);

    let result = generate_recipe(&text, &image, MealCategory::Breakfast, AppLanguage::English).await;
    assert!(matches!(result, Err(GenerateError::MalformedResponse(_))));
}

#[tokio::test]
async fn service_failure_propagates_unchanged() {
    // No responses registered and no default: the fake fails the call
    let text = FakeTextGenerator::new();
    let image = FakeImageGenerator::returning("image/png", PNG_BYTES);

    let result = generate_recipe(&text, &image, MealCategory::Dinner, AppLanguage::English).await;
    assert!(matches!(
        result,
        Err(GenerateError::Service(GenAiError::RequestFailed(_)))
    ));
}
