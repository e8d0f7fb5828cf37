//! Share-text builders.
//!
//! Pure formatting only; whatever share capability the surrounding surface
//! has (platform share sheet, clipboard, a terminal) decides delivery.

use crate::types::Recipe;

/// Short message for sharing a recipe with a link target.
pub fn share_message(recipe: &Recipe) -> String {
    format!(
        "Check out this {} recipe: {}!",
        recipe.category.as_str(),
        recipe.title
    )
}

/// Plain-text form used when no share target is available: the title plus
/// the full ingredient list.
pub fn clipboard_text(recipe: &Recipe) -> String {
    format!(
        "Recipe: {}\n\nIngredients: {}",
        recipe.title,
        recipe.ingredients.join(", ")
    )
}
