//! Terminal rendering for recipes.

use quickbite_core::{category_label, label, AppLanguage, LabelKey, Recipe};

pub fn print_recipe(recipe: &Recipe, language: AppLanguage) {
    println!(
        "{}  [{}]",
        recipe.title,
        category_label(recipe.category, language)
    );
    println!("{}", recipe.description);
    println!();
    println!(
        "{}: {}  |  {}: {}  |  {}: {}",
        label(LabelKey::PrepTime, language),
        recipe.prep_time,
        label(LabelKey::CookTime, language),
        recipe.cook_time,
        label(LabelKey::Servings, language),
        recipe.servings,
    );
    println!();

    println!("{}:", label(LabelKey::Ingredients, language));
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }
    println!();

    println!("{}:", label(LabelKey::Instructions, language));
    for (index, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }
    println!();

    println!(
        "{}: {} {} | {} {} | {} {} | {} {}",
        label(LabelKey::Nutrition, language),
        label(LabelKey::Calories, language),
        recipe.nutrition.calories,
        label(LabelKey::Protein, language),
        recipe.nutrition.protein,
        label(LabelKey::Carbs, language),
        recipe.nutrition.carbs,
        label(LabelKey::Fat, language),
        recipe.nutrition.fat,
    );

    if let Some(url) = &recipe.image_url {
        println!();
        if let Some(mime) = url.strip_prefix("data:").and_then(|rest| rest.split(';').next()) {
            // Inline payloads are too large to print
            println!("[generated image: {}, {} chars]", mime, url.len());
        } else {
            println!("{}", url);
        }
    }

    println!();
    println!("id: {}", recipe.id);
}

pub fn print_liked_line(recipe: &Recipe, language: AppLanguage) {
    println!(
        "  {}  {}  ({})",
        recipe.id,
        recipe.title,
        category_label(recipe.category, language)
    );
}
