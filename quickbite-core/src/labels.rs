//! Static label tables for the supported display languages.
//!
//! Configuration data, not logic: every translatable string is keyed by
//! (label key, language), with English as the fallback for entries a
//! language has no row for.

use crate::types::{AppLanguage, MealCategory};

/// Keys for translatable UI strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKey {
    Thinking,
    GenerationFailed,
    PrepTime,
    CookTime,
    Servings,
    Ingredients,
    Instructions,
    Nutrition,
    Calories,
    Protein,
    Carbs,
    Fat,
    LikedHeading,
    NoLikedRecipes,
    SavedToLiked,
    RemovedFromLiked,
}

/// (key, language, text) rows. English rows exist for every key.
const LABELS: &[(LabelKey, AppLanguage, &str)] = &[
    (LabelKey::Thinking, AppLanguage::English, "Thinking..."),
    (LabelKey::Thinking, AppLanguage::Turkish, "Düşünülüyor..."),
    (LabelKey::Thinking, AppLanguage::Spanish, "Pensando..."),
    (
        LabelKey::GenerationFailed,
        AppLanguage::English,
        "Something went wrong chef! Try again.",
    ),
    (
        LabelKey::GenerationFailed,
        AppLanguage::Turkish,
        "Bir hata oluştu şef! Tekrar dene.",
    ),
    (
        LabelKey::GenerationFailed,
        AppLanguage::Spanish,
        "¡Algo salió mal chef! Inténtalo de nuevo.",
    ),
    (LabelKey::PrepTime, AppLanguage::English, "Prep"),
    (LabelKey::PrepTime, AppLanguage::Turkish, "Hazırlık"),
    (LabelKey::PrepTime, AppLanguage::Spanish, "Preparación"),
    (LabelKey::CookTime, AppLanguage::English, "Cook"),
    (LabelKey::CookTime, AppLanguage::Turkish, "Pişirme"),
    (LabelKey::CookTime, AppLanguage::Spanish, "Cocción"),
    (LabelKey::Servings, AppLanguage::English, "Servings"),
    (LabelKey::Servings, AppLanguage::Turkish, "Porsiyon"),
    (LabelKey::Servings, AppLanguage::Spanish, "Porciones"),
    (LabelKey::Ingredients, AppLanguage::English, "Ingredients"),
    (LabelKey::Ingredients, AppLanguage::Turkish, "Malzemeler"),
    (LabelKey::Ingredients, AppLanguage::Spanish, "Ingredientes"),
    (LabelKey::Instructions, AppLanguage::English, "Instructions"),
    (LabelKey::Instructions, AppLanguage::Turkish, "Talimatlar"),
    (LabelKey::Instructions, AppLanguage::Spanish, "Instrucciones"),
    (LabelKey::Nutrition, AppLanguage::English, "Nutrition"),
    (LabelKey::Nutrition, AppLanguage::Turkish, "Besin Değerleri"),
    (LabelKey::Nutrition, AppLanguage::Spanish, "Nutrición"),
    (LabelKey::Calories, AppLanguage::English, "Calories"),
    (LabelKey::Calories, AppLanguage::Turkish, "Kalori"),
    (LabelKey::Calories, AppLanguage::Spanish, "Calorías"),
    (LabelKey::Protein, AppLanguage::English, "Protein"),
    (LabelKey::Protein, AppLanguage::Turkish, "Protein"),
    (LabelKey::Protein, AppLanguage::Spanish, "Proteína"),
    (LabelKey::Carbs, AppLanguage::English, "Carbs"),
    (LabelKey::Carbs, AppLanguage::Turkish, "Karbonhidrat"),
    (LabelKey::Carbs, AppLanguage::Spanish, "Carbohidratos"),
    (LabelKey::Fat, AppLanguage::English, "Fat"),
    (LabelKey::Fat, AppLanguage::Turkish, "Yağ"),
    (LabelKey::Fat, AppLanguage::Spanish, "Grasa"),
    (LabelKey::LikedHeading, AppLanguage::English, "Liked Recipes"),
    (
        LabelKey::LikedHeading,
        AppLanguage::Turkish,
        "Beğenilen Tarifler",
    ),
    (
        LabelKey::LikedHeading,
        AppLanguage::Spanish,
        "Recetas Favoritas",
    ),
    (
        LabelKey::NoLikedRecipes,
        AppLanguage::English,
        "No liked recipes yet.",
    ),
    (
        LabelKey::NoLikedRecipes,
        AppLanguage::Turkish,
        "Henüz beğenilen tarif yok.",
    ),
    (
        LabelKey::NoLikedRecipes,
        AppLanguage::Spanish,
        "Aún no hay recetas favoritas.",
    ),
    // TODO: TR/ES rows once the wording settles
    (
        LabelKey::SavedToLiked,
        AppLanguage::English,
        "Saved to liked recipes.",
    ),
    (
        LabelKey::RemovedFromLiked,
        AppLanguage::English,
        "Removed from liked recipes.",
    ),
];

/// Category display names, keyed by (category, language).
const CATEGORY_LABELS: &[(MealCategory, AppLanguage, &str)] = &[
    (MealCategory::Breakfast, AppLanguage::English, "Breakfast"),
    (MealCategory::Breakfast, AppLanguage::Turkish, "Kahvaltı"),
    (MealCategory::Breakfast, AppLanguage::Spanish, "Desayuno"),
    (MealCategory::Lunch, AppLanguage::English, "Lunch"),
    (MealCategory::Lunch, AppLanguage::Turkish, "Öğle Yemeği"),
    (MealCategory::Lunch, AppLanguage::Spanish, "Almuerzo"),
    (MealCategory::Dinner, AppLanguage::English, "Dinner"),
    (MealCategory::Dinner, AppLanguage::Turkish, "Akşam Yemeği"),
    (MealCategory::Dinner, AppLanguage::Spanish, "Cena"),
    (MealCategory::Vegan, AppLanguage::English, "Vegan"),
    (MealCategory::Vegan, AppLanguage::Turkish, "Vegan"),
    (MealCategory::Vegan, AppLanguage::Spanish, "Vegano"),
    (MealCategory::Dessert, AppLanguage::English, "Dessert"),
    (MealCategory::Dessert, AppLanguage::Turkish, "Tatlı"),
    (MealCategory::Dessert, AppLanguage::Spanish, "Postre"),
    (MealCategory::Snack, AppLanguage::English, "Snack"),
    (MealCategory::Snack, AppLanguage::Turkish, "Atıştırmalık"),
    (MealCategory::Snack, AppLanguage::Spanish, "Merienda"),
];

/// Look up a UI string, falling back to English for missing rows.
pub fn label(key: LabelKey, language: AppLanguage) -> &'static str {
    lookup(key, language)
        .or_else(|| lookup(key, AppLanguage::English))
        .unwrap_or("")
}

/// Localized display name for a category, falling back to the raw name.
pub fn category_label(category: MealCategory, language: AppLanguage) -> &'static str {
    CATEGORY_LABELS
        .iter()
        .find(|(c, l, _)| *c == category && *l == language)
        .map(|(_, _, text)| *text)
        .unwrap_or_else(|| category.as_str())
}

fn lookup(key: LabelKey, language: AppLanguage) -> Option<&'static str> {
    LABELS
        .iter()
        .find(|(k, l, _)| *k == key && *l == language)
        .map(|(_, _, text)| *text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_an_english_row() {
        for (key, _, _) in LABELS {
            assert!(
                lookup(*key, AppLanguage::English).is_some(),
                "missing English row for {:?}",
                key
            );
        }
    }

    #[test]
    fn test_translated_lookup() {
        assert_eq!(
            label(LabelKey::Ingredients, AppLanguage::Turkish),
            "Malzemeler"
        );
        assert_eq!(
            label(LabelKey::GenerationFailed, AppLanguage::Spanish),
            "¡Algo salió mal chef! Inténtalo de nuevo."
        );
    }

    #[test]
    fn test_missing_row_falls_back_to_english() {
        assert_eq!(
            label(LabelKey::SavedToLiked, AppLanguage::Turkish),
            "Saved to liked recipes."
        );
    }

    #[test]
    fn test_category_labels_cover_all_pairs() {
        for category in MealCategory::ALL {
            for language in AppLanguage::ALL {
                assert!(!category_label(*category, *language).is_empty());
            }
        }
        assert_eq!(
            category_label(MealCategory::Dinner, AppLanguage::Turkish),
            "Akşam Yemeği"
        );
    }
}
