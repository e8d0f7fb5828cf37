use std::fmt;

use serde::{Deserialize, Serialize};

/// Meal categories a recipe can belong to.
///
/// The category is chosen by the caller, never generated. Serialized as the
/// display name ("Breakfast", "Dinner", ...) to match persisted profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Vegan,
    Dessert,
    Snack,
}

impl MealCategory {
    /// All categories in display order.
    pub const ALL: &'static [MealCategory] = &[
        MealCategory::Breakfast,
        MealCategory::Lunch,
        MealCategory::Dinner,
        MealCategory::Vegan,
        MealCategory::Dessert,
        MealCategory::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "Breakfast",
            MealCategory::Lunch => "Lunch",
            MealCategory::Dinner => "Dinner",
            MealCategory::Vegan => "Vegan",
            MealCategory::Dessert => "Dessert",
            MealCategory::Snack => "Snack",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "breakfast" => Some(MealCategory::Breakfast),
            "lunch" => Some(MealCategory::Lunch),
            "dinner" => Some(MealCategory::Dinner),
            "vegan" => Some(MealCategory::Vegan),
            "dessert" => Some(MealCategory::Dessert),
            "snack" => Some(MealCategory::Snack),
            _ => None,
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported display languages.
///
/// The language controls both the generated recipe text and the UI strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppLanguage {
    English,
    Turkish,
    Spanish,
}

impl AppLanguage {
    /// All supported languages.
    pub const ALL: &'static [AppLanguage] = &[
        AppLanguage::English,
        AppLanguage::Turkish,
        AppLanguage::Spanish,
    ];

    /// Language name as used in generation prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppLanguage::English => "English",
            AppLanguage::Turkish => "Turkish",
            AppLanguage::Spanish => "Spanish",
        }
    }

    /// Two-letter code, for terse CLI input.
    pub fn code(&self) -> &'static str {
        match self {
            AppLanguage::English => "en",
            AppLanguage::Turkish => "tr",
            AppLanguage::Spanish => "es",
        }
    }

    /// Accepts either the language name or the two-letter code.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "english" | "en" => Some(AppLanguage::English),
            "turkish" | "tr" => Some(AppLanguage::Turkish),
            "spanish" | "es" => Some(AppLanguage::Spanish),
            _ => None,
        }
    }
}

impl fmt::Display for AppLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nutrition summary for one recipe. Values are free text as generated
/// (e.g. "350 kcal"), not normalized quantities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

/// A generated recipe.
///
/// Assembled once from the generation flow and never mutated afterwards.
/// Field names serialize in camelCase so liked lists written by earlier
/// versions of the app load unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Process-unique identifier, minted at assembly time.
    pub id: String,
    pub title: String,
    pub category: MealCategory,
    pub description: String,
    /// Free-text duration, e.g. "10 mins".
    pub prep_time: String,
    /// Free-text duration, e.g. "20 mins".
    pub cook_time: String,
    pub servings: u32,
    /// Display order is meaningful.
    pub ingredients: Vec<String>,
    /// Execution order is meaningful.
    pub instructions: Vec<String>,
    pub nutrition: Nutrition,
    /// Data URI of a generated image, or a deterministic placeholder URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
