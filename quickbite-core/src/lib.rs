pub mod genai;
pub mod generate;
pub mod image;
pub mod labels;
pub mod profile;
pub mod share;
pub mod types;

pub use genai::{
    FakeImageGenerator, FakeTextGenerator, GeminiClient, GenAiConfig, GenAiError, ImageGenerator,
    InlineImage, TextGenerator,
};
pub use generate::{generate_recipe, GenerateError};
pub use labels::{category_label, label, LabelKey};
pub use profile::{Profile, ProfileError};
pub use types::{AppLanguage, MealCategory, Nutrition, Recipe};
