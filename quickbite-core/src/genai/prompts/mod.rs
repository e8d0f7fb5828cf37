//! Prompt templates and the recipe output schema.

pub mod recipe;

pub use recipe::{recipe_schema, render_image_prompt, render_recipe_prompt, IMAGE_ASPECT_RATIO};
