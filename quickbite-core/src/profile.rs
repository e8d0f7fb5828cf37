//! Liked recipes and language preference, persisted to disk.
//!
//! The profile is an explicitly owned state object with an explicit
//! lifecycle: load once at startup, write on every change. Missing or
//! unreadable files degrade to defaults with a warning, never a crash.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{AppLanguage, Recipe};

/// File holding the liked-recipes list.
pub const LIKED_FILE: &str = "liked.json";

/// File holding the language preference.
pub const LANGUAGE_FILE: &str = "language.json";

/// Error type for profile persistence.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("profile serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistent per-user state: the liked list and the display language.
///
/// Two recipes are the same liked item when their ids match. Titles are
/// free text from a generative model and may collide, so they are not
/// part of the identity.
#[derive(Debug)]
pub struct Profile {
    dir: PathBuf,
    liked: Vec<Recipe>,
    language: AppLanguage,
}

impl Profile {
    /// Default data directory: ~/.quickbite
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".quickbite"))
            .unwrap_or_else(|| PathBuf::from(".quickbite"))
    }

    /// Load the profile from `dir`, substituting defaults for anything
    /// missing or unreadable.
    pub fn load(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let liked: Vec<Recipe> = read_json(&dir.join(LIKED_FILE)).unwrap_or_default();
        let language = read_json(&dir.join(LANGUAGE_FILE)).unwrap_or(AppLanguage::English);

        Self {
            dir,
            liked,
            language,
        }
    }

    /// Liked recipes, oldest first.
    pub fn liked(&self) -> &[Recipe] {
        &self.liked
    }

    pub fn language(&self) -> AppLanguage {
        self.language
    }

    pub fn is_liked(&self, recipe: &Recipe) -> bool {
        self.liked.iter().any(|r| r.id == recipe.id)
    }

    /// Look up a liked recipe by id.
    pub fn find_liked(&self, id: &str) -> Option<&Recipe> {
        self.liked.iter().find(|r| r.id == id)
    }

    /// Like the recipe if it is not in the list, unlike it if it is.
    /// Persists the list and returns whether the recipe is liked afterwards.
    pub fn toggle_like(&mut self, recipe: &Recipe) -> Result<bool, ProfileError> {
        let now_liked = if self.is_liked(recipe) {
            self.liked.retain(|r| r.id != recipe.id);
            false
        } else {
            self.liked.push(recipe.clone());
            true
        };

        self.save_liked()?;
        Ok(now_liked)
    }

    /// Remove a liked recipe by id. Persists and returns the removed
    /// recipe, or None if the id was not in the list.
    pub fn unlike_by_id(&mut self, id: &str) -> Result<Option<Recipe>, ProfileError> {
        match self.liked.iter().position(|r| r.id == id) {
            Some(index) => {
                let removed = self.liked.remove(index);
                self.save_liked()?;
                Ok(Some(removed))
            }
            None => Ok(None),
        }
    }

    /// Set and persist the language preference.
    pub fn set_language(&mut self, language: AppLanguage) -> Result<(), ProfileError> {
        self.language = language;
        write_json(&self.dir, LANGUAGE_FILE, &self.language)
    }

    fn save_liked(&self) -> Result<(), ProfileError> {
        write_json(&self.dir, LIKED_FILE, &self.liked)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return None,
    };

    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "ignoring unreadable profile file"
            );
            None
        }
    }
}

fn write_json<T: serde::Serialize>(dir: &Path, file: &str, value: &T) -> Result<(), ProfileError> {
    fs::create_dir_all(dir)?;
    let content = serde_json::to_string_pretty(value)?;
    fs::write(dir.join(file), content)?;
    Ok(())
}
