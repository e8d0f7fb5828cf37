mod output;

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use quickbite_core::{
    generate_recipe, label, share, AppLanguage, GeminiClient, LabelKey, MealCategory, Profile,
};

#[derive(Parser)]
#[command(name = "quickbite")]
#[command(about = "AI recipe discovery", long_about = None)]
struct Cli {
    /// Data directory for the profile (default: ~/.quickbite)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a recipe for a meal category
    Generate {
        /// Meal category: breakfast, lunch, dinner, vegan, dessert, snack
        #[arg(long, default_value = "dinner")]
        category: String,
        /// Display language for this run (overrides the stored preference)
        #[arg(long)]
        language: Option<String>,
        /// Save the generated recipe to the liked list
        #[arg(long)]
        like: bool,
    },
    /// List liked recipes
    Liked,
    /// Remove a recipe from the liked list
    Unlike {
        /// Recipe id, as shown by `liked`
        id: String,
    },
    /// Print share text for a liked recipe
    Share {
        /// Recipe id, as shown by `liked`
        id: String,
    },
    /// Show or set the preferred display language
    Language {
        /// Language name or code: english/en, turkish/tr, spanish/es
        value: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let dir = cli.data_dir.clone().unwrap_or_else(Profile::default_dir);
    let mut profile = Profile::load(dir);

    match cli.command {
        Commands::Generate {
            category,
            language,
            like,
        } => {
            generate(&mut profile, &category, language.as_deref(), like).await?;
        }
        Commands::Liked => liked(&profile),
        Commands::Unlike { id } => unlike(&mut profile, &id)?,
        Commands::Share { id } => share_recipe(&profile, &id)?,
        Commands::Language { value } => language_pref(&mut profile, value.as_deref())?,
    }

    Ok(())
}

fn parse_category(s: &str) -> Result<MealCategory> {
    MealCategory::from_str(s).ok_or_else(|| {
        let valid: Vec<&str> = MealCategory::ALL.iter().map(|c| c.as_str()).collect();
        anyhow!(
            "unknown category '{}' (expected one of: {})",
            s,
            valid.join(", ").to_lowercase()
        )
    })
}

fn parse_language(s: &str) -> Result<AppLanguage> {
    AppLanguage::from_str(s).ok_or_else(|| {
        let valid: Vec<&str> = AppLanguage::ALL.iter().map(|l| l.as_str()).collect();
        anyhow!(
            "unknown language '{}' (expected one of: {})",
            s,
            valid.join(", ").to_lowercase()
        )
    })
}

async fn generate(
    profile: &mut Profile,
    category: &str,
    language: Option<&str>,
    like: bool,
) -> Result<()> {
    let category = parse_category(category)?;
    let language = match language {
        Some(value) => parse_language(value)?,
        None => profile.language(),
    };

    let client = GeminiClient::from_env()?;

    eprintln!("{}", label(LabelKey::Thinking, language));

    match generate_recipe(&client, &client, category, language).await {
        Ok(recipe) => {
            output::print_recipe(&recipe, language);

            if like {
                profile.toggle_like(&recipe)?;
                println!();
                println!("{}", label(LabelKey::SavedToLiked, language));
            }

            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "recipe generation failed");
            eprintln!("{}", label(LabelKey::GenerationFailed, language));
            Err(e.into())
        }
    }
}

fn liked(profile: &Profile) {
    let language = profile.language();

    if profile.liked().is_empty() {
        println!("{}", label(LabelKey::NoLikedRecipes, language));
        return;
    }

    println!("{}", label(LabelKey::LikedHeading, language));
    for recipe in profile.liked() {
        output::print_liked_line(recipe, language);
    }
}

fn unlike(profile: &mut Profile, id: &str) -> Result<()> {
    let language = profile.language();

    match profile.unlike_by_id(id)? {
        Some(recipe) => {
            println!("{} ({})", label(LabelKey::RemovedFromLiked, language), recipe.title);
            Ok(())
        }
        None => bail!("no liked recipe with id {}", id),
    }
}

fn share_recipe(profile: &Profile, id: &str) -> Result<()> {
    let recipe = profile
        .find_liked(id)
        .ok_or_else(|| anyhow!("no liked recipe with id {}", id))?;

    println!("{}", share::share_message(recipe));
    println!();
    println!("{}", share::clipboard_text(recipe));

    Ok(())
}

fn language_pref(profile: &mut Profile, value: Option<&str>) -> Result<()> {
    match value {
        Some(value) => {
            let language = parse_language(value)?;
            profile.set_language(language)?;
            println!("{}", language.as_str());
        }
        None => println!("{}", profile.language().as_str()),
    }

    Ok(())
}
