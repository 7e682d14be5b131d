//! Best-effort access to recipes from TheMealDB, normalized into [`Recipe`].
//!
//! Every lookup degrades to `None` or an empty list on failure, so callers
//! treat "nothing found" and "network down" the same way. A bundled catalog of
//! five recipes ([`fallback_recipes`]) is available without network access.
//!
//! The `fetch_*` functions are one-shot helpers: each call reloads the
//! configuration and builds a fresh HTTP client, so no connections are reused
//! between calls. Callers making repeated requests should keep one client from
//! [`MealDbClient::from_config`] instead.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() {
//! use recipe_feed::{FallbackSource, LocalCatalog, MealDbClient, RecipeSource};
//!
//! let remote = MealDbClient::new().expect("HTTP client");
//! let source = FallbackSource::new(remote, LocalCatalog::new());
//! if let Some(recipe) = source.random_recipe().await {
//!     println!("{} ({} ingredients)", recipe.name, recipe.ingredients.len());
//! }
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod mealdb;
pub mod model;
pub mod source;

pub use catalog::fallback_recipes;
pub use crate::config::{load_config, FeedConfig};
pub use error::{best_effort, FeedError};
pub use mealdb::{MealDbClient, MealDbClientBuilder};
pub use model::{Difficulty, Ingredient, Recipe};
pub use source::{random_recipe_in_category, FallbackSource, LocalCatalog, RecipeSource};

use log::warn;

/// Client built from `config.toml` / `RECIPE_FEED__*`, or defaults if that fails.
///
/// Built anew on every call.
fn configured_client() -> Option<MealDbClient> {
    let config = load_config().unwrap_or_else(|e| {
        warn!("Using default configuration: {}", e);
        FeedConfig::default()
    });

    best_effort(MealDbClient::from_config(&config).map(Some), "HTTP client")
}

/// Fetch one random recipe, or `None` if the meal database is unavailable.
pub async fn fetch_random_recipe() -> Option<Recipe> {
    configured_client()?.random_recipe().await
}

/// Fetch the partial recipes listed under `category`.
pub async fn fetch_recipes_by_category(category: &str) -> Vec<Recipe> {
    match configured_client() {
        Some(client) => client.recipes_by_category(category).await,
        None => Vec::new(),
    }
}

/// Fetch the full recipe with identifier `id`, or `None` if there is none or
/// the meal database is unavailable.
pub async fn fetch_recipe_by_id(id: &str) -> Option<Recipe> {
    configured_client()?.recipe_by_id(id).await
}

/// Fetch the category names known to the meal database.
pub async fn fetch_categories() -> Vec<String> {
    match configured_client() {
        Some(client) => client.categories().await,
        None => Vec::new(),
    }
}
