mod fallback;
mod local;

pub use fallback::FallbackSource;
pub use local::LocalCatalog;

use crate::model::Recipe;
use async_trait::async_trait;
use log::debug;
use rand::seq::SliceRandom;

/// Anything that can answer the four recipe queries.
///
/// Implementations never fail: "nothing found" and "source unavailable" both
/// come back as `None` or an empty list.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name (e.g., "mealdb", "local")
    fn source_name(&self) -> &str;

    async fn random_recipe(&self) -> Option<Recipe>;

    /// Recipes filed under `category`. Remote listings are partial records.
    async fn recipes_by_category(&self, category: &str) -> Vec<Recipe>;

    async fn recipe_by_id(&self, id: &str) -> Option<Recipe>;

    async fn categories(&self) -> Vec<String>;
}

/// Pick a recipe from `category` at random and fetch its full record.
///
/// If the detail lookup comes back empty the listing entry is returned as is.
pub async fn random_recipe_in_category<S>(source: &S, category: &str) -> Option<Recipe>
where
    S: RecipeSource + ?Sized,
{
    let listing = source.recipes_by_category(category).await;
    let picked = pick_random(&listing)?.clone();
    debug!(
        "Picked '{}' ({}) out of {} {} recipes from {}",
        picked.name,
        picked.id,
        listing.len(),
        category,
        source.source_name()
    );

    match source.recipe_by_id(&picked.id).await {
        Some(full) => Some(full),
        None => Some(picked),
    }
}

pub(crate) fn pick_random(recipes: &[Recipe]) -> Option<&Recipe> {
    recipes.choose(&mut rand::thread_rng())
}
