use crate::model::Recipe;
use crate::source::RecipeSource;
use async_trait::async_trait;
use log::info;

/// Asks `primary` first and `secondary` only when the primary comes back empty.
///
/// Typically a [`MealDbClient`](crate::MealDbClient) backed by the bundled
/// [`LocalCatalog`](crate::LocalCatalog).
pub struct FallbackSource<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> FallbackSource<P, S>
where
    P: RecipeSource,
    S: RecipeSource,
{
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn secondary(&self) -> &S {
        &self.secondary
    }

    fn log_fallback(&self, operation: &str) {
        info!(
            "'{}' returned nothing for {}, falling back to '{}'",
            self.primary.source_name(),
            operation,
            self.secondary.source_name()
        );
    }
}

#[async_trait]
impl<P, S> RecipeSource for FallbackSource<P, S>
where
    P: RecipeSource,
    S: RecipeSource,
{
    fn source_name(&self) -> &str {
        "fallback"
    }

    async fn random_recipe(&self) -> Option<Recipe> {
        if let Some(recipe) = self.primary.random_recipe().await {
            return Some(recipe);
        }
        self.log_fallback("random recipe");
        self.secondary.random_recipe().await
    }

    async fn recipes_by_category(&self, category: &str) -> Vec<Recipe> {
        let recipes = self.primary.recipes_by_category(category).await;
        if !recipes.is_empty() {
            return recipes;
        }
        self.log_fallback(&format!("category {}", category));
        self.secondary.recipes_by_category(category).await
    }

    async fn recipe_by_id(&self, id: &str) -> Option<Recipe> {
        if let Some(recipe) = self.primary.recipe_by_id(id).await {
            return Some(recipe);
        }
        self.log_fallback(&format!("id {}", id));
        self.secondary.recipe_by_id(id).await
    }

    async fn categories(&self) -> Vec<String> {
        let categories = self.primary.categories().await;
        if !categories.is_empty() {
            return categories;
        }
        self.log_fallback("categories");
        self.secondary.categories().await
    }
}
