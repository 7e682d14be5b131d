use crate::catalog::fallback_recipes;
use crate::model::Recipe;
use crate::source::{pick_random, RecipeSource};
use async_trait::async_trait;

/// [`RecipeSource`] over an in-memory list, by default the bundled catalog.
///
/// Unlike the remote listing, `recipes_by_category` returns full records.
#[derive(Debug, Clone)]
pub struct LocalCatalog {
    recipes: Vec<Recipe>,
}

impl LocalCatalog {
    pub fn new() -> Self {
        Self::from_recipes(fallback_recipes())
    }

    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}

impl Default for LocalCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeSource for LocalCatalog {
    fn source_name(&self) -> &str {
        "local"
    }

    async fn random_recipe(&self) -> Option<Recipe> {
        pick_random(&self.recipes).cloned()
    }

    async fn recipes_by_category(&self, category: &str) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.category == category)
            .cloned()
            .collect()
    }

    async fn recipe_by_id(&self, id: &str) -> Option<Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id).cloned()
    }

    async fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for recipe in &self.recipes {
            if !categories.contains(&recipe.category) {
                categories.push(recipe.category.clone());
            }
        }
        categories
    }
}
