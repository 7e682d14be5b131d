use crate::config::{FeedConfig, DEFAULT_BASE_URL};
use crate::error::{best_effort, FeedError};
use crate::mealdb::normalize::{normalize_meal, partial_recipe};
use crate::mealdb::raw::{CategoryEntry, MealSummary, Meals, RawMeal};
use crate::model::Recipe;
use crate::source::RecipeSource;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client for the TheMealDB v1 JSON API.
///
/// Every lookup is best effort: failures are logged and surface as `None` or
/// an empty list through [`RecipeSource`].
#[derive(Debug, Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Client for the public endpoint with default settings
    pub fn new() -> Result<Self, FeedError> {
        Self::builder().build()
    }

    pub fn from_config(config: &FeedConfig) -> Result<Self, FeedError> {
        MealDbClientBuilder::from_config(config).build()
    }

    pub fn builder() -> MealDbClientBuilder {
        MealDbClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `endpoint` and unwrap the `meals` envelope; `null` becomes empty.
    async fn get_meals<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, FeedError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        let envelope: Meals<T> = serde_json::from_str(&body)?;
        Ok(envelope.meals.unwrap_or_default())
    }

    async fn try_random_recipe(&self) -> Result<Option<Recipe>, FeedError> {
        let meals: Vec<RawMeal> = self.get_meals("random.php", &[]).await?;
        Ok(meals.into_iter().next().map(normalize_meal))
    }

    async fn try_recipes_by_category(&self, category: &str) -> Result<Vec<Recipe>, FeedError> {
        let meals: Vec<MealSummary> = self.get_meals("filter.php", &[("c", category)]).await?;
        Ok(meals
            .into_iter()
            .map(|summary| partial_recipe(summary, category))
            .collect())
    }

    async fn try_recipe_by_id(&self, id: &str) -> Result<Option<Recipe>, FeedError> {
        let meals: Vec<RawMeal> = self.get_meals("lookup.php", &[("i", id)]).await?;
        Ok(meals.into_iter().next().map(normalize_meal))
    }

    async fn try_categories(&self) -> Result<Vec<String>, FeedError> {
        let entries: Vec<CategoryEntry> = self.get_meals("list.php", &[("c", "list")]).await?;
        Ok(entries
            .into_iter()
            .map(|entry| entry.str_category.unwrap_or_default())
            .collect())
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    fn source_name(&self) -> &str {
        "mealdb"
    }

    async fn random_recipe(&self) -> Option<Recipe> {
        best_effort(self.try_random_recipe().await, "random recipe")
    }

    async fn recipes_by_category(&self, category: &str) -> Vec<Recipe> {
        best_effort(
            self.try_recipes_by_category(category).await,
            &format!("recipes for category {}", category),
        )
    }

    async fn recipe_by_id(&self, id: &str) -> Option<Recipe> {
        best_effort(
            self.try_recipe_by_id(id).await,
            &format!("recipe by id {}", id),
        )
    }

    async fn categories(&self) -> Vec<String> {
        best_effort(self.try_categories().await, "categories")
    }
}

/// Builder for [`MealDbClient`]
#[derive(Debug, Default)]
pub struct MealDbClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl MealDbClientBuilder {
    /// Builder preloaded with every setting from `config`
    pub fn from_config(config: &FeedConfig) -> Self {
        Self {
            base_url: Some(config.base_url.clone()),
            timeout: config.timeout_duration(),
            user_agent: Some(config.user_agent.clone()),
        }
    }

    /// Point the client at another deployment of the API
    ///
    /// # Example
    /// ```
    /// use recipe_feed::MealDbClient;
    ///
    /// let client = MealDbClient::builder()
    ///     .base_url("http://localhost:8080/api/json/v1/1")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(client.base_url(), "http://localhost:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// Without one, requests wait as long as reqwest's default allows.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<MealDbClient, FeedError> {
        let defaults = FeedConfig::default();

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if base_url.is_empty() {
            return Err(FeedError::BuilderError(
                "Base URL cannot be empty".to_string(),
            ));
        }

        let mut client =
            Client::builder().user_agent(self.user_agent.unwrap_or(defaults.user_agent));
        if let Some(timeout) = self.timeout {
            client = client.timeout(timeout);
        }
        let client = client.build()?;

        Ok(MealDbClient { client, base_url })
    }
}
