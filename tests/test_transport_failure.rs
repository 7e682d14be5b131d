use recipe_feed::{FallbackSource, LocalCatalog, MealDbClient, RecipeSource};
use std::time::Duration;

/// Nothing listens on port 1, so every request fails to connect.
fn unreachable_client() -> MealDbClient {
    MealDbClient::builder()
        .base_url("http://127.0.0.1:1/api/json/v1/1")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_singular_lookups_are_absent() {
    let _ = env_logger::builder().is_test(true).try_init();
    let client = unreachable_client();

    assert!(client.random_recipe().await.is_none());
    assert!(client.recipe_by_id("52772").await.is_none());
}

#[tokio::test]
async fn test_listings_are_empty() {
    let client = unreachable_client();

    assert!(client.recipes_by_category("Seafood").await.is_empty());
    assert!(client.categories().await.is_empty());
}

#[tokio::test]
async fn test_local_catalog_covers_a_dead_remote() {
    let source = FallbackSource::new(unreachable_client(), LocalCatalog::new());

    let recipe = source.random_recipe().await.unwrap();
    assert!(["1", "2", "3", "4", "5"].contains(&recipe.id.as_str()));
    assert_eq!(source.recipe_by_id("5").await.unwrap().name, "Fish and Chips");
    assert_eq!(source.categories().await.len(), 5);

    let pasta = source.recipes_by_category("Pasta").await;
    assert_eq!(pasta.len(), 1);
    assert_eq!(pasta[0].ingredients.len(), 4);
}
