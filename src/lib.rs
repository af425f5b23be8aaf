pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod model;
pub mod mood;
pub mod query;
pub mod render;
pub mod session;
pub mod store;

pub use client::{RecipeSource, SpoonacularClient};
pub use config::ApiConfig;
pub use error::SearchError;
pub use model::{ExtendedIngredient, PreferencesPatch, Recipe, UserPreferences};
pub use query::{build_query, SearchQuery, DEFAULT_RESULT_COUNT};
pub use session::Session;
pub use store::{RecipeStore, StoreEvent, SubscriptionId};

/// Search recipes for the given preferences using configuration from
/// `config.toml` and `MOODFOOD__*` environment variables.
///
/// Unlike [`Session::search`], errors are returned to the caller.
pub async fn search_recipes(preferences: &UserPreferences) -> Result<Vec<Recipe>, SearchError> {
    let config = ApiConfig::load()?;
    search_recipes_with_config(preferences, &config).await
}

pub async fn search_recipes_with_config(
    preferences: &UserPreferences,
    config: &ApiConfig,
) -> Result<Vec<Recipe>, SearchError> {
    let client = SpoonacularClient::new(config)?;
    let query = build_query(preferences, config.result_count);
    client.search(&query).await
}

/// Fetch one detailed recipe using configuration from the environment.
pub async fn fetch_recipe(id: u64) -> Result<Recipe, SearchError> {
    let config = ApiConfig::load()?;
    fetch_recipe_with_config(id, &config).await
}

pub async fn fetch_recipe_with_config(id: u64, config: &ApiConfig) -> Result<Recipe, SearchError> {
    SpoonacularClient::new(config)?.recipe_details(id).await
}
