use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::SearchError;
use crate::model::Recipe;
use crate::query::SearchQuery;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; MoodFood/0.1)";

/// Anything that can answer recipe searches and detail lookups
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Run a complex search with the given parameters
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Recipe>, SearchError>;

    /// Fetch one fully detailed recipe
    async fn recipe_details(&self, id: u64) -> Result<Recipe, SearchError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Recipe>,
}

/// Client for a Spoonacular-compatible recipe API
pub struct SpoonacularClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SpoonacularClient {
    /// Create a client from configuration; fails if no API key is configured
    pub fn new(config: &ApiConfig) -> Result<Self, SearchError> {
        let api_key = config.require_api_key()?.to_string();
        Self::with_base_url(api_key, config.base_url.clone(), config.timeout_duration())
    }

    pub fn with_base_url(
        api_key: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(SpoonacularClient {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T, SearchError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(&[("apiKey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let body = read_success_body(response).await?;
        serde_json::from_str(&body).map_err(SearchError::from)
    }
}

async fn read_success_body(response: Response) -> Result<String, SearchError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(SearchError::Api {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

#[async_trait]
impl RecipeSource for SpoonacularClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Recipe>, SearchError> {
        debug!("Searching recipes with {}", query.to_query_string());
        let response: SearchResponse = self
            .get_json("/recipes/complexSearch", query.params())
            .await?;
        info!("Search returned {} recipe(s)", response.results.len());
        Ok(response.results)
    }

    async fn recipe_details(&self, id: u64) -> Result<Recipe, SearchError> {
        debug!("Fetching details for recipe {}", id);
        self.get_json(&format!("/recipes/{}/information", id), &[])
            .await
    }
}
