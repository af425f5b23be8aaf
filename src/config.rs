use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::error::SearchError;
use crate::query::DEFAULT_RESULT_COUNT;

/// Connection settings for the external recipe service
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the recipe service, without the `/recipes/...` path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key sent with every request
    pub api_key: Option<String>,
    /// Number of recipes requested per search
    #[serde(default = "default_result_count")]
    pub result_count: u32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            result_count: default_result_count(),
            timeout: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_result_count() -> u32 {
    DEFAULT_RESULT_COUNT
}

fn default_timeout() -> u64 {
    30
}

impl ApiConfig {
    /// Load from `config.toml` in the working directory, if present
    ///
    /// `MOODFOOD__*` variables override file values; unset fields fall back
    /// to the defaults above.
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }

    /// The API key, or an error naming the variable that supplies it
    pub fn require_api_key(&self) -> Result<&str, SearchError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                SearchError::MissingConfig(
                    "api_key (set MOODFOOD__API_KEY or api_key in config.toml)".to_string(),
                )
            })
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from an optional file and environment variables
///
/// `path` overrides the default `config` file name; an explicit path must
/// exist, the default one may be missing.
pub fn load_config(path: Option<&str>) -> Result<ApiConfig, ConfigError> {
    let file = match path {
        Some(path) => File::with_name(path).required(true),
        None => File::with_name("config").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // MOODFOOD__API_KEY, MOODFOOD__BASE_URL, ...
        .add_source(
            Environment::with_prefix("MOODFOOD")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
