use thiserror::Error;

/// Errors that can occur while talking to the recipe service
#[derive(Error, Debug)]
pub enum SearchError {
    /// Request could not be sent or the response could not be read
    #[error("Request to recipe service failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Recipe service answered with a non-success status
    #[error("Recipe service returned {status}: {body}")]
    Api { status: u16, body: String },

    /// Response body did not match the expected recipe shape
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A required configuration value is absent
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Parse(err.to_string())
    }
}
