use log::error;
use thiserror::Error;

/// Errors that can occur while talking to the meal database
///
/// These never reach callers of the public fetch operations. They are
/// collapsed by [`best_effort`] at each operation boundary.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Transport failure or non-success HTTP status
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Response body was not the JSON shape we expect
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Client builder was given unusable settings
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

/// Collapse a failed lookup into its "nothing" value.
///
/// Singular lookups degrade to `None`, listings to an empty `Vec`. The error
/// is logged and then dropped.
pub fn best_effort<T: Default>(result: Result<T, FeedError>, context: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            error!("Error fetching {}: {}", context, e);
            T::default()
        }
    }
}
