use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Public TheMealDB endpoint using the shared test key `1`
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Settings for the remote meal database client
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FeedConfig {
    /// Base URL that endpoint paths such as `random.php` are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds; unset leaves reqwest's default (no timeout)
    #[serde(default)]
    pub timeout: Option<u64>,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("recipe-feed/{}", env!("CARGO_PKG_VERSION"))
}

impl FeedConfig {
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_FEED__ prefix
/// 2. config.toml file in current directory
/// 3. Default values
///
/// Environment variable format: RECIPE_FEED__BASE_URL, RECIPE_FEED__TIMEOUT
pub fn load_config() -> Result<FeedConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_FEED")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
