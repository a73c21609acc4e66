use serde::Deserialize;

use crate::models::DietType;

/// How the CLI prints the surface after each action
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the recipe API, including the `/api` prefix
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Results requested per search page
    #[serde(default = "default_search_page_size")]
    pub search_page_size: u32,

    /// Diet type shown on start-up
    #[serde(default)]
    pub diet_type: DietType,

    /// Output format of the CLI
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Optional client-side request timeout; none by default
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_search_page_size() -> u32 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            search_page_size: default_search_page_size(),
            diet_type: DietType::default(),
            output_format: OutputFormat::default(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        if config.search_page_size == 0 {
            anyhow::bail!("Failed to load config: search_page_size must be positive");
        }

        Ok(config)
    }
}
