/// Recipe backend abstraction
///
/// The controller talks to the backend only through [`RecipeApi`], so the HTTP
/// client can be swapped for a mock in tests or another transport later.
use crate::{
    error::AppResult,
    models::{DietType, HealthStatus, RecommendationSet, SearchRequest, SearchResult},
};

pub mod http;
pub mod request_id;

pub use http::HttpRecipeApi;

/// Trait for recipe backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecipeApi: Send + Sync {
    /// Fetch today's recommendations for a diet type
    async fn today(&self, diet_type: DietType) -> AppResult<RecommendationSet>;

    /// Search recipes by keyword, one page at a time
    async fn search(&self, request: &SearchRequest) -> AppResult<SearchResult>;

    /// Probe backend health and catalogue size
    async fn health(&self) -> AppResult<HealthStatus>;

    /// Backend name for logging and debugging
    fn name(&self) -> &'static str;
}
