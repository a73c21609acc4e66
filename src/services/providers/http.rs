/// HTTP recipe backend
///
/// Endpoints, relative to the configured base URL (which carries the `/api` prefix):
/// 1. Recommendations: `GET /today?diet_type=...`
/// 2. Search: `POST /search` with a JSON body
/// 3. Health: `GET /health`
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{DietType, HealthStatus, RecommendationSet, SearchRequest, SearchResult},
    services::providers::{
        request_id::{request_span, RequestId, REQUEST_ID_HEADER},
        RecipeApi,
    },
};
use reqwest::{Client as HttpClient, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::Instrument;

#[derive(Clone)]
pub struct HttpRecipeApi {
    http_client: HttpClient,
    api_url: String,
}

impl HttpRecipeApi {
    /// Creates a client for the given base URL with no request timeout
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url: normalize_base_url(api_url.into()),
        }
    }

    /// Creates a client from configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let mut builder = HttpClient::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http_client: builder.build()?,
            api_url: normalize_base_url(config.api_base_url.clone()),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    /// Sends a request tagged with a fresh request id and decodes the JSON body
    async fn send_json<T: DeserializeOwned>(
        &self,
        method: &str,
        url: &str,
        request: RequestBuilder,
    ) -> AppResult<T> {
        let request_id = RequestId::new();
        let span = request_span(method, url, &request_id);

        execute(request.header(REQUEST_ID_HEADER, request_id.as_str()))
            .instrument(span)
            .await
    }
}

async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> AppResult<T> {
    let response = request.send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::ExternalApi(format!(
            "Recipe API returned status {}: {}",
            status, body
        )));
    }

    let response_text = response.text().await?;
    tracing::debug!(response = %response_text, "Raw recipe API response");

    serde_json::from_str(&response_text).map_err(|e| {
        tracing::error!(error = %e, "Failed to deserialize recipe API response");
        AppError::Decode(e)
    })
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[async_trait::async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn today(&self, diet_type: DietType) -> AppResult<RecommendationSet> {
        let url = self.endpoint("today");
        let request = self
            .http_client
            .get(&url)
            .query(&[("diet_type", diet_type.as_wire())]);

        let set: RecommendationSet = self.send_json("GET", &url, request).await?;

        tracing::info!(
            diet_type = %diet_type,
            breakfast = set.recommendations.breakfast.len(),
            lunch = set.recommendations.lunch.len(),
            dinner = set.recommendations.dinner.len(),
            provider = self.name(),
            "Recommendations fetched"
        );

        Ok(set)
    }

    async fn search(&self, search: &SearchRequest) -> AppResult<SearchResult> {
        if search.keyword.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search keyword cannot be empty".to_string(),
            ));
        }

        let url = self.endpoint("search");
        let request = self.http_client.post(&url).json(search);

        let result: SearchResult = self.send_json("POST", &url, request).await?;

        tracing::info!(
            keyword = %search.keyword,
            page = search.page,
            results = result.results.len(),
            has_more = result.has_more(),
            provider = self.name(),
            "Search completed"
        );

        Ok(result)
    }

    async fn health(&self) -> AppResult<HealthStatus> {
        let url = self.endpoint("health");
        let request = self.http_client.get(&url);
        self.send_json("GET", &url, request).await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
