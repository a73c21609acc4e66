use serde::{Deserialize, Serialize};

use super::Recipe;

/// Marker the fallback provider uses when it gave up waiting for an answer
const TIMEOUT_MARKER: &str = "超时";

/// Kind of search the backend inferred from the keyword
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SearchKind {
    /// Keyword names an ingredient (`蔬菜`)
    Vegetable,
    /// Keyword names a dish (`菜名`)
    #[default]
    DishName,
    Other(String),
}

impl From<String> for SearchKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "蔬菜" => SearchKind::Vegetable,
            "菜名" => SearchKind::DishName,
            _ => SearchKind::Other(value),
        }
    }
}

impl From<SearchKind> for String {
    fn from(value: SearchKind) -> Self {
        match value {
            SearchKind::Vegetable => "蔬菜".to_string(),
            SearchKind::DishName => "菜名".to_string(),
            SearchKind::Other(other) => other,
        }
    }
}

/// Pagination descriptor of a search page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub page_size: u32,
    pub total_count: u32,
    pub has_more: bool,
}

impl Pagination {
    /// Results not yet delivered after this page
    pub fn remaining(&self) -> u32 {
        self.total_count
            .saturating_sub(self.current_page.saturating_mul(self.page_size))
    }
}

/// Supplementary text from the fallback provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback<'a> {
    pub text: &'a str,
    pub timed_out: bool,
}

/// Response of `POST /api/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    #[serde(default)]
    pub keyword: String,
    #[serde(rename = "type", default)]
    pub kind: SearchKind,
    #[serde(default)]
    pub results: Vec<Recipe>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub api_response: Option<String>,
}

impl SearchResult {
    /// Fallback text, if the backend attached any non-blank text
    pub fn fallback(&self) -> Option<Fallback<'_>> {
        let text = self.api_response.as_deref()?;
        if text.trim().is_empty() {
            return None;
        }
        Some(Fallback {
            text,
            timed_out: text.contains(TIMEOUT_MARKER),
        })
    }

    pub fn has_more(&self) -> bool {
        self.pagination.map(|p| p.has_more).unwrap_or(false)
    }
}

/// Body of `POST /api/search`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchRequest {
    pub keyword: String,
    #[serde(rename = "type")]
    pub search_type: String,
    pub page: u32,
    pub page_size: u32,
}

impl SearchRequest {
    /// Request with backend-side kind inference
    pub fn auto(keyword: impl Into<String>, page: u32, page_size: u32) -> Self {
        Self {
            keyword: keyword.into(),
            search_type: "auto".to_string(),
            page,
            page_size,
        }
    }
}
