use serde::{Deserialize, Serialize};

use super::{DietType, Recipe, RecommendationSet, SearchResult};

/// Search in progress: keyword, cursor and every recipe received so far
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchSession {
    pub keyword: String,
    /// Last page that was fetched successfully
    pub page: u32,
    /// Accumulated results across pages, in arrival order
    pub results: Vec<Recipe>,
    /// Most recent payload received for this keyword
    pub last_payload: Option<SearchResult>,
}

impl SearchSession {
    fn new(keyword: String) -> Self {
        Self {
            keyword,
            page: 1,
            results: Vec::new(),
            last_payload: None,
        }
    }
}

/// Session state owned by the controller
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionState {
    /// Active recommendation filter
    pub diet_type: DietType,
    /// Last recommendation payload fetched successfully
    pub recommendations: Option<RecommendationSet>,
    /// Active search, if the search view is open
    pub search: Option<SearchSession>,
}

impl SessionState {
    /// Creates a session with no fetched data
    pub fn new(diet_type: DietType) -> Self {
        Self {
            diet_type,
            recommendations: None,
            search: None,
        }
    }

    /// Switches to the other diet type and returns it
    pub fn toggle_diet(&mut self) -> DietType {
        self.diet_type = self.diet_type.toggled();
        self.diet_type
    }

    /// Replaces the recommendation payload wholesale
    pub fn replace_recommendations(&mut self, set: RecommendationSet) {
        self.recommendations = Some(set);
    }

    /// Starts a fresh search at page 1, discarding any previous one
    pub fn begin_search(&mut self, keyword: impl Into<String>) -> &SearchSession {
        self.search.insert(SearchSession::new(keyword.into()))
    }

    /// Page a "load more" request should ask for
    pub fn next_page(&self) -> Option<u32> {
        self.search.as_ref().map(|s| s.page + 1)
    }

    /// Records the first page of a fresh search
    pub fn apply_first_page(&mut self, payload: SearchResult) {
        if let Some(search) = self.search.as_mut() {
            search.page = 1;
            search.results = payload.results.clone();
            search.last_payload = Some(payload);
        }
    }

    /// Appends a follow-up page
    ///
    /// An empty page leaves the session untouched and returns `false`.
    pub fn apply_next_page(&mut self, page: u32, payload: SearchResult) -> bool {
        let Some(search) = self.search.as_mut() else {
            return false;
        };
        if payload.results.is_empty() {
            return false;
        }

        search.page = page;
        search.results.extend(payload.results.iter().cloned());
        search.last_payload = Some(payload);
        true
    }

    /// Drops the search session when returning to recommendations
    pub fn end_search(&mut self) {
        self.search = None;
    }
}
