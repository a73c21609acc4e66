use chrono::NaiveDate;

use crate::{
    models::{DietType, SearchRequest},
    view::{
        presenters, ActiveView, MealGrid, SearchGrid, EMPTY_KEYWORD_PROMPT, LOAD_MORE_FAILED,
        RECOMMENDATIONS_FAILED, SEARCH_FAILED,
    },
};

use super::{Controller, Outcome, RecipeRef};

impl Controller {
    /// Writes the date display and loads today's recommendations
    pub async fn start(&mut self, today: NaiveDate) -> Outcome {
        self.show_date(today);
        self.load_recommendations().await
    }

    pub fn show_date(&mut self, today: NaiveDate) {
        self.surface.date = Some(today);
    }

    /// Fetches today's recommendations for the active diet type
    ///
    /// The loading placeholder goes up before the request and is replaced by
    /// either the grids or the error message. A failure keeps the previous
    /// payload in the session.
    pub async fn load_recommendations(&mut self) -> Outcome {
        self.surface.meal_grids.fill(MealGrid::Loading);

        let diet_type = self.state.diet_type;
        match self.api.today(diet_type).await {
            Ok(set) => {
                self.surface.meal_grids = presenters::meal_grids(&set);
                if let Some(lunar) = &set.lunar {
                    self.surface.lunar_banner = Some(presenters::lunar_banner(lunar));
                }
                self.state.replace_recommendations(set);
            }
            Err(e) => {
                tracing::error!(error = %e, diet_type = %diet_type, "Failed to load recommendations");
                self.surface
                    .meal_grids
                    .fill(MealGrid::Error(RECOMMENDATIONS_FAILED.to_string()));
            }
        }

        Outcome::Rendered
    }

    /// Switches diet type and reloads
    pub async fn toggle_diet(&mut self) -> Outcome {
        let diet_type: DietType = self.state.toggle_diet();
        self.surface.diet_toggle = diet_type;
        tracing::info!(diet_type = %diet_type, "Diet type toggled");
        self.load_recommendations().await
    }

    /// Starts a fresh search from the raw input text
    pub async fn submit_search(&mut self, input: &str) -> Outcome {
        self.surface.search_input = input.to_string();

        let keyword = input.trim();
        if keyword.is_empty() {
            return Outcome::Prompt(EMPTY_KEYWORD_PROMPT.to_string());
        }
        let keyword = keyword.to_string();

        self.state.begin_search(keyword.clone());
        self.surface.active_view = ActiveView::Search;
        self.surface.search_title = None;
        self.surface.search_grid = SearchGrid::Searching;

        let request = SearchRequest::auto(keyword, 1, self.page_size);
        match self.api.search(&request).await {
            Ok(result) => {
                self.surface.search_title = Some(presenters::search_title(&result));
                self.surface.search_grid = presenters::first_page(&result);
                self.state.apply_first_page(result);
            }
            Err(e) => {
                tracing::error!(error = %e, keyword = %request.keyword, "Search failed");
                self.surface.search_grid = SearchGrid::Error(SEARCH_FAILED.to_string());
            }
        }

        Outcome::Rendered
    }

    /// Fetches the next page and appends it
    ///
    /// Ignored unless exactly one enabled "load more" control is on screen.
    /// The control stays disabled until the response is handled.
    pub async fn load_more(&mut self) -> Outcome {
        let SearchGrid::Results(view) = &mut self.surface.search_grid else {
            return Outcome::Ignored;
        };
        let Some(control) = view.load_more.as_mut() else {
            return Outcome::Ignored;
        };
        if control.busy {
            return Outcome::Ignored;
        }
        let Some(search) = self.state.search.as_ref() else {
            return Outcome::Ignored;
        };

        control.busy = true;
        let page = search.page + 1;
        let request = SearchRequest::auto(search.keyword.clone(), page, self.page_size);

        let response = self.api.search(&request).await;

        let SearchGrid::Results(view) = &mut self.surface.search_grid else {
            return Outcome::Ignored;
        };
        match response {
            Ok(result) => {
                if !presenters::append_page(view, &result) {
                    tracing::debug!(keyword = %request.keyword, page, "No further results");
                }
                self.state.apply_next_page(page, result);
            }
            Err(e) => {
                tracing::error!(error = %e, keyword = %request.keyword, page, "Load more failed");
                view.notice = Some(LOAD_MORE_FAILED.to_string());
                if let Some(control) = view.load_more.as_mut() {
                    control.busy = false;
                }
            }
        }

        Outcome::Rendered
    }

    /// Returns to the recommendations and drops the search session
    pub fn show_recommendations(&mut self) -> Outcome {
        self.surface.active_view = ActiveView::Recommendations;
        self.surface.search_input.clear();
        self.surface.search_title = None;
        self.surface.search_grid = SearchGrid::Idle;
        self.state.end_search();
        Outcome::Rendered
    }

    /// Opens the detail overlay for a card currently on screen
    pub fn open_recipe(&mut self, target: RecipeRef) -> Outcome {
        let recipe = match target {
            RecipeRef::Meal { slot, index } => {
                let visible = self.surface.active_view == ActiveView::Recommendations
                    && index < self.surface.meal_grids.slot(slot).cards().len();
                if !visible {
                    return Outcome::Ignored;
                }
                self.state
                    .recommendations
                    .as_ref()
                    .and_then(|set| set.recommendations.slot(slot).get(index))
            }
            RecipeRef::SearchResult { index } => {
                let visible = self.surface.active_view == ActiveView::Search
                    && index < self.surface.search_grid.cards().len();
                if !visible {
                    return Outcome::Ignored;
                }
                self.state
                    .search
                    .as_ref()
                    .and_then(|search| search.results.get(index))
            }
        };

        match recipe {
            Some(recipe) => {
                self.surface.modal = Some(presenters::recipe_modal(recipe));
                Outcome::Rendered
            }
            None => Outcome::Ignored,
        }
    }

    /// Close control of the overlay
    pub fn close_modal(&mut self) -> Outcome {
        match self.surface.modal.take() {
            Some(_) => Outcome::Rendered,
            None => Outcome::Ignored,
        }
    }

    /// Click on the backdrop outside the overlay content
    pub fn click_backdrop(&mut self) -> Outcome {
        self.close_modal()
    }
}
