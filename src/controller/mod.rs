use std::sync::Arc;

use crate::{
    config::Config,
    models::{DietType, SessionState},
    services::providers::RecipeApi,
    view::Surface,
};

pub mod handlers;
pub mod routes;

pub use routes::{Action, Outcome, RecipeRef, ACTIONS};

/// Client view controller
///
/// Owns the session state and the surface. Every handler takes `&mut self`,
/// so handlers run to completion one at a time and the state needs no locking.
pub struct Controller {
    api: Arc<dyn RecipeApi>,
    state: SessionState,
    surface: Surface,
    page_size: u32,
}

impl Controller {
    /// Creates a controller that has not fetched anything yet
    pub fn new(api: Arc<dyn RecipeApi>, diet_type: DietType, page_size: u32) -> Self {
        Self {
            api,
            state: SessionState::new(diet_type),
            surface: Surface::new(diet_type),
            page_size: page_size.max(1),
        }
    }

    pub fn from_config(api: Arc<dyn RecipeApi>, config: &Config) -> Self {
        Self::new(api, config.diet_type, config.search_page_size)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}
