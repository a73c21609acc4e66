//! View models: raw data the renderers lay out. No formatted strings here;
//! wording and layout live in `formatters` and the renderers.

use serde::Serialize;

use crate::models::{Calories, MealSlot, SearchKind};

/// Lunar banner above the meal grids
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LunarBannerView {
    pub lunar_date: String,
    /// First festival of the day; the festival notice is hidden when `None`
    pub festival: Option<String>,
    pub solar_term: Option<String>,
}

/// Compact card in a meal grid
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecipeCardView {
    pub name: String,
    pub calories: Calories,
    /// At most two tags
    pub tags: Vec<String>,
    /// At most three leading ingredients
    pub ingredients_preview: Vec<String>,
}

/// Content of one meal grid
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum MealGrid {
    #[default]
    Loading,
    Error(String),
    Empty,
    Cards(Vec<RecipeCardView>),
}

impl MealGrid {
    pub fn cards(&self) -> &[RecipeCardView] {
        match self {
            MealGrid::Cards(cards) => cards,
            _ => &[],
        }
    }
}

/// The three meal grids
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct MealGrids {
    pub breakfast: MealGrid,
    pub lunch: MealGrid,
    pub dinner: MealGrid,
}

impl MealGrids {
    pub fn slot(&self, slot: MealSlot) -> &MealGrid {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn slot_mut(&mut self, slot: MealSlot) -> &mut MealGrid {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        }
    }

    /// Puts the same content into every grid
    pub fn fill(&mut self, grid: MealGrid) {
        for slot in MealSlot::ALL {
            *self.slot_mut(slot) = grid.clone();
        }
    }
}

/// Full card in the search results grid
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecipeDetailCardView {
    pub name: String,
    pub calories: Calories,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// Heading of the search results region
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchTitleView {
    pub keyword: String,
    pub kind: SearchKind,
    pub total_count: Option<u32>,
}

/// The single "load more" control
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LoadMoreView {
    pub remaining: u32,
    /// Disabled while its request is in flight
    pub busy: bool,
}

/// Text from the fallback provider
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FallbackView {
    pub text: String,
    pub timed_out: bool,
}

/// Fresh search that found nothing locally
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NotFoundView {
    pub keyword: String,
    pub fallback: Option<FallbackView>,
}

/// Search results accumulated across pages
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ResultsView {
    pub cards: Vec<RecipeDetailCardView>,
    /// Inline error after a failed "load more"
    pub notice: Option<String>,
    pub load_more: Option<LoadMoreView>,
    pub fallback: Option<FallbackView>,
}

/// Content of the search results grid
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum SearchGrid {
    #[default]
    Idle,
    Searching,
    Error(String),
    NotFound(NotFoundView),
    Results(ResultsView),
}

impl SearchGrid {
    pub fn cards(&self) -> &[RecipeDetailCardView] {
        match self {
            SearchGrid::Results(view) => &view.cards,
            _ => &[],
        }
    }

    pub fn load_more(&self) -> Option<&LoadMoreView> {
        match self {
            SearchGrid::Results(view) => view.load_more.as_ref(),
            _ => None,
        }
    }
}

/// Recipe detail overlay
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecipeModalView {
    pub name: String,
    pub calories: Calories,
    pub season: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// Which main region is visible
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActiveView {
    #[default]
    Recommendations,
    Search,
}
