//! Presentation surface
//!
//! The controller never produces markup. It writes view models into a
//! [`Surface`], the fixed set of named regions the page exposes, and a
//! [`Renderer`] turns the surface into output.
//!
//! ```text
//! [ Controller ] --> [ presenters ] --> [ Surface (view models) ] --> [ Renderer ] --> HTML / text / JSON
//! ```

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::DietType;

pub mod formatters;
pub mod models;
pub mod presenters;
pub mod render;

pub use models::*;
pub use render::{HtmlRenderer, JsonRenderer, Renderer, TextRenderer};

pub const LOADING_RECOMMENDATIONS: &str = "精心挑选中...";
pub const RECOMMENDATIONS_FAILED: &str = "无法加载推荐，请检查网络连接或稍后重试";
pub const NO_RECOMMENDATIONS: &str = "暂无推荐";
pub const SEARCHING: &str = "搜索中...";
pub const SEARCH_FAILED: &str = "搜索失败，请重试";
pub const LOAD_MORE_FAILED: &str = "加载更多失败，请重试";
pub const EMPTY_KEYWORD_PROMPT: &str = "请输入搜索关键词";

/// Everything currently on screen
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Surface {
    /// Date display; `None` until the controller starts
    pub date: Option<NaiveDate>,
    /// Diet toggle shows the active diet type
    pub diet_toggle: DietType,
    /// Kept from the last payload that carried lunar data
    pub lunar_banner: Option<LunarBannerView>,
    pub meal_grids: MealGrids,
    pub active_view: ActiveView,
    pub search_input: String,
    pub search_title: Option<SearchTitleView>,
    pub search_grid: SearchGrid,
    pub modal: Option<RecipeModalView>,
}

impl Surface {
    pub fn new(diet_type: DietType) -> Self {
        Self {
            diet_toggle: diet_type,
            ..Self::default()
        }
    }
}
