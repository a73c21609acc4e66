use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod search;
pub mod session;

pub use search::{Fallback, Pagination, SearchKind, SearchRequest, SearchResult};
pub use session::SessionState;

/// Recommendation profile selecting which cuisine the backend recommends from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietType {
    #[default]
    #[serde(rename = "中餐", alias = "chinese")]
    Chinese,
    #[serde(rename = "地中海", alias = "mediterranean")]
    Mediterranean,
}

impl DietType {
    /// Value sent as the `diet_type` query parameter
    pub fn as_wire(&self) -> &'static str {
        match self {
            DietType::Chinese => "中餐",
            DietType::Mediterranean => "地中海",
        }
    }

    /// The other diet type
    pub fn toggled(self) -> Self {
        match self {
            DietType::Chinese => DietType::Mediterranean,
            DietType::Mediterranean => DietType::Chinese,
        }
    }
}

impl Display for DietType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

/// One of the three daily meals, each with its own recommendation list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// All slots in display order
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }

    /// Section heading shown above the slot's grid
    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "早餐",
            MealSlot::Lunch => "午餐",
            MealSlot::Dinner => "晚餐",
        }
    }
}

impl std::str::FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" | "早餐" => Ok(MealSlot::Breakfast),
            "lunch" | "午餐" => Ok(MealSlot::Lunch),
            "dinner" | "晚餐" => Ok(MealSlot::Dinner),
            other => Err(format!("unknown meal slot '{}'", other)),
        }
    }
}

/// Calorie band of a recipe
///
/// The backend sends `低`, `中` or `高`; anything unrecognised is treated as high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Calories {
    Low,
    Medium,
    High,
}

impl Calories {
    pub fn as_wire(&self) -> &'static str {
        match self {
            Calories::Low => "低",
            Calories::Medium => "中",
            Calories::High => "高",
        }
    }

    /// CSS class used by the badge
    pub fn css_class(&self) -> &'static str {
        match self {
            Calories::Low => "calories-low",
            Calories::Medium => "calories-medium",
            Calories::High => "calories-high",
        }
    }
}

impl From<String> for Calories {
    fn from(value: String) -> Self {
        match value.trim() {
            "低" => Calories::Low,
            "中" => Calories::Medium,
            _ => Calories::High,
        }
    }
}

impl From<Calories> for String {
    fn from(value: Calories) -> Self {
        value.as_wire().to_string()
    }
}

/// A single recipe as delivered by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub name: String,
    pub calories: Calories,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub season: String,
}

impl Recipe {
    /// Tags, or an empty slice when the backend omitted them
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }
}

/// Per-slot recipe lists of a recommendation payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MealRecommendations {
    #[serde(default)]
    pub breakfast: Vec<Recipe>,
    #[serde(default)]
    pub lunch: Vec<Recipe>,
    #[serde(default)]
    pub dinner: Vec<Recipe>,
}

impl MealRecommendations {
    pub fn slot(&self, slot: MealSlot) -> &[Recipe] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }
}

/// Lunar calendar metadata attached to today's recommendations
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LunarInfo {
    pub lunar_date: String,
    #[serde(default)]
    pub festival: Option<Vec<String>>,
    #[serde(default)]
    pub solar_term: Option<String>,
}

impl LunarInfo {
    /// First festival of the day, if any
    pub fn first_festival(&self) -> Option<&str> {
        self.festival
            .as_deref()
            .and_then(|f| f.first())
            .map(String::as_str)
            .filter(|f| !f.trim().is_empty())
    }
}

/// Response of `GET /api/today`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendationSet {
    #[serde(default)]
    pub recommendations: MealRecommendations,
    #[serde(default)]
    pub lunar: Option<LunarInfo>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub diet_type: Option<String>,
}

/// Response of `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub total_recipes: u32,
    #[serde(default)]
    pub chinese_recipes: u32,
    #[serde(default)]
    pub mediterranean_recipes: u32,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
