//! Pure conversions from backend payloads to view models.

use crate::models::{LunarInfo, MealSlot, Pagination, Recipe, RecommendationSet, SearchResult};

use super::{
    FallbackView, LoadMoreView, LunarBannerView, MealGrid, MealGrids, NotFoundView,
    RecipeCardView, RecipeDetailCardView, RecipeModalView, ResultsView, SearchGrid,
    SearchTitleView,
};

const CARD_TAG_LIMIT: usize = 2;
const CARD_INGREDIENT_LIMIT: usize = 3;

pub fn recipe_card(recipe: &Recipe) -> RecipeCardView {
    RecipeCardView {
        name: recipe.name.clone(),
        calories: recipe.calories,
        tags: recipe.tags().iter().take(CARD_TAG_LIMIT).cloned().collect(),
        ingredients_preview: recipe
            .ingredients
            .iter()
            .take(CARD_INGREDIENT_LIMIT)
            .cloned()
            .collect(),
    }
}

pub fn recipe_detail_card(recipe: &Recipe) -> RecipeDetailCardView {
    RecipeDetailCardView {
        name: recipe.name.clone(),
        calories: recipe.calories,
        tags: recipe.tags().to_vec(),
        ingredients: recipe.ingredients.clone(),
        steps: recipe.steps.clone(),
    }
}

pub fn recipe_modal(recipe: &Recipe) -> RecipeModalView {
    RecipeModalView {
        name: recipe.name.clone(),
        calories: recipe.calories,
        season: recipe.season.clone(),
        ingredients: recipe.ingredients.clone(),
        steps: recipe.steps.clone(),
    }
}

pub fn meal_grid(recipes: &[Recipe]) -> MealGrid {
    if recipes.is_empty() {
        MealGrid::Empty
    } else {
        MealGrid::Cards(recipes.iter().map(recipe_card).collect())
    }
}

pub fn meal_grids(set: &RecommendationSet) -> MealGrids {
    let mut grids = MealGrids::default();
    for slot in MealSlot::ALL {
        *grids.slot_mut(slot) = meal_grid(set.recommendations.slot(slot));
    }
    grids
}

pub fn lunar_banner(lunar: &LunarInfo) -> LunarBannerView {
    LunarBannerView {
        lunar_date: lunar.lunar_date.clone(),
        festival: lunar.first_festival().map(str::to_string),
        solar_term: lunar
            .solar_term
            .clone()
            .filter(|term| !term.trim().is_empty()),
    }
}

pub fn search_title(result: &SearchResult) -> SearchTitleView {
    SearchTitleView {
        keyword: result.keyword.clone(),
        kind: result.kind.clone(),
        total_count: result.pagination.map(|p| p.total_count),
    }
}

fn fallback(result: &SearchResult) -> Option<FallbackView> {
    result.fallback().map(|f| FallbackView {
        text: f.text.to_string(),
        timed_out: f.timed_out,
    })
}

/// Control shown only while the backend reports more pages
pub fn load_more(pagination: Option<Pagination>) -> Option<LoadMoreView> {
    pagination.filter(|p| p.has_more).map(|p| LoadMoreView {
        remaining: p.remaining(),
        busy: false,
    })
}

/// Grid content for the first page of a fresh search
///
/// Fallback text is attached whenever the backend sends some, both to the
/// not-found state and after a non-empty result list.
pub fn first_page(result: &SearchResult) -> SearchGrid {
    if result.results.is_empty() {
        return SearchGrid::NotFound(NotFoundView {
            keyword: result.keyword.clone(),
            fallback: fallback(result),
        });
    }

    SearchGrid::Results(ResultsView {
        cards: result.results.iter().map(recipe_detail_card).collect(),
        notice: None,
        load_more: load_more(result.pagination),
        fallback: fallback(result),
    })
}

/// Appends a follow-up page, returning whether any card was added
///
/// An empty page leaves the cards untouched and only retires the control.
pub fn append_page(view: &mut ResultsView, result: &SearchResult) -> bool {
    view.notice = None;

    if result.results.is_empty() {
        view.load_more = None;
        return false;
    }

    view.cards
        .extend(result.results.iter().map(recipe_detail_card));
    view.load_more = load_more(result.pagination);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Calories, MealRecommendations, SearchKind};

    fn recipe(name: &str) -> Recipe {
        Recipe {
            name: name.to_string(),
            calories: Calories::Medium,
            tags: Some(vec!["家常".into(), "快手".into(), "下饭".into()]),
            ingredients: vec!["茄子".into(), "蒜".into(), "酱油".into(), "糖".into()],
            steps: vec!["切块".into(), "炒软".into()],
            season: "夏季".to_string(),
        }
    }

    fn page(names: &[&str], pagination: Option<Pagination>) -> SearchResult {
        SearchResult {
            keyword: "茄子".to_string(),
            kind: SearchKind::Vegetable,
            results: names.iter().map(|n| recipe(n)).collect(),
            pagination,
            ..Default::default()
        }
    }

    fn pagination(current_page: u32, has_more: bool) -> Option<Pagination> {
        Some(Pagination {
            current_page,
            page_size: 3,
            total_count: 7,
            has_more,
        })
    }

    #[test]
    fn test_card_truncates_tags_and_ingredients() {
        let card = recipe_card(&recipe("鱼香茄子"));
        assert_eq!(card.tags, vec!["家常", "快手"]);
        assert_eq!(card.ingredients_preview, vec!["茄子", "蒜", "酱油"]);
    }

    #[test]
    fn test_detail_card_keeps_everything() {
        let card = recipe_detail_card(&recipe("鱼香茄子"));
        assert_eq!(card.tags.len(), 3);
        assert_eq!(card.ingredients.len(), 4);
        assert_eq!(card.steps.len(), 2);
    }

    #[test]
    fn test_meal_grids_follow_payload_order() {
        let set = RecommendationSet {
            recommendations: MealRecommendations {
                breakfast: vec![recipe("豆浆"), recipe("油条")],
                lunch: vec![],
                dinner: vec![recipe("米饭")],
            },
            ..Default::default()
        };

        let grids = meal_grids(&set);
        let names: Vec<&str> = grids
            .breakfast
            .cards()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["豆浆", "油条"]);
        assert_eq!(grids.lunch, MealGrid::Empty);
        assert_eq!(grids.dinner.cards().len(), 1);
    }

    #[test]
    fn test_lunar_banner_drops_blank_solar_term() {
        let banner = lunar_banner(&LunarInfo {
            lunar_date: "九月廿九".to_string(),
            festival: None,
            solar_term: Some(String::new()),
        });
        assert_eq!(banner.festival, None);
        assert_eq!(banner.solar_term, None);
    }

    #[test]
    fn test_first_page_without_more_has_no_control() {
        let grid = first_page(&page(&["a", "b"], pagination(1, false)));
        assert_eq!(grid.cards().len(), 2);
        assert!(grid.load_more().is_none());
    }

    #[test]
    fn test_first_page_with_more_shows_remaining() {
        let grid = first_page(&page(&["a", "b", "c"], pagination(1, true)));
        let control = grid.load_more().unwrap();
        assert_eq!(control.remaining, 4);
        assert!(!control.busy);
    }

    #[test]
    fn test_empty_first_page_is_not_found() {
        let grid = first_page(&page(&[], None));
        match grid {
            SearchGrid::NotFound(view) => {
                assert_eq!(view.keyword, "茄子");
                assert!(view.fallback.is_none());
            }
            other => panic!("expected not-found, got {:?}", other),
        }
    }

    #[test]
    fn test_fallback_attached_after_results() {
        let mut result = page(&["a"], None);
        result.api_response = Some("还可以做红烧茄子".to_string());

        let SearchGrid::Results(view) = first_page(&result) else {
            panic!("expected results");
        };
        let fallback = view.fallback.unwrap();
        assert_eq!(fallback.text, "还可以做红烧茄子");
        assert!(!fallback.timed_out);
    }

    #[test]
    fn test_append_page_keeps_order() {
        let SearchGrid::Results(mut view) = first_page(&page(&["a", "b", "c"], pagination(1, true)))
        else {
            panic!("expected results");
        };

        assert!(append_page(&mut view, &page(&["d", "e"], pagination(2, true))));
        let names: Vec<&str> = view.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(view.load_more.unwrap().remaining, 1);
    }

    #[test]
    fn test_append_empty_page_leaves_cards() {
        let SearchGrid::Results(mut view) = first_page(&page(&["a", "b", "c"], pagination(1, true)))
        else {
            panic!("expected results");
        };
        let before = view.cards.clone();

        assert!(!append_page(&mut view, &page(&[], pagination(2, false))));
        assert_eq!(view.cards, before);
        assert!(view.load_more.is_none());
    }
}
