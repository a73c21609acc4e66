use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::sync::Mutex;

use recipe_board::{
    controller::{Action, Controller, Outcome},
    error::AppError,
    models::{DietType, MealSlot, SearchRequest},
    services::{HttpRecipeApi, RecipeApi},
    view::{
        ActiveView, HtmlRenderer, MealGrid, Renderer, SearchGrid, TextRenderer,
        RECOMMENDATIONS_FAILED,
    },
};

/// What the fake backend saw
#[derive(Default)]
struct Recorded {
    diet_types: Vec<String>,
    searches: Vec<SearchRequest>,
    request_ids: Vec<String>,
}

type Shared = Arc<Mutex<Recorded>>;

fn recipe(name: &str) -> Value {
    json!({
        "name": name,
        "calories": "低",
        "tags": ["家常", "快手", "素菜"],
        "ingredients": ["茄子", "蒜", "酱油", "糖"],
        "steps": ["切块", "煎软", "调味"],
        "season": "夏季",
        "category": "中餐",
        "meal_type": ["午餐"]
    })
}

const EGGPLANT_DISHES: [&str; 5] = ["鱼香茄子", "红烧茄子", "凉拌茄子", "蒜蓉茄子", "茄子煲"];

fn record_request_id(recorded: &mut Recorded, headers: &HeaderMap) {
    if let Some(id) = headers.get("x-request-id").and_then(|h| h.to_str().ok()) {
        recorded.request_ids.push(id.to_string());
    }
}

async fn today(
    State(recorded): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let diet_type = params.get("diet_type").cloned().unwrap_or_default();
    let mut recorded = recorded.lock().await;
    record_request_id(&mut recorded, &headers);
    recorded.diet_types.push(diet_type.clone());

    let breakfast = if diet_type == "中餐" {
        vec![recipe("小米粥"), recipe("豆浆")]
    } else {
        vec![recipe("希腊酸奶")]
    };

    Json(json!({
        "date": "2026年10月19日",
        "season": "秋季",
        "diet_type": diet_type,
        "lunar": {"lunar_date": "九月廿九", "festival": ["重阳节"], "solar_term": ""},
        "recommendations": {
            "breakfast": breakfast,
            "lunch": [recipe("宫保鸡丁")],
            "dinner": []
        }
    }))
}

async fn search(
    State(recorded): State<Shared>,
    headers: HeaderMap,
    Json(request): Json<SearchRequest>,
) -> Json<Value> {
    let mut recorded = recorded.lock().await;
    record_request_id(&mut recorded, &headers);
    recorded.searches.push(request.clone());

    match request.keyword.as_str() {
        "茄子" => {
            let page_size = request.page_size as usize;
            let start = (request.page as usize - 1) * page_size;
            let page: Vec<Value> = EGGPLANT_DISHES
                .iter()
                .skip(start)
                .take(page_size)
                .map(|n| recipe(n))
                .collect();
            let total = EGGPLANT_DISHES.len();
            Json(json!({
                "keyword": "茄子",
                "type": "蔬菜",
                "source": "本地数据库",
                "results": page,
                "pagination": {
                    "current_page": request.page,
                    "page_size": request.page_size,
                    "total_count": total,
                    "has_more": start + page_size < total
                }
            }))
        }
        "佛跳墙" => Json(json!({
            "keyword": "佛跳墙",
            "type": "菜名",
            "source": "本地+API",
            "results": [],
            "api_response": "AI服务请求超时，请稍后再试"
        })),
        keyword => Json(json!({
            "keyword": keyword,
            "type": "菜名",
            "source": "本地+API",
            "results": [],
            "api_response": null
        })),
    }
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "total_recipes": 120,
        "chinese_recipes": 80,
        "mediterranean_recipes": 40
    }))
}

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api", addr)
}

async fn start_backend() -> (String, Shared) {
    let recorded: Shared = Arc::new(Mutex::new(Recorded::default()));
    let router = Router::new()
        .route("/api/today", get(today))
        .route("/api/search", post(search))
        .route("/api/health", get(health))
        .with_state(recorded.clone());
    (spawn_backend(router).await, recorded)
}

async fn create_controller() -> (Controller, Shared) {
    let (url, recorded) = start_backend().await;
    let controller = Controller::new(Arc::new(HttpRecipeApi::new(url)), DietType::Chinese, 3);
    (controller, recorded)
}

fn result_names(controller: &Controller) -> Vec<String> {
    controller
        .surface()
        .search_grid
        .cards()
        .iter()
        .map(|c| c.name.clone())
        .collect()
}

#[tokio::test]
async fn test_health_probe() {
    let (url, _) = start_backend().await;
    let health = HttpRecipeApi::new(url).health().await.unwrap();
    assert!(health.is_ok());
    assert_eq!(health.total_recipes, 120);
}

#[tokio::test]
async fn test_recommendations_render_per_slot() {
    let (mut controller, recorded) = create_controller().await;

    controller.dispatch(Action::Refresh).await;

    let grids = &controller.surface().meal_grids;
    let breakfast: Vec<&str> = grids
        .slot(MealSlot::Breakfast)
        .cards()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(breakfast, vec!["小米粥", "豆浆"]);
    assert_eq!(grids.slot(MealSlot::Lunch).cards().len(), 1);
    assert_eq!(grids.slot(MealSlot::Dinner), &MealGrid::Empty);

    let recorded = recorded.lock().await;
    assert_eq!(recorded.diet_types, vec!["中餐"]);
    assert_eq!(recorded.request_ids.len(), 1);
    assert!(uuid::Uuid::parse_str(&recorded.request_ids[0]).is_ok());
}

#[tokio::test]
async fn test_toggle_twice_issues_two_fetches() {
    let (mut controller, recorded) = create_controller().await;

    controller.dispatch(Action::ToggleDiet).await;
    let breakfast = controller.surface().meal_grids.breakfast.cards();
    assert_eq!(breakfast[0].name, "希腊酸奶");

    controller.dispatch(Action::ToggleDiet).await;
    assert_eq!(controller.state().diet_type, DietType::Chinese);

    let recorded = recorded.lock().await;
    assert_eq!(recorded.diet_types, vec!["地中海", "中餐"]);
}

#[tokio::test]
async fn test_search_and_load_more_pages() {
    let (mut controller, recorded) = create_controller().await;

    controller.dispatch("search 茄子".parse().unwrap()).await;
    assert_eq!(controller.surface().active_view, ActiveView::Search);
    assert_eq!(result_names(&controller), vec!["鱼香茄子", "红烧茄子", "凉拌茄子"]);
    assert_eq!(controller.surface().search_grid.load_more().unwrap().remaining, 2);

    controller.dispatch(Action::LoadMore).await;
    assert_eq!(result_names(&controller), EGGPLANT_DISHES.to_vec());
    assert!(controller.surface().search_grid.load_more().is_none());

    // No control left: a further trigger sends nothing
    assert_eq!(controller.dispatch(Action::LoadMore).await, Outcome::Ignored);

    let recorded = recorded.lock().await;
    let pages: Vec<u32> = recorded.searches.iter().map(|s| s.page).collect();
    assert_eq!(pages, vec![1, 2]);
    assert!(recorded.searches.iter().all(|s| s.search_type == "auto" && s.page_size == 3));

    let text = TextRenderer.render(controller.surface()).unwrap();
    assert!(text.contains("\"茄子\"的做法 (共找到5个结果)"));
}

#[tokio::test]
async fn test_blank_search_sends_nothing() {
    let (mut controller, recorded) = create_controller().await;

    let outcome = controller.dispatch(Action::Search("  \t ".to_string())).await;

    assert!(matches!(outcome, Outcome::Prompt(_)));
    assert!(recorded.lock().await.searches.is_empty());
}

#[tokio::test]
async fn test_not_found_without_fallback() {
    let (mut controller, _) = create_controller().await;

    controller.dispatch(Action::Search("龙肉".to_string())).await;

    match &controller.surface().search_grid {
        SearchGrid::NotFound(view) => assert!(view.fallback.is_none()),
        other => panic!("expected not-found, got {:?}", other),
    }
    assert!(controller.surface().search_grid.cards().is_empty());

    let html = HtmlRenderer.render(controller.surface()).unwrap();
    assert!(html.contains("未找到相关菜谱"));
    assert!(!html.contains("recipe-detail-card\" data-index"));
}

#[tokio::test]
async fn test_not_found_with_timeout_fallback() {
    let (mut controller, _) = create_controller().await;

    controller.dispatch(Action::Search("佛跳墙".to_string())).await;

    let SearchGrid::NotFound(view) = &controller.surface().search_grid else {
        panic!("expected not-found");
    };
    assert!(view.fallback.as_ref().unwrap().timed_out);

    let html = HtmlRenderer.render(controller.surface()).unwrap();
    assert!(html.contains("fallback-timeout"));
}

#[tokio::test]
async fn test_open_search_result_detail() {
    let (mut controller, _) = create_controller().await;

    controller.dispatch(Action::Search("茄子".to_string())).await;
    controller.dispatch("open result 2".parse().unwrap()).await;

    let modal = controller.surface().modal.as_ref().unwrap();
    assert_eq!(modal.name, "红烧茄子");
    assert_eq!(modal.steps.len(), 3);

    controller.dispatch(Action::Close).await;
    assert!(controller.surface().modal.is_none());
}

#[tokio::test]
async fn test_non_json_response_renders_error() {
    let router = Router::new()
        .route("/api/today", get(|| async { "<html>maintenance</html>" }))
        .route(
            "/api/search",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
    let url = spawn_backend(router).await;
    let api = HttpRecipeApi::new(url);

    let err = api.today(DietType::Chinese).await.unwrap_err();
    assert!(matches!(err, AppError::Decode(_)));

    let err = api
        .search(&SearchRequest::auto("茄子", 1, 3))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ExternalApi(_)));

    let mut controller = Controller::new(Arc::new(api), DietType::Chinese, 3);
    controller.dispatch(Action::Refresh).await;
    assert_eq!(
        controller.surface().meal_grids.breakfast,
        MealGrid::Error(RECOMMENDATIONS_FAILED.to_string())
    );
}

#[test]
fn test_unreachable_backend_renders_error() {
    tokio_test::block_on(async {
        let api = HttpRecipeApi::new("http://127.0.0.1:9/api");
        let mut controller = Controller::new(Arc::new(api), DietType::Chinese, 3);
        controller.dispatch(Action::Refresh).await;

        for slot in MealSlot::ALL {
            assert_eq!(
                controller.surface().meal_grids.slot(slot),
                &MealGrid::Error(RECOMMENDATIONS_FAILED.to_string())
            );
        }
    });
}
