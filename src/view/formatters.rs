//! Wording shared by every renderer.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{Calories, DietType, SearchKind};

use super::{FallbackView, LoadMoreView, SearchTitleView};

const INGREDIENT_SEPARATOR: &str = "、";

pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "星期一",
        Weekday::Tue => "星期二",
        Weekday::Wed => "星期三",
        Weekday::Thu => "星期四",
        Weekday::Fri => "星期五",
        Weekday::Sat => "星期六",
        Weekday::Sun => "星期日",
    }
}

/// `📅 2026年10月19日 星期一`
pub fn date_label(date: NaiveDate) -> String {
    format!(
        "📅 {}年{}月{}日 {}",
        date.year(),
        date.month(),
        date.day(),
        weekday_label(date.weekday())
    )
}

pub fn diet_icon(diet_type: DietType) -> &'static str {
    match diet_type {
        DietType::Chinese => "🍜",
        DietType::Mediterranean => "🥗",
    }
}

pub fn diet_label(diet_type: DietType) -> &'static str {
    match diet_type {
        DietType::Chinese => "中餐",
        DietType::Mediterranean => "地中海饮食",
    }
}

pub fn lunar_label(lunar_date: &str) -> String {
    format!("🏮 农历 {}", lunar_date)
}

pub fn festival_notice(festival: &str) -> String {
    format!("{} - 为您推荐节日美食", festival)
}

pub fn calories_label(calories: Calories) -> String {
    format!("{}热量", calories.as_wire())
}

/// Leading ingredients joined for a card, always followed by an ellipsis
pub fn ingredients_preview(ingredients: &[String]) -> String {
    format!("📋 {}...", ingredients.join(INGREDIENT_SEPARATOR))
}

/// `"茄子"的做法 (共找到7个结果)`
pub fn search_title(title: &SearchTitleView) -> String {
    let kind_text = match title.kind {
        SearchKind::Vegetable => "的做法",
        _ => "的不同做法",
    };
    let total = title
        .total_count
        .map(|n| format!(" (共找到{}个结果)", n))
        .unwrap_or_default();
    format!("\"{}\"{}{}", title.keyword, kind_text, total)
}

pub fn load_more_label(control: &LoadMoreView) -> String {
    if control.busy {
        "加载中...".to_string()
    } else {
        format!("加载更多 (还有{}个结果)", control.remaining)
    }
}

pub fn not_found_heading() -> &'static str {
    "未找到相关菜谱"
}

pub fn not_found_message(keyword: &str) -> String {
    format!("本地数据库中暂无\"{}\"的菜谱。", keyword)
}

pub fn not_found_hint() -> &'static str {
    "请尝试其他关键词。"
}

pub fn fallback_icon(fallback: &FallbackView) -> &'static str {
    if fallback.timed_out {
        "⚠️"
    } else {
        "💡"
    }
}

pub fn fallback_heading(fallback: &FallbackView) -> &'static str {
    if fallback.timed_out {
        "⚠️ 提示"
    } else {
        "💡 AI推荐的更多做法"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_label() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(date_label(date), "📅 2026年10月19日 星期一");
    }

    #[test]
    fn test_search_title_variants() {
        let mut title = SearchTitleView {
            keyword: "茄子".to_string(),
            kind: SearchKind::Vegetable,
            total_count: Some(7),
        };
        assert_eq!(search_title(&title), "\"茄子\"的做法 (共找到7个结果)");

        title.kind = SearchKind::DishName;
        title.total_count = None;
        assert_eq!(search_title(&title), "\"茄子\"的不同做法");
    }

    #[test]
    fn test_load_more_label() {
        let mut control = LoadMoreView {
            remaining: 4,
            busy: false,
        };
        assert_eq!(load_more_label(&control), "加载更多 (还有4个结果)");
        control.busy = true;
        assert_eq!(load_more_label(&control), "加载中...");
    }

    #[test]
    fn test_ingredients_preview() {
        let ingredients = vec!["番茄".to_string(), "鸡蛋".to_string()];
        assert_eq!(ingredients_preview(&ingredients), "📋 番茄、鸡蛋...");
    }

    #[test]
    fn test_fallback_heading() {
        let timeout = FallbackView {
            text: "请求超时".to_string(),
            timed_out: true,
        };
        assert_eq!(fallback_heading(&timeout), "⚠️ 提示");
        assert_eq!(fallback_icon(&timeout), "⚠️");
    }
}
