use askama::Template;
use std::fmt::Write;

use crate::{error::AppResult, models::MealSlot};

use super::{
    formatters, ActiveView, FallbackView, MealGrid, RecipeCardView, RecipeDetailCardView,
    RecipeModalView, SearchGrid, Surface, LOADING_RECOMMENDATIONS, NO_RECOMMENDATIONS, SEARCHING,
};

/// Turns a surface into output for one rendering target
pub trait Renderer: Send + Sync {
    fn render(&self, surface: &Surface) -> AppResult<String>;
}

// ============================================================================
// HTML
// ============================================================================

/// Renders the page body with askama templates
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

struct Placeholder {
    text: String,
    is_error: bool,
}

struct Badge {
    class: &'static str,
    label: String,
}

struct CardRow {
    name: String,
    calories: Badge,
    tags: Vec<String>,
    preview: String,
}

struct MealSection {
    grid_id: String,
    heading: &'static str,
    placeholder: Option<Placeholder>,
    cards: Vec<CardRow>,
}

struct DetailRow {
    name: String,
    calories: Badge,
    tags: Vec<String>,
    ingredients: Vec<String>,
    steps: Vec<String>,
}

struct FallbackRow {
    heading: &'static str,
    icon: &'static str,
    text: String,
    timed_out: bool,
}

struct NotFoundRow {
    heading: &'static str,
    message: String,
    hint: &'static str,
    fallback: Option<FallbackRow>,
}

struct LoadMoreRow {
    label: String,
    disabled: bool,
}

struct ModalRow {
    name: String,
    calories: Badge,
    season: String,
    ingredients: Vec<String>,
    steps: Vec<String>,
}

#[derive(Template)]
#[template(path = "board.html")]
struct BoardTemplate {
    date: Option<String>,
    diet_icon: &'static str,
    diet_label: &'static str,
    mediterranean: bool,
    lunar_date: Option<String>,
    festival: Option<String>,
    show_recommendations: bool,
    meals: Vec<MealSection>,
    search_input: String,
    search_title: Option<String>,
    search_placeholder: Option<Placeholder>,
    not_found: Option<NotFoundRow>,
    results: Vec<DetailRow>,
    notice: Option<String>,
    load_more: Option<LoadMoreRow>,
    fallback: Option<FallbackRow>,
    modal: Option<ModalRow>,
}

fn badge(calories: crate::models::Calories) -> Badge {
    Badge {
        class: calories.css_class(),
        label: formatters::calories_label(calories),
    }
}

fn card_row(card: &RecipeCardView) -> CardRow {
    CardRow {
        name: card.name.clone(),
        calories: badge(card.calories),
        tags: card.tags.clone(),
        preview: formatters::ingredients_preview(&card.ingredients_preview),
    }
}

fn detail_row(card: &RecipeDetailCardView) -> DetailRow {
    DetailRow {
        name: card.name.clone(),
        calories: badge(card.calories),
        tags: card.tags.clone(),
        ingredients: card.ingredients.clone(),
        steps: card.steps.clone(),
    }
}

fn fallback_row(fallback: &FallbackView) -> FallbackRow {
    FallbackRow {
        heading: formatters::fallback_heading(fallback),
        icon: formatters::fallback_icon(fallback),
        text: fallback.text.clone(),
        timed_out: fallback.timed_out,
    }
}

fn modal_row(modal: &RecipeModalView) -> ModalRow {
    ModalRow {
        name: modal.name.clone(),
        calories: badge(modal.calories),
        season: modal.season.clone(),
        ingredients: modal.ingredients.clone(),
        steps: modal.steps.clone(),
    }
}

fn meal_section(slot: MealSlot, grid: &MealGrid) -> MealSection {
    let (placeholder, cards) = match grid {
        MealGrid::Loading => (
            Some(Placeholder {
                text: LOADING_RECOMMENDATIONS.to_string(),
                is_error: false,
            }),
            Vec::new(),
        ),
        MealGrid::Error(message) => (
            Some(Placeholder {
                text: message.clone(),
                is_error: true,
            }),
            Vec::new(),
        ),
        MealGrid::Empty => (
            Some(Placeholder {
                text: NO_RECOMMENDATIONS.to_string(),
                is_error: false,
            }),
            Vec::new(),
        ),
        MealGrid::Cards(cards) => (None, cards.iter().map(card_row).collect()),
    };

    MealSection {
        grid_id: format!("{}-grid", slot.as_str()),
        heading: slot.label(),
        placeholder,
        cards,
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, surface: &Surface) -> AppResult<String> {
        let mut template = BoardTemplate {
            date: surface.date.map(formatters::date_label),
            diet_icon: formatters::diet_icon(surface.diet_toggle),
            diet_label: formatters::diet_label(surface.diet_toggle),
            mediterranean: surface.diet_toggle == crate::models::DietType::Mediterranean,
            lunar_date: surface
                .lunar_banner
                .as_ref()
                .map(|b| formatters::lunar_label(&b.lunar_date)),
            festival: surface
                .lunar_banner
                .as_ref()
                .and_then(|b| b.festival.as_deref())
                .map(formatters::festival_notice),
            show_recommendations: surface.active_view == ActiveView::Recommendations,
            meals: MealSlot::ALL
                .iter()
                .map(|slot| meal_section(*slot, surface.meal_grids.slot(*slot)))
                .collect(),
            search_input: surface.search_input.clone(),
            search_title: surface.search_title.as_ref().map(formatters::search_title),
            search_placeholder: None,
            not_found: None,
            results: Vec::new(),
            notice: None,
            load_more: None,
            fallback: None,
            modal: surface.modal.as_ref().map(modal_row),
        };

        match &surface.search_grid {
            SearchGrid::Idle => {}
            SearchGrid::Searching => {
                template.search_placeholder = Some(Placeholder {
                    text: SEARCHING.to_string(),
                    is_error: false,
                });
            }
            SearchGrid::Error(message) => {
                template.search_placeholder = Some(Placeholder {
                    text: message.clone(),
                    is_error: true,
                });
            }
            SearchGrid::NotFound(view) => {
                template.not_found = Some(NotFoundRow {
                    heading: formatters::not_found_heading(),
                    message: formatters::not_found_message(&view.keyword),
                    hint: formatters::not_found_hint(),
                    fallback: view.fallback.as_ref().map(fallback_row),
                });
            }
            SearchGrid::Results(view) => {
                template.results = view.cards.iter().map(detail_row).collect();
                template.notice = view.notice.clone();
                template.load_more = view.load_more.as_ref().map(|control| LoadMoreRow {
                    label: formatters::load_more_label(control),
                    disabled: control.busy,
                });
                template.fallback = view.fallback.as_ref().map(fallback_row);
            }
        }

        Ok(template.render()?)
    }
}

// ============================================================================
// Text
// ============================================================================

/// Renders the surface for a terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

fn write_card(out: &mut String, index: usize, card: &RecipeCardView) -> std::fmt::Result {
    write!(
        out,
        "  [{}] {} ({})",
        index + 1,
        card.name,
        formatters::calories_label(card.calories)
    )?;
    for tag in &card.tags {
        write!(out, " #{}", tag)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "      {}",
        formatters::ingredients_preview(&card.ingredients_preview)
    )
}

fn write_detail_card(
    out: &mut String,
    index: usize,
    card: &RecipeDetailCardView,
) -> std::fmt::Result {
    write!(
        out,
        "  [{}] {} ({})",
        index + 1,
        card.name,
        formatters::calories_label(card.calories)
    )?;
    for tag in &card.tags {
        write!(out, " #{}", tag)?;
    }
    writeln!(out)?;
    writeln!(out, "      📋 所需食材: {}", card.ingredients.join("、"))?;
    writeln!(out, "      👨‍🍳 制作步骤:")?;
    for (i, step) in card.steps.iter().enumerate() {
        writeln!(out, "        {}. {}", i + 1, step)?;
    }
    Ok(())
}

fn write_fallback(out: &mut String, fallback: &FallbackView) -> std::fmt::Result {
    writeln!(out, "  {}", formatters::fallback_heading(fallback))?;
    for line in fallback.text.lines() {
        writeln!(out, "    {}", line)?;
    }
    Ok(())
}

fn write_surface(out: &mut String, surface: &Surface) -> std::fmt::Result {
    if let Some(date) = surface.date {
        write!(out, "{}  ", formatters::date_label(date))?;
    }
    writeln!(
        out,
        "[{} {}]",
        formatters::diet_icon(surface.diet_toggle),
        formatters::diet_label(surface.diet_toggle)
    )?;

    match surface.active_view {
        ActiveView::Recommendations => {
            if let Some(banner) = &surface.lunar_banner {
                writeln!(out, "{}", formatters::lunar_label(&banner.lunar_date))?;
                if let Some(festival) = &banner.festival {
                    writeln!(out, "🎉 {}", formatters::festival_notice(festival))?;
                }
            }
            for slot in MealSlot::ALL {
                writeln!(out, "== {} ==", slot.label())?;
                match surface.meal_grids.slot(slot) {
                    MealGrid::Loading => writeln!(out, "  {}", LOADING_RECOMMENDATIONS)?,
                    MealGrid::Error(message) => writeln!(out, "  ❌ {}", message)?,
                    MealGrid::Empty => writeln!(out, "  {}", NO_RECOMMENDATIONS)?,
                    MealGrid::Cards(cards) => {
                        for (i, card) in cards.iter().enumerate() {
                            write_card(out, i, card)?;
                        }
                    }
                }
            }
        }
        ActiveView::Search => {
            if let Some(title) = &surface.search_title {
                writeln!(out, "{}", formatters::search_title(title))?;
            }
            match &surface.search_grid {
                SearchGrid::Idle => {}
                SearchGrid::Searching => writeln!(out, "  {}", SEARCHING)?,
                SearchGrid::Error(message) => writeln!(out, "  ❌ {}", message)?,
                SearchGrid::NotFound(view) => {
                    writeln!(out, "  {}", formatters::not_found_heading())?;
                    writeln!(out, "  {}", formatters::not_found_message(&view.keyword))?;
                    match &view.fallback {
                        Some(fallback) => {
                            write!(out, "  {} ", formatters::fallback_icon(fallback))?;
                            writeln!(out, "{}", fallback.text)?;
                        }
                        None => writeln!(out, "  {}", formatters::not_found_hint())?,
                    }
                }
                SearchGrid::Results(view) => {
                    for (i, card) in view.cards.iter().enumerate() {
                        write_detail_card(out, i, card)?;
                    }
                    if let Some(notice) = &view.notice {
                        writeln!(out, "  ❌ {}", notice)?;
                    }
                    if let Some(control) = &view.load_more {
                        writeln!(out, "  [{}]", formatters::load_more_label(control))?;
                    }
                    if let Some(fallback) = &view.fallback {
                        write_fallback(out, fallback)?;
                    }
                }
            }
        }
    }

    if let Some(modal) = &surface.modal {
        writeln!(
            out,
            "┌ {} ({}) {}",
            modal.name,
            formatters::calories_label(modal.calories),
            modal.season
        )?;
        writeln!(out, "│ 食材:")?;
        for ingredient in &modal.ingredients {
            writeln!(out, "│   - {}", ingredient)?;
        }
        writeln!(out, "│ 步骤:")?;
        for (i, step) in modal.steps.iter().enumerate() {
            writeln!(out, "│   {}. {}", i + 1, step)?;
        }
        writeln!(out, "└")?;
    }

    Ok(())
}

impl Renderer for TextRenderer {
    fn render(&self, surface: &Surface) -> AppResult<String> {
        let mut out = String::new();
        write_surface(&mut out, surface)
            .map_err(|e| crate::error::AppError::Internal(e.to_string()))?;
        Ok(out)
    }
}

// ============================================================================
// JSON
// ============================================================================

/// Dumps the raw view models
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, surface: &Surface) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(surface)?)
    }
}
