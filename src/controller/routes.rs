use std::str::FromStr;

use crate::{error::AppError, models::MealSlot};

use super::Controller;

/// Action names with a short description, in help order
pub const ACTIONS: &[(&str, &str)] = &[
    ("refresh", "reload today's recommendations"),
    ("toggle-diet", "switch between Chinese and Mediterranean"),
    ("search", "search <keyword>"),
    ("load-more", "fetch the next page of search results"),
    ("back", "return to the recommendations"),
    ("open", "open <breakfast|lunch|dinner> <n> | open result <n>"),
    ("close", "close the recipe overlay"),
    ("backdrop", "click outside the recipe overlay"),
];

/// A card that can be opened in the detail overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeRef {
    Meal { slot: MealSlot, index: usize },
    SearchResult { index: usize },
}

/// User interaction routed to a controller handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Refresh,
    ToggleDiet,
    Search(String),
    LoadMore,
    Back,
    Open(RecipeRef),
    Close,
    Backdrop,
}

/// What the caller should do after a handler ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Surface changed; render it
    Rendered,
    /// Show a prompt to the user; nothing was sent
    Prompt(String),
    /// Action did not apply to the current surface
    Ignored,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Refresh => "refresh",
            Action::ToggleDiet => "toggle-diet",
            Action::Search(_) => "search",
            Action::LoadMore => "load-more",
            Action::Back => "back",
            Action::Open(_) => "open",
            Action::Close => "close",
            Action::Backdrop => "backdrop",
        }
    }

    /// Builds an action from its name and the rest of the input line
    pub fn parse(name: &str, argument: &str) -> Result<Self, AppError> {
        let argument = argument.trim();
        match name {
            "refresh" => Ok(Action::Refresh),
            "toggle-diet" | "toggle" => Ok(Action::ToggleDiet),
            // Validation of the keyword belongs to the search handler
            "search" => Ok(Action::Search(argument.to_string())),
            "load-more" | "more" => Ok(Action::LoadMore),
            "back" => Ok(Action::Back),
            "open" => parse_recipe_ref(argument).map(Action::Open),
            "close" => Ok(Action::Close),
            "backdrop" => Ok(Action::Backdrop),
            other => Err(AppError::InvalidInput(format!("unknown action '{}'", other))),
        }
    }
}

impl FromStr for Action {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, argument) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        Action::parse(name, argument)
    }
}

/// Parses `<slot> <n>` or `result <n>`, with `n` counted from 1
fn parse_recipe_ref(argument: &str) -> Result<RecipeRef, AppError> {
    let mut parts = argument.split_whitespace();
    let (Some(target), Some(position), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(AppError::InvalidInput(
            "usage: open <breakfast|lunch|dinner|result> <n>".to_string(),
        ));
    };

    let index = position
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| AppError::InvalidInput(format!("invalid card number '{}'", position)))?;

    if target == "result" {
        return Ok(RecipeRef::SearchResult { index });
    }

    let slot = target.parse::<MealSlot>().map_err(AppError::InvalidInput)?;
    Ok(RecipeRef::Meal { slot, index })
}

impl Controller {
    /// Routes an action to its handler
    pub async fn dispatch(&mut self, action: Action) -> Outcome {
        tracing::debug!(action = action.name(), "Dispatching action");

        match action {
            Action::Refresh => self.load_recommendations().await,
            Action::ToggleDiet => self.toggle_diet().await,
            Action::Search(input) => self.submit_search(&input).await,
            Action::LoadMore => self.load_more().await,
            Action::Back => self.show_recommendations(),
            Action::Open(target) => self.open_recipe(target),
            Action::Close => self.close_modal(),
            Action::Backdrop => self.click_backdrop(),
        }
    }
}
