pub mod providers;

pub use providers::{HttpRecipeApi, RecipeApi};
