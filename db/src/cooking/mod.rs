pub mod category;
pub mod recipe;

pub use category::{Category, CategorySummary};
pub use recipe::{NewRecipe, Recipe};
