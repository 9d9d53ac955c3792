mod ingredients;
mod shaped;

pub use ingredients::IngredientSlot;
pub use shaped::{ShapedRecipe, ShapedRecipeBuilder};
