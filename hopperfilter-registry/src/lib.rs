mod error;
mod identifier;
mod item;
mod recipe;
mod table;

pub use error::RegistryError;
pub use identifier::{Identifier, IdentifierError, DEFAULT_NAMESPACE};
pub use item::ItemStack;
pub use recipe::{IngredientSlot, ShapedRecipe, ShapedRecipeBuilder};
pub use table::{RecipeRegistry, RecipeTable};
