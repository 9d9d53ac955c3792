use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;

#[serde_inline_default]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RecipeConfig {
    /// Can the filtered hopper be crafted? When disabled it is only
    /// obtainable through `/hopper give`.
    #[serde_inline_default(true)]
    pub enabled: bool,
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
