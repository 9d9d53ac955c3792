use std::collections::BTreeMap;

use itertools::Itertools;

use super::ingredients::IngredientSlot;
use crate::{Identifier, ItemStack, RegistryError};

/// A crafting recipe with a fixed layout of up to 3x3 symbols.
/// A space in the shape marks a slot that has to stay empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapedRecipe {
    key: Identifier,
    rows: Vec<String>,
    ingredients: BTreeMap<char, IngredientSlot>,
    result: ItemStack,
}

impl ShapedRecipe {
    pub fn builder(key: Identifier, result: ItemStack) -> ShapedRecipeBuilder {
        ShapedRecipeBuilder {
            key,
            result,
            rows: Vec::new(),
            ingredients: BTreeMap::new(),
        }
    }

    pub fn key(&self) -> &Identifier {
        &self.key
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn ingredients(&self) -> &BTreeMap<char, IngredientSlot> {
        &self.ingredients
    }

    pub fn result(&self) -> &ItemStack {
        &self.result
    }

    /// Human readable ingredient list in shape order, e.g.
    /// `5x minecraft:iron_ingot + 1x minecraft:redstone`.
    pub fn describe_ingredients(&self) -> String {
        let symbols = occupied(&self.rows).collect_vec();
        let counts = symbols.iter().counts();
        symbols
            .iter()
            .unique()
            .filter_map(|symbol| {
                let count = counts[&symbol];
                self.ingredients.get(symbol).map(|slot| match slot {
                    IngredientSlot::Single(item) => format!("{count}x {item}"),
                    IngredientSlot::Many(items) => {
                        format!("{count}x ({})", items.iter().join(" | "))
                    }
                })
            })
            .join(" + ")
    }
}

fn occupied(rows: &[String]) -> impl Iterator<Item = char> + '_ {
    rows.iter()
        .flat_map(|row| row.chars())
        .filter(|symbol| *symbol != ' ')
}

pub struct ShapedRecipeBuilder {
    key: Identifier,
    result: ItemStack,
    rows: Vec<String>,
    ingredients: BTreeMap<char, IngredientSlot>,
}

impl ShapedRecipeBuilder {
    #[must_use]
    pub fn shape<S: AsRef<str>>(mut self, rows: &[S]) -> Self {
        self.rows = rows.iter().map(|row| row.as_ref().to_string()).collect();
        self
    }

    #[must_use]
    pub fn ingredient(mut self, symbol: char, slot: IngredientSlot) -> Self {
        self.ingredients.insert(symbol, slot);
        self
    }

    pub fn build(self) -> Result<ShapedRecipe, RegistryError> {
        let invalid = |reason: String| RegistryError::InvalidRecipe {
            key: self.key.clone(),
            reason,
        };

        if self.rows.is_empty() || self.rows.len() > 3 {
            return Err(invalid(format!(
                "shape must have 1 to 3 rows, got {}",
                self.rows.len()
            )));
        }
        let width = self.rows[0].chars().count();
        if width == 0 || width > 3 {
            return Err(invalid(format!(
                "shape rows must have 1 to 3 columns, got {width}"
            )));
        }
        if let Some(row) = self.rows.iter().find(|row| row.chars().count() != width) {
            return Err(invalid(format!(
                "shape rows must have the same length, '{row}' differs"
            )));
        }
        if let Some(symbol) =
            occupied(&self.rows).find(|symbol| !self.ingredients.contains_key(symbol))
        {
            return Err(invalid(format!("symbol '{symbol}' has no ingredient")));
        }
        if let Some(unused) = self
            .ingredients
            .keys()
            .find(|symbol| !self.rows.iter().any(|row| row.contains(**symbol)))
        {
            return Err(invalid(format!("symbol '{unused}' is not used in the shape")));
        }

        Ok(ShapedRecipe {
            key: self.key,
            rows: self.rows,
            ingredients: self.ingredients,
            result: self.result,
        })
    }
}
