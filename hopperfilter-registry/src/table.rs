use std::sync::atomic::{AtomicBool, Ordering};

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::{Identifier, RegistryError, ShapedRecipe};

/// The host's global recipe table as seen by plugins.
pub trait RecipeRegistry: Send + Sync {
    /// Fails with [`RegistryError::DuplicateKey`] when the key is already taken.
    fn add(&self, recipe: ShapedRecipe) -> Result<(), RegistryError>;

    /// Fails with [`RegistryError::UnknownKey`] when nothing is registered under `key`.
    fn remove(&self, key: &Identifier) -> Result<ShapedRecipe, RegistryError>;
}

/// In memory [`RecipeRegistry`]. Recipes are kept in registration order.
#[derive(Default)]
pub struct RecipeTable {
    recipes: RwLock<IndexMap<Identifier, ShapedRecipe>>,
    closed: AtomicBool,
}

impl RecipeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> Vec<Identifier> {
        self.recipes.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.recipes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.read().is_empty()
    }

    /// Rejects every following mutation, used once the host is shutting down.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    fn check_open(&self) -> Result<(), RegistryError> {
        if self.closed.load(Ordering::Acquire) {
            Err(RegistryError::Closed)
        } else {
            Ok(())
        }
    }
}

impl RecipeRegistry for RecipeTable {
    fn add(&self, recipe: ShapedRecipe) -> Result<(), RegistryError> {
        self.check_open()?;
        let mut recipes = self.recipes.write();
        if recipes.contains_key(recipe.key()) {
            return Err(RegistryError::DuplicateKey(recipe.key().clone()));
        }
        log::debug!("Added recipe {}", recipe.key());
        recipes.insert(recipe.key().clone(), recipe);
        Ok(())
    }

    fn remove(&self, key: &Identifier) -> Result<ShapedRecipe, RegistryError> {
        self.check_open()?;
        let removed = self
            .recipes
            .write()
            .shift_remove(key)
            .ok_or_else(|| RegistryError::UnknownKey(key.clone()))?;
        log::debug!("Removed recipe {key}");
        Ok(removed)
    }
}
