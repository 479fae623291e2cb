// src/services/favorites_registry.rs
//
// In-memory favorites, compared by idFood.
// One instance is owned by AppState and shared by reference.

use std::sync::{PoisonError, RwLock};

use crate::domain::recipe::{Recipe, RecipeId};
use crate::error::AppResult;

#[derive(Debug, Default)]
pub struct FavoritesRegistry {
    favorites: RwLock<Vec<Recipe>>,
}

impl FavoritesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a previously saved list
    pub fn with_favorites(favorites: Vec<Recipe>) -> Self {
        Self {
            favorites: RwLock::new(favorites),
        }
    }

    /// Remove the first entry with the same idFood, or append the recipe.
    /// Returns true when the recipe is favorited afterwards.
    ///
    /// The whole read-modify-write runs under one write lock.
    pub fn toggle(&self, recipe: &Recipe) -> bool {
        let mut favorites = self.favorites.write().unwrap_or_else(PoisonError::into_inner);

        match favorites.iter().position(|f| f.id_food == recipe.id_food) {
            Some(index) => {
                favorites.remove(index);
                false
            }
            None => {
                favorites.push(recipe.clone());
                true
            }
        }
    }

    /// Toggle, but hand the resulting list to `persist` first and only keep
    /// it when `persist` succeeds. On error the registry is unchanged.
    pub fn toggle_and_persist<F>(&self, recipe: &Recipe, persist: F) -> AppResult<bool>
    where
        F: FnOnce(&[Recipe]) -> AppResult<()>,
    {
        let mut favorites = self.favorites.write().unwrap_or_else(PoisonError::into_inner);

        let mut next = favorites.clone();
        let favorited = match next.iter().position(|f| f.id_food == recipe.id_food) {
            Some(index) => {
                next.remove(index);
                false
            }
            None => {
                next.push(recipe.clone());
                true
            }
        };

        persist(&next)?;
        *favorites = next;
        Ok(favorited)
    }

    pub fn is_favorite(&self, id_food: RecipeId) -> bool {
        self.favorites
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|f| f.id_food == id_food)
    }

    /// Snapshot in toggle (append) order
    pub fn list(&self) -> Vec<Recipe> {
        self.favorites
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
