// src/services/recipe_service.rs
use std::sync::Arc;

use crate::domain::recipe::{validate_draft, Recipe, RecipeDraft, RecipeId};
use crate::error::{AppError, AppResult};
use crate::repositories::{FavoritesSnapshotRepository, RecipeRepository};
use crate::services::favorites_registry::FavoritesRegistry;

/// State of the create/edit form when it opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeForm {
    /// Candidate id for a new recipe, or the id being edited
    pub recipe_id: RecipeId,
    pub is_new: bool,
    pub draft: RecipeDraft,
}

pub struct RecipeService {
    recipe_repo: Arc<RecipeRepository>,
    favorites: Arc<FavoritesRegistry>,
    favorites_snapshot: Option<Arc<FavoritesSnapshotRepository>>,
}

impl RecipeService {
    pub fn new(recipe_repo: Arc<RecipeRepository>, favorites: Arc<FavoritesRegistry>) -> Self {
        Self {
            recipe_repo,
            favorites,
            favorites_snapshot: None,
        }
    }

    /// Persist the favorites list after every toggle
    pub fn with_favorites_snapshot(mut self, snapshot: Arc<FavoritesSnapshotRepository>) -> Self {
        self.favorites_snapshot = Some(snapshot);
        self
    }

    /// New form: empty draft and the id a save would get right now.
    /// The candidate is recomputed on every open and never cached.
    /// Edit form: draft pre-filled from the stored recipe.
    pub fn open_form(&self, recipe_id: Option<RecipeId>) -> AppResult<RecipeForm> {
        match recipe_id {
            None => Ok(RecipeForm {
                recipe_id: self.recipe_repo.allocate_id()?,
                is_new: true,
                draft: RecipeDraft::default(),
            }),
            Some(id) => {
                let recipe = self.recipe_repo.get_by_id(id)?.ok_or(AppError::NotFound)?;
                Ok(RecipeForm {
                    recipe_id: id,
                    is_new: false,
                    draft: RecipeDraft::from_recipe(&recipe),
                })
            }
        }
    }

    pub fn create_recipe(&self, draft: &RecipeDraft) -> AppResult<Recipe> {
        self.recipe_repo.create(draft)
    }

    /// Overwrite recipe `id_food` with the draft contents
    pub fn update_recipe(&self, id_food: RecipeId, draft: &RecipeDraft) -> AppResult<Recipe> {
        validate_draft(draft)?;

        let recipe = draft.to_recipe(id_food);
        self.recipe_repo.update(&recipe)?;
        Ok(recipe)
    }

    /// Form submit: create when there is no id, update otherwise
    pub fn save_recipe(&self, recipe_id: Option<RecipeId>, draft: &RecipeDraft) -> AppResult<Recipe> {
        match recipe_id {
            None => self.create_recipe(draft),
            Some(id) => self.update_recipe(id, draft),
        }
    }

    pub fn delete_recipe(&self, id_food: RecipeId) -> AppResult<()> {
        self.recipe_repo.delete(id_food)
    }

    pub fn get_recipe(&self, id_food: RecipeId) -> AppResult<Option<Recipe>> {
        self.recipe_repo.get_by_id(id_food)
    }

    pub fn list_recipes(&self) -> AppResult<Vec<Recipe>> {
        self.recipe_repo.list()
    }

    /// Returns whether the recipe is favorited afterwards.
    /// With snapshots enabled the toggle only takes effect once the snapshot
    /// is written; a failed write leaves favorites as they were.
    pub fn toggle_favorite(&self, recipe: &Recipe) -> AppResult<bool> {
        match &self.favorites_snapshot {
            Some(snapshot) => self
                .favorites
                .toggle_and_persist(recipe, |next| snapshot.save(next)),
            None => Ok(self.favorites.toggle(recipe)),
        }
    }

    /// Toggle a stored recipe by id
    pub fn toggle_favorite_by_id(&self, id_food: RecipeId) -> AppResult<bool> {
        let recipe = self.recipe_repo.get_by_id(id_food)?.ok_or(AppError::NotFound)?;
        self.toggle_favorite(&recipe)
    }

    pub fn is_favorite(&self, id_food: RecipeId) -> bool {
        self.favorites.is_favorite(id_food)
    }

    pub fn list_favorites(&self) -> Vec<Recipe> {
        self.favorites.list()
    }
}
