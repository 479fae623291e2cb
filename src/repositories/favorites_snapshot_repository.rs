// src/repositories/favorites_snapshot_repository.rs
//
// Optional persistence for the favorites list: the whole list is written
// as one JSON array under a reserved key, same pattern as recipe records.

use std::sync::Arc;

use crate::domain::recipe::Recipe;
use crate::error::{AppError, AppResult};
use crate::repositories::record_store::RecordStore;

pub const FAVORITES_KEY: &str = "favoriteRecipes";

pub struct FavoritesSnapshotRepository {
    store: Arc<dyn RecordStore>,
}

impl FavoritesSnapshotRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn save(&self, favorites: &[Recipe]) -> AppResult<()> {
        let json = serde_json::to_string(favorites)?;
        self.store.set(FAVORITES_KEY, &json)
    }

    /// Empty when no snapshot was ever written
    pub fn load(&self) -> AppResult<Vec<Recipe>> {
        match self.store.get(FAVORITES_KEY)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| AppError::corrupt_record(FAVORITES_KEY, e)),
        }
    }
}
