// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - RecordStore is the only storage seam; backends stay dumb key/value maps
// - Recipe keys are owned by RecipeRepository alone
// - NO cross-repository calls

pub mod favorites_snapshot_repository;
pub mod recipe_repository;
pub mod record_store;
pub mod sqlite;

pub use favorites_snapshot_repository::{FavoritesSnapshotRepository, FAVORITES_KEY};
pub use recipe_repository::{
    recipe_key, RecipeRepository, FIRST_RECIPE_ID, LAST_ID_KEY, RECIPE_KEY_PREFIX,
};
pub use record_store::{MemoryRecordStore, RecordStore};
pub use sqlite::SqliteRecordStore;
