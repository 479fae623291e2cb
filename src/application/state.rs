// src/application/state.rs

use std::sync::Arc;

use crate::db::{create_connection_pool, get_connection, initialize_database, DatabaseConfig};
use crate::error::AppResult;
use crate::repositories::{
    FavoritesSnapshotRepository, MemoryRecordStore, RecipeRepository, RecordStore,
    SqliteRecordStore,
};
use crate::services::{FavoritesRegistry, RecipeService};

/// Application state handed to the UI layer.
/// All fields are Arc-wrapped for thread-safe sharing across commands.
pub struct AppState {
    pub recipe_service: Arc<RecipeService>,
}

impl AppState {
    /// Open (or create) the on-disk database and wire every layer
    pub fn initialize(config: &DatabaseConfig) -> AppResult<Self> {
        // 1. INFRASTRUCTURE
        let pool = Arc::new(create_connection_pool(config)?);
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
        }
        let store: Arc<dyn RecordStore> = Arc::new(SqliteRecordStore::new(pool));

        Self::assemble(store, config.persist_favorites)
    }

    /// Nothing touches disk; favorites are not snapshotted
    pub fn in_memory() -> Self {
        let store: Arc<dyn RecordStore> = Arc::new(MemoryRecordStore::new());
        Self::wire(store, FavoritesRegistry::new(), None)
    }

    fn assemble(store: Arc<dyn RecordStore>, persist_favorites: bool) -> AppResult<Self> {
        if !persist_favorites {
            return Ok(Self::wire(store, FavoritesRegistry::new(), None));
        }

        let snapshot = Arc::new(FavoritesSnapshotRepository::new(store.clone()));
        let favorites = snapshot.load()?;
        log::info!("Restored {} favorite recipes", favorites.len());

        Ok(Self::wire(
            store,
            FavoritesRegistry::with_favorites(favorites),
            Some(snapshot),
        ))
    }

    fn wire(
        store: Arc<dyn RecordStore>,
        favorites: FavoritesRegistry,
        snapshot: Option<Arc<FavoritesSnapshotRepository>>,
    ) -> Self {
        // 2. REPOSITORIES
        let recipe_repo = Arc::new(RecipeRepository::new(store));

        // 3. SERVICES
        let mut recipe_service = RecipeService::new(recipe_repo, Arc::new(favorites));
        if let Some(snapshot) = snapshot {
            recipe_service = recipe_service.with_favorites_snapshot(snapshot);
        }

        Self {
            recipe_service: Arc::new(recipe_service),
        }
    }
}
