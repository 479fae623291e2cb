// src/lib.rs
// RecipeBox - Local-first recipe book core
//
// Architecture:
// - Domain-centric: recipe rules live in `domain`
// - One storage seam: every byte goes through a `RecordStore`
// - Explicit: no implicit behavior, no ambient global state
// - Local-first: no network, no accounts

pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    format_ingredients, instruction_steps, normalize_line_endings, parse_ingredients,
    validate_draft, validate_recipe, DomainError, Ingredient, Recipe, RecipeDraft, RecipeId,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool, DatabaseConfig};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    recipe_key, FavoritesSnapshotRepository, MemoryRecordStore, RecipeRepository, RecordStore,
    SqliteRecordStore, FAVORITES_KEY, FIRST_RECIPE_ID, LAST_ID_KEY, RECIPE_KEY_PREFIX,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{FavoritesRegistry, RecipeForm, RecipeService};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

pub use application::commands;
pub use application::dto;
