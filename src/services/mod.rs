// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod favorites_registry;
pub mod recipe_service;

pub use favorites_registry::FavoritesRegistry;
pub use recipe_service::{RecipeForm, RecipeService};
