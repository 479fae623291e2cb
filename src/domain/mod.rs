// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod recipe;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Recipe Domain
pub use recipe::{
    format_ingredients, instruction_steps, normalize_line_endings, parse_ingredients,
    validate_draft, validate_recipe, Ingredient, Recipe, RecipeDraft, RecipeId,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
