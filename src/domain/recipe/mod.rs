pub mod entity;
pub mod ingredients;
pub mod instructions;
pub mod invariants;

pub use entity::{Ingredient, Recipe, RecipeDraft, RecipeId};
pub use ingredients::{format_ingredients, parse_ingredients};
pub use instructions::{instruction_steps, normalize_line_endings};
pub use invariants::{validate_draft, validate_recipe};
