use super::entity::{Recipe, RecipeDraft};
use super::ingredients::parse_ingredients;
use crate::domain::{DomainError, DomainResult};

/// Validates a form payload before anything is written.
/// Ingredients must yield at least one entry once parsed.
pub fn validate_draft(draft: &RecipeDraft) -> DomainResult<()> {
    require("recipeName", &draft.recipe_name)?;
    require("recipeImage", &draft.recipe_image)?;
    if parse_ingredients(&draft.ingredients).is_empty() {
        return Err(DomainError::MissingField("ingredients"));
    }
    require("recipeInstructions", &draft.recipe_instructions)?;
    Ok(())
}

/// Validates all Recipe invariants
pub fn validate_recipe(recipe: &Recipe) -> DomainResult<()> {
    require("recipeName", &recipe.recipe_name)?;
    require("recipeImage", &recipe.recipe_image)?;
    if recipe.ingredients.is_empty() {
        return Err(DomainError::MissingField("ingredients"));
    }
    require("recipeInstructions", &recipe.recipe_instructions)?;
    Ok(())
}

fn require(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField(field));
    }
    Ok(())
}

/// Invariants that must hold true for Recipe domain:
///
/// 1. Identity (idFood) is assigned once and never changes
/// 2. Name, image, instructions are non-blank
/// 3. At least one ingredient
/// 4. Ingredient order is preserved as entered
/// 5. Instructions are stored raw; normalization happens on display
