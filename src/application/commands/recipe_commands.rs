// src/application/commands/recipe_commands.rs
//
// Recipe Command Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic

use crate::application::{
    dto::*,
    error_handling::ToErrorResponse,
    state::AppState,
};
use crate::domain::RecipeId;

/// List all recipes
pub fn list_recipes(state: &AppState) -> Result<Vec<RecipeSummaryDto>, String> {
    let service = &state.recipe_service;
    let recipes = service.list_recipes().to_error_response()?;

    Ok(recipes
        .iter()
        .map(|recipe| RecipeSummaryDto::from_recipe(recipe, service.is_favorite(recipe.id_food)))
        .collect())
}

/// Get a single recipe for the detail screen
pub fn get_recipe(
    state: &AppState,
    recipe_id: RecipeId,
) -> Result<Option<RecipeDetailDto>, String> {
    let service = &state.recipe_service;
    let recipe = service.get_recipe(recipe_id).to_error_response()?;

    Ok(recipe.map(|r| RecipeDetailDto::from_recipe(&r, service.is_favorite(r.id_food))))
}

/// Open the create form (no id) or the edit form (existing id)
pub fn open_recipe_form(
    state: &AppState,
    recipe_id: Option<RecipeId>,
) -> Result<RecipeFormDto, String> {
    let form = state
        .recipe_service
        .open_form(recipe_id)
        .to_error_response()?;

    Ok(RecipeFormDto::from(form))
}

/// Submit the form; returns the saved recipe
pub fn save_recipe(state: &AppState, dto: SaveRecipeDto) -> Result<RecipeDetailDto, String> {
    let service = &state.recipe_service;
    let recipe = service
        .save_recipe(dto.recipe_id, &dto.to_draft())
        .to_error_response()?;

    Ok(RecipeDetailDto::from_recipe(&recipe, service.is_favorite(recipe.id_food)))
}

/// Delete a recipe. Succeeds when it was already gone.
pub fn delete_recipe(state: &AppState, recipe_id: RecipeId) -> Result<(), String> {
    state
        .recipe_service
        .delete_recipe(recipe_id)
        .to_error_response()
}
