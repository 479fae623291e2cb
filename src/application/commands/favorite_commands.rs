// src/application/commands/favorite_commands.rs

use crate::application::{
    dto::RecipeSummaryDto,
    error_handling::ToErrorResponse,
    state::AppState,
};
use crate::domain::RecipeId;

/// Toggle a stored recipe in or out of favorites.
/// Returns the new favorite state.
pub fn toggle_favorite(state: &AppState, recipe_id: RecipeId) -> Result<bool, String> {
    state
        .recipe_service
        .toggle_favorite_by_id(recipe_id)
        .to_error_response()
}

pub fn is_favorite(state: &AppState, recipe_id: RecipeId) -> bool {
    state.recipe_service.is_favorite(recipe_id)
}

/// Favorites in the order they were added
pub fn list_favorites(state: &AppState) -> Vec<RecipeSummaryDto> {
    state
        .recipe_service
        .list_favorites()
        .iter()
        .map(|recipe| RecipeSummaryDto::from_recipe(recipe, true))
        .collect()
}
