// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Presentation shaping (instruction steps, favorite flag) happens here

use serde::{Deserialize, Serialize};

use crate::domain::{Ingredient, Recipe, RecipeDraft, RecipeId};
use crate::services::RecipeForm;

// ============================================================================
// RECIPE DTOs
// ============================================================================

/// One row of the recipe list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummaryDto {
    pub id_food: RecipeId,
    pub recipe_name: String,
    pub recipe_image: String,
    pub is_favorite: bool,
}

impl RecipeSummaryDto {
    pub fn from_recipe(recipe: &Recipe, is_favorite: bool) -> Self {
        Self {
            id_food: recipe.id_food,
            recipe_name: recipe.recipe_name.clone(),
            recipe_image: recipe.recipe_image.clone(),
            is_favorite,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientDto {
    pub ingredient_name: String,
    pub measure: Option<String>,
}

impl From<&Ingredient> for IngredientDto {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            ingredient_name: ingredient.ingredient_name.clone(),
            measure: ingredient.measure.clone(),
        }
    }
}

/// Detail screen payload. Instructions arrive split into steps with
/// line endings already normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetailDto {
    pub id_food: RecipeId,
    pub recipe_name: String,
    pub recipe_image: String,
    pub ingredients: Vec<IngredientDto>,
    pub instruction_steps: Vec<String>,
    pub is_favorite: bool,
}

impl RecipeDetailDto {
    pub fn from_recipe(recipe: &Recipe, is_favorite: bool) -> Self {
        Self {
            id_food: recipe.id_food,
            recipe_name: recipe.recipe_name.clone(),
            recipe_image: recipe.recipe_image.clone(),
            ingredients: recipe.ingredients.iter().map(IngredientDto::from).collect(),
            instruction_steps: recipe.instruction_steps(),
            is_favorite,
        }
    }
}

// ============================================================================
// FORM DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeFormDto {
    pub recipe_id: RecipeId,
    pub is_new: bool,
    pub recipe_name: String,
    pub recipe_image: String,
    pub ingredients: String,
    pub recipe_instructions: String,
}

impl From<RecipeForm> for RecipeFormDto {
    fn from(form: RecipeForm) -> Self {
        Self {
            recipe_id: form.recipe_id,
            is_new: form.is_new,
            recipe_name: form.draft.recipe_name,
            recipe_image: form.draft.recipe_image,
            ingredients: form.draft.ingredients,
            recipe_instructions: form.draft.recipe_instructions,
        }
    }
}

/// Form submission. `recipe_id` is None for a new recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecipeDto {
    #[serde(default)]
    pub recipe_id: Option<RecipeId>,
    pub recipe_name: String,
    pub recipe_image: String,
    pub ingredients: String,
    pub recipe_instructions: String,
}

impl SaveRecipeDto {
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            recipe_name: self.recipe_name.clone(),
            recipe_image: self.recipe_image.clone(),
            ingredients: self.ingredients.clone(),
            recipe_instructions: self.recipe_instructions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_normalizes_instructions() {
        let recipe = Recipe {
            id_food: 100,
            recipe_name: "Stew".to_string(),
            recipe_image: "http://x/y.png".to_string(),
            recipe_instructions: "Brown the beef.\r\nSimmer.\rServe.".to_string(),
            ingredients: vec![Ingredient::new("Beef", None)],
        };

        let dto = RecipeDetailDto::from_recipe(&recipe, true);

        assert_eq!(dto.instruction_steps, vec!["Brown the beef.", "Simmer.", "Serve."]);
        assert!(dto.is_favorite);
        assert_eq!(dto.ingredients[0].measure, None);
    }

    #[test]
    fn test_save_dto_accepts_missing_id() {
        let dto: SaveRecipeDto = serde_json::from_str(
            r#"{"recipeName":"Stew","recipeImage":"i","ingredients":"Beef","recipeInstructions":"Cook."}"#,
        )
        .unwrap();

        assert_eq!(dto.recipe_id, None);
        assert_eq!(dto.to_draft().ingredients, "Beef");
    }
}
