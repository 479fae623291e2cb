use serde::{Deserialize, Serialize};

use super::ingredients::{format_ingredients, parse_ingredients};

/// Numeric recipe identity, allocated by the repository counter
pub type RecipeId = u64;

/// A user-authored recipe
/// This is the root entity persisted under `recipe_<idFood>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Immutable identifier, unique across all stored recipes
    pub id_food: RecipeId,

    /// Display name
    pub recipe_name: String,

    /// Image URI
    pub recipe_image: String,

    /// Free text, one step per line. Line endings are kept as typed.
    pub recipe_instructions: String,

    /// Ordered ingredient list
    pub ingredients: Vec<Ingredient>,
}

/// One line of a recipe's ingredient list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub ingredient_name: String,

    /// `None` when the source line carried no `:` separator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measure: Option<String>,
}

impl Ingredient {
    pub fn new(ingredient_name: impl Into<String>, measure: Option<String>) -> Self {
        Self {
            ingredient_name: ingredient_name.into(),
            measure,
        }
    }
}

/// Form payload for creating or editing a recipe.
/// Ingredients are kept as the raw `Name: Measure` block the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub recipe_name: String,
    pub recipe_image: String,
    pub ingredients: String,
    pub recipe_instructions: String,
}

impl RecipeDraft {
    /// Pre-fill a draft from a stored recipe (edit form)
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            recipe_name: recipe.recipe_name.clone(),
            recipe_image: recipe.recipe_image.clone(),
            ingredients: format_ingredients(&recipe.ingredients),
            recipe_instructions: recipe.recipe_instructions.clone(),
        }
    }

    /// Build the full record for a given id.
    /// Does not validate; callers run `validate_draft` first.
    pub fn to_recipe(&self, id_food: RecipeId) -> Recipe {
        Recipe {
            id_food,
            recipe_name: self.recipe_name.clone(),
            recipe_image: self.recipe_image.clone(),
            recipe_instructions: self.recipe_instructions.clone(),
            ingredients: parse_ingredients(&self.ingredients),
        }
    }
}

impl Recipe {
    /// Instruction lines with `\r\n` / `\r` normalized, for display
    pub fn instruction_steps(&self) -> Vec<String> {
        super::instructions::instruction_steps(&self.recipe_instructions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stew() -> Recipe {
        Recipe {
            id_food: 100,
            recipe_name: "Stew".to_string(),
            recipe_image: "http://x/y.png".to_string(),
            recipe_instructions: "Cook.".to_string(),
            ingredients: vec![
                Ingredient::new("Beef", Some("1kg".to_string())),
                Ingredient::new("Salt", Some("1tsp".to_string())),
            ],
        }
    }

    #[test]
    fn test_json_shape_uses_camel_case() {
        let value = serde_json::to_value(stew()).unwrap();
        assert_eq!(value["idFood"], 100);
        assert_eq!(value["recipeName"], "Stew");
        assert_eq!(value["recipeImage"], "http://x/y.png");
        assert_eq!(value["recipeInstructions"], "Cook.");
        assert_eq!(value["ingredients"][0]["ingredientName"], "Beef");
        assert_eq!(value["ingredients"][0]["measure"], "1kg");
    }

    #[test]
    fn test_absent_measure_is_omitted_and_accepted() {
        let ingredient = Ingredient::new("Pepper", None);
        let json = serde_json::to_string(&ingredient).unwrap();
        assert_eq!(json, r#"{"ingredientName":"Pepper"}"#);

        let with_null: Ingredient =
            serde_json::from_str(r#"{"ingredientName":"Pepper","measure":null}"#).unwrap();
        assert_eq!(with_null.measure, None);
    }

    #[test]
    fn test_missing_required_field_fails_to_decode() {
        let result = serde_json::from_str::<Recipe>(r#"{"idFood":1,"recipeName":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_draft_round_trip_through_edit_form() {
        let recipe = stew();
        let draft = RecipeDraft::from_recipe(&recipe);
        assert_eq!(draft.ingredients, "Beef: 1kg\nSalt: 1tsp");
        assert_eq!(draft.to_recipe(100), recipe);
    }
}
