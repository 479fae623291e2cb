// src/repositories/recipe_repository.rs
//
// Recipe persistence over a RecordStore
//
// KEY SCHEME:
// - recipe_<idFood>  JSON-encoded Recipe, one per recipe
// - lastIdFood       last allocated id, decimal text
//
// RULES:
// - This is the only reader/writer of recipe keys
// - Validation runs before any write
// - Ids are never reused, even after delete

use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, info, warn};

use crate::domain::recipe::{validate_draft, validate_recipe, Recipe, RecipeDraft, RecipeId};
use crate::error::{AppError, AppResult};
use crate::repositories::record_store::RecordStore;

pub const RECIPE_KEY_PREFIX: &str = "recipe_";
pub const LAST_ID_KEY: &str = "lastIdFood";
pub const FIRST_RECIPE_ID: RecipeId = 100;

/// Storage key for a recipe id. Computable without touching the store.
pub fn recipe_key(id_food: RecipeId) -> String {
    format!("{}{}", RECIPE_KEY_PREFIX, id_food)
}

pub struct RecipeRepository {
    store: Arc<dyn RecordStore>,
    /// Serializes allocate -> write on create
    create_lock: Mutex<()>,
}

impl RecipeRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            create_lock: Mutex::new(()),
        }
    }

    /// Next id a create would receive. Nothing is persisted here, so an
    /// abandoned form does not consume an id.
    pub fn allocate_id(&self) -> AppResult<RecipeId> {
        match self.read_last_id()? {
            None => Ok(FIRST_RECIPE_ID),
            Some(last) => last
                .checked_add(1)
                .ok_or_else(|| AppError::Other("Recipe id space exhausted".to_string())),
        }
    }

    /// Validate, assign an id and persist the record together with the counter.
    pub fn create(&self, draft: &RecipeDraft) -> AppResult<Recipe> {
        validate_draft(draft)?;

        let _guard = self.create_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut id_food = self.allocate_id()?;
        while self.store.get(&recipe_key(id_food))?.is_some() {
            warn!(
                "Key {} already occupied; {} is behind the stored records, skipping",
                recipe_key(id_food),
                LAST_ID_KEY
            );
            id_food = id_food
                .checked_add(1)
                .ok_or_else(|| AppError::Other("Recipe id space exhausted".to_string()))?;
        }

        let recipe = draft.to_recipe(id_food);
        validate_recipe(&recipe)?;

        let json = serde_json::to_string(&recipe)?;
        self.store.set_many(&[
            (recipe_key(id_food), json),
            (LAST_ID_KEY.to_string(), id_food.to_string()),
        ])?;

        info!("Created recipe {} '{}'", id_food, recipe.recipe_name);
        Ok(recipe)
    }

    /// Overwrite the record at the recipe's existing id.
    /// No existence precondition, and the counter is left alone.
    pub fn update(&self, recipe: &Recipe) -> AppResult<()> {
        validate_recipe(recipe)?;

        let json = serde_json::to_string(recipe)?;
        self.store.set(&recipe_key(recipe.id_food), &json)?;

        debug!("Updated recipe {}", recipe.id_food);
        Ok(())
    }

    /// Idempotent: deleting a missing recipe succeeds
    pub fn delete(&self, id_food: RecipeId) -> AppResult<()> {
        self.store.remove(&recipe_key(id_food))?;
        debug!("Deleted recipe {}", id_food);
        Ok(())
    }

    pub fn get_by_id(&self, id_food: RecipeId) -> AppResult<Option<Recipe>> {
        let key = recipe_key(id_food);
        match self.store.get(&key)? {
            Some(raw) => Self::decode_at(&key, id_food, &raw).map(Some),
            None => Ok(None),
        }
    }

    /// All stored recipes ordered by id. One undecodable record, or one whose
    /// key and idFood disagree, fails the call.
    pub fn list(&self) -> AppResult<Vec<Recipe>> {
        let keys: Vec<String> = self
            .store
            .list_keys_with_prefix(RECIPE_KEY_PREFIX)?
            .into_iter()
            .collect();

        let values = self.store.get_many(&keys)?;

        let mut recipes = values
            .iter()
            .map(|(key, raw)| Self::decode_at(key, Self::id_from_key(key)?, raw))
            .collect::<AppResult<Vec<_>>>()?;

        recipes.sort_by_key(|recipe| recipe.id_food);
        Ok(recipes)
    }

    fn read_last_id(&self) -> AppResult<Option<RecipeId>> {
        self.store
            .get(LAST_ID_KEY)?
            .map(|raw| {
                raw.trim()
                    .parse::<RecipeId>()
                    .map_err(|e| AppError::corrupt_record(LAST_ID_KEY, e))
            })
            .transpose()
    }

    fn id_from_key(key: &str) -> AppResult<RecipeId> {
        let suffix = key.strip_prefix(RECIPE_KEY_PREFIX).unwrap_or(key);
        // parse() alone would accept "+7"
        if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::corrupt_record(key, "key suffix is not a recipe id"));
        }
        suffix
            .parse::<RecipeId>()
            .map_err(|e| AppError::corrupt_record(key, e))
    }

    /// Decode the record stored at `key` and check it carries `expected_id`
    fn decode_at(key: &str, expected_id: RecipeId, raw: &str) -> AppResult<Recipe> {
        let recipe: Recipe =
            serde_json::from_str(raw).map_err(|e| AppError::corrupt_record(key, e))?;

        if recipe.id_food != expected_id {
            return Err(AppError::corrupt_record(
                key,
                format!("record carries idFood {}", recipe.id_food),
            ));
        }
        Ok(recipe)
    }
}
