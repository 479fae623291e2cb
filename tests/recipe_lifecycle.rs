// tests/recipe_lifecycle.rs
//
// End-to-end recipe lifecycle over the public API, against both stores.

use std::sync::Arc;

use recipebox::{
    FavoritesRegistry, Ingredient, MemoryRecordStore, RecipeDraft, RecipeRepository, RecordStore,
    SqliteRecordStore, LAST_ID_KEY,
};

fn stew() -> RecipeDraft {
    RecipeDraft {
        recipe_name: "Stew".to_string(),
        recipe_image: "http://x/y.png".to_string(),
        ingredients: "Beef: 1kg\nSalt: 1tsp".to_string(),
        recipe_instructions: "Cook.".to_string(),
    }
}

fn sqlite_store(dir: &tempfile::TempDir) -> Arc<dyn RecordStore> {
    let config = recipebox::DatabaseConfig::with_path(dir.path().join("recipes.db"));
    let pool = recipebox::create_connection_pool(&config).unwrap();
    recipebox::initialize_database(&pool.get().unwrap()).unwrap();
    Arc::new(SqliteRecordStore::new(Arc::new(pool)))
}

fn run_scenarios(store: Arc<dyn RecordStore>) {
    let repo = RecipeRepository::new(store.clone());

    // First create on an empty store
    let first = repo.create(&stew()).unwrap();
    assert_eq!(first.id_food, 100);
    assert_eq!(
        first.ingredients,
        vec![
            Ingredient::new("Beef", Some("1kg".to_string())),
            Ingredient::new("Salt", Some("1tsp".to_string())),
        ]
    );
    assert!(store.get("recipe_100").unwrap().is_some());
    assert_eq!(store.get(LAST_ID_KEY).unwrap().as_deref(), Some("100"));

    // Stored JSON matches the documented shape
    let raw: serde_json::Value =
        serde_json::from_str(&store.get("recipe_100").unwrap().unwrap()).unwrap();
    assert_eq!(raw["idFood"], 100);
    assert_eq!(raw["ingredients"][1]["ingredientName"], "Salt");
    assert_eq!(raw["ingredients"][1]["measure"], "1tsp");

    // Second create
    assert_eq!(repo.create(&stew()).unwrap().id_food, 101);

    // Empty ingredients leave the counter alone
    let mut empty = stew();
    empty.ingredients = String::new();
    assert!(repo.create(&empty).unwrap_err().is_validation());
    assert_eq!(store.get(LAST_ID_KEY).unwrap().as_deref(), Some("101"));

    // Round trip
    assert_eq!(repo.get_by_id(100).unwrap(), Some(stew().to_recipe(100)));

    // Delete then get
    repo.delete(101).unwrap();
    assert_eq!(repo.get_by_id(101).unwrap(), None);
    repo.delete(101).unwrap();

    // Ids keep climbing after delete
    assert_eq!(repo.create(&stew()).unwrap().id_food, 102);

    let ids: Vec<u64> = repo.list().unwrap().iter().map(|r| r.id_food).collect();
    assert_eq!(ids, vec![100, 102]);
}

#[test]
fn memory_store_lifecycle() {
    run_scenarios(Arc::new(MemoryRecordStore::new()));
}

#[test]
fn sqlite_store_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    run_scenarios(sqlite_store(&dir));
}

#[test]
fn favorites_toggle_scenario() {
    let registry = FavoritesRegistry::new();
    let recipe = stew().to_recipe(100);

    assert!(registry.toggle(&recipe));
    assert_eq!(registry.list(), vec![recipe.clone()]);

    assert!(!registry.toggle(&recipe));
    assert!(registry.list().is_empty());
}

#[test]
fn app_state_commands_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = recipebox::DatabaseConfig::with_path(dir.path().join("app.db"));
    config.persist_favorites = true;

    {
        let state = recipebox::AppState::initialize(&config).unwrap();
        let form = recipebox::commands::open_recipe_form(&state, None).unwrap();
        assert_eq!(form.recipe_id, 100);

        let saved = recipebox::commands::save_recipe(
            &state,
            recipebox::dto::SaveRecipeDto {
                recipe_id: None,
                recipe_name: "Stew".to_string(),
                recipe_image: "http://x/y.png".to_string(),
                ingredients: "Beef: 1kg".to_string(),
                recipe_instructions: "Cook.\rServe.".to_string(),
            },
        )
        .unwrap();
        assert_eq!(saved.instruction_steps, vec!["Cook.", "Serve."]);

        assert!(recipebox::commands::toggle_favorite(&state, saved.id_food).unwrap());
    }

    let state = recipebox::AppState::initialize(&config).unwrap();
    let favorites = recipebox::commands::list_favorites(&state);
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id_food, 100);
}
