use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use rusqlite::{params, params_from_iter, OptionalExtension};

use crate::db::ConnectionPool;
use crate::error::AppResult;
use crate::repositories::record_store::RecordStore;

/// Keeps batch reads under SQLite's bound-parameter limit
const GET_MANY_CHUNK: usize = 500;

pub struct SqliteRecordStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteRecordStore {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl RecordStore for SqliteRecordStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let conn = self.pool.get()?;
        let value = conn
            .query_row(
                "SELECT value FROM records WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT OR REPLACE INTO records (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    fn set_many(&self, entries: &[(String, String)]) -> AppResult<()> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;
        {
            let mut stmt =
                tx.prepare_cached("INSERT OR REPLACE INTO records (key, value) VALUES (?1, ?2)")?;
            for (key, value) in entries {
                stmt.execute(params![key, value])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute("DELETE FROM records WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn list_keys_with_prefix(&self, prefix: &str) -> AppResult<HashSet<String>> {
        let conn = self.pool.get()?;
        // substr() rather than LIKE: '_' is a LIKE wildcard and appears in our keys
        let mut stmt = conn.prepare(
            "SELECT key FROM records WHERE substr(key, 1, length(?1)) = ?1",
        )?;

        let keys = stmt
            .query_map(params![prefix], |row| row.get::<_, String>(0))?
            .collect::<Result<HashSet<_>, _>>()?;

        Ok(keys)
    }

    fn get_many(&self, keys: &[String]) -> AppResult<HashMap<String, String>> {
        let conn = self.pool.get()?;
        let mut values = HashMap::with_capacity(keys.len());

        for chunk in keys.chunks(GET_MANY_CHUNK) {
            let placeholders = vec!["?"; chunk.len()].join(", ");
            let sql = format!(
                "SELECT key, value FROM records WHERE key IN ({})",
                placeholders
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params_from_iter(chunk.iter()), |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?;

            for row in rows {
                let (key, value) = row?;
                values.insert(key, value);
            }
        }

        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool, get_connection, initialize_database, DatabaseConfig};

    fn store_in(dir: &tempfile::TempDir) -> SqliteRecordStore {
        let config = DatabaseConfig::with_path(dir.path().join("records.db"));
        let pool = create_connection_pool(&config).unwrap();
        initialize_database(&get_connection(&pool).unwrap()).unwrap();
        SqliteRecordStore::new(Arc::new(pool))
    }

    #[test]
    fn test_get_set_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.get("recipe_100").unwrap(), None);

        store.set("recipe_100", "{\"a\":1}").unwrap();
        store.set("recipe_100", "{\"a\":2}").unwrap();
        assert_eq!(store.get("recipe_100").unwrap().as_deref(), Some("{\"a\":2}"));

        store.remove("recipe_100").unwrap();
        store.remove("recipe_100").unwrap();
        assert_eq!(store.get("recipe_100").unwrap(), None);
    }

    #[test]
    fn test_prefix_is_literal_not_a_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set("recipe_1", "a").unwrap();
        store.set("recipeX1", "b").unwrap();
        store.set("lastIdFood", "1").unwrap();

        let keys = store.list_keys_with_prefix("recipe_").unwrap();
        assert_eq!(keys, HashSet::from(["recipe_1".to_string()]));
    }

    #[test]
    fn test_get_many_spans_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let entries: Vec<(String, String)> = (0..(GET_MANY_CHUNK + 20))
            .map(|i| (format!("recipe_{}", i), i.to_string()))
            .collect();
        store.set_many(&entries).unwrap();

        let mut keys: Vec<String> = entries.iter().map(|(k, _)| k.clone()).collect();
        keys.push("recipe_missing".to_string());

        let values = store.get_many(&keys).unwrap();
        assert_eq!(values.len(), entries.len());
        assert_eq!(values["recipe_7"], "7");
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).set("lastIdFood", "104").unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.get("lastIdFood").unwrap().as_deref(), Some("104"));
    }
}
