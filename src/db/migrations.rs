// src/db/migrations.rs
//
// Schema setup for the record table.
// There is one schema version; a database stamped with any other is refused.

use rusqlite::{Connection, OptionalExtension};

use crate::error::{AppError, AppResult};

const SCHEMA_VERSION: i32 = 1;

/// Create the tables on a fresh database. Idempotent.
pub fn initialize_database(conn: &Connection) -> AppResult<()> {
    match stored_version(conn)? {
        None => {
            conn.execute_batch(include_str!("../../schema.sql"))
                .map_err(|e| AppError::Other(format!("Failed to apply schema: {}", e)))?;
            stamp_version(conn, SCHEMA_VERSION)?;
            log::info!("Initialized recipe database, schema version {}", SCHEMA_VERSION);
            Ok(())
        }
        Some(SCHEMA_VERSION) => Ok(()),
        Some(found) => Err(AppError::Other(format!(
            "Database schema version {} is not supported (expected {})",
            found, SCHEMA_VERSION
        ))),
    }
}

/// None when the database has never been initialized
fn stored_version(conn: &Connection) -> AppResult<Option<i32>> {
    let has_table = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_version'",
            [],
            |_| Ok(()),
        )
        .optional()?
        .is_some();

    if !has_table {
        return Ok(None);
    }

    let version: Option<i32> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(version)
}

fn stamp_version(conn: &Connection, version: i32) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [version],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::create_test_connection;

    #[test]
    fn test_initialize_fresh_database() {
        let conn = create_test_connection().unwrap();
        assert_eq!(stored_version(&conn).unwrap(), None);

        initialize_database(&conn).unwrap();

        assert_eq!(stored_version(&conn).unwrap(), Some(SCHEMA_VERSION));
        conn.execute("INSERT INTO records (key, value) VALUES ('lastIdFood', '100')", [])
            .unwrap();
    }

    #[test]
    fn test_initialize_idempotent() {
        let conn = create_test_connection().unwrap();

        initialize_database(&conn).unwrap();
        conn.execute("INSERT INTO records (key, value) VALUES ('recipe_100', '{}')", [])
            .unwrap();
        initialize_database(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_other_schema_version_is_refused() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();
        stamp_version(&conn, 2).unwrap();

        let err = initialize_database(&conn).unwrap_err();
        assert!(err.to_string().contains("not supported"));
    }
}
