// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation
// - Thread-safe access

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

const DEFAULT_MAX_CONNECTIONS: u32 = 4;
const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5000;

/// Storage configuration
///
/// Defaults can be overridden from the environment with `from_env`:
/// - `RECIPEBOX_DB_PATH`
/// - `RECIPEBOX_MAX_CONNECTIONS`
/// - `RECIPEBOX_PERSIST_FAVORITES` (`1`, `true`, `yes`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub max_connections: u32,
    pub busy_timeout_ms: u32,
    /// Snapshot the favorites list into the record store on every toggle
    pub persist_favorites: bool,
}

impl DatabaseConfig {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            persist_favorites: false,
        }
    }

    /// Resolve the default path and apply environment overrides
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = match lookup("RECIPEBOX_DB_PATH") {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => get_database_path()?,
        };

        let mut config = Self::with_path(path);

        if let Some(raw) = lookup("RECIPEBOX_MAX_CONNECTIONS") {
            match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => config.max_connections = n,
                _ => log::warn!(
                    "Ignoring invalid RECIPEBOX_MAX_CONNECTIONS '{}', using {}",
                    raw,
                    config.max_connections
                ),
            }
        }

        if let Some(raw) = lookup("RECIPEBOX_PERSIST_FAVORITES") {
            config.persist_favorites =
                matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }

        Ok(config)
    }
}

/// Get the default database file path
///
/// Database is stored in the application data directory.
/// Path structure: {APP_DATA}/recipebox/recipebox.db
pub fn get_database_path() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

    Ok(app_data_dir.join("recipebox").join("recipebox.db"))
}

/// Create a connection pool
///
/// - SQLite in WAL mode
/// - Busy timeout set to avoid immediate errors
/// - Parent directory created if missing
pub fn create_connection_pool(config: &DatabaseConfig) -> AppResult<ConnectionPool> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let busy_timeout_ms = config.busy_timeout_ms;
    let manager = SqliteConnectionManager::file(&config.path).with_init(move |conn| {
        conn.execute_batch(&format!(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = {};",
            busy_timeout_ms
        ))?;
        Ok(())
    });

    let pool = Pool::builder()
        .max_size(config.max_connections)
        .build(manager)
        .map_err(|e| AppError::Pool(format!("Failed to create connection pool: {}", e)))?;

    log::info!("Opened recipe database at {}", config.path.display());
    Ok(pool)
}

/// Get a connection from the pool
///
/// This is a convenience wrapper that provides better error messages.
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("Failed to get database connection: {}", e)))
}

/// Create a standalone in-memory connection (for testing)
pub fn create_test_connection() -> AppResult<Connection> {
    let conn = Connection::open_in_memory().map_err(AppError::Database)?;
    Ok(conn)
}
