// src/db/mod.rs
//
// Database module
//
// Provides:
// - Storage configuration
// - Connection pooling
// - Schema initialization

pub mod connection;
pub mod migrations;

pub use connection::{
    create_connection_pool, get_connection, get_database_path, ConnectionPool, DatabaseConfig,
    PooledConn,
};

pub use migrations::initialize_database;
