//! # finapi Database Crate
//!
//! Storage layer for the finapi backend: connection preparation,
//! embedded migrations, and the user repository.

use sqlx::SqlitePool;

use finapi_config::DatabaseConfig;

pub mod connection;
pub mod entities;
pub mod migrations;
pub mod repos;
pub mod types;

pub use connection::prepare_database;
pub use migrations::run_migrations;

pub use entities::{NewUser, User};
pub use repos::UserRepository;
pub use types::{StoreError, StoreResult};

/// Prepare a connection pool and bring the schema up to date.
pub async fn initialize_database(config: &DatabaseConfig) -> StoreResult<SqlitePool> {
    let pool = prepare_database(config)
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    run_migrations(&pool)
        .await
        .map_err(|e| StoreError::Migration(e.to_string()))?;

    Ok(pool)
}
