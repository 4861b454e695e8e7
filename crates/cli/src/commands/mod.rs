//! CLI command implementations.

pub mod migrate;
pub mod openapi;
pub mod seed;

use sqlx::PgPool;
use thiserror::Error;

use order_desk_api::config::{ApiConfig, ConfigError, StorageConfig};
use order_desk_api::db::{self, StoreError};

/// Errors shared by the database-backed commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("ORDERS_STORAGE is set to memory; this command needs PostgreSQL")]
    NotPostgres,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Connect to the database configured for the API server.
async fn connect() -> Result<PgPool, CommandError> {
    let config = ApiConfig::from_env()?;
    let StorageConfig::Postgres { database_url } = &config.storage else {
        return Err(CommandError::NotPostgres);
    };

    tracing::info!("Connecting to database...");
    Ok(db::create_pool(database_url).await?)
}
