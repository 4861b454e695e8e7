//! Document storage for customers and orders.
//!
//! Handlers talk to storage through the object-safe [`DocumentStore`] trait.
//! Two implementations exist:
//!
//! - [`PgStore`] - `PostgreSQL` via sqlx (`customers` and `orders` tables)
//! - [`MemoryStore`] - process-local, used by tests and `ORDERS_STORAGE=memory`
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p order-desk-cli -- migrate
//! ```

pub mod customers;
pub mod memory;
pub mod orders;
pub mod postgres;

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use order_desk_core::{CustomerId, OrderId, OrderStatus};

use crate::config::StorageConfig;
use crate::models::{Customer, CustomerChanges, NewCustomer, NewOrder, Order};

pub use customers::CustomerRepository;
pub use memory::MemoryStore;
pub use orders::OrderRepository;
pub use postgres::PgStore;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique email).
    #[error("{0}")]
    Conflict(String),

    /// The store has been closed.
    #[error("document store is closed")]
    Closed,
}

impl StoreError {
    /// Conflict error for an email that is already taken.
    #[must_use]
    pub fn duplicate_email(email: &str) -> Self {
        Self::Conflict(format!(
            "duplicate key error: email \"{email}\" already exists"
        ))
    }
}

/// Shared handle to the configured document store.
pub type SharedStore = Arc<dyn DocumentStore>;

/// Storage operations used by the resource handlers.
///
/// Every handler issues exactly one of these per request. Missing IDs are
/// reported as `None`/`false`, never as errors.
pub trait DocumentStore: Send + Sync {
    /// Insert a customer; email must be unique.
    fn insert_customer(&self, customer: NewCustomer) -> BoxFuture<'_, Result<Customer, StoreError>>;

    /// All customers in insertion order.
    fn list_customers(&self) -> BoxFuture<'_, Result<Vec<Customer>, StoreError>>;

    /// Apply present fields; `None` when no customer has `id`.
    fn update_customer(
        &self,
        id: CustomerId,
        changes: CustomerChanges,
    ) -> BoxFuture<'_, Result<Option<Customer>, StoreError>>;

    /// Remove a customer; `false` when nothing was removed.
    fn delete_customer(&self, id: CustomerId) -> BoxFuture<'_, Result<bool, StoreError>>;

    /// Insert an order.
    fn insert_order(&self, order: NewOrder) -> BoxFuture<'_, Result<Order, StoreError>>;

    /// All orders in insertion order.
    fn list_orders(&self) -> BoxFuture<'_, Result<Vec<Order>, StoreError>>;

    /// Overwrite an order's status; `None` when no order has `id`.
    fn set_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> BoxFuture<'_, Result<Option<Order>, StoreError>>;

    /// Remove an order; `false` when nothing was removed.
    fn delete_order(&self, id: OrderId) -> BoxFuture<'_, Result<bool, StoreError>>;

    /// Check that the store is reachable.
    fn ping(&self) -> BoxFuture<'_, Result<(), StoreError>>;

    /// Release connections. Further operations fail with [`StoreError::Closed`]
    /// or the backend's equivalent.
    fn close(&self) -> BoxFuture<'_, ()>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Open the store selected by configuration.
///
/// # Errors
///
/// Returns `StoreError::Database` if the `PostgreSQL` pool cannot be created.
pub async fn connect(storage: &StorageConfig) -> Result<SharedStore, StoreError> {
    match storage {
        StorageConfig::Postgres { database_url } => {
            let pool = create_pool(database_url).await?;
            tracing::info!("Database pool created");
            Ok(Arc::new(PgStore::new(pool)))
        }
        StorageConfig::Memory => {
            tracing::warn!("Using in-memory document store; data is lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
