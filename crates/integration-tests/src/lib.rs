//! Integration tests for Order Desk.
//!
//! # Running Tests
//!
//! ```bash
//! # In-memory tests (no services needed)
//! cargo test -p order-desk-integration-tests
//!
//! # Include PostgreSQL-backed tests
//! ORDERS_DATABASE_URL=postgres://localhost/order_desk_test \
//!     cargo test -p order-desk-integration-tests -- --include-ignored
//! ```
//!
//! Each test boots its own server on an ephemeral port and talks to it over
//! HTTP with `reqwest`.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use order_desk_api::config::{ApiConfig, PaymentConfig, StorageConfig};
use order_desk_api::db::{self, MemoryStore, PgStore, SharedStore};
use order_desk_api::state::AppState;

/// Payment timing short enough to keep the suite fast.
pub const FAST_PAYMENT: PaymentConfig = PaymentConfig {
    delay: Duration::from_millis(200),
    timeout: Duration::from_secs(5),
};

/// A running API server bound to `127.0.0.1` on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: SharedStore,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Serve the API over a fresh in-memory store.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound.
    pub async fn memory(payment: PaymentConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let store: SharedStore = Arc::new(MemoryStore::new());
        Self::start(ApiConfig::in_memory(payment), store).await
    }

    /// Serve the API over the database named by `ORDERS_DATABASE_URL`
    /// (or `DATABASE_URL`), applying migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is missing, the database is
    /// unreachable, or migrations fail.
    pub async fn postgres(payment: PaymentConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = ApiConfig::from_env()?;
        let StorageConfig::Postgres { database_url } = &config.storage else {
            return Err("ORDERS_STORAGE must be postgres for these tests".into());
        };

        let pool = db::create_pool(database_url).await?;
        sqlx::migrate!("../api/migrations").run(&pool).await?;

        config.payment = payment;
        let store: SharedStore = Arc::new(PgStore::new(pool));
        Self::start(config, store).await
    }

    async fn start(config: ApiConfig, store: SharedStore) -> Result<Self, Box<dyn std::error::Error>> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let app = order_desk_api::app(AppState::new(config, Arc::clone(&store)));
        let handle = tokio::spawn(async move {
            // Aborted on drop; a serve error just ends the task
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            addr,
            client: Client::new(),
            store,
            handle,
        })
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// An email address no other test run will use.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}+{}@example.com", uuid::Uuid::new_v4().simple())
}
