//! Application state shared across handlers.

use std::sync::Arc;

use utoipa::openapi::OpenApi;

use crate::config::ApiConfig;
use crate::db::{DocumentStore, SharedStore};
use crate::openapi;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the document store, configuration and the generated API document.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    store: SharedStore,
    api_doc: OpenApi,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - API configuration
    /// * `store` - Opened document store
    #[must_use]
    pub fn new(config: ApiConfig, store: SharedStore) -> Self {
        let api_doc = openapi::api_doc(&config.public_url);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                api_doc,
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the document store.
    #[must_use]
    pub fn store(&self) -> &dyn DocumentStore {
        self.inner.store.as_ref()
    }

    /// Get the generated API document.
    #[must_use]
    pub fn api_doc(&self) -> &OpenApi {
        &self.inner.api_doc
    }
}
