//! Helpers for driving the router in unit tests.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::config::{ApiConfig, PaymentConfig};
use crate::db::{MemoryStore, SharedStore};
use crate::state::AppState;

/// Payment timing short enough to keep tests fast.
pub const TEST_PAYMENT: PaymentConfig = PaymentConfig {
    delay: Duration::from_millis(50),
    timeout: Duration::from_secs(5),
};

/// A router over a fresh in-memory store, plus the store itself.
pub fn test_app() -> (Router, SharedStore) {
    let store: SharedStore = Arc::new(MemoryStore::new());
    let state = AppState::new(ApiConfig::in_memory(TEST_PAYMENT), Arc::clone(&store));
    (crate::app(state), store)
}

/// Send one request and decode the JSON response (`Value::Null` for non-JSON).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Send a raw body with the JSON content type.
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
