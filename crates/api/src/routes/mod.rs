//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                 - Liveness check
//! GET    /health/ready           - Readiness check (pings the store)
//! GET    /api-docs/              - Swagger UI
//! GET    /api-docs/openapi.json  - Generated API document
//!
//! # Customers
//! POST   /customer               - Create customer
//! GET    /customer               - List customers
//! PATCH  /customer/{id}          - Partial update
//! DELETE /customer/{id}          - Delete customer
//!
//! # Orders
//! POST   /orders                 - Create order
//! GET    /orders                 - List orders
//! PATCH  /orders/{id}/cancel     - Force status to cancelled
//! POST   /orders/{id}/payment    - Delayed status change to paid
//! DELETE /orders/{id}            - Delete order
//! ```

pub mod customers;
pub mod docs;
pub mod health;
pub mod orders;

#[cfg(test)]
pub(crate) mod test_support;

use axum::Router;
use utoipa::openapi::OpenApi;

use crate::state::AppState;

/// Build the complete router, without middleware.
pub fn routes(api_doc: OpenApi) -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(docs::router(api_doc))
        .merge(customers::router())
        .merge(orders::router())
}
