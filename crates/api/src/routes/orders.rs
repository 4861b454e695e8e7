//! Order resource handlers.
//!
//! ```text
//! POST   /orders                - Create an order
//! GET    /orders                - List all orders
//! PATCH  /orders/{id}/cancel    - Cancel an order
//! POST   /orders/{id}/payment   - Submit payment (settles after a delay)
//! DELETE /orders/{id}           - Delete an order
//! ```
//!
//! Status changes are unconditional: cancel and payment overwrite whatever
//! status the order currently has.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
};
use chrono::Utc;

use order_desk_core::{OrderId, OrderStatus};

use crate::error::{AppError, Result};
use crate::extract::ApiJson;
use crate::models::{CreateOrder, MessageResponse, Order, PaymentReceipt};
use crate::state::AppState;

/// Confirmation returned by `DELETE /orders/{id}`.
pub const ORDER_DELETED: &str = "Order deleted";

/// Build the order router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/{id}", delete(delete_order))
        .route("/orders/{id}/cancel", patch(cancel_order))
        .route("/orders/{id}/payment", post(submit_payment))
}

/// Create a new order.
///
/// `status` starts as `pending` and `createdAt` is the time of the request.
/// `customerId` is stored as given.
///
/// # Errors
///
/// Returns 400 if `customerId`, `items` or `total` is missing.
#[utoipa::path(
    post,
    path = "/orders",
    tag = "Orders",
    request_body = CreateOrder,
    responses(
        (status = 201, description = "Order created successfully", body = Order),
        (status = 400, description = "Bad request", body = MessageResponse),
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateOrder>,
) -> Result<(StatusCode, Json<Order>)> {
    let new = payload.validate(Utc::now())?;
    let order = state
        .store()
        .insert_order(new)
        .await
        .map_err(AppError::rejected)?;

    tracing::info!(order_id = %order.id, customer_id = %order.customer_id, "Order created");
    Ok((StatusCode::CREATED, Json(order)))
}

/// Retrieve all orders.
///
/// # Errors
///
/// Returns 500 if the store cannot be read.
#[utoipa::path(
    get,
    path = "/orders",
    tag = "Orders",
    responses(
        (status = 200, description = "List of orders", body = [Order]),
        (status = 500, description = "Server error", body = MessageResponse),
    )
)]
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    Ok(Json(state.store().list_orders().await?))
}

/// Cancel an order, whatever its current status.
///
/// Responds with `null` when no order has the given ID.
///
/// # Errors
///
/// Returns 400 for a malformed ID or a store failure.
#[utoipa::path(
    patch,
    path = "/orders/{id}/cancel",
    tag = "Orders",
    params(("id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order status updated to 'cancelled' (null if not found)", body = Option<Order>),
        (status = 400, description = "Invalid request", body = MessageResponse),
    )
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Order>>> {
    let id = OrderId::parse(&id)?;
    let order = state
        .store()
        .set_order_status(id, OrderStatus::Cancelled)
        .await
        .map_err(AppError::rejected)?;

    tracing::info!(order_id = %id, found = order.is_some(), "Order cancelled");
    Ok(Json(order))
}

/// Submit payment for an order.
///
/// The ID is checked first; then settlement is simulated by waiting for the
/// configured delay before marking the order paid. The wait belongs to the
/// request: if the client goes away, the handler future is dropped and the
/// order is left untouched.
///
/// # Errors
///
/// Returns 400 for a malformed ID or a store failure, and 504 when the
/// status write does not finish within the settlement timeout.
#[utoipa::path(
    post,
    path = "/orders/{id}/payment",
    tag = "Orders",
    params(("id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Payment submitted successfully", body = PaymentReceipt),
        (status = 400, description = "Invalid request", body = MessageResponse),
        (status = 504, description = "Settlement timed out", body = MessageResponse),
    )
)]
pub async fn submit_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PaymentReceipt>> {
    let id = OrderId::parse(&id)?;
    let payment = state.config().payment;

    tracing::info!(
        order_id = %id,
        delay_ms = u64::try_from(payment.delay.as_millis()).unwrap_or(u64::MAX),
        "Payment submitted, awaiting settlement"
    );
    tokio::time::sleep(payment.delay).await;

    let order = tokio::time::timeout(
        payment.timeout,
        state.store().set_order_status(id, OrderStatus::Paid),
    )
    .await
    .map_err(|_| AppError::SettlementTimeout(payment.timeout.as_millis()))?
    .map_err(AppError::rejected)?;

    tracing::info!(order_id = %id, found = order.is_some(), "Payment settled");
    Ok(Json(PaymentReceipt::new(order)))
}

/// Delete an order, whatever its status.
///
/// Confirms even when nothing was deleted.
///
/// # Errors
///
/// Returns 400 for a malformed ID or a store failure.
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    tag = "Orders",
    params(("id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted successfully", body = MessageResponse),
        (status = 400, description = "Invalid request", body = MessageResponse),
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = OrderId::parse(&id)?;
    let removed = state
        .store()
        .delete_order(id)
        .await
        .map_err(AppError::rejected)?;

    tracing::info!(order_id = %id, removed, "Order deleted");
    Ok(Json(MessageResponse::new(ORDER_DELETED)))
}
