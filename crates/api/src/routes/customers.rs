//! Customer resource handlers.
//!
//! ```text
//! POST   /customer        - Create a customer
//! GET    /customer        - List all customers
//! PATCH  /customer/{id}   - Update some fields of a customer
//! DELETE /customer/{id}   - Delete a customer
//! ```

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
};

use order_desk_core::CustomerId;

use crate::error::{AppError, Result};
use crate::extract::ApiJson;
use crate::models::{CreateCustomer, Customer, CustomerChanges, MessageResponse};
use crate::state::AppState;

/// Confirmation returned by `DELETE /customer/{id}`.
pub const CUSTOMER_DELETED: &str = "Customer deleted";

/// Build the customer router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customer", get(list_customers).post(create_customer))
        .route(
            "/customer/{id}",
            patch(update_customer).delete(delete_customer),
        )
}

/// Create a new customer.
///
/// # Errors
///
/// Returns 400 if `name` or `email` is missing, or the email is taken.
#[utoipa::path(
    post,
    path = "/customer",
    tag = "Customers",
    request_body = CreateCustomer,
    responses(
        (status = 201, description = "Customer created successfully", body = Customer),
        (status = 400, description = "Bad request", body = MessageResponse),
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCustomer>,
) -> Result<(StatusCode, Json<Customer>)> {
    let new = payload.validate()?;
    let customer = state
        .store()
        .insert_customer(new)
        .await
        .map_err(AppError::rejected)?;

    tracing::info!(customer_id = %customer.id, "Customer created");
    Ok((StatusCode::CREATED, Json(customer)))
}

/// Retrieve all customers.
///
/// # Errors
///
/// Returns 500 if the store cannot be read.
#[utoipa::path(
    get,
    path = "/customer",
    tag = "Customers",
    responses(
        (status = 200, description = "List of all customers", body = [Customer]),
        (status = 500, description = "Server error", body = MessageResponse),
    )
)]
pub async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<Customer>>> {
    Ok(Json(state.store().list_customers().await?))
}

/// Update a customer's details.
///
/// Responds with `null` when no customer has the given ID.
///
/// # Errors
///
/// Returns 400 for a malformed ID, a malformed body, or a taken email.
#[utoipa::path(
    patch,
    path = "/customer/{id}",
    tag = "Customers",
    params(("id" = String, Path, description = "Customer ID")),
    request_body = CustomerChanges,
    responses(
        (status = 200, description = "Customer updated successfully (null if not found)", body = Option<Customer>),
        (status = 400, description = "Invalid request", body = MessageResponse),
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(changes): ApiJson<CustomerChanges>,
) -> Result<Json<Option<Customer>>> {
    let id = CustomerId::parse(&id)?;
    let customer = state
        .store()
        .update_customer(id, changes)
        .await
        .map_err(AppError::rejected)?;

    tracing::info!(customer_id = %id, found = customer.is_some(), "Customer updated");
    Ok(Json(customer))
}

/// Delete a customer.
///
/// Confirms even when nothing was deleted. Orders of the customer are kept.
///
/// # Errors
///
/// Returns 400 for a malformed ID or a store failure.
#[utoipa::path(
    delete,
    path = "/customer/{id}",
    tag = "Customers",
    params(("id" = String, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer deleted successfully", body = MessageResponse),
        (status = 400, description = "Invalid request", body = MessageResponse),
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = CustomerId::parse(&id)?;
    let removed = state
        .store()
        .delete_customer(id)
        .await
        .map_err(AppError::rejected)?;

    tracing::info!(customer_id = %id, removed, "Customer deleted");
    Ok(Json(MessageResponse::new(CUSTOMER_DELETED)))
}
