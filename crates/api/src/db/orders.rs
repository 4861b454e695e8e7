//! Order repository for database operations.
//!
//! Line items are stored as a JSONB array on the order row.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;

use order_desk_core::{OrderId, OrderStatus};

use super::StoreError;
use crate::models::{NewOrder, Order, OrderItem};

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: OrderId,
    customer_id: String,
    items: Json<Vec<OrderItem>>,
    total: f64,
    status: OrderStatus,
    created_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: row.id,
            customer_id: row.customer_id,
            items: row.items.0,
            total: row.total,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the insert fails.
    pub async fn create(&self, order: &NewOrder) -> Result<Order, StoreError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r"
            INSERT INTO orders (customer_id, items, total, status, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, customer_id, items, total, status, created_at
            ",
        )
        .bind(&order.customer_id)
        .bind(Json(&order.items))
        .bind(order.total)
        .bind(order.status)
        .bind(order.created_at)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// List every order, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Order>, StoreError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, customer_id, items, total, status, created_at
            FROM orders
            ORDER BY created_at, id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    /// Overwrite the status of an order, whatever it currently is.
    ///
    /// Returns `None` if no order has the given ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails.
    pub async fn set_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, StoreError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r"
            UPDATE orders
            SET status = $2
            WHERE id = $1
            RETURNING id, customer_id, items, total, status, created_at
            ",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Order::from))
    }

    /// Delete an order by ID, regardless of status.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails.
    pub async fn delete(&self, id: OrderId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
