//! `PostgreSQL` implementation of [`DocumentStore`].

use futures::future::BoxFuture;
use sqlx::PgPool;

use order_desk_core::{CustomerId, OrderId, OrderStatus};

use super::{CustomerRepository, DocumentStore, OrderRepository, StoreError};
use crate::models::{Customer, CustomerChanges, NewCustomer, NewOrder, Order};

/// Document store backed by a `PostgreSQL` pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn customers(&self) -> CustomerRepository<'_> {
        CustomerRepository::new(&self.pool)
    }

    fn orders(&self) -> OrderRepository<'_> {
        OrderRepository::new(&self.pool)
    }
}

impl DocumentStore for PgStore {
    fn insert_customer(&self, customer: NewCustomer) -> BoxFuture<'_, Result<Customer, StoreError>> {
        Box::pin(async move { self.customers().create(&customer).await })
    }

    fn list_customers(&self) -> BoxFuture<'_, Result<Vec<Customer>, StoreError>> {
        Box::pin(async move { self.customers().list().await })
    }

    fn update_customer(
        &self,
        id: CustomerId,
        changes: CustomerChanges,
    ) -> BoxFuture<'_, Result<Option<Customer>, StoreError>> {
        Box::pin(async move { self.customers().update(id, &changes).await })
    }

    fn delete_customer(&self, id: CustomerId) -> BoxFuture<'_, Result<bool, StoreError>> {
        Box::pin(async move { self.customers().delete(id).await })
    }

    fn insert_order(&self, order: NewOrder) -> BoxFuture<'_, Result<Order, StoreError>> {
        Box::pin(async move { self.orders().create(&order).await })
    }

    fn list_orders(&self) -> BoxFuture<'_, Result<Vec<Order>, StoreError>> {
        Box::pin(async move { self.orders().list().await })
    }

    fn set_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> BoxFuture<'_, Result<Option<Order>, StoreError>> {
        Box::pin(async move { self.orders().set_status(id, status).await })
    }

    fn delete_order(&self, id: OrderId) -> BoxFuture<'_, Result<bool, StoreError>> {
        Box::pin(async move { self.orders().delete(id).await })
    }

    fn ping(&self) -> BoxFuture<'_, Result<(), StoreError>> {
        Box::pin(async move {
            sqlx::query("SELECT 1").execute(&self.pool).await?;
            Ok(())
        })
    }

    fn close(&self) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            self.pool.close().await;
            tracing::info!("Database pool closed");
        })
    }
}
