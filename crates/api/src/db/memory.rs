//! In-memory implementation of [`DocumentStore`].
//!
//! Documents live in insertion-ordered vectors behind a single
//! [`tokio::sync::RwLock`]. Email uniqueness is enforced the same way the
//! `customers_email_key` constraint does in `PostgreSQL`.

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use order_desk_core::{CustomerId, OrderId, OrderStatus};

use super::{DocumentStore, StoreError};
use crate::models::{Customer, CustomerChanges, NewCustomer, NewOrder, Order};

#[derive(Debug, Default)]
struct Collections {
    customers: Vec<Customer>,
    orders: Vec<Order>,
    closed: bool,
}

impl Collections {
    fn open(&self) -> Result<(), StoreError> {
        if self.closed {
            Err(StoreError::Closed)
        } else {
            Ok(())
        }
    }

    fn email_taken(&self, email: &str, except: Option<CustomerId>) -> bool {
        self.customers
            .iter()
            .any(|c| c.email == email && Some(c.id) != except)
    }
}

/// Process-local document store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn insert_customer(&self, customer: NewCustomer) -> BoxFuture<'_, Result<Customer, StoreError>> {
        Box::pin(async move {
            let mut inner = self.inner.write().await;
            inner.open()?;
            if inner.email_taken(&customer.email, None) {
                return Err(StoreError::duplicate_email(&customer.email));
            }

            let customer = Customer {
                id: CustomerId::generate(),
                name: customer.name,
                email: customer.email,
                address: customer.address,
            };
            inner.customers.push(customer.clone());
            Ok(customer)
        })
    }

    fn list_customers(&self) -> BoxFuture<'_, Result<Vec<Customer>, StoreError>> {
        Box::pin(async move {
            let inner = self.inner.read().await;
            inner.open()?;
            Ok(inner.customers.clone())
        })
    }

    fn update_customer(
        &self,
        id: CustomerId,
        changes: CustomerChanges,
    ) -> BoxFuture<'_, Result<Option<Customer>, StoreError>> {
        Box::pin(async move {
            let mut inner = self.inner.write().await;
            inner.open()?;
            // Unknown id reports None before any email conflict
            if !inner.customers.iter().any(|c| c.id == id) {
                return Ok(None);
            }
            if let Some(email) = &changes.email
                && inner.email_taken(email, Some(id))
            {
                return Err(StoreError::duplicate_email(email));
            }

            Ok(inner.customers.iter_mut().find(|c| c.id == id).map(|customer| {
                changes.apply(customer);
                customer.clone()
            }))
        })
    }

    fn delete_customer(&self, id: CustomerId) -> BoxFuture<'_, Result<bool, StoreError>> {
        Box::pin(async move {
            let mut inner = self.inner.write().await;
            inner.open()?;
            let before = inner.customers.len();
            inner.customers.retain(|c| c.id != id);
            Ok(inner.customers.len() != before)
        })
    }

    fn insert_order(&self, order: NewOrder) -> BoxFuture<'_, Result<Order, StoreError>> {
        Box::pin(async move {
            let mut inner = self.inner.write().await;
            inner.open()?;
            let order = Order {
                id: OrderId::generate(),
                customer_id: order.customer_id,
                items: order.items,
                total: order.total,
                status: order.status,
                created_at: order.created_at,
            };
            inner.orders.push(order.clone());
            Ok(order)
        })
    }

    fn list_orders(&self) -> BoxFuture<'_, Result<Vec<Order>, StoreError>> {
        Box::pin(async move {
            let inner = self.inner.read().await;
            inner.open()?;
            Ok(inner.orders.clone())
        })
    }

    fn set_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> BoxFuture<'_, Result<Option<Order>, StoreError>> {
        Box::pin(async move {
            let mut inner = self.inner.write().await;
            inner.open()?;
            Ok(inner.orders.iter_mut().find(|o| o.id == id).map(|order| {
                order.status = status;
                order.clone()
            }))
        })
    }

    fn delete_order(&self, id: OrderId) -> BoxFuture<'_, Result<bool, StoreError>> {
        Box::pin(async move {
            let mut inner = self.inner.write().await;
            inner.open()?;
            let before = inner.orders.len();
            inner.orders.retain(|o| o.id != id);
            Ok(inner.orders.len() != before)
        })
    }

    fn ping(&self) -> BoxFuture<'_, Result<(), StoreError>> {
        Box::pin(async move { self.inner.read().await.open() })
    }

    fn close(&self) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            self.inner.write().await.closed = true;
        })
    }
}
