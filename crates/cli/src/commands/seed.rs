//! Seed the database with demo data.

use chrono::Utc;

use order_desk_api::db::{DocumentStore, PgStore, StoreError};
use order_desk_api::models::{NewCustomer, NewOrder, OrderItem};
use order_desk_core::OrderStatus;

use super::{CommandError, connect};

/// Insert a demo customer and one pending order for them.
///
/// Re-running with the same email reuses the existing customer.
///
/// # Errors
///
/// Returns an error if configuration is missing or the database rejects
/// a write.
pub async fn demo(email: &str) -> Result<(), CommandError> {
    let store = PgStore::new(connect().await?);

    let customer = NewCustomer {
        name: "Ada Lovelace".to_string(),
        email: email.to_string(),
        address: Some("12 Analytical Row".to_string()),
    };

    let customer = match store.insert_customer(customer).await {
        Ok(customer) => customer,
        Err(StoreError::Conflict(_)) => {
            tracing::warn!(email, "Demo customer already exists, reusing it");
            store
                .list_customers()
                .await?
                .into_iter()
                .find(|c| c.email == email)
                .ok_or_else(|| StoreError::DataCorruption(format!("customer {email} vanished")))?
        }
        Err(e) => return Err(e.into()),
    };
    tracing::info!(customer_id = %customer.id, "Demo customer ready");

    let order = store
        .insert_order(NewOrder {
            customer_id: customer.id.to_string(),
            items: vec![
                OrderItem {
                    product: Some("Pen".to_string()),
                    quantity: Some(2.0),
                    price: Some(1.5),
                },
                OrderItem {
                    product: Some("Notebook".to_string()),
                    quantity: Some(1.0),
                    price: Some(4.0),
                },
            ],
            total: 7.0,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        })
        .await?;
    tracing::info!(order_id = %order.id, "Demo order created");

    store.close().await;
    Ok(())
}
