//! Order documents.
//!
//! `customerId` is a weak reference: it is stored as given and never checked
//! against the customers collection. `total` is likewise taken from the
//! caller and never recomputed from `items`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use order_desk_core::{OrderId, OrderStatus};

use super::{Required, ValidationError};

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    /// The name of the product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Quantity of the product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Price per unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// A stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "5c3e1a52-8a8e-4c1e-9a0d-0f7a2f1f6d11",
    "customerId": "0b6f1c0e-7f1d-4a55-9a43-2b1d7c6f3a10",
    "items": [{ "product": "Laptop", "quantity": 1, "price": 1200 }],
    "total": 1200,
    "status": "pending",
    "createdAt": "2025-03-18T12:00:00Z"
}))]
pub struct Order {
    /// Store-assigned identifier.
    pub id: OrderId,
    /// ID of the customer placing the order.
    pub customer_id: String,
    pub items: Vec<OrderItem>,
    /// Total price of the order.
    pub total: f64,
    pub status: OrderStatus,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub customer_id: Option<String>,
    pub items: Option<Vec<OrderItem>>,
    pub total: Option<f64>,
}

/// A validated order ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_id: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl CreateOrder {
    /// Check required fields and stamp the creation defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing every missing required field.
    pub fn validate(self, now: DateTime<Utc>) -> Result<NewOrder, ValidationError> {
        let mut required = Required::new("Order");
        let customer_id = required.take_str("customerId", self.customer_id);
        let items = required.take("items", self.items);
        let total = required.take("total", self.total);

        match (customer_id, items, total) {
            (Some(customer_id), Some(items), Some(total)) => Ok(NewOrder {
                customer_id,
                items,
                total,
                status: OrderStatus::default(),
                created_at: now,
            }),
            _ => Err(required.into_error()),
        }
    }
}

/// Response of `POST /orders/{id}/payment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentReceipt {
    pub message: String,
    /// The paid order, or `null` when no order has the given ID.
    pub order: Option<Order>,
}

impl PaymentReceipt {
    pub const MESSAGE: &'static str = "Payment submitted after delay";

    #[must_use]
    pub fn new(order: Option<Order>) -> Self {
        Self {
            message: Self::MESSAGE.to_string(),
            order,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_validate_defaults_status_and_created_at() {
        let now = Utc::now();
        let payload: CreateOrder = serde_json::from_value(json!({
            "customerId": "anything",
            "items": [{ "product": "Pen", "quantity": 2, "price": 1.5 }],
            "total": 3
        }))
        .unwrap();

        let new = payload.validate(now).unwrap();
        assert_eq!(new.status, OrderStatus::Pending);
        assert_eq!(new.created_at, now);
        assert_eq!(new.customer_id, "anything");
        assert_eq!(new.items.len(), 1);
        assert!((new.total - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_does_not_check_total_against_items() {
        let payload: CreateOrder = serde_json::from_value(json!({
            "customerId": "c1",
            "items": [{ "product": "Pen", "quantity": 2, "price": 1.5 }],
            "total": 100
        }))
        .unwrap();
        assert!(payload.validate(Utc::now()).is_ok());
    }

    #[test]
    fn test_validate_reports_missing_fields() {
        let err = CreateOrder::default().validate(Utc::now()).unwrap_err();
        assert_eq!(err.missing, vec!["customerId", "items", "total"]);
    }

    #[test]
    fn test_empty_items_count_as_present() {
        let payload = CreateOrder {
            customer_id: Some("c1".to_string()),
            items: Some(Vec::new()),
            total: Some(0.0),
        };
        assert!(payload.validate(Utc::now()).is_ok());
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order {
            id: OrderId::generate(),
            customer_id: "c1".to_string(),
            items: vec![],
            total: 3.0,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["customerId"], "c1");
        assert_eq!(json["status"], "pending");
        assert!(json.get("createdAt").is_some());
    }
}
