//! The same flows against `PostgreSQL`.
//!
//! Ignored by default; run with `--include-ignored` and `ORDERS_DATABASE_URL`
//! pointing at a disposable database.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use serde_json::{Value, json};

use order_desk_integration_tests::{FAST_PAYMENT, TestServer, unique_email};

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_postgres_customer_lifecycle() {
    let server = TestServer::postgres(FAST_PAYMENT).await.unwrap();
    let email = unique_email("ada");

    let created: Value = server
        .client
        .post(server.url("/customer"))
        .json(&json!({ "name": "Ada", "email": email }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    let duplicate = server
        .client
        .post(server.url("/customer"))
        .json(&json!({ "name": "Other", "email": email }))
        .send()
        .await
        .unwrap();
    assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);

    let updated: Value = server
        .client
        .patch(server.url(&format!("/customer/{id}")))
        .json(&json!({ "address": "X" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["name"], "Ada");
    assert_eq!(updated["address"], "X");

    let list: Vec<Value> = server
        .client
        .get(server.url("/customer"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.iter().filter(|c| c["email"] == email.as_str()).count(), 1);

    server
        .client
        .delete(server.url(&format!("/customer/{id}")))
        .send()
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_postgres_order_payment() {
    let server = TestServer::postgres(FAST_PAYMENT).await.unwrap();

    let order: Value = server
        .client
        .post(server.url("/orders"))
        .json(&json!({
            "customerId": "c1",
            "items": [{ "product": "Pen", "quantity": 2, "price": 1.5 }],
            "total": 3
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(order["status"], "pending");
    assert_eq!(order["items"][0]["product"], "Pen");
    let id = order["id"].as_str().unwrap().to_string();

    let receipt: Value = server
        .client
        .post(server.url(&format!("/orders/{id}/payment")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(receipt["order"]["status"], "paid");

    let deleted = server
        .client
        .delete(server.url(&format!("/orders/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);
}
