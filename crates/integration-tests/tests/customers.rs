//! HTTP tests for the customer resource over the in-memory store.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use serde_json::{Value, json};

use order_desk_integration_tests::{FAST_PAYMENT, TestServer};

#[tokio::test]
async fn test_create_list_update_delete_customer() {
    let server = TestServer::memory(FAST_PAYMENT).await.unwrap();

    let resp = server
        .client
        .post(server.url("/customer"))
        .json(&json!({ "name": "Ada", "email": "ada@x.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["name"], "Ada");
    assert!(created.get("address").is_none());
    let id = created["id"].as_str().unwrap().to_string();

    let list: Value = server
        .client
        .get(server.url("/customer"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list, json!([created]));

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
    assert_eq!(updated["email"], "ada@x.com");
    assert_eq!(updated["address"], "X");

    let resp = server
        .client
        .delete(server.url(&format!("/customer/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.json::<Value>().await.unwrap(),
        json!({ "message": "Customer deleted" })
    );

    let list: Value = server
        .client
        .get(server.url("/customer"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_duplicate_email_is_400_with_message() {
    let server = TestServer::memory(FAST_PAYMENT).await.unwrap();
    let body = json!({ "name": "Ada", "email": "ada@x.com" });

    let first = server
        .client
        .post(server.url("/customer"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = server
        .client
        .post(server.url("/customer"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let error: Value = second.json().await.unwrap();
    assert!(error["message"].as_str().unwrap().contains("duplicate key"));
}

#[tokio::test]
async fn test_malformed_body_is_json_400() {
    let server = TestServer::memory(FAST_PAYMENT).await.unwrap();

    let resp = server
        .client
        .post(server.url("/customer"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = resp.json().await.unwrap();
    assert!(error["message"].is_string());
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let server = TestServer::memory(FAST_PAYMENT).await.unwrap();

    let resp = server
        .client
        .get(server.url("/customer"))
        .header("x-request-id", "trace-me")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.headers().get("x-request-id").unwrap(), "trace-me");
}
