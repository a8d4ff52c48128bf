//! Integration tests for the REST surface.
//!
//! The gateway is booted for real on a loopback port, pointed at an
//! unreachable RPC endpoint. Every remote-call failure must surface as the
//! single generic shape: HTTP 500 with `{"error": message}`.

use serde_json::{json, Value};

mod common;

async fn assert_generic_failure(res: reqwest::Response) {
    assert_eq!(res.status().as_u16(), 500);
    let body: Value = res.json().await.unwrap();
    let message = body["error"].as_str().expect("error field must be a string");
    assert!(!message.is_empty());
    // Only the `error` key, nothing else leaks out.
    assert_eq!(body.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_fails_when_node_unreachable() {
    let (url, _shutdown) = common::spawn_gateway().await;
    let res = reqwest::get(format!("{}/antiques", url)).await.unwrap();
    assert_generic_failure(res).await;
}

#[tokio::test]
async fn test_index_fails_when_node_unreachable() {
    let (url, _shutdown) = common::spawn_gateway().await;
    let res = reqwest::get(format!("{}/antique-index", url)).await.unwrap();
    assert_generic_failure(res).await;
}

#[tokio::test]
async fn test_buy_fails_when_node_unreachable() {
    let (url, _shutdown) = common::spawn_gateway().await;
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/antiques/1/buy", url))
        .send()
        .await
        .unwrap();
    assert_generic_failure(res).await;
}

#[tokio::test]
async fn test_delete_fails_when_node_unreachable() {
    let (url, _shutdown) = common::spawn_gateway().await;
    let client = reqwest::Client::new();
    let res = client
        .delete(format!("{}/antiques/1", url))
        .send()
        .await
        .unwrap();
    assert_generic_failure(res).await;
}

#[tokio::test]
async fn test_create_fails_when_node_unreachable() {
    let (url, _shutdown) = common::spawn_gateway().await;
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/antiques", url))
        .json(&json!({
            "owner": "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
            "price": "1000",
            "itemTitle": "Clock",
            "category": "Horology",
            "description": "Mantel clock",
            "yearOfOrigin": 1870,
            "condition": "Good",
            "origin": "France",
            "isAuthenticated": true
        }))
        .send()
        .await
        .unwrap();
    assert_generic_failure(res).await;
}

#[tokio::test]
async fn test_review_fails_when_node_unreachable() {
    let (url, _shutdown) = common::spawn_gateway().await;
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/antiques/3/reviews", url))
        .json(&json!({ "rating": 5, "comment": "superb" }))
        .send()
        .await
        .unwrap();
    assert_generic_failure(res).await;
}

#[tokio::test]
async fn test_malformed_id_is_generic_failure() {
    let (url, _shutdown) = common::spawn_gateway().await;
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/antiques/banana/buy", url))
        .send()
        .await
        .unwrap();
    assert_generic_failure(res).await;
}

#[tokio::test]
async fn test_malformed_owner_is_generic_failure() {
    let (url, _shutdown) = common::spawn_gateway().await;
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/antiques", url))
        .json(&json!({
            "owner": "not-an-address",
            "price": "1",
            "itemTitle": "x",
            "category": "x",
            "description": "x",
            "yearOfOrigin": 1900,
            "condition": "x",
            "origin": "x",
            "isAuthenticated": false
        }))
        .send()
        .await
        .unwrap();
    assert_generic_failure(res).await;
}

#[tokio::test]
async fn test_undeserializable_create_body_is_generic_failure() {
    let (url, _shutdown) = common::spawn_gateway().await;
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/antiques", url))
        .json(&json!({
            "owner": "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
            "price": "abc",
            "itemTitle": "Clock",
            "category": "Horology",
            "description": "Mantel clock",
            "yearOfOrigin": 1870,
            "condition": "Good",
            "origin": "France",
            "isAuthenticated": true
        }))
        .send()
        .await
        .unwrap();
    assert_generic_failure(res).await;
}

#[tokio::test]
async fn test_undeserializable_review_body_is_generic_failure() {
    let (url, _shutdown) = common::spawn_gateway().await;
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/antiques/3/reviews", url))
        .json(&json!({ "rating": "five", "comment": "superb" }))
        .send()
        .await
        .unwrap();
    assert_generic_failure(res).await;
}

#[tokio::test]
async fn test_non_json_create_body_is_generic_failure() {
    let (url, _shutdown) = common::spawn_gateway().await;
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/antiques", url))
        .header("content-type", "application/json")
        .body("not json at all")
        .send()
        .await
        .unwrap();
    assert_generic_failure(res).await;
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (url, _shutdown) = common::spawn_gateway().await;
    let res = reqwest::get(format!("{}/nope", url)).await.unwrap();
    assert_eq!(res.status().as_u16(), 404);
}

#[tokio::test]
async fn test_health_degraded_without_node() {
    let (url, _shutdown) = common::spawn_gateway().await;
    let res = reqwest::get(format!("{}/health", url)).await.unwrap();
    assert_eq!(res.status().as_u16(), 503);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn test_request_id_on_response() {
    let (url, _shutdown) = common::spawn_gateway().await;
    let res = reqwest::get(format!("{}/health", url)).await.unwrap();
    let id = res
        .headers()
        .get("x-request-id")
        .expect("x-request-id header present");
    assert!(!id.to_str().unwrap().is_empty());
}
