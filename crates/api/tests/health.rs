//! Integration tests for the health check endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, seeded_app};

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let response = get(seeded_app().await, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["code"], 200);
    assert_eq!(json["result"]["status"], "ok");
    assert!(json["result"]["version"].is_string());
}
