//! Tests for the middleware stack's own responses: panics and timeouts must
//! come back as envelopes like every handler error does.
//!
//! The routes here exist only for these tests; they are wrapped with the same
//! `with_middleware` stack the server uses.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get as get_route;
use axum::Router;
use common::{body_json, get, test_config};
use showtracker_api::app::with_middleware;

async fn exploding_handler() -> &'static str {
    panic!("secret panic text from the handler")
}

async fn slow_handler() -> &'static str {
    tokio::time::sleep(Duration::from_secs(10)).await;
    "finished"
}

/// Routes for the tests below, behind the production middleware with the
/// given request timeout.
fn test_app(timeout_secs: u64) -> Router {
    let mut config = test_config();
    config.request_timeout_secs = timeout_secs;

    let routes = Router::new()
        .route("/explode", get_route(exploding_handler))
        .route("/slow", get_route(slow_handler))
        .route("/fast", get_route(|| async { "fast" }));

    with_middleware(routes, &config)
}

// ---------------------------------------------------------------------------
// Test: a panicking handler becomes a sanitized 500 envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn panic_in_handler_returns_500_envelope() {
    let response = get(test_app(30), "/explode").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().contains_key("x-request-id"));

    let json = body_json(response).await;
    assert_eq!(json["code"], 500);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "An internal error occurred");
    assert!(json["result"].is_null());
    assert!(
        !json.to_string().contains("secret"),
        "Panic payload must not reach the client"
    );
}

// ---------------------------------------------------------------------------
// Test: a request that outlives the timeout becomes a 408 envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn slow_handler_returns_408_envelope() {
    let response = get(test_app(1), "/slow").await;
    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);

    let json = body_json(response).await;
    assert_eq!(json["code"], 408);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Request timed out");
    assert!(json["result"].is_null());
}

#[tokio::test]
async fn responses_within_the_timeout_pass_through_unchanged() {
    let response = get(test_app(1), "/fast").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    assert_eq!(&bytes[..], b"fast");
}
