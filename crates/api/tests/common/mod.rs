#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use showtracker_api::app::build_app;
use showtracker_api::config::ServerConfig;
use showtracker_api::state::AppState;
use showtracker_core::types::{DbId, Record};
use showtracker_db::{MemoryStore, Store, StoreError};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:8081")],
        request_timeout_secs: 30,
        seed_shows: true,
    }
}

/// Build the full application over `store`, with the production middleware stack.
pub fn build_test_app(store: Arc<dyn Store>) -> Router {
    build_app(AppState::new(store, test_config()))
}

/// A store holding the three starter shows.
pub async fn seeded_store() -> Arc<dyn Store> {
    Arc::new(MemoryStore::with_seed().await.unwrap())
}

/// Shorthand: a fresh app over a freshly seeded store.
pub async fn seeded_app() -> Router {
    build_test_app(seeded_store().await)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn with_json(app: Router, method: Method, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    with_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    with_json(app, Method::PUT, uri, body).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A store whose every operation fails, for exercising the 500 path.
pub struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::Backend("connection refused to 10.0.0.7".to_string())
}

#[async_trait]
impl Store for FailingStore {
    async fn get_all(&self, _collection: &str) -> Result<Vec<Record>, StoreError> {
        Err(unavailable())
    }

    async fn get_by_id(&self, _collection: &str, _id: DbId) -> Result<Option<Record>, StoreError> {
        Err(unavailable())
    }

    async fn create(&self, _collection: &str, _fields: Record) -> Result<Record, StoreError> {
        Err(unavailable())
    }

    async fn update_by_id(
        &self,
        _collection: &str,
        _id: DbId,
        _patch: Record,
    ) -> Result<Option<Record>, StoreError> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _collection: &str, _id: DbId) -> Result<bool, StoreError> {
        Err(unavailable())
    }
}
