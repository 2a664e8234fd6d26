//! Handlers for the root greeting and the mirror endpoint.

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use serde_json::json;

use crate::error::AppResult;
use crate::response::Envelope;

/// GET /
pub async fn hello_world() -> AppResult<Envelope> {
    Ok(Envelope::ok(json!({ "content": "hello world!" }))?)
}

/// GET /mirror/{name}
pub async fn mirror(name: Result<Path<String>, PathRejection>) -> AppResult<Envelope> {
    let Path(name) = name?;
    Ok(Envelope::ok(json!({ "name": name }))?)
}
