use axum::http::StatusCode;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::Envelope;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health -- returns service health.
pub async fn health_check() -> AppResult<Envelope> {
    let health = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    };
    Ok(Envelope::from_serialize(&health, StatusCode::OK, "")?)
}
