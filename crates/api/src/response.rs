//! The response envelope shared by every endpoint.
//!
//! All responses, successes and errors alike, have the shape
//! `{ "code", "success", "message", "result" }`. `result` is either `null` or
//! a JSON object keyed by what it wraps (e.g. `{"shows": [...]}`), or the
//! entity itself for single-record responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use showtracker_core::schema::json_type_name;

/// Misuse of [`Envelope::build`] by server code, never by a client.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("Envelope data must be a JSON object, got {actual}")]
    InvalidArgument { actual: &'static str },

    #[error("Envelope data could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Standard `{ code, success, message, result }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Envelope::ok(json!({ "shows": shows }))?)
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    #[serde(skip)]
    status: StatusCode,
    pub code: u16,
    pub success: bool,
    pub message: String,
    pub result: Option<Value>,
}

impl Envelope {
    /// Wrap `data` with the given status and message.
    ///
    /// Fails with [`EnvelopeError::InvalidArgument`] if `data` is present but
    /// not a JSON object.
    pub fn build(
        data: Option<Value>,
        status: StatusCode,
        message: impl Into<String>,
    ) -> Result<Self, EnvelopeError> {
        if let Some(value) = &data {
            if !value.is_object() {
                return Err(EnvelopeError::InvalidArgument {
                    actual: json_type_name(value),
                });
            }
        }

        Ok(Self {
            status,
            code: status.as_u16(),
            success: status.is_success(),
            message: message.into(),
            result: data,
        })
    }

    /// `200 OK` with `data` and an empty message.
    pub fn ok(data: Value) -> Result<Self, EnvelopeError> {
        Self::build(Some(data), StatusCode::OK, "")
    }

    /// Serialize `data` first, then wrap it like [`Envelope::build`].
    pub fn from_serialize<T: Serialize>(
        data: &T,
        status: StatusCode,
        message: impl Into<String>,
    ) -> Result<Self, EnvelopeError> {
        Self::build(Some(serde_json::to_value(data)?), status, message)
    }

    /// A message-only envelope with `result: null`. Cannot fail.
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            code: status.as_u16(),
            success: status.is_success(),
            message: message.into(),
            result: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
