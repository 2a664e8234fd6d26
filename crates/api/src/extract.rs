//! Request extractors whose rejections render as envelopes.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde_json::Value;
use showtracker_core::schema::{parse_integer, require_object, ParamLocation};
use showtracker_core::types::{DbId, Record};

use crate::error::AppError;

/// A JSON request body that must decode to an object.
///
/// Any other JSON type is a 422 naming the type received; undecodable bodies
/// keep axum's own status and text.
#[derive(Debug)]
pub struct JsonObject(pub Record);

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        Ok(Self(require_object(value)?))
    }
}

/// The `{id}` path segment parsed as a record id.
#[derive(Debug, Clone, Copy)]
pub struct IdParam(pub DbId);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(Self(parse_integer(ParamLocation::Path, "id", &raw)?))
    }
}
