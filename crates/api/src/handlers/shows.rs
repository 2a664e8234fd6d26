//! Handlers for the `/shows` resource.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde_json::{json, Value};
use showtracker_core::schema::{parse_integer, ParamLocation};
use showtracker_core::show::{has_seen_at_least, NewShow, COLLECTION, ENTITY};

use crate::error::{AppError, AppResult};
use crate::extract::{IdParam, JsonObject};
use crate::query::ShowListParams;
use crate::response::Envelope;
use crate::state::AppState;

/// GET /shows
///
/// With `?minEpisodes=N`, only shows with `episodes_seen >= N` are returned,
/// in their stored order.
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<ShowListParams>, QueryRejection>,
) -> AppResult<Envelope> {
    let Query(params) = params?;
    let min_episodes = params
        .min_episodes
        .as_deref()
        .map(|raw| parse_integer(ParamLocation::Query, "minEpisodes", raw))
        .transpose()?;

    let mut shows = state.store.get_all(COLLECTION).await?;
    if let Some(min) = min_episodes {
        shows.retain(|show| has_seen_at_least(show, min));
    }

    tracing::debug!(count = shows.len(), ?min_episodes, "Listed shows");
    Ok(Envelope::ok(json!({ "shows": shows }))?)
}

/// GET /shows/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> AppResult<Envelope> {
    let show = state
        .store
        .get_by_id(COLLECTION, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Envelope::ok(Value::Object(show))?)
}

/// DELETE /shows/{id}
pub async fn delete(State(state): State<AppState>, IdParam(id): IdParam) -> AppResult<Envelope> {
    let deleted = state.store.delete_by_id(COLLECTION, id).await?;
    if deleted {
        tracing::info!(id, "Show deleted");
        Ok(Envelope::message(StatusCode::OK, "Show deleted"))
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}

/// POST /shows
///
/// The body must carry exactly `name` and `episodes_seen`.
pub async fn create(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> AppResult<Envelope> {
    let input = NewShow::from_record(body)?;
    let show = state.store.create(COLLECTION, input.into_record()).await?;

    tracing::info!(id = ?show.get("id"), "Show created");
    Ok(Envelope::build(
        Some(Value::Object(show)),
        StatusCode::CREATED,
        "",
    )?)
}

/// PUT /shows/{id}
///
/// Merges whatever attributes the body carries into the stored show.
/// Responds `201 Created` on success, not `200`, for compatibility with
/// existing clients.
pub async fn update(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    JsonObject(patch): JsonObject,
) -> AppResult<Envelope> {
    let show = state
        .store
        .update_by_id(COLLECTION, id, patch)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(id, "Show updated");
    Ok(Envelope::build(
        Some(Value::Object(show)),
        StatusCode::CREATED,
        "",
    )?)
}
