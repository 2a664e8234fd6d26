pub mod health;
pub mod index;
pub mod shows;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                        greeting
/// /mirror/{name}           echo a path segment
///
/// /shows                   list (?minEpisodes=), create
/// /shows/{id}              get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(index::router())
        .merge(shows::router())
}
