use axum::routing::get;
use axum::Router;

use crate::handlers::index;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET /                 -> hello_world
/// GET /mirror/{name}    -> mirror
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::hello_world))
        .route("/mirror/{name}", get(index::mirror))
}
