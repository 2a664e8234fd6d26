//! Route definitions for the `/shows` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::shows;
use crate::state::AppState;

/// Routes for the show collection.
///
/// ```text
/// GET    /shows         -> list (?minEpisodes=N)
/// POST   /shows         -> create
/// GET    /shows/{id}    -> get_by_id
/// PUT    /shows/{id}    -> update
/// DELETE /shows/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shows", get(shows::list).post(shows::create))
        .route(
            "/shows/{id}",
            get(shows::get_by_id)
                .put(shows::update)
                .delete(shows::delete),
        )
}
