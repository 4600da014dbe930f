//! Route definitions for the `/tv-shows` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tv_shows;
use crate::state::AppState;

/// Routes mounted at `/tv-shows`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> resolve
/// GET    /{id}        -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tv_shows::list).post(tv_shows::resolve))
        .route("/{id}", get(tv_shows::get_by_id))
}
