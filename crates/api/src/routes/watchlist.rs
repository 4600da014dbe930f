//! Route definitions for the `/watchlists` resource.
//!
//! All endpoints require authentication.

use axum::routing::get;
use axum::Router;

use crate::handlers::watchlist;
use crate::state::AppState;

/// Routes mounted at `/watchlists`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(watchlist::list).post(watchlist::create))
        .route(
            "/{id}",
            get(watchlist::get_by_id)
                .put(watchlist::update)
                .delete(watchlist::delete),
        )
}
