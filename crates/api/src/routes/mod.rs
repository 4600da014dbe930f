pub mod auth;
pub mod catalog;
pub mod health;
pub mod movies;
pub mod notification;
pub mod tv_shows;
pub mod users;
pub mod watchlist;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
///
/// /users                         list, create
/// /users/{id}                    get, update, delete
///
/// /movies                        list, resolve payload (POST)
/// /movies/{id}                   get
/// /tv-shows                      list, resolve payload (POST)
/// /tv-shows/{id}                 get
///
/// /watchlists                    list, create (auth required)
/// /watchlists/{id}               get, update, delete (owner only)
///
/// /notifications                 list (?user_id), create
/// /notifications/{id}            get, update, delete
///
/// /catalog/movies/popular        popular movies (GET)
/// /catalog/movies/upcoming       upcoming movies (GET)
/// /catalog/movies/{external_id}  movie details (GET)
/// /catalog/tv/popular            popular TV shows (GET)
/// /catalog/tv/{external_id}      TV show details (GET)
/// /catalog/search                search (?q)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Registration and login.
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        // Local catalog rows.
        .nest("/movies", movies::router())
        .nest("/tv-shows", tv_shows::router())
        .nest("/watchlists", watchlist::router())
        .nest("/notifications", notification::router())
        // Read-only proxy to the external catalog.
        .nest("/catalog", catalog::router())
}
