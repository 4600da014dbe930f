#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, Query};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::routing::get as get_route;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use watchlist_api::auth::jwt::JwtConfig;
use watchlist_api::config::ServerConfig;
use watchlist_api::router::build_app_router;
use watchlist_api::state::AppState;
use watchlist_catalog::{CatalogConfig, TmdbClient};

pub const TMDB_API_KEY: &str = "test-tmdb-key";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-for-integration-tests".to_string(),
            expiry_mins: 60,
        },
        catalog: CatalogConfig {
            api_key: None,
            ..CatalogConfig::new("http://127.0.0.1:9", "unused")
        },
    }
}

/// Build the full application router with no external catalog configured.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests run through the
/// production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(pool, test_config())
}

/// Build the application router with the catalog client pointed at
/// `catalog_url` (see [`spawn_fake_catalog`]).
pub fn build_test_app_with_catalog(pool: PgPool, catalog_url: &str) -> Router {
    let mut config = test_config();
    config.catalog = CatalogConfig::new(catalog_url, TMDB_API_KEY);
    build_app(pool, config)
}

fn build_app(pool: PgPool, config: ServerConfig) -> Router {
    let catalog = TmdbClient::from_config(&config.catalog).map(Arc::new);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        catalog,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, None, Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, None).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Register a user through the API, log in, and return `(user_id, token)`.
pub async fn register_and_login(app: &Router, username: &str, password: &str) -> (i64, String) {
    let email = format!("{username}@example.com");

    let response = post_json(
        app.clone(),
        "/api/v1/auth/register",
        json!({ "username": username, "email": email, "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let user_id = json["user"]["id"].as_i64().unwrap();
    let token = json["token"].as_str().unwrap().to_string();
    (user_id, token)
}

// ---------------------------------------------------------------------------
// Fake external catalog
// ---------------------------------------------------------------------------

type FakeResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn check_key(params: &HashMap<String, String>) -> Result<(), (StatusCode, Json<Value>)> {
    if params.get("api_key").map(String::as_str) == Some(TMDB_API_KEY) {
        Ok(())
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "status_message": "Invalid API key" })),
        ))
    }
}

type Params = Query<HashMap<String, String>>;

async fn fake_popular_movies(Query(params): Params) -> FakeResult {
    check_key(&params)?;
    Ok(Json(json!({
        "page": 1,
        "results": [
            { "id": 603, "title": "The Matrix", "genre_ids": [28, 878],
              "release_date": "1999-03-30", "overview": "A hacker learns the truth.",
              "poster_path": "/matrix.jpg" },
            { "id": 604, "title": "The Matrix Reloaded", "genre_ids": [28],
              "release_date": "2003-05-15" },
            { "id": 605, "title": "", "genre_ids": [] }
        ]
    })))
}

async fn fake_upcoming_movies(Query(params): Params) -> FakeResult {
    check_key(&params)?;
    Ok(Json(json!({
        "page": 1,
        "results": [
            { "id": 900, "title": "Coming Soon", "release_date": "" }
        ]
    })))
}

async fn fake_popular_tv(Query(params): Params) -> FakeResult {
    check_key(&params)?;
    Ok(Json(json!({
        "page": 1,
        "results": [
            { "id": 1399, "name": "Game of Thrones", "genre_ids": [10765],
              "first_air_date": "2011-04-17", "poster_path": "/got.jpg" }
        ]
    })))
}

async fn fake_search(Query(params): Params) -> FakeResult {
    check_key(&params)?;
    Ok(Json(json!({
        "page": 1,
        "results": [
            { "media_type": "movie", "id": 603, "title": "The Matrix" },
            { "media_type": "tv", "id": 1399, "name": "Game of Thrones" },
            { "media_type": "person", "id": 6384, "name": "Keanu Reeves" }
        ]
    })))
}

async fn fake_movie_details(Path(id): Path<i64>, Query(params): Params) -> FakeResult {
    check_key(&params)?;
    if id != 603 {
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "status_message": "The resource you requested could not be found." })),
        ));
    }
    Ok(Json(json!({
        "id": 603,
        "title": "The Matrix",
        "genres": [{ "id": 28, "name": "Action" }, { "id": 878, "name": "Science Fiction" }],
        "release_date": "1999-03-30",
        "overview": "A hacker learns the truth.",
        "poster_path": "/matrix.jpg"
    })))
}

async fn fake_tv_details(Path(id): Path<i64>, Query(params): Params) -> FakeResult {
    check_key(&params)?;
    Ok(Json(json!({
        "id": id,
        "name": "Game of Thrones",
        "genres": [{ "id": 10765, "name": "Sci-Fi & Fantasy" }],
        "first_air_date": "2011-04-17",
        "last_air_date": "2019-05-19"
    })))
}

/// Start an in-process stand-in for the TMDB API and return its base URL.
pub async fn spawn_fake_catalog() -> String {
    let app = Router::new()
        .route("/movie/popular", get_route(fake_popular_movies))
        .route("/movie/upcoming", get_route(fake_upcoming_movies))
        .route("/movie/{id}", get_route(fake_movie_details))
        .route("/tv/popular", get_route(fake_popular_tv))
        .route("/tv/{id}", get_route(fake_tv_details))
        .route("/search/multi", get_route(fake_search));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
