//! HTTP-level integration tests for the local `/movies` and `/tv-shows`
//! resources.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_movie_resolve_creates_then_refreshes(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/movies",
        json!({ "external_id": 603, "title": "The Matrix", "genre_ids": [28, 878],
                "summary": "A hacker learns the truth." }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await["data"].clone();
    assert_eq!(created["genre_ids"], json!([28, 878]));

    // Same external id again: refreshed in place, absent summary cleared.
    let response = post_json(
        app.clone(),
        "/api/v1/movies",
        json!({ "external_id": 603, "title": "The Matrix" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let refreshed = body_json(response).await["data"].clone();
    assert_eq!(refreshed["id"], created["id"]);
    assert!(refreshed["summary"].is_null());
    assert!(refreshed["genre_ids"].is_null());

    let response = get(app.clone(), &format!("/api/v1/movies/{}", created["id"])).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["external_id"], 603);

    let list = body_json(get(app, "/api/v1/movies").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_tv_show_resolve_accepts_catalog_field_names(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/tv-shows",
        json!({ "tmdb_id": 1399, "name": "Game of Thrones",
                "first_air_date": "2011-04-17", "last_air_date": "2019-05-19",
                "overview": "Seven noble families fight for control." }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let show = body_json(response).await["data"].clone();
    assert_eq!(show["external_id"], 1399);
    assert_eq!(show["title"], "Game of Thrones");
    assert_eq!(show["start_date"], "2011-04-17");
    assert_eq!(show["end_date"], "2019-05-19");
    assert_eq!(show["summary"], "Seven noble families fight for control.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_resolve_rejects_invalid_payload(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/movies", json!({ "title": "No id" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        app.clone(),
        "/api/v1/tv-shows",
        json!({ "external_id": 1, "title": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let list = body_json(get(app, "/api/v1/movies").await).await;
    assert_eq!(list["data"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_catalog_rows_are_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);

    let movie = get(app.clone(), "/api/v1/movies/777").await;
    assert_eq!(movie.status(), StatusCode::NOT_FOUND);

    let show = get(app, "/api/v1/tv-shows/777").await;
    assert_eq!(show.status(), StatusCode::NOT_FOUND);
}
