//! HTTP-level integration tests for the `/users` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_user_crud_lifecycle(pool: PgPool) {
    let app = common::build_test_app(pool);

    // Create
    let response = post_json(
        app.clone(),
        "/api/v1/users",
        json!({ "username": "alice", "email": "alice@example.com", "password": "secret" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await["data"].clone();
    assert_eq!(created["username"], "alice");
    assert!(created.get("password_hash").is_none());
    let uri = format!("/api/v1/users/{}", created["id"]);

    // Get
    let response = get(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["email"], "alice@example.com");

    // Update: absent fields stay, supplied ones change.
    let response = put_json(app.clone(), &uri, json!({ "username": "alice2" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await["data"].clone();
    assert_eq!(updated["username"], "alice2");
    assert_eq!(updated["email"], "alice@example.com");

    // List
    let list = body_json(get(app.clone(), "/api/v1/users").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    // Delete
    let response = delete(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_updated_password_is_usable_for_login(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (user_id, _token) = common::register_and_login(&app, "alice", "secret").await;

    let response = put_json(
        app.clone(),
        &format!("/api/v1/users/{user_id}"),
        json!({ "password": "new-secret" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let old = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "email": "alice@example.com", "password": "secret" }),
    )
    .await;
    assert_eq!(old.status(), StatusCode::UNAUTHORIZED);

    let new = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": "alice@example.com", "password": "new-secret" }),
    )
    .await;
    assert_eq!(new.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_deleting_user_cascades_to_entries(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (user_id, token) = common::register_and_login(&app, "alice", "secret").await;

    let response = common::post_json_auth(
        app.clone(),
        "/api/v1/watchlists",
        json!({ "movie_data": { "external_id": 603, "title": "The Matrix" } }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = delete(app, &format!("/api/v1/users/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let entries: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM watchlist_entries")
        .fetch_one(&pool)
        .await
        .unwrap();
    let movies: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(entries, 0);
    assert_eq!(movies, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_token_of_deleted_user_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (user_id, token) = common::register_and_login(&app, "alice", "secret").await;

    let response = delete(app.clone(), &format!("/api/v1/users/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = common::post_json_auth(
        app.clone(),
        "/api/v1/watchlists",
        json!({ "movie_data": { "external_id": 603, "title": "The Matrix" } }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert!(!json.to_string().contains("fkey"));

    // Rejected before the catalog is touched.
    let movies: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(movies, 0);

    let response = common::get_auth(app, "/api/v1/watchlists", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_user_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/users/424242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "User with id 424242 not found");

    let response = delete(app, "/api/v1/users/424242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
