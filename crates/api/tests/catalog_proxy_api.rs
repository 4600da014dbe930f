//! Integration tests for the `/catalog` proxy and the popular-titles sync,
//! both driven against an in-process fake of the TMDB API.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, spawn_fake_catalog};
use serde_json::json;
use sqlx::PgPool;
use watchlist_api::sync::{sync_popular, SyncReport};
use watchlist_catalog::{CatalogConfig, TmdbClient};

// ---------------------------------------------------------------------------
// Proxy
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_catalog_without_api_key_is_unavailable(pool: PgPool) {
    let app = common::build_test_app(pool);

    for uri in [
        "/api/v1/catalog/movies/popular",
        "/api/v1/catalog/tv/popular",
        "/api/v1/catalog/search?q=matrix",
    ] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE, "{uri}");
        assert_eq!(body_json(response).await["code"], "CATALOG_UNAVAILABLE");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_popular_movies_are_normalized(pool: PgPool) {
    let app = common::build_test_app_with_catalog(pool, &spawn_fake_catalog().await);

    let response = get(app, "/api/v1/catalog/movies/popular").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let first = &json["data"][0];
    assert_eq!(first["external_id"], 603);
    assert_eq!(first["title"], "The Matrix");
    assert_eq!(first["genre_ids"], json!([28, 878]));
    assert_eq!(first["summary"], "A hacker learns the truth.");
    assert_eq!(first["poster_url"], "https://image.tmdb.org/t/p/w500/matrix.jpg");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_returns_tagged_hits(pool: PgPool) {
    let app = common::build_test_app_with_catalog(pool, &spawn_fake_catalog().await);

    let response = get(app.clone(), "/api/v1/catalog/search?q=thrones").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let hits = json["data"].as_array().unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0]["content_type"], "movie");
    assert_eq!(hits[1]["content_type"], "tv_show");
    assert_eq!(hits[1]["title"], "Game of Thrones");

    let blank = get(app, "/api/v1/catalog/search?q=%20").await;
    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_details_and_upstream_errors(pool: PgPool) {
    let app = common::build_test_app_with_catalog(pool, &spawn_fake_catalog().await);

    let response = get(app.clone(), "/api/v1/catalog/movies/603").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["genre_ids"], json!([28, 878]));

    let response = get(app.clone(), "/api/v1/catalog/tv/1399").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["end_date"], "2019-05-19");

    let response = get(app, "/api/v1/catalog/movies/1").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["code"], "CATALOG_ERROR");
}

// ---------------------------------------------------------------------------
// Sync
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_sync_upserts_popular_titles(pool: PgPool) {
    let url = spawn_fake_catalog().await;
    let client = TmdbClient::from_config(&CatalogConfig::new(url, common::TMDB_API_KEY)).unwrap();

    // Two valid movies and one show; the untitled movie is skipped.
    let report = sync_popular(&pool, &client).await.unwrap();
    assert_eq!(
        report,
        SyncReport {
            created: 3,
            updated: 0,
            skipped: 1,
        }
    );

    let again = sync_popular(&pool, &client).await.unwrap();
    assert_eq!(
        again,
        SyncReport {
            created: 0,
            updated: 3,
            skipped: 1,
        }
    );

    let movies: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(&pool)
        .await
        .unwrap();
    let shows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tv_shows")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!((movies, shows), (2, 1));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_sync_with_rejected_key_fails(pool: PgPool) {
    let url = spawn_fake_catalog().await;
    let client = TmdbClient::from_config(&CatalogConfig::new(url, "wrong-key")).unwrap();

    assert!(sync_popular(&pool, &client).await.is_err());
}
