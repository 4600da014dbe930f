//! Integration tests for the catalog resolver.
//!
//! - First resolve creates, later resolves refresh the same row
//! - Absent optional fields overwrite cached values with NULL
//! - Validation failures write nothing
//! - Movies and TV shows with the same external id stay separate

use assert_matches::assert_matches;
use sqlx::PgPool;
use watchlist_core::catalog::CatalogPayload;
use watchlist_core::content::{ContentKind, ContentRef};
use watchlist_core::error::CoreError;
use watchlist_db::repositories::{MovieRepo, TvShowRepo};
use watchlist_db::resolver::{CatalogResolver, ResolveError, ResolvedContent};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn matrix() -> CatalogPayload {
    CatalogPayload {
        external_id: Some(603),
        title: Some("The Matrix".to_string()),
        genre_ids: Some(vec![28, 878]),
        release_date: Some("1999-03-30".to_string()),
        end_date: None,
        summary: Some("A hacker learns the truth.".to_string()),
        poster_url: Some("https://image.tmdb.org/t/p/w500/matrix.jpg".to_string()),
    }
}

async fn movie_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Test: Idempotent upsert by external id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_resolve_twice_yields_one_row(pool: PgPool) {
    let first = CatalogResolver::resolve(&pool, ContentKind::Movie, &matrix())
        .await
        .unwrap();
    assert!(first.created);

    let second = CatalogResolver::resolve(&pool, ContentKind::Movie, &matrix())
        .await
        .unwrap();
    assert!(!second.created);

    assert_eq!(first.content.content_ref(), second.content.content_ref());
    assert_eq!(movie_count(&pool).await, 1);

    let stored = MovieRepo::find_by_external_id(&pool, 603)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.title, "The Matrix");
    assert_eq!(stored.genre_ids.as_deref(), Some("[28,878]"));
}

// ---------------------------------------------------------------------------
// Test: Last write wins, absent fields become NULL
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_resolve_overwrites_fields(pool: PgPool) {
    CatalogResolver::resolve(&pool, ContentKind::Movie, &matrix())
        .await
        .unwrap();

    let refreshed = CatalogPayload {
        external_id: Some(603),
        title: Some("The Matrix (Remastered)".to_string()),
        ..Default::default()
    };
    let resolution = CatalogResolver::resolve(&pool, ContentKind::Movie, &refreshed)
        .await
        .unwrap();

    let movie = assert_matches!(resolution.content, ResolvedContent::Movie(m) => m);
    assert_eq!(movie.title, "The Matrix (Remastered)");
    assert_eq!(movie.genre_ids, None);
    assert_eq!(movie.summary, None);
    assert_eq!(movie.poster_url, None);
    assert_eq!(movie.release_date, None);
    assert!(movie.updated_at >= movie.created_at);
}

// ---------------------------------------------------------------------------
// Test: Validation failure has no side effect
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_invalid_payload_writes_nothing(pool: PgPool) {
    let missing_title = CatalogPayload {
        external_id: Some(1),
        ..Default::default()
    };
    let result = CatalogResolver::resolve(&pool, ContentKind::Movie, &missing_title).await;
    assert_matches!(result, Err(ResolveError::Invalid(CoreError::Validation(_))));

    let missing_id = CatalogPayload {
        title: Some("Untitled".to_string()),
        ..Default::default()
    };
    let result = CatalogResolver::resolve(&pool, ContentKind::Movie, &missing_id).await;
    assert_matches!(result, Err(ResolveError::Invalid(CoreError::Validation(_))));

    assert_eq!(movie_count(&pool).await, 0);
}

// ---------------------------------------------------------------------------
// Test: TV shows keep start and end dates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_resolve_tv_show_dates(pool: PgPool) {
    let payload = CatalogPayload {
        external_id: Some(1399),
        title: Some("Game of Thrones".to_string()),
        release_date: Some("2011-04-17".to_string()),
        end_date: Some("2019-05-19".to_string()),
        ..Default::default()
    };
    let resolution = CatalogResolver::resolve(&pool, ContentKind::TvShow, &payload)
        .await
        .unwrap();
    assert_matches!(resolution.content.content_ref(), ContentRef::TvShow(_));

    let show = TvShowRepo::find_by_external_id(&pool, 1399)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(show.start_date.map(|d| d.to_string()).as_deref(), Some("2011-04-17"));
    assert_eq!(show.end_date.map(|d| d.to_string()).as_deref(), Some("2019-05-19"));
}

// ---------------------------------------------------------------------------
// Test: Kinds are keyed independently
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_same_external_id_in_both_tables(pool: PgPool) {
    let movie = CatalogResolver::resolve(&pool, ContentKind::Movie, &matrix())
        .await
        .unwrap();
    let show = CatalogResolver::resolve(&pool, ContentKind::TvShow, &matrix())
        .await
        .unwrap();

    assert!(movie.created);
    assert!(show.created);
    assert_matches!(movie.content.content_ref(), ContentRef::Movie(_));
    assert_matches!(show.content.content_ref(), ContentRef::TvShow(_));
}

// ---------------------------------------------------------------------------
// Test: Concurrent first-time resolves converge
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_concurrent_resolves_converge(pool: PgPool) {
    let payload = matrix();
    let (a, b) = tokio::join!(
        CatalogResolver::resolve(&pool, ContentKind::Movie, &payload),
        CatalogResolver::resolve(&pool, ContentKind::Movie, &payload),
    );
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_eq!(a.content.content_ref(), b.content.content_ref());
    assert_eq!(movie_count(&pool).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_by_ids_batches(pool: PgPool) {
    let first = CatalogResolver::resolve(&pool, ContentKind::Movie, &matrix())
        .await
        .unwrap();
    let second = CatalogResolver::resolve(
        &pool,
        ContentKind::Movie,
        &CatalogPayload {
            external_id: Some(604),
            title: Some("The Matrix Reloaded".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let ids = [
        first.content.content_ref().movie_id().unwrap(),
        second.content.content_ref().movie_id().unwrap(),
    ];
    let movies = MovieRepo::find_by_ids(&pool, &ids).await.unwrap();
    assert_eq!(movies.len(), 2);
    assert!(MovieRepo::find_by_ids(&pool, &[]).await.unwrap().is_empty());
}
