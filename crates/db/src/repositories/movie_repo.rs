//! Repository for the `movies` table.

use sqlx::PgPool;
use watchlist_core::catalog::CatalogFields;
use watchlist_core::types::{DbId, ExternalId};

use crate::models::movie::Movie;
use crate::models::Upserted;

/// Column list for `movies` queries.
const COLUMNS: &str = "id, external_id, title, genre_ids, release_date, summary, poster_url, \
                        created_at, updated_at";

/// Provides lookups and the external-id upsert for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert or refresh the movie with `fields.external_id`.
    ///
    /// Single statement guarded by `uq_movies_external_id`, so concurrent
    /// first-time upserts of the same id converge on one row. Every mutable
    /// column is overwritten, including with `NULL`.
    pub async fn upsert_by_external_id(
        pool: &PgPool,
        fields: &CatalogFields,
    ) -> Result<Upserted<Movie>, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (external_id, title, genre_ids, release_date, summary, poster_url) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (external_id) DO UPDATE SET \
                title = EXCLUDED.title, \
                genre_ids = EXCLUDED.genre_ids, \
                release_date = EXCLUDED.release_date, \
                summary = EXCLUDED.summary, \
                poster_url = EXCLUDED.poster_url, \
                updated_at = NOW() \
             RETURNING {COLUMNS}, (xmax = 0) AS inserted"
        );
        sqlx::query_as::<_, Upserted<Movie>>(&query)
            .bind(fields.external_id)
            .bind(&fields.title)
            .bind(&fields.genre_ids)
            .bind(fields.release_date)
            .bind(&fields.summary)
            .bind(&fields.poster_url)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a movie by its external catalog ID.
    pub async fn find_by_external_id(
        pool: &PgPool,
        external_id: ExternalId,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE external_id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(external_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch every movie whose ID is in `ids`, in no particular order.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Movie>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = ANY($1)");
        sqlx::query_as::<_, Movie>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List all movies ordered by title.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY title, id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }
}
