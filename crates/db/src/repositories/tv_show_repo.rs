//! Repository for the `tv_shows` table.

use sqlx::PgPool;
use watchlist_core::catalog::CatalogFields;
use watchlist_core::types::{DbId, ExternalId};

use crate::models::tv_show::TvShow;
use crate::models::Upserted;

/// Column list for `tv_shows` queries.
const COLUMNS: &str = "id, external_id, title, genre_ids, start_date, end_date, summary, \
                        poster_url, created_at, updated_at";

/// Provides lookups and the external-id upsert for TV shows.
pub struct TvShowRepo;

impl TvShowRepo {
    /// Insert or refresh the TV show with `fields.external_id`.
    ///
    /// Same single-statement semantics as
    /// [`MovieRepo::upsert_by_external_id`](super::MovieRepo::upsert_by_external_id),
    /// guarded by `uq_tv_shows_external_id`. The payload's `release_date` is
    /// stored as `start_date`.
    pub async fn upsert_by_external_id(
        pool: &PgPool,
        fields: &CatalogFields,
    ) -> Result<Upserted<TvShow>, sqlx::Error> {
        let query = format!(
            "INSERT INTO tv_shows \
                (external_id, title, genre_ids, start_date, end_date, summary, poster_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (external_id) DO UPDATE SET \
                title = EXCLUDED.title, \
                genre_ids = EXCLUDED.genre_ids, \
                start_date = EXCLUDED.start_date, \
                end_date = EXCLUDED.end_date, \
                summary = EXCLUDED.summary, \
                poster_url = EXCLUDED.poster_url, \
                updated_at = NOW() \
             RETURNING {COLUMNS}, (xmax = 0) AS inserted"
        );
        sqlx::query_as::<_, Upserted<TvShow>>(&query)
            .bind(fields.external_id)
            .bind(&fields.title)
            .bind(&fields.genre_ids)
            .bind(fields.release_date)
            .bind(fields.end_date)
            .bind(&fields.summary)
            .bind(&fields.poster_url)
            .fetch_one(pool)
            .await
    }

    /// Find a TV show by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TvShow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tv_shows WHERE id = $1");
        sqlx::query_as::<_, TvShow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a TV show by its external catalog ID.
    pub async fn find_by_external_id(
        pool: &PgPool,
        external_id: ExternalId,
    ) -> Result<Option<TvShow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tv_shows WHERE external_id = $1");
        sqlx::query_as::<_, TvShow>(&query)
            .bind(external_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch every TV show whose ID is in `ids`, in no particular order.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<TvShow>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM tv_shows WHERE id = ANY($1)");
        sqlx::query_as::<_, TvShow>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List all tv_shows ordered by title.
    pub async fn list(pool: &PgPool) -> Result<Vec<TvShow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tv_shows ORDER BY title, id");
        sqlx::query_as::<_, TvShow>(&query).fetch_all(pool).await
    }
}
