//! Batch import of the external catalog's popular titles.
//!
//! Every item goes through [`CatalogResolver`], so a sync run and a user
//! adding the same title converge on one row.

use sqlx::PgPool;
use watchlist_catalog::{CatalogError, TmdbClient};
use watchlist_core::catalog::CatalogPayload;
use watchlist_core::content::ContentKind;
use watchlist_db::resolver::{CatalogResolver, ResolveError};

/// Counts from one sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub created: usize,
    pub updated: usize,
    /// Items rejected by validation (for example an empty title).
    pub skipped: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Fetch the first page of popular movies and TV shows and upsert each one.
///
/// Invalid items are skipped with a warning. A storage error aborts the run;
/// items already written stay written.
pub async fn sync_popular(pool: &PgPool, client: &TmdbClient) -> Result<SyncReport, SyncError> {
    let mut report = SyncReport::default();

    let movies = client.popular_movies().await?;
    sync_items(pool, ContentKind::Movie, &movies, &mut report).await?;

    let shows = client.popular_tv().await?;
    sync_items(pool, ContentKind::TvShow, &shows, &mut report).await?;

    tracing::info!(
        created = report.created,
        updated = report.updated,
        skipped = report.skipped,
        "Catalog sync finished",
    );
    Ok(report)
}

async fn sync_items(
    pool: &PgPool,
    kind: ContentKind,
    items: &[CatalogPayload],
    report: &mut SyncReport,
) -> Result<(), SyncError> {
    for item in items {
        match CatalogResolver::resolve(pool, kind, item).await {
            Ok(resolution) if resolution.created => report.created += 1,
            Ok(_) => report.updated += 1,
            Err(ResolveError::Invalid(e)) => {
                tracing::warn!(
                    kind = %kind,
                    external_id = ?item.external_id,
                    error = %e,
                    "Skipping invalid catalog item",
                );
                report.skipped += 1;
            }
            Err(ResolveError::Database(e)) => return Err(e.into()),
        }
    }
    Ok(())
}
