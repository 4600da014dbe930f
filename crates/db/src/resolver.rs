//! Catalog resolver: maps an external catalog payload onto the local movie or
//! TV show row with the same external id, creating or refreshing it.

use sqlx::PgPool;
use watchlist_core::catalog::CatalogPayload;
use watchlist_core::content::{ContentKind, ContentRef};
use watchlist_core::error::CoreError;

use crate::models::movie::Movie;
use crate::models::tv_show::TvShow;
use crate::models::Upserted;
use crate::repositories::{MovieRepo, TvShowRepo};

/// Failure while resolving a catalog payload.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The payload failed validation; nothing was written.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// The local row a payload resolved to.
#[derive(Debug, Clone)]
pub enum ResolvedContent {
    Movie(Movie),
    TvShow(TvShow),
}

impl ResolvedContent {
    pub fn content_ref(&self) -> ContentRef {
        match self {
            Self::Movie(movie) => ContentRef::Movie(movie.id),
            Self::TvShow(show) => ContentRef::TvShow(show.id),
        }
    }

    pub fn into_parts(self) -> (Option<Movie>, Option<TvShow>) {
        match self {
            Self::Movie(movie) => (Some(movie), None),
            Self::TvShow(show) => (None, Some(show)),
        }
    }
}

/// Outcome of a resolve: the row, and whether this call created it.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub content: ResolvedContent,
    pub created: bool,
}

/// Stateless resolver over the movie and TV show repositories.
///
/// Last write wins: every descriptive field is replaced by the payload's, and
/// absent optional fields become `NULL`. Validation happens before any
/// statement is issued.
pub struct CatalogResolver;

impl CatalogResolver {
    /// Validate `payload` and upsert it as a `kind` row keyed by external id.
    pub async fn resolve(
        pool: &PgPool,
        kind: ContentKind,
        payload: &CatalogPayload,
    ) -> Result<Resolution, ResolveError> {
        let resolution = match kind {
            ContentKind::Movie => {
                let upserted = Self::resolve_movie(pool, payload).await?;
                Resolution {
                    content: ResolvedContent::Movie(upserted.row),
                    created: upserted.inserted,
                }
            }
            ContentKind::TvShow => {
                let upserted = Self::resolve_tv_show(pool, payload).await?;
                Resolution {
                    content: ResolvedContent::TvShow(upserted.row),
                    created: upserted.inserted,
                }
            }
        };
        Ok(resolution)
    }

    /// Validate `payload` and upsert it into `movies`.
    pub async fn resolve_movie(
        pool: &PgPool,
        payload: &CatalogPayload,
    ) -> Result<Upserted<Movie>, ResolveError> {
        let fields = payload.validate()?;
        let upserted = MovieRepo::upsert_by_external_id(pool, &fields).await?;
        tracing::debug!(
            kind = %ContentKind::Movie,
            external_id = fields.external_id,
            local_id = upserted.row.id,
            created = upserted.inserted,
            "Catalog item resolved",
        );
        Ok(upserted)
    }

    /// Validate `payload` and upsert it into `tv_shows`.
    pub async fn resolve_tv_show(
        pool: &PgPool,
        payload: &CatalogPayload,
    ) -> Result<Upserted<TvShow>, ResolveError> {
        let fields = payload.validate()?;
        let upserted = TvShowRepo::upsert_by_external_id(pool, &fields).await?;
        tracing::debug!(
            kind = %ContentKind::TvShow,
            external_id = fields.external_id,
            local_id = upserted.row.id,
            created = upserted.inserted,
            "Catalog item resolved",
        );
        Ok(upserted)
    }
}
