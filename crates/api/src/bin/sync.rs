//! One-shot import of the external catalog's popular movies and TV shows.
//!
//! Reads `DATABASE_URL` and the `TMDB_*` variables, applies pending
//! migrations, then upserts every popular title through the resolver.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use watchlist_api::sync::sync_popular;
use watchlist_catalog::{CatalogConfig, TmdbClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "watchlist_api=info,watchlist_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CatalogConfig::from_env();
    let client = TmdbClient::from_config(&config).context("TMDB_API_KEY must be set")?;

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = watchlist_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    watchlist_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let report = sync_popular(&pool, &client).await?;
    println!(
        "Synced catalog: {} created, {} updated, {} skipped",
        report.created, report.updated, report.skipped
    );
    Ok(())
}
