//! Client for the external movie and TV catalog (TMDB v3).
//!
//! Results are converted into [`watchlist_core::catalog::CatalogPayload`]s,
//! the same shape clients send when adding items to a watchlist.

pub mod api;
pub mod config;
pub mod models;

pub use api::{CatalogError, TmdbClient};
pub use config::CatalogConfig;
