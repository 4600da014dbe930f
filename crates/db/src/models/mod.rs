//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Create / update inputs where the table is written outside the resolver

pub mod movie;
pub mod notification;
pub mod tv_show;
pub mod user;
pub mod watchlist_entry;

use sqlx::FromRow;

/// A row returned by an `INSERT ... ON CONFLICT DO UPDATE` upsert, together
/// with whether the statement inserted it (`xmax = 0`) or updated it.
#[derive(Debug, Clone, FromRow)]
pub struct Upserted<T> {
    #[sqlx(flatten)]
    pub row: T,
    pub inserted: bool,
}
