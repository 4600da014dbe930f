//! Domain error shared by every layer. The HTTP boundary maps each variant
//! to a status code in `watchlist_api::error`.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Lookup by something other than the primary key (login by email).
    #[error("{entity} with {field} {value} not found")]
    NotFoundBy {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Bad input: malformed catalog payload, unknown status, both content
    /// kinds supplied, and similar.
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Bad credentials or an unusable session token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller does not own the resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
