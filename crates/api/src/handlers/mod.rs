//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `watchlist_db` (or
//! the catalog resolver) and map errors via [`AppError`].

pub mod auth;
pub mod catalog;
pub mod movies;
pub mod notification;
pub mod tv_shows;
pub mod users;
pub mod watchlist;

use validator::Validate;
use watchlist_core::error::CoreError;

use crate::error::{AppError, AppResult};

/// Run `validator` rules on a request body, mapping failures to a 400.
pub(crate) fn validate_input<T: Validate>(input: &T) -> AppResult<()> {
    input
        .validate()
        .map_err(|errors| AppError::Core(CoreError::Validation(errors.to_string())))
}
