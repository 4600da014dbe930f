//! Rules for watchlist writes: which catalog payload a request targets and
//! who may touch an entry.

use crate::content::ContentKind;
use crate::error::CoreError;
use crate::types::DbId;

/// Parse the optional `content_type` discriminator of a watchlist request.
///
/// `None` and the empty string both mean "not supplied".
pub fn parse_content_type(raw: Option<&str>) -> Result<Option<ContentKind>, CoreError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

/// Pick the catalog payload a watchlist request refers to.
///
/// At most one of `movie` / `tv` may be present. When `content_type` is
/// supplied it must agree with the payload that is. Returns `None` when no
/// payload was supplied at all.
pub fn select_content<T>(
    content_type: Option<ContentKind>,
    movie: Option<T>,
    tv: Option<T>,
) -> Result<Option<(ContentKind, T)>, CoreError> {
    let selected = match (movie, tv) {
        (Some(_), Some(_)) => {
            return Err(CoreError::Validation(
                "Provide either movie_data or tv_data, not both".into(),
            ))
        }
        (Some(payload), None) => Some((ContentKind::Movie, payload)),
        (None, Some(payload)) => Some((ContentKind::TvShow, payload)),
        (None, None) => None,
    };

    match (content_type, &selected) {
        (Some(declared), Some((actual, _))) if declared != *actual => {
            Err(CoreError::Validation(format!(
                "content_type '{declared}' does not match the supplied {} data",
                actual.as_str()
            )))
        }
        (Some(declared), None) => Err(CoreError::Validation(format!(
            "content_type '{declared}' requires matching content data"
        ))),
        _ => Ok(selected),
    }
}

/// Like [`select_content`], but a payload is mandatory.
pub fn require_content<T>(
    content_type: Option<ContentKind>,
    movie: Option<T>,
    tv: Option<T>,
) -> Result<(ContentKind, T), CoreError> {
    select_content(content_type, movie, tv)?.ok_or_else(|| {
        CoreError::Validation("Either movie_data or tv_data is required".into())
    })
}

/// Reject access to a resource owned by another user.
///
/// Callers check existence first so that a missing row is `NotFound`
/// regardless of who asks.
pub fn ensure_owner(owner_id: DbId, caller_id: DbId, entity: &str) -> Result<(), CoreError> {
    if owner_id == caller_id {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "You do not have access to this {entity}"
        )))
    }
}
