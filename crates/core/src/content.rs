//! Content references: which catalog item a watchlist entry or notification
//! points at.
//!
//! The database stores a reference as two nullable foreign keys
//! (`movie_id`, `tv_show_id`). In Rust it is a tagged union so that the
//! "exactly one" rule is checked once, when a row is read or a request is
//! decoded.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// The two concrete catalog item variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Movie,
    TvShow,
}

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::TvShow => "tv_show",
        }
    }
}

impl FromStr for ContentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(Self::Movie),
            "tv_show" => Ok(Self::TvShow),
            other => Err(CoreError::Validation(format!(
                "Invalid content type '{other}'. Expected 'movie' or 'tv_show'"
            ))),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to exactly one local catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ContentRef {
    Movie(DbId),
    TvShow(DbId),
}

impl ContentRef {
    pub fn kind(self) -> ContentKind {
        match self {
            Self::Movie(_) => ContentKind::Movie,
            Self::TvShow(_) => ContentKind::TvShow,
        }
    }

    pub fn movie_id(self) -> Option<DbId> {
        match self {
            Self::Movie(id) => Some(id),
            Self::TvShow(_) => None,
        }
    }

    pub fn tv_show_id(self) -> Option<DbId> {
        match self {
            Self::TvShow(id) => Some(id),
            Self::Movie(_) => None,
        }
    }

    /// Build a reference from the two storage columns, requiring exactly one.
    pub fn from_columns(movie_id: Option<DbId>, tv_show_id: Option<DbId>) -> Result<Self, CoreError> {
        match Self::from_optional_columns(movie_id, tv_show_id)? {
            Some(content) => Ok(content),
            None => Err(CoreError::Validation(
                "A content reference requires either a movie or a TV show".into(),
            )),
        }
    }

    /// Build an optional reference from the two storage columns, allowing
    /// neither but never both.
    pub fn from_optional_columns(
        movie_id: Option<DbId>,
        tv_show_id: Option<DbId>,
    ) -> Result<Option<Self>, CoreError> {
        match (movie_id, tv_show_id) {
            (Some(_), Some(_)) => Err(CoreError::Validation(
                "A content reference cannot point at both a movie and a TV show".into(),
            )),
            (Some(id), None) => Ok(Some(Self::Movie(id))),
            (None, Some(id)) => Ok(Some(Self::TvShow(id))),
            (None, None) => Ok(None),
        }
    }
}
