//! Watchlist entry progress status.
//!
//! The string forms must match the CHECK constraint on
//! `watchlist_entries.status` in `20260101000004_create_watchlist_entries.sql`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Progress of a user on one catalog item.
///
/// Any status may be set from any other; only membership in the enumeration
/// is enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchStatus {
    #[default]
    Planned,
    Watching,
    Completed,
}

impl WatchStatus {
    pub const ALL: [WatchStatus; 3] = [Self::Planned, Self::Watching, Self::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Watching => "watching",
            Self::Completed => "completed",
        }
    }

    /// Interpret an optional status field from a request body.
    ///
    /// `None` and the empty string both mean "not supplied".
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, CoreError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some),
        }
    }
}

impl FromStr for WatchStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid status '{s}'. Expected one of: planned, watching, completed"
                ))
            })
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn default_is_planned() {
        assert_eq!(WatchStatus::default(), WatchStatus::Planned);
    }

    #[test]
    fn parses_every_known_status() {
        for status in WatchStatus::ALL {
            assert_eq!(status.as_str().parse::<WatchStatus>().unwrap(), status);
        }
    }

    #[test]
    fn rejects_unknown_status() {
        assert_matches!(
            "dropped".parse::<WatchStatus>(),
            Err(CoreError::Validation(msg)) if msg.contains("dropped")
        );
    }

    #[test]
    fn empty_status_counts_as_absent() {
        assert_eq!(WatchStatus::parse_optional(None).unwrap(), None);
        assert_eq!(WatchStatus::parse_optional(Some("")).unwrap(), None);
        assert_eq!(WatchStatus::parse_optional(Some("  ")).unwrap(), None);
        assert_eq!(
            WatchStatus::parse_optional(Some("watching")).unwrap(),
            Some(WatchStatus::Watching)
        );
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&WatchStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }
}
