//! Catalog payloads: the descriptive fields of a movie or TV show as sourced
//! from the external catalog, and their validation into storable fields.

use serde::{Deserialize, Serialize, Serializer};

use crate::error::CoreError;
use crate::types::{Date, ExternalId};

/// Maximum title length, matching `VARCHAR(200)` on `movies` / `tv_shows`.
pub const MAX_TITLE_LENGTH: usize = 200;

/// External catalog item as supplied by a client or the catalog client.
///
/// Field aliases accept the external catalog's own names (`tmdb_id`,
/// `overview`, `first_air_date`, ...) so TMDB-shaped bodies can be passed
/// through unchanged. For TV shows `release_date` is the first air date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogPayload {
    #[serde(default, alias = "tmdb_id")]
    pub external_id: Option<ExternalId>,
    #[serde(default, alias = "name")]
    pub title: Option<String>,
    #[serde(default)]
    pub genre_ids: Option<Vec<i32>>,
    #[serde(default, alias = "start_date", alias = "first_air_date")]
    pub release_date: Option<String>,
    #[serde(default, alias = "last_air_date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, alias = "overview")]
    pub summary: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// Validated, storage-ready catalog fields.
///
/// Every optional field is written as-is by the resolver, so `None` clears
/// a previously cached value.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogFields {
    pub external_id: ExternalId,
    pub title: String,
    /// JSON array text, e.g. `[28,12]`.
    pub genre_ids: Option<String>,
    pub release_date: Option<Date>,
    pub end_date: Option<Date>,
    pub summary: Option<String>,
    pub poster_url: Option<String>,
}

impl CatalogPayload {
    /// Check required fields and normalize the rest.
    pub fn validate(&self) -> Result<CatalogFields, CoreError> {
        let external_id = self
            .external_id
            .ok_or_else(|| CoreError::Validation("external_id is required".into()))?;

        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| CoreError::Validation("title is required".into()))?;

        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(CoreError::Validation(format!(
                "title must be at most {MAX_TITLE_LENGTH} characters"
            )));
        }

        Ok(CatalogFields {
            external_id,
            title: title.to_string(),
            genre_ids: self.genre_ids.as_deref().map(encode_genre_ids),
            release_date: parse_catalog_date("release_date", self.release_date.as_deref())?,
            end_date: parse_catalog_date("end_date", self.end_date.as_deref())?,
            summary: non_blank(self.summary.as_deref()),
            poster_url: non_blank(self.poster_url.as_deref()),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Parse a catalog date.
///
/// Accepts `YYYY-MM-DD` and full RFC 3339 timestamps (only the date part is
/// kept). Empty strings mean "unknown"; TMDB returns `""` for unreleased
/// titles.
pub fn parse_catalog_date(field: &str, raw: Option<&str>) -> Result<Option<Date>, CoreError> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(None);
    };

    let date_part = match raw.find('T') {
        Some(idx) => &raw[..idx],
        None => raw,
    };

    Date::parse_from_str(date_part, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| CoreError::Validation(format!("{field} must be a YYYY-MM-DD date, got '{raw}'")))
}

/// Serialize an ordered genre id list into its storage text form.
pub fn encode_genre_ids(ids: &[i32]) -> String {
    let parts: Vec<String> = ids.iter().map(i32::to_string).collect();
    format!("[{}]", parts.join(","))
}

/// Decode the storage text form back into genre ids.
///
/// Returns `None` for text that is not a JSON integer array.
pub fn decode_genre_ids(text: &str) -> Option<Vec<i32>> {
    serde_json::from_str(text).ok()
}

/// `serialize_with` helper exposing the stored genre text as a JSON array.
pub fn serialize_genre_ids<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    value
        .as_deref()
        .and_then(decode_genre_ids)
        .serialize(serializer)
}
