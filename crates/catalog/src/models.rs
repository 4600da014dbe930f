//! TMDB response shapes and their conversion into catalog payloads.

use serde::{Deserialize, Serialize};
use watchlist_core::catalog::CatalogPayload;
use watchlist_core::content::ContentKind;
use watchlist_core::types::ExternalId;

/// A TMDB list response. Only the first page is ever requested, so the
/// paging counters are ignored.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
}

/// Genre object as returned by detail endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    pub id: i32,
    #[serde(default)]
    pub name: Option<String>,
}

/// A movie from a list, search, or detail endpoint.
///
/// List results carry `genre_ids`; detail results carry `genres` instead.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    pub id: ExternalId,
    pub title: String,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub release_date: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
}

/// A TV show from a list, search, or detail endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbTvShow {
    pub id: ExternalId,
    pub name: String,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub first_air_date: Option<String>,
    pub last_air_date: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
}

/// A `/search/multi` result. People and other media types are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "media_type", rename_all = "snake_case")]
pub enum MultiSearchResult {
    Movie(TmdbMovie),
    Tv(TmdbTvShow),
    #[serde(other)]
    Other,
}

/// A search hit tagged with the kind it would resolve as.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub content_type: ContentKind,
    #[serde(flatten)]
    pub item: CatalogPayload,
}

fn genre_list(genre_ids: &[i32], genres: &[Genre]) -> Vec<i32> {
    if genre_ids.is_empty() {
        genres.iter().map(|g| g.id).collect()
    } else {
        genre_ids.to_vec()
    }
}

fn poster_url(image_base_url: &str, poster_path: Option<&str>) -> Option<String> {
    poster_path
        .filter(|p| !p.is_empty())
        .map(|p| format!("{image_base_url}{p}"))
}

impl TmdbMovie {
    pub fn to_payload(&self, image_base_url: &str) -> CatalogPayload {
        CatalogPayload {
            external_id: Some(self.id),
            title: Some(self.title.clone()),
            genre_ids: Some(genre_list(&self.genre_ids, &self.genres)),
            release_date: self.release_date.clone(),
            end_date: None,
            summary: self.overview.clone(),
            poster_url: poster_url(image_base_url, self.poster_path.as_deref()),
        }
    }
}

impl TmdbTvShow {
    pub fn to_payload(&self, image_base_url: &str) -> CatalogPayload {
        CatalogPayload {
            external_id: Some(self.id),
            title: Some(self.name.clone()),
            genre_ids: Some(genre_list(&self.genre_ids, &self.genres)),
            release_date: self.first_air_date.clone(),
            end_date: self.last_air_date.clone(),
            summary: self.overview.clone(),
            poster_url: poster_url(image_base_url, self.poster_path.as_deref()),
        }
    }
}

impl MultiSearchResult {
    pub fn to_hit(&self, image_base_url: &str) -> Option<SearchHit> {
        match self {
            Self::Movie(movie) => Some(SearchHit {
                content_type: ContentKind::Movie,
                item: movie.to_payload(image_base_url),
            }),
            Self::Tv(show) => Some(SearchHit {
                content_type: ContentKind::TvShow,
                item: show.to_payload(image_base_url),
            }),
            Self::Other => None,
        }
    }
}
