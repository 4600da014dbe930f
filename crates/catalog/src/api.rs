//! REST API client for the TMDB v3 endpoints.
//!
//! Wraps the popular / upcoming / search / detail endpoints using
//! [`reqwest`] and converts every result into a [`CatalogPayload`].

use serde::de::DeserializeOwned;
use watchlist_core::catalog::CatalogPayload;
use watchlist_core::types::ExternalId;

use crate::config::CatalogConfig;
use crate::models::{MultiSearchResult, Page, SearchHit, TmdbMovie, TmdbTvShow};

/// HTTP client for the external catalog.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    image_base_url: String,
    language: String,
}

/// Errors from the catalog API layer.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// TMDB returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl TmdbClient {
    /// Build a client from configuration. Returns `None` when no API key is
    /// configured.
    pub fn from_config(config: &CatalogConfig) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        Some(Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key,
            image_base_url: config.image_base_url.clone(),
            language: config.language.clone(),
        })
    }

    /// First page of currently popular movies (`GET /movie/popular`).
    pub async fn popular_movies(&self) -> Result<Vec<CatalogPayload>, CatalogError> {
        let page: Page<TmdbMovie> = self.get("/movie/popular", &[("page", "1")]).await?;
        Ok(self.movie_payloads(&page.results))
    }

    /// First page of upcoming movies (`GET /movie/upcoming`).
    pub async fn upcoming_movies(&self) -> Result<Vec<CatalogPayload>, CatalogError> {
        let page: Page<TmdbMovie> = self.get("/movie/upcoming", &[("page", "1")]).await?;
        Ok(self.movie_payloads(&page.results))
    }

    /// First page of currently popular TV shows (`GET /tv/popular`).
    pub async fn popular_tv(&self) -> Result<Vec<CatalogPayload>, CatalogError> {
        let page: Page<TmdbTvShow> = self.get("/tv/popular", &[("page", "1")]).await?;
        Ok(page
            .results
            .iter()
            .map(|show| show.to_payload(&self.image_base_url))
            .collect())
    }

    /// Search movies and TV shows by free text (`GET /search/multi`).
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, CatalogError> {
        let page: Page<MultiSearchResult> = self
            .get("/search/multi", &[("query", query), ("page", "1")])
            .await?;
        Ok(page
            .results
            .iter()
            .filter_map(|result| result.to_hit(&self.image_base_url))
            .collect())
    }

    /// Full details of one movie (`GET /movie/{id}`).
    pub async fn movie_details(&self, id: ExternalId) -> Result<CatalogPayload, CatalogError> {
        let movie: TmdbMovie = self.get(&format!("/movie/{id}"), &[]).await?;
        Ok(movie.to_payload(&self.image_base_url))
    }

    /// Full details of one TV show (`GET /tv/{id}`).
    pub async fn tv_details(&self, id: ExternalId) -> Result<CatalogPayload, CatalogError> {
        let show: TmdbTvShow = self.get(&format!("/tv/{id}"), &[]).await?;
        Ok(show.to_payload(&self.image_base_url))
    }

    // ---- private helpers ----

    fn movie_payloads(&self, movies: &[TmdbMovie]) -> Vec<CatalogPayload> {
        movies
            .iter()
            .map(|movie| movie.to_payload(&self.image_base_url))
            .collect()
    }

    /// Issue an authenticated GET and decode the JSON body.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        tracing::debug!(path, "Querying external catalog");

        let response = self
            .client
            .get(format!("{}{}", self.api_url, path))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .query(params)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`CatalogError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CatalogError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
