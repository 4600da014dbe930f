/// Default TMDB v3 REST base URL.
pub const DEFAULT_API_URL: &str = "https://api.themoviedb.org/3";
/// Default prefix for poster paths (w500 renditions).
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
/// Language requested for titles and overviews.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// External catalog configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// TMDB API key. Catalog features are disabled when unset.
    pub api_key: Option<String>,
    pub api_url: String,
    pub image_base_url: String,
    pub language: String,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables.
    ///
    /// | Env Var               | Required | Default                            |
    /// |-----------------------|----------|------------------------------------|
    /// | `TMDB_API_KEY`        | no       | -- (catalog disabled)              |
    /// | `TMDB_API_URL`        | no       | `https://api.themoviedb.org/3`     |
    /// | `TMDB_IMAGE_BASE_URL` | no       | `https://image.tmdb.org/t/p/w500`  |
    pub fn from_env() -> Self {
        let api_key = std::env::var("TMDB_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let api_url = std::env::var("TMDB_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.into())
            .trim_end_matches('/')
            .to_string();

        let image_base_url = std::env::var("TMDB_IMAGE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_IMAGE_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        Self {
            api_key,
            api_url,
            image_base_url,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Configuration pointing at `api_url` with the given key and default
    /// image base.
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            api_url: api_url.into(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}
