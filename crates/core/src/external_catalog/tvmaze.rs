//! TVmaze API client.
//!
//! TVmaze needs no API key for the public search and lookup endpoints.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ExternalCatalogError;
use crate::show::{Show, ShowId, ShowImage, ShowRating};

const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// TVmaze API client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TvMazeConfig {
    /// Base URL (default: https://api.tvmaze.com).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl TvMazeConfig {
    /// Effective base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    /// Effective request timeout.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

/// TVmaze API client.
pub struct TvMazeClient {
    client: Client,
    base_url: String,
}

impl TvMazeClient {
    /// Create a new TVmaze client.
    pub fn new(config: TvMazeConfig) -> Result<Self, ExternalCatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search/shows?q={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }

    fn show_url(&self, id: ShowId) -> String {
        format!("{}/shows/{}", self.base_url, id)
    }

    /// Search for shows by query.
    pub async fn search_shows(&self, query: &str) -> Result<Vec<Show>, ExternalCatalogError> {
        let url = self.search_url(query);

        debug!("TVmaze show search: query='{}'", query);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExternalCatalogError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let hits: Vec<TvMazeSearchHit> = response.json().await.map_err(|e| {
            ExternalCatalogError::ParseError(format!("Failed to parse show search response: {}", e))
        })?;

        debug!("TVmaze returned {} hits for '{}'", hits.len(), query);

        Ok(hits.into_iter().map(|hit| hit.show.into()).collect())
    }

    /// Get a specific show by TVmaze ID.
    pub async fn get_show(&self, id: ShowId) -> Result<Show, ExternalCatalogError> {
        let url = self.show_url(id);

        debug!("TVmaze get show: id={}", id);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == 404 {
            return Err(ExternalCatalogError::NotFound(format!("Show ID {}", id)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExternalCatalogError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let show: TvMazeShow = response.json().await.map_err(|e| {
            ExternalCatalogError::ParseError(format!("Failed to parse show response: {}", e))
        })?;

        Ok(show.into())
    }
}

#[async_trait::async_trait]
impl super::ExternalCatalog for TvMazeClient {
    async fn search_shows(&self, query: &str) -> Result<Vec<Show>, ExternalCatalogError> {
        TvMazeClient::search_shows(self, query).await
    }

    async fn get_show(&self, id: ShowId) -> Result<Show, ExternalCatalogError> {
        TvMazeClient::get_show(self, id).await
    }
}

// ============================================================================
// TVmaze API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct TvMazeSearchHit {
    #[allow(dead_code)]
    #[serde(default)]
    score: Option<f64>,
    show: TvMazeShow,
}

#[derive(Debug, Deserialize)]
struct TvMazeShow {
    id: u64,
    name: Option<String>,
    image: Option<TvMazeImage>,
    genres: Option<Vec<String>>,
    rating: Option<TvMazeRating>,
}

#[derive(Debug, Deserialize)]
struct TvMazeImage {
    medium: Option<String>,
    original: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TvMazeRating {
    average: Option<f64>,
}

// ============================================================================
// Conversions
// ============================================================================

impl From<TvMazeShow> for Show {
    fn from(s: TvMazeShow) -> Self {
        Self {
            id: ShowId(s.id),
            name: s.name,
            image: s.image.map(|i| ShowImage {
                medium: i.medium,
                original: i.original,
            }),
            genres: s.genres.unwrap_or_default(),
            rating: s.rating.map(|r| ShowRating { average: r.average }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TvMazeConfig::default();
        assert_eq!(config.base_url(), "https://api.tvmaze.com");
        assert_eq!(config.timeout_secs(), 30);
    }

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = TvMazeConfig {
            base_url: Some("http://localhost:9999/".to_string()),
            timeout_secs: Some(5),
        };
        assert_eq!(config.base_url(), "http://localhost:9999");
    }

    #[test]
    fn test_search_url_encodes_query() {
        let client = TvMazeClient::new(TvMazeConfig::default()).unwrap();
        assert_eq!(
            client.search_url("Breaking Bad & co"),
            "https://api.tvmaze.com/search/shows?q=Breaking%20Bad%20%26%20co"
        );
        assert_eq!(client.show_url(ShowId(169)), "https://api.tvmaze.com/shows/169");
    }

    #[test]
    fn test_search_hits_conversion() {
        let body = r#"[
            {
                "score": 0.91,
                "show": {
                    "id": 169,
                    "name": "Breaking Bad",
                    "language": "English",
                    "genres": ["Drama", "Crime", "Thriller"],
                    "rating": { "average": 9.2 },
                    "image": {
                        "medium": "https://static.tvmaze.com/m.jpg",
                        "original": "https://static.tvmaze.com/o.jpg"
                    }
                }
            },
            {
                "score": 0.4,
                "show": { "id": 5, "name": "Obscure", "genres": [], "rating": { "average": null }, "image": null }
            }
        ]"#;

        let hits: Vec<TvMazeSearchHit> = serde_json::from_str(body).unwrap();
        let shows: Vec<Show> = hits.into_iter().map(|h| h.show.into()).collect();

        assert_eq!(shows.len(), 2);
        assert_eq!(shows[0].id, ShowId(169));
        assert_eq!(shows[0].image_url(), Some("https://static.tvmaze.com/m.jpg"));
        assert_eq!(shows[0].rating_average(), Some(9.2));
        assert_eq!(shows[1].id, ShowId(5));
        assert!(shows[1].image.is_none());
        assert!(shows[1].rating_average().is_none());
    }

    #[test]
    fn test_show_conversion_missing_optionals() {
        let show: TvMazeShow = serde_json::from_str(r#"{ "id": 42 }"#).unwrap();
        let show: Show = show.into();
        assert_eq!(show.id, ShowId(42));
        assert!(show.name.is_none());
        assert!(show.genres.is_empty());
        assert!(show.rating.is_none());
    }
}
