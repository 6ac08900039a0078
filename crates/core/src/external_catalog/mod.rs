//! External show catalog integration.
//!
//! The catalog is the search capability of the application: a single
//! best-effort request per submission, decoded into [`Show`] records at the
//! boundary so nothing downstream re-checks their shape.

mod tvmaze;

pub use tvmaze::{TvMazeClient, TvMazeConfig};

use async_trait::async_trait;
use thiserror::Error;

use crate::show::{Show, ShowId};

/// Errors that can occur when interacting with the external catalog.
#[derive(Debug, Error)]
pub enum ExternalCatalogError {
    /// HTTP request failed (connection, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ExternalCatalogError {
    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ExternalCatalogError::HttpError(_) => "transport",
            ExternalCatalogError::NotFound(_) => "not_found",
            ExternalCatalogError::ApiError { .. } => "api",
            ExternalCatalogError::ParseError(_) => "parse",
        }
    }
}

/// Trait for show catalog clients.
#[async_trait]
pub trait ExternalCatalog: Send + Sync {
    /// Search for shows by free-text query, in catalog relevance order.
    async fn search_shows(&self, query: &str) -> Result<Vec<Show>, ExternalCatalogError>;

    /// Get a specific show by ID.
    async fn get_show(&self, id: ShowId) -> Result<Show, ExternalCatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_labels() {
        assert_eq!(
            ExternalCatalogError::NotFound("Show 1".to_string()).kind(),
            "not_found"
        );
        assert_eq!(
            ExternalCatalogError::ApiError {
                status: 500,
                message: String::new()
            }
            .kind(),
            "api"
        );
        assert_eq!(
            ExternalCatalogError::ParseError("bad".to_string()).kind(),
            "parse"
        );
    }

    #[test]
    fn test_error_display() {
        let err = ExternalCatalogError::ApiError {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 503 - unavailable");
    }
}
