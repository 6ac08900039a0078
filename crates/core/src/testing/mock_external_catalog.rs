//! Mock external catalog for testing.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::external_catalog::{ExternalCatalog, ExternalCatalogError};
use crate::show::{Show, ShowId};

/// Mock implementation of the ExternalCatalog trait.
///
/// Every search returns the configured shows in the order they were added,
/// whatever the query. Queries are recorded for assertions, and a single
/// failure can be queued with [`set_next_error`](Self::set_next_error).
#[derive(Debug)]
pub struct MockExternalCatalog {
    shows: Arc<RwLock<Vec<Show>>>,
    queries: Arc<RwLock<Vec<String>>>,
    next_error: Arc<RwLock<Option<ExternalCatalogError>>>,
    delay: Arc<RwLock<Option<Duration>>>,
}

impl Default for MockExternalCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockExternalCatalog {
    pub fn new() -> Self {
        Self {
            shows: Arc::new(RwLock::new(Vec::new())),
            queries: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            delay: Arc::new(RwLock::new(None)),
        }
    }

    /// Add a show, replacing any with the same id.
    pub async fn add_show(&self, show: Show) {
        let mut shows = self.shows.write().await;
        match shows.iter_mut().find(|s| s.id == show.id) {
            Some(existing) => *existing = show,
            None => shows.push(show),
        }
    }

    /// Replace all shows at once.
    pub async fn set_shows(&self, shows: Vec<Show>) {
        *self.shows.write().await = shows;
    }

    /// Make the next call fail with `error`.
    pub async fn set_next_error(&self, error: ExternalCatalogError) {
        *self.next_error.write().await = Some(error);
    }

    /// Hold every response for `delay` before answering.
    pub async fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.write().await = delay;
    }

    pub async fn recorded_queries(&self) -> Vec<String> {
        self.queries.read().await.clone()
    }

    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }

    async fn respond(&self) -> Result<(), ExternalCatalogError> {
        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match self.next_error.write().await.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ExternalCatalog for MockExternalCatalog {
    async fn search_shows(&self, query: &str) -> Result<Vec<Show>, ExternalCatalogError> {
        self.queries.write().await.push(query.to_string());
        self.respond().await?;
        Ok(self.shows.read().await.clone())
    }

    async fn get_show(&self, id: ShowId) -> Result<Show, ExternalCatalogError> {
        self.respond().await?;
        self.shows
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| ExternalCatalogError::NotFound(format!("show {}", id)))
    }
}
