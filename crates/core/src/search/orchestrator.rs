//! Drives the catalog and owns the search state machine.

use std::time::Instant;

use tracing::{debug, error, info};

use super::{SearchError, SearchOutcome, SearchState, SearchTicket};
use crate::external_catalog::{ExternalCatalog, ExternalCatalogError};
use crate::metrics::{SEARCHES_TOTAL, SEARCH_DURATION, SEARCH_RESULTS};
use crate::results::ResultCache;
use crate::show::Show;

/// Search state machine: `Idle → Searching → {Populated | Empty | Failed}`.
///
/// Submission and completion are separate steps so a caller can release any
/// lock around the session while the catalog request is in flight. Responses
/// are accepted in submission order only: once a ticket has been applied,
/// every older ticket is stale.
#[derive(Debug, Default)]
pub struct SearchOrchestrator {
    state: SearchState,
    issued_seq: u64,
    accepted_seq: u64,
    last_query: Option<String>,
    last_error: Option<String>,
}

impl SearchOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Query of the most recent submission.
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// Message of the most recent accepted failure.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Submit a query. Blank queries are rejected without touching state.
    pub fn begin(&mut self, query: &str) -> Result<SearchTicket, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            SEARCHES_TOTAL.with_label_values(&["rejected"]).inc();
            return Err(SearchError::BlankQuery);
        }

        self.issued_seq += 1;
        self.state = SearchState::Searching;
        self.last_query = Some(query.to_string());

        debug!("Search #{} started: '{}'", self.issued_seq, query);

        Ok(SearchTicket {
            seq: self.issued_seq,
            query: query.to_string(),
            started_at: Instant::now(),
        })
    }

    /// Apply the catalog response for `ticket` to `cache`.
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<Show>, ExternalCatalogError>,
        cache: &mut ResultCache,
    ) -> SearchOutcome {
        if ticket.seq <= self.accepted_seq {
            debug!(
                "Dropping stale response for search #{} ('{}'), #{} already applied",
                ticket.seq, ticket.query, self.accepted_seq
            );
            SEARCHES_TOTAL.with_label_values(&["stale"]).inc();
            return SearchOutcome::Stale;
        }
        self.accepted_seq = ticket.seq;

        let (outcome, state) = match result {
            Ok(shows) if shows.is_empty() => {
                cache.clear();
                (SearchOutcome::Empty, SearchState::Empty)
            }
            Ok(shows) => {
                let count = shows.len();
                cache.replace(shows);
                (SearchOutcome::Populated { count }, SearchState::Populated)
            }
            Err(error) => {
                error!("Show search for '{}' failed: {}", ticket.query, error);
                cache.clear();
                self.last_error = Some(error.to_string());
                (SearchOutcome::Failed { error }, SearchState::Failed)
            }
        };

        // A newer submission is still in flight.
        self.state = if ticket.seq < self.issued_seq {
            SearchState::Searching
        } else {
            state
        };

        let label = outcome.as_str();
        SEARCHES_TOTAL.with_label_values(&[label]).inc();
        SEARCH_DURATION
            .with_label_values(&[label])
            .observe(ticket.started_at.elapsed().as_secs_f64());
        SEARCH_RESULTS.observe(cache.len() as f64);

        info!(
            "Search #{} '{}' finished: {} ({} shows)",
            ticket.seq,
            ticket.query,
            label,
            cache.len()
        );

        outcome
    }

    /// Submit, fetch and complete in one step.
    pub async fn search(
        &mut self,
        catalog: &dyn ExternalCatalog,
        query: &str,
        cache: &mut ResultCache,
    ) -> Result<SearchOutcome, SearchError> {
        let ticket = self.begin(query)?;
        let result = catalog.search_shows(ticket.query()).await;
        Ok(self.complete(ticket, result, cache))
    }
}
