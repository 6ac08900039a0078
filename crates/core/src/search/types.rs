//! Search state machine types.

use std::fmt;
use std::time::Instant;

use serde::Serialize;
use thiserror::Error;

use crate::external_catalog::ExternalCatalogError;

/// Where the current query lifecycle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Searching,
    /// The last accepted search returned at least one show.
    Populated,
    /// The last accepted search returned nothing.
    Empty,
    /// The last accepted search failed.
    Failed,
}

impl SearchState {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchState::Idle => "idle",
            SearchState::Searching => "searching",
            SearchState::Populated => "populated",
            SearchState::Empty => "empty",
            SearchState::Failed => "failed",
        }
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Submission errors. These never change search state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The query was empty or whitespace only.
    #[error("Search query is blank")]
    BlankQuery,
}

/// Handle for one submitted search.
///
/// Tickets carry a sequence number that increases with every submission;
/// completing a ticket that is not newer than the last accepted one is a
/// no-op.
#[derive(Debug, Clone)]
pub struct SearchTicket {
    pub(crate) seq: u64,
    pub(crate) query: String,
    pub(crate) started_at: Instant,
}

impl SearchTicket {
    /// Submission sequence number.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The trimmed query to send to the catalog.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// What completing a ticket did.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Results accepted and cached.
    Populated { count: usize },
    /// The catalog returned nothing; the cache was cleared.
    Empty,
    /// The catalog call failed; the cache was cleared.
    Failed { error: ExternalCatalogError },
    /// A newer search was already accepted; this response was dropped.
    Stale,
}

impl SearchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOutcome::Populated { .. } => "populated",
            SearchOutcome::Empty => "empty",
            SearchOutcome::Failed { .. } => "failed",
            SearchOutcome::Stale => "stale",
        }
    }

    /// Whether the response was applied to the cache.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, SearchOutcome::Stale)
    }
}
