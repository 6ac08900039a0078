//! Search API handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use showstore_core::{CardView, Feedback, SearchOutcome, SearchState, ShowSession};
use tracing::{debug, warn};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// What this request's response did, absent when it was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<&'static str>,
    pub state: SearchState,
    pub feedback: Feedback,
    pub cards: Vec<CardView>,
}

impl SearchResponse {
    fn from_session(session: &ShowSession, outcome: Option<&SearchOutcome>) -> Self {
        Self {
            outcome: outcome.map(SearchOutcome::as_str),
            state: session.search_state(),
            feedback: session.feedback().clone(),
            cards: session.results_cards(),
        }
    }
}

/// GET /api/v1/search?q=
///
/// Run a catalog search and return the resulting cards. The session lock is
/// released while the catalog is queried, so concurrent searches race and
/// the newest submission wins.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> (StatusCode, Json<SearchResponse>) {
    let ticket = {
        let mut session = state.session().lock().await;
        match session.begin_search(&params.q) {
            Ok(ticket) => ticket,
            Err(e) => {
                debug!("Search rejected: {}", e);
                return (
                    StatusCode::BAD_REQUEST,
                    Json(SearchResponse::from_session(&session, None)),
                );
            }
        }
    };

    let result = state.external_catalog().search_shows(ticket.query()).await;

    let mut session = state.session().lock().await;
    let outcome = session.complete_search(ticket, result);

    let status = match &outcome {
        SearchOutcome::Failed { error } => {
            warn!("Catalog search failed ({}): {}", error.kind(), error);
            StatusCode::BAD_GATEWAY
        }
        _ => StatusCode::OK,
    };

    (status, Json(SearchResponse::from_session(&session, Some(&outcome))))
}

/// GET /api/v1/results
///
/// Cards for the most recently accepted search.
pub async fn list_results(State(state): State<Arc<AppState>>) -> Json<SearchResponse> {
    let session = state.session().lock().await;
    Json(SearchResponse::from_session(&session, None))
}
