//! Favorites API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use showstore_core::{CardView, ShowId, ToggleOutcome};

use crate::metrics::FAVORITES_COUNT;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub id: ShowId,
    pub outcome: ToggleOutcome,
    pub is_favorite: bool,
    /// The refreshed card, when the show is still known to the session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardView>,
}

/// GET /api/v1/favorites
pub async fn list_favorites(State(state): State<Arc<AppState>>) -> Json<Vec<CardView>> {
    let session = state.session().lock().await;
    Json(session.favorites_cards())
}

/// POST /api/v1/favorites/{id}/toggle
///
/// Unknown ids are not an error: the outcome is `unresolved` and nothing
/// changes.
pub async fn toggle_favorite(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Json<ToggleResponse> {
    let id = ShowId(id);
    let mut session = state.session().lock().await;

    let outcome = session.toggle(id);
    FAVORITES_COUNT.set(session.favorites().len() as i64);

    Json(ToggleResponse {
        id,
        outcome,
        is_favorite: session.is_favorite(id),
        card: session.card(id),
    })
}
