//! Catalog detail lookup.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use showstore_core::{project, CardView, ExternalCatalogError, Show, ShowId};

use super::handlers::ErrorResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ShowDetail {
    pub show: Show,
    pub card: CardView,
}

/// GET /api/v1/shows/{id}
///
/// Fetch a show straight from the catalog, projected with the session's
/// favorite state.
pub async fn get_show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<ShowDetail>, (StatusCode, Json<ErrorResponse>)> {
    let id = ShowId(id);

    match state.external_catalog().get_show(id).await {
        Ok(show) => {
            let is_favorite = state.session().lock().await.is_favorite(id);
            let card = project(&show, is_favorite);
            Ok(Json(ShowDetail { show, card }))
        }
        Err(ExternalCatalogError::NotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(format!("Show not found: {}", id))),
        )),
        Err(e) => Err((StatusCode::BAD_GATEWAY, Json(ErrorResponse::new(e.to_string())))),
    }
}
