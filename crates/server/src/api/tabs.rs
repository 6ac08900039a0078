use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use showstore_core::{Feedback, Tab};

use super::handlers::ErrorResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TabResponse {
    pub tab: Tab,
    pub feedback: Feedback,
}

/// POST /api/v1/tabs/{tab}
pub async fn switch_tab(
    State(state): State<Arc<AppState>>,
    Path(tab): Path<String>,
) -> Result<Json<TabResponse>, (StatusCode, Json<ErrorResponse>)> {
    let tab: Tab = tab
        .parse()
        .map_err(|e: String| (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e))))?;

    let mut session = state.session().lock().await;
    let feedback = session.switch_tab(tab).clone();

    Ok(Json(TabResponse { tab, feedback }))
}
