use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::{favorites, handlers, middleware::metrics_middleware, search, shows, tabs, ws};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Front-end static files path (configurable via env)
    let web_dir = std::env::var("SHOWSTORE_WEB_DIR").unwrap_or_else(|_| "web/dist".to_string());

    let api_routes = Router::new()
        // Health, config, metrics
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::get_metrics))
        // Search
        .route("/search", get(search::search))
        .route("/results", get(search::list_results))
        // Favorites
        .route("/favorites", get(favorites::list_favorites))
        .route("/favorites/{id}/toggle", post(favorites::toggle_favorite))
        // Catalog detail
        .route("/shows/{id}", get(shows::get_show))
        // Tabs
        .route("/tabs/{tab}", post(tabs::switch_tab))
        // Live render events
        .route("/ws", get(ws::ws_handler))
        .layer(middleware::from_fn(metrics_middleware))
        .with_state(state);

    // Serve front-end with SPA fallback
    let index_path = format!("{}/index.html", web_dir);
    let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(&index_path));

    Router::new()
        .nest("/api/v1", api_routes)
        .fallback_service(serve_dir)
        .layer(TraceLayer::new_for_http())
}
