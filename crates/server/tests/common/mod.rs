//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with a mock catalog and an on-disk favorites store in a temp directory.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use showstore_core::{
    testing::MockExternalCatalog, Config, ExternalCatalog, FavoritesGateway, SqliteKeyValueStore,
};
use showstore_server::api::{create_router, WsBroadcaster};
use showstore_server::state::AppState;

/// Re-export fixtures for test convenience
pub use showstore_core::testing::fixtures;

/// Test fixture for E2E testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_search() {
///     let fixture = TestFixture::new().await;
///     fixture.external_catalog.set_shows(fixtures::search_results()).await;
///
///     let response = fixture.get("/api/v1/search?q=drama").await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock catalog - configure search results and failures
    pub external_catalog: Arc<MockExternalCatalog>,
    /// Render events published by the session
    pub ws_broadcaster: WsBroadcaster,
    store: Arc<SqliteKeyValueStore>,
    /// Temporary directory for the favorites database
    pub temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = Arc::new(
            SqliteKeyValueStore::new(&temp_dir.path().join("test.db"))
                .expect("Failed to create store"),
        );
        let external_catalog = Arc::new(MockExternalCatalog::new());
        let ws_broadcaster = WsBroadcaster::default();
        let router = build_router(&store, &external_catalog, &ws_broadcaster);

        Self {
            router,
            external_catalog,
            ws_broadcaster,
            store,
            temp_dir,
        }
    }

    /// Start a fresh server process over the same favorites database.
    pub fn restart(&mut self) {
        self.ws_broadcaster = WsBroadcaster::default();
        self.router = build_router(&self.store, &self.external_catalog, &self.ws_broadcaster);
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path).await
    }

    /// Send a POST request without a body.
    pub async fn post(&self, path: &str) -> TestResponse {
        self.request("POST", path).await
    }

    /// Fetch a non-JSON body as text.
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn request(&self, method: &str, path: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

fn build_router(
    store: &Arc<SqliteKeyValueStore>,
    external_catalog: &Arc<MockExternalCatalog>,
    ws_broadcaster: &WsBroadcaster,
) -> Router {
    let state = Arc::new(AppState::new(
        Config::default(),
        FavoritesGateway::new(store.clone()),
        Arc::clone(external_catalog) as Arc<dyn ExternalCatalog>,
        ws_broadcaster.clone(),
    ));
    create_router(state)
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}

/// Helper to assert a JSON path equals expected value.
#[macro_export]
macro_rules! assert_json_path {
    ($json:expr, $path:expr, $expected:expr) => {
        let actual = &$json[$path];
        assert_eq!(
            actual, &$expected,
            "Path '{}' expected {:?}, got {:?}",
            $path, $expected, actual
        );
    };
}
