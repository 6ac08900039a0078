//! Favorites lifecycle integration tests.
//!
//! These drive a session end to end against an on-disk store:
//! search -> toggle -> reopen -> toggle back

use std::sync::Arc;

use tempfile::TempDir;

use showstore_core::{
    testing::{fixtures, MockExternalCatalog, RecordingRenderer},
    FavoritesGateway, KeyValueStore, NullRenderer, SearchOutcome, SearchState, ShowId,
    ShowSession, SqliteKeyValueStore, Tab, ToggleOutcome, DEFAULT_FAVORITES_KEY,
};

struct TestHarness {
    store: Arc<SqliteKeyValueStore>,
    catalog: MockExternalCatalog,
    _temp_dir: TempDir,
}

impl TestHarness {
    async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = Arc::new(
            SqliteKeyValueStore::new(&temp_dir.path().join("favorites.db"))
                .expect("Failed to create store"),
        );
        let catalog = MockExternalCatalog::new();
        catalog.set_shows(fixtures::search_results()).await;

        Self {
            store,
            catalog,
            _temp_dir: temp_dir,
        }
    }

    fn open(&self) -> ShowSession {
        ShowSession::open(FavoritesGateway::new(self.store.clone()), Arc::new(NullRenderer))
    }
}

#[tokio::test]
async fn test_favorites_persist_across_sessions() {
    let harness = TestHarness::new().await;

    let mut session = harness.open();
    let outcome = session.search(&harness.catalog, "drama").await.unwrap();
    assert!(matches!(outcome, SearchOutcome::Populated { count: 3 }));

    assert_eq!(session.toggle(ShowId(1)), ToggleOutcome::Added);
    assert_eq!(session.toggle(ShowId(3)), ToggleOutcome::Added);
    drop(session);

    let mut reopened = harness.open();
    assert_eq!(reopened.favorites().len(), 2);
    assert_eq!(reopened.search_state(), SearchState::Idle);
    assert!(reopened.results().is_empty());

    // Favorites are togglable before any search in the new session.
    assert_eq!(reopened.toggle(ShowId(1)), ToggleOutcome::Removed);
    drop(reopened);

    let ids: Vec<ShowId> = harness.open().favorites_cards().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![ShowId(3)]);
}

#[tokio::test]
async fn test_stored_document_is_keyed_by_id() {
    let harness = TestHarness::new().await;

    let mut session = harness.open();
    session.search(&harness.catalog, "drama").await.unwrap();
    session.toggle(ShowId(2));

    let raw = harness.store.read(DEFAULT_FAVORITES_KEY).unwrap().unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["2"]["id"], 2);
    assert_eq!(doc["2"]["name"], "Better Call Saul");
}

#[tokio::test]
async fn test_corrupt_document_starts_empty_and_recovers() {
    let harness = TestHarness::new().await;
    harness.store.write(DEFAULT_FAVORITES_KEY, "{not json").unwrap();

    let mut session = harness.open();
    assert!(session.favorites().is_empty());

    session.search(&harness.catalog, "drama").await.unwrap();
    session.toggle(ShowId(1));

    assert_eq!(harness.open().favorites().len(), 1);
}

#[tokio::test]
async fn test_render_sequence_for_search_and_toggle() {
    let harness = TestHarness::new().await;
    let renderer = Arc::new(RecordingRenderer::new());
    let mut session =
        ShowSession::open(FavoritesGateway::new(harness.store.clone()), renderer.clone());

    session.switch_tab(Tab::Favorites);
    session.search(&harness.catalog, "drama").await.unwrap();
    session.toggle(ShowId(1));

    let messages: Vec<String> = renderer
        .feedback()
        .into_iter()
        .map(|f| f.message)
        .collect();
    assert_eq!(
        messages,
        vec![
            "Você ainda não possui favoritos.".to_string(),
            "Buscando séries...".to_string(),
            "Encontradas 3 série(s).".to_string(),
        ]
    );
    assert_eq!(session.active_tab(), Tab::Results);
}
