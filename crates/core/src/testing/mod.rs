//! Testing utilities and in-memory implementations of the crate's seams.
//!
//! These let sessions and the HTTP layer be exercised without the network
//! or a database.
//!
//! # Example
//!
//! ```rust,ignore
//! use showstore_core::testing::{fixtures, MemoryKeyValueStore, MockExternalCatalog};
//!
//! let catalog = MockExternalCatalog::new();
//! catalog.set_shows(fixtures::search_results()).await;
//!
//! let kv = Arc::new(MemoryKeyValueStore::new());
//! let session = ShowSession::open(FavoritesGateway::new(kv), Arc::new(NullRenderer));
//! ```

mod memory_store;
mod mock_external_catalog;
mod recording_renderer;

pub use memory_store::MemoryKeyValueStore;
pub use mock_external_catalog::MockExternalCatalog;
pub use recording_renderer::{RecordingRenderer, RenderEvent};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::show::Show;

    /// A fully populated show.
    pub fn breaking_bad() -> Show {
        Show::new(1u64)
            .with_name("Breaking Bad")
            .with_image("https://static.tvmaze.com/uploads/images/medium_portrait/0/2400.jpg")
            .with_genres(["Drama"])
            .with_rating(9.5)
    }

    /// A show with only an id and a name.
    pub fn show(id: u64, name: &str) -> Show {
        Show::new(id).with_name(name)
    }

    /// Three results in catalog order: one complete, one partial, one bare.
    pub fn search_results() -> Vec<Show> {
        vec![
            breaking_bad(),
            Show::new(2u64)
                .with_name("Better Call Saul")
                .with_genres(["Drama", "Crime"]),
            Show::new(3u64),
        ]
    }
}
