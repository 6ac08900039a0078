//! Show records as decoded from the catalog and persisted as favorites.

mod types;

pub use types::*;
