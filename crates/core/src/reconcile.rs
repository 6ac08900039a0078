//! Resolving a show id to its full record.
//!
//! A favorite can drop out of the latest search results, so the favorites
//! store is the fallback source: once known, a show stays togglable for as
//! long as it is a favorite.

use crate::favorites::FavoritesStore;
use crate::results::ResultCache;
use crate::show::{Show, ShowId};

/// Look `id` up in the result cache, then in the favorites store.
pub fn resolve(id: ShowId, results: &ResultCache, favorites: &FavoritesStore) -> Option<Show> {
    results
        .find(id)
        .or_else(|| favorites.get(id))
        .cloned()
}
