//! In-memory favorites map with write-through persistence.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::ToggleOutcome;
use crate::metrics::TOGGLES_TOTAL;
use crate::show::{Show, ShowId};
use crate::storage::FavoritesGateway;

/// Favorite shows keyed by id.
///
/// Every key equals the id of its value, and presence in the map is the only
/// notion of "favorite". Each mutation is persisted through the gateway before
/// returning; a failed save keeps the in-memory change and is only logged.
#[derive(Debug)]
pub struct FavoritesStore {
    shows: HashMap<ShowId, Show>,
    gateway: FavoritesGateway,
    persisted: bool,
}

impl FavoritesStore {
    /// Load the favorites set through `gateway`.
    pub fn load(gateway: FavoritesGateway) -> Self {
        let shows = gateway.load();
        Self {
            shows,
            gateway,
            persisted: true,
        }
    }

    /// Whether `id` is a favorite.
    pub fn contains(&self, id: ShowId) -> bool {
        self.shows.contains_key(&id)
    }

    /// The stored record for `id`.
    pub fn get(&self, id: ShowId) -> Option<&Show> {
        self.shows.get(&id)
    }

    /// Add `show`, replacing any record with the same id.
    pub fn add(&mut self, show: Show) {
        debug!("Adding favorite {}", show.id);
        self.shows.insert(show.id, show);
        self.persist();
    }

    /// Remove `id`. Returns whether it was a favorite; absent ids are a no-op.
    pub fn remove(&mut self, id: ShowId) -> bool {
        if self.shows.remove(&id).is_none() {
            return false;
        }
        debug!("Removed favorite {}", id);
        self.persist();
        true
    }

    /// Flip membership of `id`.
    ///
    /// A present id is removed. An absent id is resolved through `resolver`;
    /// when that finds nothing the toggle changes nothing.
    pub fn toggle<F>(&mut self, id: ShowId, resolver: F) -> ToggleOutcome
    where
        F: FnOnce(ShowId) -> Option<Show>,
    {
        let outcome = if self.remove(id) {
            ToggleOutcome::Removed
        } else {
            match resolver(id) {
                Some(show) if show.id == id => {
                    self.add(show);
                    ToggleOutcome::Added
                }
                Some(show) => {
                    warn!("Resolver returned show {} for id {}, ignoring", show.id, id);
                    ToggleOutcome::Unresolved
                }
                None => {
                    debug!("Toggle for unknown show {} ignored", id);
                    ToggleOutcome::Unresolved
                }
            }
        };

        TOGGLES_TOTAL.with_label_values(&[outcome.as_str()]).inc();
        outcome
    }

    /// All favorites, in no particular order.
    pub fn list(&self) -> Vec<Show> {
        self.shows.values().cloned().collect()
    }

    /// Iterate over favorites without cloning.
    pub fn iter(&self) -> impl Iterator<Item = &Show> {
        self.shows.values()
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.shows.len()
    }

    /// Whether there are no favorites.
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    /// Whether the last mutation reached storage.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    fn persist(&mut self) {
        self.persisted = self.gateway.save(&self.shows);
    }
}
