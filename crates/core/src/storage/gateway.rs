//! Favorites persistence in a single JSON slot.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, error, warn};

use super::{KeyValueStore, StorageError};
use crate::metrics::{MALFORMED_FAVORITE_ENTRIES, STORAGE_FAILURES};
use crate::show::{Show, ShowId};

/// Storage key used when none is configured.
pub const DEFAULT_FAVORITES_KEY: &str = "showstore_favorites_v1";

/// Reads and writes the favorites set as `{ "<id>": Show }` at one key.
///
/// `load` and `save` never fail outward. A missing key, unreadable storage,
/// non-JSON content or a JSON value that is not an object all load as an
/// empty set; write failures are logged and reported as `false`.
#[derive(Clone)]
pub struct FavoritesGateway {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl FavoritesGateway {
    /// Create a gateway over `store` using [`DEFAULT_FAVORITES_KEY`].
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            key: DEFAULT_FAVORITES_KEY.to_string(),
        }
    }

    /// Use a different storage key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// The storage key this gateway reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the favorites set, surfacing the reason when it cannot be read.
    pub fn try_load(&self) -> Result<HashMap<ShowId, Show>, StorageError> {
        let raw = match self.store.read(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                debug!("No favorites stored at '{}'", self.key);
                return Ok(HashMap::new());
            }
        };

        let value: Value = serde_json::from_str(&raw).map_err(|e| StorageError::Malformed {
            key: self.key.clone(),
            message: e.to_string(),
        })?;

        match value {
            Value::Object(entries) => Ok(decode_entries(entries)),
            other => Err(StorageError::Malformed {
                key: self.key.clone(),
                message: format!("expected a JSON object, found {}", json_type(&other)),
            }),
        }
    }

    /// Load the favorites set, degrading any problem to an empty set.
    pub fn load(&self) -> HashMap<ShowId, Show> {
        match self.try_load() {
            Ok(favorites) => {
                debug!("Loaded {} favorites from '{}'", favorites.len(), self.key);
                favorites
            }
            Err(e @ StorageError::Malformed { .. }) => {
                warn!("Ignoring stored favorites: {}", e);
                HashMap::new()
            }
            Err(e) => {
                error!("Failed to load favorites: {}", e);
                STORAGE_FAILURES.with_label_values(&["read"]).inc();
                HashMap::new()
            }
        }
    }

    /// Serialize and write the favorites set.
    pub fn try_save(&self, favorites: &HashMap<ShowId, Show>) -> Result<(), StorageError> {
        let mut object = Map::new();
        for (id, show) in favorites {
            object.insert(id.to_string(), serde_json::to_value(show)?);
        }
        let raw = serde_json::to_string(&Value::Object(object))?;
        self.store.write(&self.key, &raw)
    }

    /// Serialize and write the favorites set. Returns whether it was persisted.
    pub fn save(&self, favorites: &HashMap<ShowId, Show>) -> bool {
        match self.try_save(favorites) {
            Ok(()) => {
                debug!("Saved {} favorites to '{}'", favorites.len(), self.key);
                true
            }
            Err(e) => {
                error!("Failed to save favorites: {}", e);
                STORAGE_FAILURES.with_label_values(&["write"]).inc();
                false
            }
        }
    }
}

impl std::fmt::Debug for FavoritesGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesGateway")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Decode entries one by one so a single bad record does not cost the rest.
/// Surviving entries are keyed by the show's own id.
fn decode_entries(entries: Map<String, Value>) -> HashMap<ShowId, Show> {
    let mut favorites = HashMap::with_capacity(entries.len());

    for (key, value) in entries {
        match serde_json::from_value::<Show>(value) {
            Ok(show) => {
                if key != show.id.to_string() {
                    warn!("Favorite stored under '{}' has id {}, re-keying", key, show.id);
                }
                favorites.insert(show.id, show);
            }
            Err(e) => {
                warn!("Dropping malformed favorite entry '{}': {}", key, e);
                MALFORMED_FAVORITE_ENTRIES.inc();
            }
        }
    }

    favorites
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
