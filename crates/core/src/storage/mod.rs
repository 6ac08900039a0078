//! Persistence boundary for the favorites set.
//!
//! [`KeyValueStore`] is the raw persistence capability (a string slot per
//! key). [`FavoritesGateway`] sits on top of it and owns the JSON layout of
//! the favorites set, degrading every read problem to an empty set.

mod gateway;
mod sqlite;

pub use gateway::{FavoritesGateway, DEFAULT_FAVORITES_KEY};
pub use sqlite::SqliteKeyValueStore;

use thiserror::Error;

/// Errors raised by the persistence layer.
///
/// These never reach an interactive caller: the gateway logs them and falls
/// back to a safe state.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The slot could not be read.
    #[error("Failed to read '{key}': {message}")]
    Read { key: String, message: String },

    /// The slot could not be written (quota, disk, closed connection).
    #[error("Failed to write '{key}': {message}")]
    Write { key: String, message: String },

    /// The stored value is not a favorites object.
    #[error("Malformed value at '{key}': {message}")]
    Malformed { key: String, message: String },

    /// The favorites set could not be serialized.
    #[error("Failed to serialize favorites: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Backend setup failure.
    #[error("Database error: {0}")]
    Database(String),
}

/// A string key-value slot store.
///
/// Both operations are synchronous: the store models local persistence, not
/// network I/O.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value at `key`. `Ok(None)` when the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` at `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
