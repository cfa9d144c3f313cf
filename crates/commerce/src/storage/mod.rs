//! Durable key/value storage backends.
//!
//! The storefront persists each store as a named string entry, the way the
//! browser client keeps them in `localStorage`. The [`Storage`] trait is that
//! surface; stores stay agnostic of where the bytes land so tests can
//! substitute [`MemoryStorage`] for the file-backed default.
//!
//! Persistence is deliberately fail-soft: the helpers in this module log and
//! swallow write failures and treat unreadable persisted documents as absent.
//! Shopping must continue in storage-restricted contexts.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod file;

pub use file::{DATA_DIR_ENV, FileStorage};

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying I/O operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A named durable string entry store.
///
/// Implementations are best-effort durable: a `set` that returns `Ok` should
/// survive a restart, but callers treat every failure as survivable.
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the value could not be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the entry under `key`. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if an existing entry could not be removed.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage.
///
/// Used by tests and as the fallback when durable storage is unavailable;
/// state then lives for the session only.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }
}

/// Restore a store's persisted projection, falling back to its default.
///
/// A missing entry is a fresh client; an unreadable one is logged and
/// discarded rather than surfaced, since a corrupt cart must never take the
/// storefront down.
pub(crate) fn restore<T: DeserializeOwned + Default>(storage: &dyn Storage, key: &str) -> T {
    let Some(raw) = storage.get(key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(state) => {
            tracing::debug!(key, "restored persisted state");
            state
        }
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding malformed persisted state");
            T::default()
        }
    }
}

/// Persist a store's projection, swallowing failures.
///
/// The in-memory copy remains authoritative for the rest of the session when
/// the write does not land.
pub(crate) fn persist<T: Serialize>(storage: &dyn Storage, key: &str, projection: &T) {
    let json = match serde_json::to_string(projection) {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!(key, error = %err, "failed to serialize state for persistence");
            return;
        }
    };
    if let Err(err) = storage.set(key, &json) {
        tracing::warn!(key, error = %err, "failed to persist state; keeping in-memory copy");
    }
}
