//! # Persistence
//!
//! A collection is persisted as a single JSON document under one key of an opaque
//! key-value store. Two layers live here:
//!
//! - [`KeyValueStore`] - raw string storage (`get` / `set`), with an in-memory and a
//!   file-backed implementation.
//! - [`PersistenceAdapter`] - a typed view of one key that serializes the whole collection
//!   with `serde_json`.
//!
//! Malformed data is reported by [`PersistenceAdapter::try_load`] and swallowed (logged) by
//! [`PersistenceAdapter::load`], which treats it as absent.

use crate::error::PersistenceError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Opaque string storage keyed by name.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value under `key`. `Ok(None)` when nothing was ever written.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Overwrites the value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// In-memory key-value store. Clone-friendly via `Arc`; clones share the same map.
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    storage: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| PersistenceError::Storage("lock poisoned".into()))?;
        Ok(storage.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| PersistenceError::Storage("lock poisoned".into()))?;
        storage.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed key-value store: key `k` lives at `<dir>/<k>.json`.
///
/// Writes go to a sibling temp file first and are renamed into place, so a crash
/// mid-write leaves the previous value readable.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::Storage(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.dir).map_err(|e| PersistenceError::Storage(e.to_string()))?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| PersistenceError::Storage(e.to_string()))?;
        fs::rename(&tmp, &path).map_err(|e| PersistenceError::Storage(e.to_string()))
    }
}

/// Typed access to one collection stored under a single key.
pub struct PersistenceAdapter<T> {
    store: Arc<dyn KeyValueStore>,
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> PersistenceAdapter<T> {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the collection, reporting storage and decoding failures.
    pub fn try_load(&self) -> Result<Option<Vec<T>>, PersistenceError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| PersistenceError::Serde(e.to_string()))
    }

    /// Loads the collection; unreadable or malformed data counts as absent.
    pub fn load(&self) -> Option<Vec<T>> {
        match self.try_load() {
            Ok(items) => {
                debug!(key = %self.key, found = items.is_some(), "Load");
                items
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Discarding unreadable collection");
                None
            }
        }
    }

    /// Overwrites the stored collection with `items`.
    pub fn save(&self, items: &[T]) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(items).map_err(|e| PersistenceError::Serde(e.to_string()))?;
        self.store.set(&self.key, &raw)?;
        debug!(key = %self.key, size = items.len(), "Saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        body: Option<String>,
        pinned: bool,
        weight: f64,
    }

    fn notes() -> Vec<Note> {
        vec![
            Note { id: "n1".into(), body: Some("first".into()), pinned: true, weight: 1.5 },
            Note { id: "n2".into(), body: None, pinned: false, weight: 0.0 },
            Note { id: "n3".into(), body: Some(String::new()), pinned: false, weight: 999.99 },
        ]
    }

    #[test]
    fn test_in_memory_round_trip() {
        let adapter = PersistenceAdapter::<Note>::new(Arc::new(InMemoryKeyValueStore::new()), "notes");
        assert_eq!(adapter.load(), None);

        adapter.save(&notes()).unwrap();
        assert_eq!(adapter.load(), Some(notes()));
    }

    #[test]
    fn test_malformed_data_is_treated_as_absent() {
        let kv = InMemoryKeyValueStore::new();
        kv.set("notes", "{ not json").unwrap();
        let adapter = PersistenceAdapter::<Note>::new(Arc::new(kv), "notes");

        assert!(matches!(adapter.try_load(), Err(PersistenceError::Serde(_))));
        assert_eq!(adapter.load(), None);
    }

    #[test]
    fn test_keys_are_isolated() {
        let kv = InMemoryKeyValueStore::new();
        let a = PersistenceAdapter::<Note>::new(Arc::new(kv.clone()), "a");
        let b = PersistenceAdapter::<Note>::new(Arc::new(kv), "b");

        a.save(&notes()).unwrap();
        assert_eq!(b.load(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKeyValueStore::new(dir.path().join("nested"));
        assert_eq!(kv.get("notes").unwrap(), None);

        let adapter = PersistenceAdapter::<Note>::new(Arc::new(kv.clone()), "notes");
        adapter.save(&notes()).unwrap();

        assert!(dir.path().join("nested").join("notes.json").exists());
        let reopened = PersistenceAdapter::<Note>::new(Arc::new(FileKeyValueStore::new(kv.dir())), "notes");
        assert_eq!(reopened.load(), Some(notes()));
    }
}
