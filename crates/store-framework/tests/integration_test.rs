use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use store_framework::mock::MockStorage;
use store_framework::{PersistenceAdapter, PersistenceError, ResourceStore, StoreEntity};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Item {
    id: u32,
    label: String,
    active: bool,
}

#[derive(Debug)]
struct ItemDraft {
    label: String,
}

#[derive(Debug, thiserror::Error)]
#[error("Item error")]
struct ItemError;

impl StoreEntity for Item {
    type Id = u32;
    type Draft = ItemDraft;
    type Error = ItemError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_draft(id: u32, draft: ItemDraft) -> Result<Self, ItemError> {
        Ok(Self {
            id,
            label: draft.label,
            active: true,
        })
    }
}

fn item_store(mock: &MockStorage) -> ResourceStore<Item> {
    let counter = Arc::new(AtomicU32::new(1));
    let adapter = PersistenceAdapter::new(Arc::new(mock.clone()), "items");
    ResourceStore::new(Vec::new(), adapter, move || counter.fetch_add(1, Ordering::SeqCst))
}

/// Every successful mutation writes the full collection exactly once.
#[test]
fn test_each_mutation_writes_once() {
    let mock = MockStorage::new();
    let mut store = item_store(&mock);

    let a = store.create(ItemDraft { label: "a".into() }).unwrap();
    store.create(ItemDraft { label: "b".into() }).unwrap();
    store
        .update(Item { active: false, ..a.clone() })
        .unwrap();
    store.remove(&a.id);

    let writes = mock.writes();
    assert_eq!(writes.len(), 4);
    assert!(writes.iter().all(|(key, _)| key == "items"));

    // The last write is the current collection.
    let persisted: Vec<Item> = serde_json::from_str(&writes[3].1).unwrap();
    assert_eq!(persisted, store.list());
}

/// No-op mutations never touch storage.
#[test]
fn test_noops_do_not_write() {
    let mock = MockStorage::new();
    let mut store = item_store(&mock);

    store.remove(&42);
    store
        .update(Item { id: 42, label: "ghost".into(), active: true })
        .unwrap();

    assert!(mock.writes().is_empty());
}

/// A failed save does not fail the mutation and is reported until the next good save.
#[test]
fn test_failed_save_is_best_effort() {
    let mock = MockStorage::new();
    let mut store = item_store(&mock);
    mock.expect_set()
        .return_err(PersistenceError::Storage("quota exceeded".into()));

    let created = store.create(ItemDraft { label: "kept".into() }).unwrap();
    assert_eq!(store.list(), &[created]);
    assert_eq!(
        store.last_save_error(),
        Some(&PersistenceError::Storage("quota exceeded".into()))
    );

    store.create(ItemDraft { label: "next".into() }).unwrap();
    assert_eq!(store.last_save_error(), None);
    assert_eq!(mock.writes().len(), 1);
    mock.verify();
}

/// `replace_all` persists the new collection wholesale.
#[test]
fn test_replace_all_persists() {
    let mock = MockStorage::new();
    let mut store = item_store(&mock);

    let seed = vec![
        Item { id: 10, label: "x".into(), active: true },
        Item { id: 11, label: "y".into(), active: false },
    ];
    store.replace_all(seed.clone());

    let reader = PersistenceAdapter::<Item>::new(Arc::new(mock.clone()), "items");
    assert_eq!(reader.load(), Some(seed));
}
