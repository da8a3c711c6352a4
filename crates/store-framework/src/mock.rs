//! # Mock Storage
//!
//! `MockStorage` implements [`KeyValueStore`] in memory and lets a test queue expectations for
//! individual `get` / `set` calls. Calls that have no queued expectation fall through to the
//! in-memory map, so a test only scripts the calls it cares about (typically a failing write).
//!
//! | Feature | MockStorage | InMemoryKeyValueStore |
//! |---------|-------------|------------------------|
//! | **Error Injection** | `return_err` on the next call | Never fails |
//! | **Write log** | Every `set` recorded | None |
//! | **Verification** | `verify()` panics on leftover expectations | None |
//!
//! ```rust
//! use std::sync::Arc;
//! use store_framework::mock::MockStorage;
//! use store_framework::{PersistenceAdapter, PersistenceError};
//!
//! let mock = MockStorage::new();
//! mock.expect_set().return_err(PersistenceError::Storage("disk full".into()));
//!
//! let adapter = PersistenceAdapter::<u32>::new(Arc::new(mock.clone()), "numbers");
//! assert!(adapter.save(&[1, 2, 3]).is_err());
//! assert!(adapter.save(&[1, 2, 3]).is_ok());
//!
//! assert_eq!(mock.writes().len(), 1);
//! mock.verify();
//! ```

use crate::error::PersistenceError;
use crate::persistence::KeyValueStore;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// A scripted response for the next call of one kind.
enum Expectation {
    Get {
        response: Result<Option<String>, PersistenceError>,
    },
    Set {
        response: Result<(), PersistenceError>,
    },
}

#[derive(Default)]
struct MockState {
    values: HashMap<String, String>,
    writes: Vec<(String, String)>,
    expectations: VecDeque<Expectation>,
}

/// A key-value store with expectation tracking for fluent testing.
#[derive(Clone, Default)]
pub struct MockStorage {
    state: Arc<Mutex<MockState>>,
}

impl MockStorage {
    /// Creates an empty mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates `key` without recording a write.
    pub fn seed(&self, key: &str, value: &str) {
        let mut state = self.state.lock().unwrap();
        state.values.insert(key.to_string(), value.to_string());
    }

    /// Expects a `get` call.
    pub fn expect_get(&self) -> GetExpectationBuilder {
        GetExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Expects a `set` call.
    pub fn expect_set(&self) -> SetExpectationBuilder {
        SetExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Every successful `set` in call order.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().writes.clone()
    }

    /// Current value under `key`.
    pub fn value(&self, key: &str) -> Option<String> {
        self.state.lock().unwrap().values.get(key).cloned()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!("Not all expectations were met. {} remaining", state.expectations.len());
        }
    }
}

impl KeyValueStore for MockStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let mut state = self.state.lock().unwrap();
        if matches!(state.expectations.front(), Some(Expectation::Get { .. })) {
            if let Some(Expectation::Get { response }) = state.expectations.pop_front() {
                return response;
            }
        }
        Ok(state.values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut state = self.state.lock().unwrap();
        if matches!(state.expectations.front(), Some(Expectation::Set { .. })) {
            if let Some(Expectation::Set { response }) = state.expectations.pop_front() {
                response?;
            }
        }
        state.values.insert(key.to_string(), value.to_string());
        state.writes.push((key.to_string(), value.to_string()));
        Ok(())
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder {
    state: Arc<Mutex<MockState>>,
}

impl GetExpectationBuilder {
    /// The next `get` returns `value` regardless of what is stored.
    pub fn return_ok(self, value: Option<String>) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation::Get { response: Ok(value) });
    }

    /// The next `get` fails with `error`.
    pub fn return_err(self, error: PersistenceError) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation::Get { response: Err(error) });
    }
}

/// Builder for `set` expectations.
pub struct SetExpectationBuilder {
    state: Arc<Mutex<MockState>>,
}

impl SetExpectationBuilder {
    /// The next `set` succeeds (and is applied).
    pub fn return_ok(self) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation::Set { response: Ok(()) });
    }

    /// The next `set` fails with `error` and is not applied.
    pub fn return_err(self, error: PersistenceError) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation::Set { response: Err(error) });
    }
}
