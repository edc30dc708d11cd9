//! In-memory backend
//!
//! `FxHashMap` behind an `RwLock`: reads take the shared lock, writes the
//! exclusive one. Wrap the store in an `Arc` to share it across accessors
//! or threads.

use crate::store::Store;
use parking_lot::RwLock;
use propstore_core::{Storable, Value};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Map-backed store, generic over the key type.
///
/// The backend of choice for tests and for state that does not need to
/// outlive the process.
///
/// # Example
///
/// ```
/// use propstore_storage::{MemoryStore, Store};
///
/// let store: MemoryStore = MemoryStore::new();
/// store.write(&"answer".to_string(), 42i64);
/// assert_eq!(store.read::<i64>(&"answer".to_string()), Some(42));
/// ```
#[derive(Debug)]
pub struct MemoryStore<K = String> {
    entries: RwLock<FxHashMap<K, Value>>,
}

impl<K> MemoryStore<K> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl<K: Eq + Hash> MemoryStore<K> {
    /// Remove the entry at `key`, returning its raw payload if present.
    pub fn remove(&self, key: &K) -> Option<Value> {
        self.entries.write().remove(key)
    }

    /// The raw payload currently stored at `key`.
    ///
    /// Unlike [`Store::read`], this performs no shape check. Useful for
    /// asserting on what a write actually persisted.
    pub fn raw(&self, key: &K) -> Option<Value> {
        self.entries.read().get(key).cloned()
    }
}

impl<K> Default for MemoryStore<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> Store for MemoryStore<K> {
    type Key = K;

    fn contains(&self, key: &K) -> bool {
        self.entries.read().contains_key(key)
    }

    fn read<S: Storable>(&self, key: &K) -> Option<S> {
        self.entries.read().get(key).cloned().and_then(S::from_value)
    }

    fn write<S: Storable>(&self, key: &K, value: S) {
        self.entries.write().insert(key.clone(), value.into_value());
    }
}
