//! File-backed backend
//!
//! A write-through store persisted as a single JSON document mapping keys to
//! payloads. The whole map lives in memory; every write re-persists it.
//! Suitable for preference-file-sized data, not for datasets.
//!
//! # Persistence
//!
//! Writes go to a sibling `.tmp` file which is renamed over the target, so
//! a crash mid-write leaves the previous state intact. Invariants are
//! asserted at [`FileStore::open`]: an unreadable or undecodable file fails
//! construction. After that the [`Store`] contract is infallible, so a
//! flush failure is reported through `tracing::error!` and the in-memory
//! state stays authoritative for subsequent reads.
//!
//! JSON cannot represent non-finite floats; `NaN` and infinities will not
//! survive a reopen.

use crate::error::StoreError;
use crate::store::Store;
use parking_lot::RwLock;
use propstore_core::{Storable, Value};
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// String-keyed store persisted as a JSON file.
///
/// # Example
///
/// ```no_run
/// use propstore_storage::{FileStore, Store};
///
/// let store = FileStore::open("settings.json")?;
/// store.write(&"greeting".to_string(), "hello".to_string());
/// # Ok::<(), propstore_storage::StoreError>(())
/// ```
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<FxHashMap<String, Value>>,
}

impl FileStore {
    /// Open a store backed by `path`.
    ///
    /// A missing file is an empty store; it is created on first write. An
    /// existing file must decode, otherwise construction fails with
    /// [`StoreError::Corrupt`].
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries: FxHashMap<String, Value> = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| {
                StoreError::Corrupt {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => FxHashMap::default(),
            Err(err) => return Err(err.into()),
        };

        info!(
            path = %path.display(),
            entries = entries.len(),
            "opened file store"
        );
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// The file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// The raw payload currently stored at `key`, with no shape check.
    pub fn raw(&self, key: &str) -> Option<Value> {
        self.entries.read().get(key).cloned()
    }

    // Serialize the full map, then rename into place. Called with the write
    // lock held so persisted state never interleaves two writers.
    fn flush(&self, entries: &FxHashMap<String, Value>) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl Store for FileStore {
    type Key = String;

    fn contains(&self, key: &String) -> bool {
        self.entries.read().contains_key(key)
    }

    fn read<S: Storable>(&self, key: &String) -> Option<S> {
        self.entries.read().get(key).cloned().and_then(S::from_value)
    }

    fn write<S: Storable>(&self, key: &String, value: S) {
        let mut entries = self.entries.write();
        entries.insert(key.clone(), value.into_value());
        if let Err(err) = self.flush(&entries) {
            error!(
                path = %self.path.display(),
                %err,
                "failed to persist file store"
            );
        }
    }
}
