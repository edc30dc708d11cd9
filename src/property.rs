//! The stored-property accessor
//!
//! [`Property`] binds one backend, one key, one default value, and one
//! [`WritePolicy`] into a value-like get/set object. It keeps no state of
//! its own between calls: every [`get`](Property::get) re-queries the
//! backend, every [`set`](Property::set) goes straight through (or is
//! dropped by the policy).
//!
//! Neither operation returns an error. A missing value and a stored payload
//! of the wrong shape both degrade to the configured default; a
//! policy-blocked write is discarded without a signal to the caller. Keep
//! it that way — call-site ergonomics over strict error surfacing is the
//! point of the abstraction.

use propstore_core::StoredRepr;
use propstore_storage::Store;
use tracing::{debug, trace};

/// Overwrite semantics for a stored property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Every write overwrites.
    #[default]
    Always,

    /// A write is applied only while the backend holds no value for the
    /// key; later writes are silently dropped.
    ///
    /// The contains-then-write sequence is a single logical check-then-act
    /// and is NOT atomic against concurrent writers of the same key. A
    /// backend wanting "exactly one write wins" across threads must provide
    /// that guarantee itself.
    OnceOnly,
}

/// A value lazily read from and written to a key-value backend.
///
/// The backend can be held by value, by reference, or behind an `Arc` —
/// `Store` is implemented for all three, so sharing one backend between
/// several properties is just a matter of cloning the `Arc`.
///
/// # Example
///
/// ```
/// use propstore::{MemoryStore, Property, WritePolicy};
///
/// let store: MemoryStore = MemoryStore::new();
/// let retries = Property::new(&store, "retries".to_string(), 3i64);
///
/// assert_eq!(retries.get(), 3); // nothing stored yet
/// retries.set(5);
/// assert_eq!(retries.get(), 5);
/// ```
pub struct Property<S: Store, V: StoredRepr> {
    store: S,
    key: S::Key,
    default: V,
    policy: WritePolicy,
}

impl<S, V> Property<S, V>
where
    S: Store,
    V: StoredRepr,
{
    /// Bind `store` and `key` into a property with [`WritePolicy::Always`].
    pub fn new(store: S, key: S::Key, default: V) -> Self {
        Self::with_policy(store, key, default, WritePolicy::Always)
    }

    /// Bind `store` and `key` into a property with an explicit policy.
    pub fn with_policy(store: S, key: S::Key, default: V, policy: WritePolicy) -> Self {
        Self {
            store,
            key,
            default,
            policy,
        }
    }

    /// Read the current value.
    ///
    /// Returns the configured default when the backend holds nothing for
    /// the key, when the stored payload has the wrong shape, or when the
    /// conversion back to the domain type fails.
    pub fn get(&self) -> V
    where
        V: Clone,
    {
        match self
            .store
            .read::<V::Stored>(&self.key)
            .and_then(V::from_stored)
        {
            Some(value) => value,
            None => {
                trace!("no usable stored value, returning default");
                self.default.clone()
            }
        }
    }

    /// Write a new value, subject to the policy.
    ///
    /// Under [`WritePolicy::OnceOnly`] a write against an already-populated
    /// key is discarded, not queued.
    pub fn set(&self, value: V) {
        let raw = value.to_stored();
        match self.policy {
            WritePolicy::Always => self.store.write(&self.key, raw),
            WritePolicy::OnceOnly => {
                if self.store.contains(&self.key) {
                    debug!("write-once slot already populated, dropping write");
                } else {
                    self.store.write(&self.key, raw);
                }
            }
        }
    }

    /// The key this property is bound to.
    pub fn key(&self) -> &S::Key {
        &self.key
    }

    /// The configured default value.
    pub fn default_value(&self) -> &V {
        &self.default
    }

    /// The configured write policy.
    pub fn policy(&self) -> WritePolicy {
        self.policy
    }

    /// The underlying backend.
    pub fn store(&self) -> &S {
        &self.store
    }
}
