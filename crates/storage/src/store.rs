//! The backend capability
//!
//! [`Store`] is the single interface accessors use to reach a backend.
//! Implementations own an internal key-to-payload mapping; its storage
//! mechanism (map, file, preference store) is the backend's concern and is
//! never visible through this trait.

use propstore_core::Storable;
use std::sync::Arc;

/// Abstract key-value backend.
///
/// The three operations are the whole contract:
///
/// - [`contains`](Store::contains) reports whether a key currently holds a
///   value, with no side effects
/// - [`read`](Store::read) returns the stored value when present AND its
///   shape matches the requested type; a missing key and a shape mismatch
///   both come back as `None`
/// - [`write`](Store::write) unconditionally replaces any prior value
///
/// Methods take `&self`; concrete stores use interior mutability so one
/// backend instance can serve several accessors. Backend-fatal conditions
/// (unreadable storage medium, corrupt state) belong to the backend's own
/// constructor, not to these operations.
pub trait Store {
    /// The key type this backend is addressed by.
    type Key;

    /// Whether a value is currently associated with `key`.
    fn contains(&self, key: &Self::Key) -> bool;

    /// Read the value at `key` as payload type `S`.
    ///
    /// Returns `None` on a missing key or when the stored payload holds a
    /// different shape. A mismatch is a normal outcome, never a panic.
    fn read<S: Storable>(&self, key: &Self::Key) -> Option<S>;

    /// Associate `key` with `value`, replacing any prior association.
    fn write<S: Storable>(&self, key: &Self::Key, value: S);
}

impl<T: Store + ?Sized> Store for &T {
    type Key = T::Key;

    fn contains(&self, key: &Self::Key) -> bool {
        (**self).contains(key)
    }

    fn read<S: Storable>(&self, key: &Self::Key) -> Option<S> {
        (**self).read(key)
    }

    fn write<S: Storable>(&self, key: &Self::Key, value: S) {
        (**self).write(key, value)
    }
}

impl<T: Store + ?Sized> Store for Arc<T> {
    type Key = T::Key;

    fn contains(&self, key: &Self::Key) -> bool {
        (**self).contains(key)
    }

    fn read<S: Storable>(&self, key: &Self::Key) -> Option<S> {
        (**self).read(key)
    }

    fn write<S: Storable>(&self, key: &Self::Key, value: S) {
        (**self).write(key, value)
    }
}
