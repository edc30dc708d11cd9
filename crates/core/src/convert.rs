//! Domain type conversion
//!
//! [`StoredRepr`] is the seam between a domain type and what a backend
//! actually holds. `to_stored` is total: every domain value has a canonical
//! payload representation. `from_stored` is partial: a stored payload of the
//! right shape may still not carry a valid domain value, and the accessor
//! recovers from that locally by falling back to its default.
//!
//! Types that are themselves [`Storable`] get the identity conversion from
//! the blanket impl below. Domain types with a non-identity representation
//! implement the trait directly; they are not `Storable`, so the impls
//! cannot overlap.

use crate::storable::Storable;

/// Conversion between a domain type and its storable representation.
pub trait StoredRepr: Sized {
    /// The raw payload type this domain type is stored as.
    type Stored: Storable;

    /// Produce the canonical stored representation. Must not fail.
    fn to_stored(&self) -> Self::Stored;

    /// Recover a domain value from its stored representation.
    ///
    /// Returns `None` when the stored value does not decode to a valid
    /// domain value.
    fn from_stored(stored: Self::Stored) -> Option<Self>;
}

impl<T: Storable + Clone> StoredRepr for T {
    type Stored = T;

    fn to_stored(&self) -> T {
        self.clone()
    }

    fn from_stored(stored: T) -> Option<T> {
        Some(stored)
    }
}
