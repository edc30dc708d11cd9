//! Convenient imports for propstore.
//!
//! Re-exports the types nearly every adopter touches:
//!
//! ```
//! use propstore::prelude::*;
//!
//! let store: MemoryStore = MemoryStore::new();
//! let greeting = Property::new(&store, "greeting".to_string(), "hi".to_string());
//! assert_eq!(greeting.get(), "hi");
//! ```

// Accessor
pub use crate::property::{Property, WritePolicy};

// Core value model
pub use propstore_core::{Blob, Storable, StoredRepr, Value};

// Backends
pub use propstore_storage::{FileStore, MemoryStore, Store, StoreError};
