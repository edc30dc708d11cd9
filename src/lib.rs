//! # propstore
//!
//! Typed stored properties over pluggable key-value backends.
//!
//! A [`Property`] ties a backend, a key, a default value, and a
//! [`WritePolicy`] into a value-like accessor: `get()` reads through the
//! backend and falls back to the default, `set()` writes through unless the
//! policy drops it. Neither returns an error.
//!
//! ## Quick Start
//!
//! ```
//! use propstore::{MemoryStore, Property, WritePolicy};
//!
//! let store: MemoryStore = MemoryStore::new();
//!
//! let volume = Property::new(&store, "volume".to_string(), 50i64);
//! assert_eq!(volume.get(), 50); // nothing stored yet
//! volume.set(80);
//! assert_eq!(volume.get(), 80);
//!
//! // Write-once slots keep their first value.
//! let device_id = Property::with_policy(
//!     &store,
//!     "device-id".to_string(),
//!     String::new(),
//!     WritePolicy::OnceOnly,
//! );
//! device_id.set("a1b2".to_string());
//! device_id.set("overwritten?".to_string());
//! assert_eq!(device_id.get(), "a1b2");
//! ```
//!
//! ## Pieces
//!
//! - [`Value`] — the closed set of payload shapes a backend can hold
//! - [`Storable`] — maps an eligible Rust type onto its payload variant
//! - [`StoredRepr`] — converts a domain type to and from its storable
//!   representation; identity for types that are themselves storable
//! - [`Store`] — the backend contract: contains, typed read, typed write
//! - [`MemoryStore`] / [`FileStore`] — the in-repo backends
//!
//! Domain types plug in by implementing [`StoredRepr`]:
//!
//! ```
//! use propstore::{MemoryStore, Property, StoredRepr};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Mode { Eco, Turbo }
//!
//! impl StoredRepr for Mode {
//!     type Stored = String;
//!
//!     fn to_stored(&self) -> String {
//!         match self { Mode::Eco => "eco", Mode::Turbo => "turbo" }.to_string()
//!     }
//!
//!     fn from_stored(stored: String) -> Option<Self> {
//!         match stored.as_str() {
//!             "eco" => Some(Mode::Eco),
//!             "turbo" => Some(Mode::Turbo),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let store: MemoryStore = MemoryStore::new();
//! let mode = Property::new(&store, "mode".to_string(), Mode::Eco);
//! mode.set(Mode::Turbo);
//! assert_eq!(mode.get(), Mode::Turbo);
//! ```

#![warn(missing_docs)]

mod property;

pub mod prelude;

pub use property::{Property, WritePolicy};

// Core value model
pub use propstore_core::{Blob, Storable, StoredRepr, Value};

// Backends
pub use propstore_storage::{FileStore, MemoryStore, Store, StoreError};
