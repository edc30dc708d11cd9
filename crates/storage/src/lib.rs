//! Storage backends for propstore
//!
//! This crate defines the backend capability and the two in-repo stores:
//!
//! - [`Store`]: the three-operation contract (contains, typed read, typed
//!   write) every backend implements
//! - [`MemoryStore`]: map-backed store for tests and ephemeral state
//! - [`FileStore`]: write-through store persisted as a single JSON file
//!
//! Backends hold [`propstore_core::Value`] payloads internally; the typed
//! read is a pattern match over the stored variant, so a shape mismatch is
//! an absent result rather than an error.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::Store;
