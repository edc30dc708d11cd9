//! Backend error types
//!
//! Only construction-time operations return these; the [`Store`] contract
//! itself is infallible. A backend that cannot validate its storage medium
//! fails at open, not per operation.
//!
//! [`Store`]: crate::store::Store

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while opening or persisting a concrete backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage medium could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted state exists but does not decode.
    #[error("corrupt store file {}: {}", .path.display(), .source)]
    Corrupt {
        /// Path of the offending file.
        path: PathBuf,
        /// The decode failure.
        source: serde_json::Error,
    },

    /// In-memory state could not be encoded for persistence.
    #[error("encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}
