//! Core value model for propstore
//!
//! This crate defines the three building blocks every backend and accessor
//! shares:
//!
//! - [`Value`]: the closed set of payload shapes a backend may hold
//! - [`Storable`]: the mapping between an eligible Rust type and its
//!   [`Value`] payload
//! - [`StoredRepr`]: the conversion between a domain type and its storable
//!   representation
//!
//! Backends store [`Value`] internally and never see domain types; accessors
//! convert at the boundary through [`StoredRepr`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod storable;
pub mod value;

pub use convert::StoredRepr;
pub use storable::Storable;
pub use value::{Blob, Value};
