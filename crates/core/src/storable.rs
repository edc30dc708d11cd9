//! Storable payload mapping
//!
//! [`Storable`] marks the types eligible as raw storage payloads and maps
//! each of them onto its [`Value`] variant. Eligibility is the closed set:
//! the primitive kinds plus homogeneous sequences and string-keyed maps of
//! eligible values, recursively.
//!
//! [`Storable::from_value`] is a pattern match over the stored variant, so a
//! shape mismatch comes back as `None` rather than a panic or an error.
//! Mismatches are a normal outcome: a backend slot may hold any shape.

use crate::value::{Blob, Value};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// A type eligible as a raw storage payload.
///
/// Implementations exist for `i64`, `f32`, `f64`, `bool`, [`Blob`],
/// `String`, `DateTime<Utc>`, `Vec<T: Storable>`, and
/// `HashMap<String, T: Storable>`. The set is closed: backends only ever
/// hold these shapes.
pub trait Storable: Sized {
    /// Produce the payload variant for this value.
    fn into_value(self) -> Value;

    /// Recover a value of this type from a payload.
    ///
    /// Returns `None` when the payload holds a different shape.
    fn from_value(value: Value) -> Option<Self>;
}

impl Storable for i64 {
    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(i),
            _ => None,
        }
    }
}

impl Storable for f32 {
    fn into_value(self) -> Value {
        Value::Float32(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float32(f) => Some(f),
            _ => None,
        }
    }
}

impl Storable for f64 {
    fn into_value(self) -> Value {
        Value::Float64(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float64(f) => Some(f),
            _ => None,
        }
    }
}

impl Storable for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl Storable for Blob {
    fn into_value(self) -> Value {
        Value::Bytes(self.0)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bytes(b) => Some(Blob(b)),
            _ => None,
        }
    }
}

impl Storable for String {
    fn into_value(self) -> Value {
        Value::Text(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Storable for DateTime<Utc> {
    fn into_value(self) -> Value {
        Value::Timestamp(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Timestamp(t) => Some(t),
            _ => None,
        }
    }
}

impl<T: Storable> Storable for Vec<T> {
    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(Storable::into_value).collect())
    }

    // Any element of the wrong shape fails the whole sequence.
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            _ => None,
        }
    }
}

impl<T: Storable> Storable for HashMap<String, T> {
    fn into_value(self) -> Value {
        Value::Map(self.into_iter().map(|(k, v)| (k, v.into_value())).collect())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| T::from_value(v).map(|v| (k, v)))
                .collect(),
            _ => None,
        }
    }
}
