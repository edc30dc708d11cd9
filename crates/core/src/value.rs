//! Payload value types
//!
//! [`Value`] is the canonical payload model: everything a backend stores
//! reduces to one of its nine variants. Sequences and maps are homogeneous
//! over `Value` itself, recursively, which the type enforces structurally —
//! there is no runtime validation pass.
//!
//! ## Equality Rules
//!
//! - Different variants are NEVER equal (no type coercion)
//! - `Int(1)` != `Float64(1.0)`
//! - `Text("abc")` != `Bytes([97, 98, 99])`
//! - Floats use IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical payload value.
///
/// This is the only shape backends ever hold. The serde derives exist so
/// file-backed stores can persist entries; they are not a public wire-format
/// commitment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),

    /// 32-bit IEEE-754 floating point
    Float32(f32),

    /// 64-bit IEEE-754 floating point
    Float64(f64),

    /// Boolean true or false
    Bool(bool),

    /// Arbitrary binary data, distinct from Text
    Bytes(Vec<u8>),

    /// UTF-8 encoded string
    Text(String),

    /// UTC timestamp
    Timestamp(DateTime<Utc>),

    /// Ordered sequence of values
    List(Vec<Value>),

    /// String-keyed map of values
    Map(HashMap<String, Value>),
}

impl Value {
    /// Returns the variant name as a string, for log and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Float32(_) => "Float32",
            Value::Float64(_) => "Float64",
            Value::Bool(_) => "Bool",
            Value::Bytes(_) => "Bytes",
            Value::Text(_) => "Text",
            Value::Timestamp(_) => "Timestamp",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f32
    pub fn as_float32(&self) -> Option<f32> {
        match self {
            Value::Float32(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_float64(&self) -> Option<f64> {
        match self {
            Value::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as bytes slice
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as timestamp
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Try to get as list slice
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get as map reference
    pub fn as_map(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

/// Owned byte payload.
///
/// Byte buffers get their own wrapper so generic sequences of storable
/// values can map to [`Value::List`] while raw binary data maps to
/// [`Value::Bytes`]. A plain `Vec<u8>` cannot serve both roles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blob(pub Vec<u8>);

impl Blob {
    /// Wrap a byte buffer.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Blob(bytes.into())
    }

    /// Borrow the underlying bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Blob(bytes)
    }
}

impl From<Blob> for Vec<u8> {
    fn from(blob: Blob) -> Self {
        blob.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod type_name_tests {
        use super::*;

        #[test]
        fn all_type_names_unique() {
            let values = vec![
                Value::Int(0),
                Value::Float32(0.0),
                Value::Float64(0.0),
                Value::Bool(true),
                Value::Bytes(vec![]),
                Value::Text(String::new()),
                Value::Timestamp(Utc::now()),
                Value::List(vec![]),
                Value::Map(HashMap::new()),
            ];

            let names: std::collections::HashSet<_> =
                values.iter().map(|v| v.type_name()).collect();
            assert_eq!(names.len(), 9, "all 9 type names must be unique");
        }
    }

    mod accessor_tests {
        use super::*;

        #[test]
        fn as_int() {
            assert_eq!(Value::Int(42).as_int(), Some(42));
            assert_eq!(Value::Float64(42.0).as_int(), None);
        }

        #[test]
        fn as_float32_and_float64_are_distinct() {
            assert_eq!(Value::Float32(1.5).as_float32(), Some(1.5));
            assert_eq!(Value::Float32(1.5).as_float64(), None);
            assert_eq!(Value::Float64(2.5).as_float64(), Some(2.5));
            assert_eq!(Value::Float64(2.5).as_float32(), None);
        }

        #[test]
        fn as_bool() {
            assert_eq!(Value::Bool(true).as_bool(), Some(true));
            assert_eq!(Value::Int(1).as_bool(), None);
        }

        #[test]
        fn as_bytes_and_text_are_distinct() {
            assert_eq!(Value::Bytes(vec![1, 2]).as_bytes(), Some(&[1, 2][..]));
            assert_eq!(Value::Bytes(b"hi".to_vec()).as_text(), None);
            assert_eq!(Value::Text("hi".to_string()).as_text(), Some("hi"));
            assert_eq!(Value::Text("hi".to_string()).as_bytes(), None);
        }

        #[test]
        fn as_timestamp() {
            let now = Utc::now();
            assert_eq!(Value::Timestamp(now).as_timestamp(), Some(now));
            assert_eq!(Value::Int(0).as_timestamp(), None);
        }

        #[test]
        fn as_list_and_map() {
            let list = vec![Value::Int(1), Value::Int(2)];
            assert_eq!(Value::List(list.clone()).as_list(), Some(&list[..]));
            assert_eq!(Value::Map(HashMap::new()).as_list(), None);

            let mut map = HashMap::new();
            map.insert("a".to_string(), Value::Int(1));
            assert_eq!(Value::Map(map.clone()).as_map(), Some(&map));
            assert_eq!(Value::List(vec![]).as_map(), None);
        }
    }

    mod equality_tests {
        use super::*;

        #[test]
        fn no_cross_variant_coercion() {
            assert_ne!(Value::Int(1), Value::Float64(1.0));
            assert_ne!(Value::Int(1), Value::Float32(1.0));
            assert_ne!(Value::Float32(1.0), Value::Float64(1.0));
            assert_ne!(Value::Bool(true), Value::Int(1));
            assert_ne!(
                Value::Text("abc".to_string()),
                Value::Bytes(vec![97, 98, 99])
            );
        }

        #[test]
        fn nan_not_equal_to_nan() {
            assert_ne!(Value::Float64(f64::NAN), Value::Float64(f64::NAN));
            assert_ne!(Value::Float32(f32::NAN), Value::Float32(f32::NAN));
        }

        #[test]
        fn negative_zero_equals_positive_zero() {
            assert_eq!(Value::Float64(-0.0), Value::Float64(0.0));
        }

        #[test]
        fn list_equality_is_ordered() {
            assert_eq!(
                Value::List(vec![Value::Int(1), Value::Int(2)]),
                Value::List(vec![Value::Int(1), Value::Int(2)])
            );
            assert_ne!(
                Value::List(vec![Value::Int(1), Value::Int(2)]),
                Value::List(vec![Value::Int(2), Value::Int(1)])
            );
        }

        #[test]
        fn map_equality_ignores_insertion_order() {
            let mut m1 = HashMap::new();
            m1.insert("a".to_string(), Value::Int(1));
            m1.insert("b".to_string(), Value::Int(2));

            let mut m2 = HashMap::new();
            m2.insert("b".to_string(), Value::Int(2));
            m2.insert("a".to_string(), Value::Int(1));

            assert_eq!(Value::Map(m1), Value::Map(m2));
        }
    }

    mod serialization_tests {
        use super::*;

        #[test]
        fn value_round_trips_through_json() {
            let mut map = HashMap::new();
            map.insert("nested".to_string(), Value::List(vec![Value::Int(7)]));

            let values = vec![
                Value::Int(42),
                Value::Float32(1.5),
                Value::Float64(2.5),
                Value::Bool(false),
                Value::Bytes(vec![0, 255, 128]),
                Value::Text("hello".to_string()),
                Value::Timestamp(Utc::now()),
                Value::List(vec![Value::Text("a".to_string())]),
                Value::Map(map),
            ];

            for value in values {
                let encoded = serde_json::to_string(&value).unwrap();
                let decoded: Value = serde_json::from_str(&encoded).unwrap();
                assert_eq!(value, decoded);
            }
        }
    }

    mod blob_tests {
        use super::*;

        #[test]
        fn blob_wraps_and_unwraps() {
            let blob = Blob::new(b"payload".to_vec());
            assert_eq!(blob.as_slice(), b"payload");

            let bytes: Vec<u8> = blob.clone().into();
            assert_eq!(Blob::from(bytes), blob);
        }
    }
}
