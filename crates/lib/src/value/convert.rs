//! Conversion protocol between [`Value`] and native Rust types.
//!
//! The protocol is split into two traits so that the total and the fallible
//! directions are typed independently:
//!
//! - [`ToValue`] never fails; every supported native value has a [`Value`]
//!   representation.
//! - [`FromValue`] is strict: it fails with
//!   [`ValueError::NotInitializable`] whenever the variant (or its content)
//!   does not match what the native type expects.
//!
//! Collections convert element by element and fail fast: the first element
//! that does not convert aborts the whole conversion.
//!
//! ```
//! use anyvalue::{FromValue, ToValue, Value};
//!
//! let value = vec![1i64, 2, 3].to_value();
//! assert_eq!(Vec::<i64>::from_value(&value).unwrap(), vec![1, 2, 3]);
//!
//! let mixed = Value::List(vec![Value::Int(1), Value::Text("x".into())]);
//! assert!(Vec::<i64>::from_value(&mixed).is_err());
//! ```

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde_bytes::ByteBuf;

use super::{Value, ValueError};

/// A native type that can always produce a [`Value`].
pub trait ToValue {
    /// Converts `self` into its dynamic representation.
    fn to_value(&self) -> Value;
}

/// A native type that can attempt construction from a [`Value`].
pub trait FromValue: Sized {
    /// Strictly converts `value` into `Self`.
    fn from_value(value: &Value) -> Result<Self, ValueError>;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        Ok(value.clone())
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(ValueError::not_initializable("bool", value)),
        }
    }
}

impl ToValue for i64 {
    fn to_value(&self) -> Value {
        Value::Int(*self)
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Int(n) => Ok(*n),
            _ => Err(ValueError::not_initializable("i64", value)),
        }
    }
}

impl ToValue for i32 {
    fn to_value(&self) -> Value {
        Value::Int(i64::from(*self))
    }
}

impl FromValue for i32 {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Int(n) => {
                i32::try_from(*n).map_err(|_| ValueError::not_initializable("i32", value))
            }
            _ => Err(ValueError::not_initializable("i32", value)),
        }
    }
}

impl ToValue for u32 {
    fn to_value(&self) -> Value {
        Value::Int(i64::from(*self))
    }
}

impl FromValue for u32 {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Int(n) => {
                u32::try_from(*n).map_err(|_| ValueError::not_initializable("u32", value))
            }
            _ => Err(ValueError::not_initializable("u32", value)),
        }
    }
}

impl ToValue for u64 {
    fn to_value(&self) -> Value {
        // Values past i64::MAX fall back to a float rather than wrapping
        match i64::try_from(*self) {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Float(*self as f64),
        }
    }
}

impl FromValue for u64 {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Int(n) => {
                u64::try_from(*n).map_err(|_| ValueError::not_initializable("u64", value))
            }
            _ => Err(ValueError::not_initializable("u64", value)),
        }
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Float(f) => Ok(*f),
            _ => Err(ValueError::not_initializable("f64", value)),
        }
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Float(f) => {
                let narrowed = *f as f32;
                if f.is_finite() && !narrowed.is_finite() {
                    return Err(ValueError::not_initializable("f32", value));
                }
                Ok(narrowed)
            }
            _ => Err(ValueError::not_initializable("f32", value)),
        }
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(ValueError::not_initializable("String", value)),
        }
    }
}

impl ToValue for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }
}

impl FromValue for DateTime<Utc> {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Timestamp(ts) => Ok(*ts),
            _ => Err(ValueError::not_initializable("DateTime<Utc>", value)),
        }
    }
}

impl ToValue for ByteBuf {
    fn to_value(&self) -> Value {
        Value::Bytes(self.to_vec())
    }
}

impl FromValue for ByteBuf {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Bytes(bytes) => Ok(ByteBuf::from(bytes.clone())),
            _ => Err(ValueError::not_initializable("ByteBuf", value)),
        }
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::List(list) => list.iter().map(T::from_value).collect(),
            _ => Err(ValueError::not_initializable("Vec", value)),
        }
    }
}

impl<T: ToValue> ToValue for BTreeMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, item)| (key.clone(), item.to_value()))
                .collect(),
        )
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Map(map) => map
                .iter()
                .map(|(key, item)| Ok((key.clone(), T::from_value(item)?)))
                .collect(),
            _ => Err(ValueError::not_initializable("BTreeMap", value)),
        }
    }
}

impl<T: ToValue> ToValue for HashMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, item)| (key.clone(), item.to_value()))
                .collect(),
        )
    }
}

impl<T: FromValue> FromValue for HashMap<String, T> {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Map(map) => map
                .iter()
                .map(|(key, item)| Ok((key.clone(), T::from_value(item)?)))
                .collect(),
            _ => Err(ValueError::not_initializable("HashMap", value)),
        }
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            _ => T::from_value(value).map(Some),
        }
    }
}

// Convenient From implementations for literal-style construction
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        value.to_value()
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value)
    }
}

impl From<ByteBuf> for Value {
    fn from(value: ByteBuf) -> Self {
        Value::Bytes(value.into_vec())
    }
}

impl<T: ToValue> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        value.to_value()
    }
}

impl<T: ToValue> From<BTreeMap<String, T>> for Value {
    fn from(value: BTreeMap<String, T>) -> Self {
        value.to_value()
    }
}

impl<T: ToValue> From<HashMap<String, T>> for Value {
    fn from(value: HashMap<String, T>) -> Self {
        value.to_value()
    }
}

impl<T: ToValue> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.to_value()
    }
}
