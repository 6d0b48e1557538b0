//! The dynamic value type.
//!
//! This module provides the [`Value`] enum that represents every shape of
//! data this crate can hold. Values can be either leaf values (null,
//! booleans, numbers, text, timestamps, byte blobs) or branch values
//! (ordered lists and string-keyed maps of further values).
//!
//! # Submodules
//!
//! - [`convert`] - The [`ToValue`] / [`FromValue`] conversion protocol
//! - [`path`] - Dot-delimited [`KeyPath`] addressing
//! - [`subscript`] - Index, key and path reads/writes on a [`Value`]
//! - [`errors`] - The [`ValueError`] taxonomy

use std::{
    collections::BTreeMap,
    fmt,
    hash::{Hash, Hasher},
};

use chrono::{DateTime, Utc};

use crate::strategy::{BytesDecodingStrategy, DateDecodingStrategy, date::format_iso8601_millis};

pub mod convert;
pub mod errors;
pub mod path;
pub mod subscript;

pub use convert::{FromValue, ToValue};
pub use errors::ValueError;
pub use path::KeyPath;

/// A self-describing dynamic value.
///
/// Exactly one variant is active at a time. Equality and hashing are
/// structural and variant-aware: `Int(1)` and `Float(1.0)` are different
/// values, lists compare element-wise in order and maps compare by key set
/// and per-key value, regardless of insertion order.
///
/// # Value Types
///
/// ## Leaf Values
/// - [`Value::Null`] - The absence marker
/// - [`Value::Bool`] - Boolean values
/// - [`Value::Int`] - 64-bit signed integers
/// - [`Value::Float`] - 64-bit floating point numbers
/// - [`Value::Text`] - UTF-8 text
/// - [`Value::Timestamp`] - An instant in UTC
/// - [`Value::Bytes`] - An opaque byte blob
///
/// ## Branch Values
/// - [`Value::List`] - Ordered sequence of values
/// - [`Value::Map`] - String-keyed mapping of values
///
/// # Direct Comparisons
///
/// ```
/// # use anyvalue::Value;
/// let text = Value::Text("hello".to_string());
/// let number = Value::Int(42);
///
/// assert!(text == "hello");
/// assert!(number == 42);
/// assert!(42 == number);
/// assert!(!(text == 42));
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    // Leaf values
    /// Absence marker
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
    /// Point in time, kept in UTC
    Timestamp(DateTime<Utc>),
    /// Raw bytes
    Bytes(Vec<u8>),

    // Branch values
    /// Ordered collection of values
    List(Vec<Value>),
    /// String-keyed collection of values
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Creates an empty list value
    pub fn empty_list() -> Self {
        Value::List(Vec::new())
    }

    /// Creates an empty map value
    pub fn empty_map() -> Self {
        Value::Map(BTreeMap::new())
    }

    /// Builds a list by converting each element through [`ToValue`].
    ///
    /// ```
    /// # use anyvalue::Value;
    /// let list = Value::from_list([1i64, 2, 3]);
    /// assert_eq!(list, Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]));
    /// ```
    pub fn from_list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToValue,
    {
        Value::List(items.into_iter().map(|item| item.to_value()).collect())
    }

    /// Builds a map by converting each entry value through [`ToValue`].
    ///
    /// ```
    /// # use anyvalue::Value;
    /// let map = Value::from_map([("name", "Alice"), ("city", "Lisbon")]);
    /// assert_eq!(map.get("name"), Some(&Value::from("Alice")));
    /// ```
    pub fn from_map<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: ToValue,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.to_value()))
                .collect(),
        )
    }

    /// Returns true if this is a leaf value (terminal node)
    pub fn is_leaf(&self) -> bool {
        !self.is_branch()
    }

    /// Returns true if this is a branch value (can contain other values)
    pub fn is_branch(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    /// Returns true if this is the absence marker
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Timestamp(_) => "timestamp",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Number of direct children of a list or map, 0 for leaf values
    pub fn len(&self) -> usize {
        match self {
            Value::List(list) => list.len(),
            Value::Map(map) => map.len(),
            _ => 0,
        }
    }

    /// Returns true if this is an empty container or a leaf value
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer.
    ///
    /// Floats are accepted and truncated toward zero, as long as they are
    /// finite and fit in an `i64`.
    ///
    /// ```
    /// # use anyvalue::Value;
    /// assert_eq!(Value::Float(123.9).as_int(), Some(123));
    /// assert_eq!(Value::Float(f64::NAN).as_int(), None);
    /// ```
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Float(f) => {
                let truncated = f.trunc();
                // i64::MAX is not representable as f64; 2^63 is the first value out of range
                if truncated.is_finite()
                    && truncated >= i64::MIN as f64
                    && truncated < i64::MAX as f64
                {
                    Some(truncated as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Attempts to convert to an integer, returning default if not numeric
    pub fn as_int_or(&self, default: i64) -> i64 {
        self.as_int().unwrap_or(default)
    }

    /// Attempts to convert to a float, widening integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a string, returning empty string if not text
    pub fn as_str_or_empty(&self) -> &str {
        self.as_str().unwrap_or("")
    }

    /// Returns the timestamp if this is a [`Value::Timestamp`]
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Resolves a timestamp through the given decoding strategy.
    ///
    /// ```
    /// # use anyvalue::{Value, strategy::DateDecodingStrategy};
    /// let value = Value::Int(1_600_000_000);
    /// let ts = value.as_timestamp_with(&DateDecodingStrategy::seconds_since_1970());
    /// assert_eq!(ts.map(|t| t.timestamp()), Some(1_600_000_000));
    /// ```
    pub fn as_timestamp_with(&self, strategy: &DateDecodingStrategy) -> Option<DateTime<Utc>> {
        strategy.decode(self).ok()
    }

    /// Returns the bytes, decoding base64 text if necessary
    pub fn as_bytes(&self) -> Option<Vec<u8>> {
        self.as_bytes_with(&BytesDecodingStrategy::base64())
    }

    /// Resolves bytes through the given decoding strategy
    pub fn as_bytes_with(&self, strategy: &BytesDecodingStrategy) -> Option<Vec<u8>> {
        strategy.decode(self).ok()
    }

    /// Attempts to view this value as a list (returns immutable reference)
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to view this value as a mutable list
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to view this value as a map (returns immutable reference)
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to view this value as a mutable map
    pub fn as_map_mut(&mut self) -> Option<&mut BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Strictly converts this value into `T`.
    ///
    /// ```
    /// # use anyvalue::Value;
    /// let list = Value::from_list([1i64, 2, 3]);
    /// assert_eq!(list.convert::<Vec<i64>>().unwrap(), vec![1, 2, 3]);
    /// assert!(Value::Float(1.0).convert::<i64>().is_err());
    /// ```
    pub fn convert<T: FromValue>(&self) -> Result<T, ValueError> {
        T::from_value(self)
    }

    /// Gets the value at `path` converted to `T`.
    ///
    /// Returns `None` if the path does not resolve or the conversion fails.
    pub fn get_as<T: FromValue>(&self, path: impl Into<KeyPath>) -> Option<T> {
        let value = self.get_path(path)?;
        T::from_value(value).ok()
    }

    /// Renders the value with the same rules as its `Display` implementation
    pub fn to_debug_string(&self) -> String {
        self.to_string()
    }
}

/// Collapses all NaNs and both zeros so that equality is reflexive and agrees with hashing
fn canonical_float_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => canonical_float_bits(*a) == canonical_float_bits(*b),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(n) => n.hash(state),
            Value::Float(f) => canonical_float_bits(*f).hash(state),
            Value::Text(s) => s.hash(state),
            Value::Timestamp(ts) => ts.hash(state),
            Value::Bytes(bytes) => bytes.hash(state),
            Value::List(list) => list.hash(state),
            Value::Map(map) => map.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            // Debug formatting keeps the fractional part: 123.0 instead of 123
            Value::Float(n) => write!(f, "{n:?}"),
            Value::Text(s) => write!(f, "\"{s}\""),
            Value::Timestamp(ts) => write!(f, "\"{}\"", format_iso8601_millis(ts)),
            Value::Bytes(bytes) => write!(f, "\"{}\"", hex::encode(bytes)),
            Value::List(list) => {
                write!(f, "[")?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{key}\": {item}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

// PartialEq implementations for comparing Value with other types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        match self {
            Value::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Value::Int(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        match self {
            Value::Int(n) => *n == i64::from(*other),
            _ => false,
        }
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        match self {
            Value::Float(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        match self {
            Value::Bool(b) => b == other,
            _ => false,
        }
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for f64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
