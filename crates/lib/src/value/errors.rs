//! Error types for value conversion and navigation.
//!
//! This module defines the structured errors raised when a [`Value`] cannot
//! be turned into a native type, when a codec hands over a token that has no
//! matching variant, or when a key path cannot be applied for writing.

use thiserror::Error;

use super::Value;

/// Structured error types for value operations.
///
/// Strict conversions (see [`FromValue`](super::FromValue)) return these
/// errors directly. Lenient accessors such as [`Value::as_int`] absorb them
/// into `None`.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValueError {
    /// The value's variant or content does not satisfy the target type
    #[error("cannot initialize {type_name} from {from}")]
    NotInitializable {
        type_name: &'static str,
        from: Value,
    },

    /// The codec produced a token that maps to no known variant
    #[error("unrecognized value: {reason}")]
    UnrecognizedValue { reason: String },

    /// A key path could not be applied while writing
    #[error("invalid key path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
}

impl ValueError {
    /// Builds a [`ValueError::NotInitializable`] for `type_name` from a copy of `from`.
    pub fn not_initializable(type_name: &'static str, from: &Value) -> Self {
        ValueError::NotInitializable {
            type_name,
            from: from.clone(),
        }
    }

    /// Check if this error is a failed native conversion
    pub fn is_not_initializable(&self) -> bool {
        matches!(self, ValueError::NotInitializable { .. })
    }

    /// Check if this error is an unrecognized codec token
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, ValueError::UnrecognizedValue { .. })
    }

    /// Check if this error is related to key path writes
    pub fn is_path_error(&self) -> bool {
        matches!(self, ValueError::InvalidPath { .. })
    }

    /// Get the offending value if this is a conversion error
    pub fn from_value(&self) -> Option<&Value> {
        match self {
            ValueError::NotInitializable { from, .. } => Some(from),
            _ => None,
        }
    }

    /// Get the target type name if this is a conversion error
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            ValueError::NotInitializable { type_name, .. } => Some(type_name),
            _ => None,
        }
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            ValueError::InvalidPath { path, .. } => Some(path),
            _ => None,
        }
    }
}

// Conversion from ValueError to the main Error type
impl From<ValueError> for crate::Error {
    fn from(err: ValueError) -> Self {
        crate::Error::Value(err)
    }
}
