//!
//! anyvalue: a self-describing dynamic value with typed conversions.
//! This library models loosely-typed data (the kind produced by JSON or CBOR
//! decoders) as a single tagged union and moves it to and from native types.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: A tagged union of null, booleans, 64-bit integers and floats, text, UTC timestamps, byte blobs, ordered lists and string-keyed maps.
//! * **Conversions (`value::convert`)**: The `ToValue` / `FromValue` protocol. Strict conversions fail with a structured error; the lenient `as_*` accessors on `Value` return `Option`.
//! * **Strategies (`strategy`)**: Named, swappable policies deciding how timestamps and byte blobs are recognized in text formats and how they are written back.
//! * **Codec (`codec::Codec`)**: Serde glue reading and writing values through any serde format, with JSON helpers on top of `serde_json`.
//! * **Key paths (`value::KeyPath`)**: Dot-delimited addressing into nested values, with index and key writes that pad lists and delete on null.

pub mod codec;
pub mod strategy;
pub mod value;

/// Re-export the core types for easier access.
pub use codec::{Codec, CodecConfig};
pub use value::{FromValue, KeyPath, ToValue, Value, ValueError};

/// Result type used throughout the anyvalue library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the anyvalue library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured conversion, codec and path errors from the value module
    #[error(transparent)]
    Value(value::ValueError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Value(_) => "value",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error is a failed native conversion.
    pub fn is_not_initializable(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_not_initializable(),
            _ => false,
        }
    }

    /// Check if the decoded input held a token with no matching variant.
    pub fn is_unrecognized(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_unrecognized(),
            _ => false,
        }
    }

    /// Check if this error came from a key path write.
    pub fn is_path_error(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_path_error(),
            _ => false,
        }
    }

    /// Check if this error is a malformed document or an I/O failure.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
