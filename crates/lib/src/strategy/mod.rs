//! Pluggable interpretation of timestamps and byte blobs.
//!
//! Self-describing text formats have no native token for either, so the
//! caller chooses how they are spelled. Decoding strategies are named
//! closures (`Value -> Result<T, ValueError>`) and can be supplied at any
//! call site; encoding strategies are plain enums that fit into
//! configuration.
//!
//! | Strategy | Accepts |
//! |---|---|
//! | [`DateDecodingStrategy::deferred`] | `Timestamp` only |
//! | [`DateDecodingStrategy::iso8601_millis`] | `Timestamp`, ISO-8601 text |
//! | [`DateDecodingStrategy::seconds_since_1970`] | `Timestamp`, `Int`, `Float` |
//! | [`DateDecodingStrategy::milliseconds_since_1970`] | `Timestamp`, `Int`, `Float` |
//! | [`BytesDecodingStrategy::deferred`] | `Bytes` only |
//! | [`BytesDecodingStrategy::base64`] | `Bytes`, base64 text |
//! | [`BytesDecodingStrategy::hex`] | `Bytes`, hex text |

pub mod bytes;
pub mod date;

pub use bytes::{BytesDecodingStrategy, BytesEncodingStrategy};
pub use date::{DateDecodingStrategy, DateEncodingStrategy};
