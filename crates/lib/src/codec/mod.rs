//! Codec adapter between [`Value`] and serde formats.
//!
//! The adapter is format agnostic: [`Encoded`] implements `Serialize` and
//! [`ValueSeed`] implements `DeserializeSeed`, so any serde format can read
//! and write values. [`Codec`] bundles a [`CodecConfig`] with JSON helpers
//! built on `serde_json`.
//!
//! ```
//! use anyvalue::{Codec, Value, strategy::DateDecodingStrategy};
//!
//! let codec = Codec::new().with_date_decoding(DateDecodingStrategy::iso8601_millis());
//! let value = codec
//!     .from_json_str(r#"{"at": "2019-09-26T07:58:30.996+02:00", "n": 3}"#)
//!     .unwrap();
//! assert!(matches!(value.get("at"), Some(Value::Timestamp(_))));
//! assert_eq!(
//!     codec.to_json_string(&value).unwrap(),
//!     r#"{"at":"2019-09-26T05:58:30.996+00:00","n":3}"#
//! );
//! ```

use std::sync::LazyLock;

use serde::{Deserializer, Serializer, de::DeserializeSeed, ser::Serialize};

use crate::{
    Error, Result,
    strategy::{BytesEncodingStrategy, DateDecodingStrategy, DateEncodingStrategy},
    value::{Value, ValueError},
};

pub mod de;
pub mod ser;

pub use de::ValueSeed;
pub use ser::Encoded;

/// Strategies applied while reading and writing values.
///
/// The default reads timestamps only from native timestamp tokens, writes
/// them as ISO-8601 text with milliseconds, and writes bytes as base64.
#[derive(Debug, Clone, Default)]
pub struct CodecConfig {
    pub date_decoding: DateDecodingStrategy,
    pub date_encoding: DateEncodingStrategy,
    pub bytes_encoding: BytesEncodingStrategy,
}

static DEFAULT_CONFIG: LazyLock<CodecConfig> = LazyLock::new(CodecConfig::default);

pub(crate) fn default_config() -> &'static CodecConfig {
    &DEFAULT_CONFIG
}

/// Reads and writes [`Value`]s with a fixed [`CodecConfig`].
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Creates a codec with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Sets how text tokens are recognized as timestamps.
    pub fn with_date_decoding(mut self, strategy: DateDecodingStrategy) -> Self {
        self.config.date_decoding = strategy;
        self
    }

    /// Sets how timestamps are written.
    pub fn with_date_encoding(mut self, strategy: DateEncodingStrategy) -> Self {
        self.config.date_encoding = strategy;
        self
    }

    /// Sets how byte blobs are written.
    pub fn with_bytes_encoding(mut self, strategy: BytesEncodingStrategy) -> Self {
        self.config.bytes_encoding = strategy;
        self
    }

    /// Pairs `value` with this codec's configuration for any serde format.
    pub fn encoded<'a>(&'a self, value: &'a Value) -> Encoded<'a> {
        Encoded::new(value, &self.config)
    }

    /// A seed reading one value with this codec's configuration.
    pub fn seed(&self) -> ValueSeed<'_> {
        ValueSeed::new(&self.config)
    }

    /// Writes `value` through an arbitrary serde serializer.
    pub fn encode<S>(&self, value: &Value, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.encoded(value).serialize(serializer)
    }

    /// Reads one value from an arbitrary serde deserializer.
    pub fn decode<'de, D>(&self, deserializer: D) -> std::result::Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        self.seed().deserialize(deserializer)
    }

    pub fn to_json_string(&self, value: &Value) -> Result<String> {
        Ok(serde_json::to_string(&self.encoded(value))?)
    }

    pub fn to_json_string_pretty(&self, value: &Value) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.encoded(value))?)
    }

    pub fn to_json_vec(&self, value: &Value) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.encoded(value))?)
    }

    /// Parses one JSON document.
    ///
    /// Malformed JSON fails with [`Error::Serialize`]. Well-formed JSON whose
    /// tokens have no matching variant fails with
    /// [`ValueError::UnrecognizedValue`].
    pub fn from_json_str(&self, text: &str) -> Result<Value> {
        let mut deserializer = serde_json::Deserializer::from_str(text);
        let value = self.decode(&mut deserializer).map_err(classify)?;
        deserializer.end().map_err(classify)?;
        Ok(value)
    }

    /// Parses one JSON document from bytes, see [`Codec::from_json_str`].
    pub fn from_json_slice(&self, bytes: &[u8]) -> Result<Value> {
        let mut deserializer = serde_json::Deserializer::from_slice(bytes);
        let value = self.decode(&mut deserializer).map_err(classify)?;
        deserializer.end().map_err(classify)?;
        Ok(value)
    }
}

fn classify(err: serde_json::Error) -> Error {
    if err.is_data() {
        tracing::debug!(error = %err, "json token has no matching value");
        ValueError::UnrecognizedValue {
            reason: err.to_string(),
        }
        .into()
    } else {
        Error::Serialize(err)
    }
}
