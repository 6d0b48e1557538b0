//! Byte blob decoding and encoding strategies.

use std::{borrow::Cow, fmt, sync::Arc};

use base64ct::{Base64, Encoding};
use serde::{Deserialize, Serialize};

use crate::value::{Value, ValueError};

const TYPE_NAME: &str = "bytes";

/// Decodes standard (padded) base64.
pub fn decode_base64(text: &str) -> Option<Vec<u8>> {
    Base64::decode_vec(text).ok()
}

/// Encodes standard (padded) base64.
pub fn encode_base64(bytes: &[u8]) -> String {
    Base64::encode_string(bytes)
}

/// Decodes a hexadecimal string, high nibble first.
///
/// An optional leading `0x` is skipped. Both letter cases are accepted.
/// Odd-length input and non-hex characters are rejected.
///
/// ```
/// # use anyvalue::strategy::bytes::decode_hex;
/// assert_eq!(decode_hex("0102030A0FBADDEF"), Some(vec![1, 2, 3, 10, 15, 186, 221, 239]));
/// assert_eq!(decode_hex("0xff"), Some(vec![255]));
/// assert_eq!(decode_hex("abc"), None);
/// ```
pub fn decode_hex(text: &str) -> Option<Vec<u8>> {
    let digits = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(digits).ok()
}

/// Encodes bytes as lowercase hex, optionally with a `0x` prefix.
pub fn encode_hex(bytes: &[u8], prefixed: bool) -> String {
    let digits = hex::encode(bytes);
    if prefixed { format!("0x{digits}") } else { digits }
}

type DecodeBytes = dyn Fn(&Value) -> Result<Vec<u8>, ValueError> + Send + Sync;

/// A named, swappable policy resolving a [`Value`] into raw bytes.
///
/// ```
/// # use anyvalue::{Value, strategy::BytesDecodingStrategy};
/// let value = Value::from("dGVzdA==");
/// assert_eq!(BytesDecodingStrategy::base64().decode(&value).unwrap(), b"test");
/// assert!(BytesDecodingStrategy::deferred().decode(&value).is_err());
/// ```
#[derive(Clone)]
pub struct BytesDecodingStrategy {
    name: Cow<'static, str>,
    decode: Arc<DecodeBytes>,
}

impl BytesDecodingStrategy {
    /// Wraps an arbitrary decoding function.
    pub fn custom<F>(name: impl Into<Cow<'static, str>>, decode: F) -> Self
    where
        F: Fn(&Value) -> Result<Vec<u8>, ValueError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            decode: Arc::new(decode),
        }
    }

    /// Only accepts [`Value::Bytes`].
    pub fn deferred() -> Self {
        Self::custom("deferred", |value| match value {
            Value::Bytes(bytes) => Ok(bytes.clone()),
            _ => Err(ValueError::not_initializable(TYPE_NAME, value)),
        })
    }

    /// Accepts bytes and standard base64 text.
    pub fn base64() -> Self {
        Self::text_codec("base64", decode_base64)
    }

    /// Accepts bytes and hexadecimal text, with or without a `0x` prefix.
    pub fn hex() -> Self {
        Self::text_codec("hex", decode_hex)
    }

    fn text_codec(name: &'static str, decode: fn(&str) -> Option<Vec<u8>>) -> Self {
        Self::custom(name, move |value| {
            let decoded = match value {
                Value::Bytes(bytes) => Some(bytes.clone()),
                Value::Text(text) => decode(text),
                _ => None,
            };
            decoded.ok_or_else(|| ValueError::not_initializable(TYPE_NAME, value))
        })
    }

    /// The strategy's name, as given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves `value` into raw bytes.
    pub fn decode(&self, value: &Value) -> Result<Vec<u8>, ValueError> {
        (self.decode)(value)
    }
}

impl Default for BytesDecodingStrategy {
    fn default() -> Self {
        Self::deferred()
    }
}

impl fmt::Debug for BytesDecodingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BytesDecodingStrategy")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// How byte blobs are written by the codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BytesEncodingStrategy {
    /// Standard padded base64 text
    #[default]
    Base64,
    /// Lowercase hex text
    Hex,
    /// Lowercase hex text with a `0x` prefix
    PrefixedHex,
    /// The format's own bytes token, for formats that have one
    Native,
}

impl BytesEncodingStrategy {
    /// Renders bytes as text, or `None` for [`BytesEncodingStrategy::Native`].
    pub fn encode_text(self, bytes: &[u8]) -> Option<String> {
        match self {
            BytesEncodingStrategy::Base64 => Some(encode_base64(bytes)),
            BytesEncodingStrategy::Hex => Some(encode_hex(bytes, false)),
            BytesEncodingStrategy::PrefixedHex => Some(encode_hex(bytes, true)),
            BytesEncodingStrategy::Native => None,
        }
    }
}
