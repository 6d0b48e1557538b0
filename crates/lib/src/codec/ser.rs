//! Writing values through any serde `Serializer`.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{CodecConfig, default_config};
use crate::{
    strategy::{DateEncodingStrategy, date::format_iso8601_millis},
    value::Value,
};

/// A value paired with the configuration used to write it.
///
/// `Encoded` is what the codec hands to a serde format. It never fails on
/// its own; errors only come from the underlying serializer.
///
/// ```
/// # use anyvalue::{Value, codec::{CodecConfig, Encoded}, strategy::BytesEncodingStrategy};
/// let config = CodecConfig {
///     bytes_encoding: BytesEncodingStrategy::Hex,
///     ..CodecConfig::default()
/// };
/// let value = Value::Bytes(vec![0xca, 0xfe]);
/// let json = serde_json::to_string(&Encoded::new(&value, &config)).unwrap();
/// assert_eq!(json, "\"cafe\"");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Encoded<'a> {
    value: &'a Value,
    config: &'a CodecConfig,
}

impl<'a> Encoded<'a> {
    pub fn new(value: &'a Value, config: &'a CodecConfig) -> Self {
        Self { value, config }
    }

    fn nested(&self, value: &'a Value) -> Self {
        Self::new(value, self.config)
    }
}

impl Serialize for Encoded<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.value {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Timestamp(ts) => match self.config.date_encoding {
                DateEncodingStrategy::Iso8601Millis => {
                    serializer.serialize_str(&format_iso8601_millis(ts))
                }
                DateEncodingStrategy::SecondsSince1970 => {
                    let secs = ts.timestamp() as f64
                        + f64::from(ts.timestamp_subsec_nanos()) / 1_000_000_000.0;
                    serializer.serialize_f64(secs)
                }
                DateEncodingStrategy::MillisecondsSince1970 => {
                    serializer.serialize_i64(ts.timestamp_millis())
                }
            },
            Value::Bytes(bytes) => match self.config.bytes_encoding.encode_text(bytes) {
                Some(text) => serializer.serialize_str(&text),
                None => serializer.serialize_bytes(bytes),
            },
            Value::List(list) => {
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for item in list {
                    seq.serialize_element(&self.nested(item))?;
                }
                seq.end()
            }
            Value::Map(map) => {
                let mut entries = serializer.serialize_map(Some(map.len()))?;
                for (key, item) in map {
                    entries.serialize_entry(key, &self.nested(item))?;
                }
                entries.end()
            }
        }
    }
}

/// Writes the value with [`CodecConfig::default`].
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Encoded::new(self, default_config()).serialize(serializer)
    }
}
