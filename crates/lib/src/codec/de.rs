//! Reading values from any serde `Deserializer`.

use std::{collections::BTreeMap, fmt};

use serde::de::{self, Deserialize, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};

use super::{CodecConfig, default_config};
use crate::value::Value;

/// Deserializes one [`Value`] using the given configuration.
///
/// Tokens are mapped in a fixed order: null, boolean, integer, float,
/// string (a timestamp when the configured date strategy accepts the text,
/// plain text otherwise), byte string, sequence and finally map with string
/// keys. Anything else is rejected with the format's own error type.
///
/// ```
/// # use anyvalue::{Value, codec::{CodecConfig, ValueSeed}, strategy::DateDecodingStrategy};
/// # use serde::de::DeserializeSeed;
/// let config = CodecConfig {
///     date_decoding: DateDecodingStrategy::iso8601_millis(),
///     ..CodecConfig::default()
/// };
/// let mut json = serde_json::Deserializer::from_str(r#""2019-09-26T07:58:30.996+02:00""#);
/// let value = ValueSeed::new(&config).deserialize(&mut json).unwrap();
/// assert!(matches!(value, Value::Timestamp(_)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ValueSeed<'a> {
    config: &'a CodecConfig,
}

impl<'a> ValueSeed<'a> {
    pub fn new(config: &'a CodecConfig) -> Self {
        Self { config }
    }
}

impl<'de> DeserializeSeed<'de> for ValueSeed<'_> {
    type Value = Value;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor {
            config: self.config,
        })
    }
}

struct ValueVisitor<'a> {
    config: &'a CodecConfig,
}

impl ValueVisitor<'_> {
    fn seed(&self) -> ValueSeed<'_> {
        ValueSeed::new(self.config)
    }

    fn text(&self, text: String) -> Value {
        let value = Value::Text(text);
        match self.config.date_decoding.decode(&value) {
            Ok(ts) => {
                tracing::trace!(
                    strategy = self.config.date_decoding.name(),
                    "text token recognized as timestamp"
                );
                Value::Timestamp(ts)
            }
            Err(_) => value,
        }
    }
}

impl<'de> Visitor<'de> for ValueVisitor<'_> {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(
            "null, a boolean, a number, text, bytes, a sequence or a map with string keys",
        )
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        self.seed().deserialize(deserializer)
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        self.seed().deserialize(deserializer)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Value::Int(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
        Ok(match i64::try_from(v) {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Float(v as f64),
        })
    }

    fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(v)
            .map(Value::Int)
            .map_err(|_| E::custom(format_args!("integer {v} does not fit in 64 bits")))
    }

    fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(v)
            .map(Value::Int)
            .map_err(|_| E::custom(format_args!("integer {v} does not fit in 64 bits")))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
        Ok(self.text(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E> {
        Ok(self.text(v))
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(Value::Bytes(v.to_vec()))
    }

    fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        Ok(Value::Bytes(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut list = Vec::new();
        while let Some(item) = seq.next_element_seed(self.seed())? {
            list.push(item);
        }
        Ok(Value::List(list))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = BTreeMap::new();
        while let Some(key) = map.next_key::<String>()? {
            let item = map.next_value_seed(self.seed())?;
            entries.insert(key, item);
        }
        Ok(Value::Map(entries))
    }
}

/// Reads the value with [`CodecConfig::default`].
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        ValueSeed::new(default_config()).deserialize(deserializer)
    }
}
