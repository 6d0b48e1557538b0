//! Timestamp decoding and encoding strategies.
//!
//! Text formats have no native timestamp token, so the same instant may
//! arrive as an ISO-8601 string, as seconds since the Unix epoch or as
//! milliseconds since the epoch. A [`DateDecodingStrategy`] picks one
//! interpretation; a [`DateEncodingStrategy`] picks the written form.

use std::{borrow::Cow, fmt, sync::Arc};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value::{FromValue, Value, ValueError};

/// `yyyy-MM-dd'T'HH:mm:ss.SSS±HH:MM` in chrono's notation
pub const ISO8601_MILLIS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

// Accepted on input only
const ISO8601_MILLIS_COMPACT_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";
const ISO8601_MILLIS_NAIVE: &str = "%Y-%m-%dT%H:%M:%S%.3f";

const TYPE_NAME: &str = "DateTime<Utc>";

/// Formats a timestamp as ISO-8601 with millisecond precision and a `+00:00` offset.
///
/// ```
/// # use anyvalue::strategy::date::format_iso8601_millis;
/// let ts = chrono::DateTime::from_timestamp_millis(1_569_477_510_996).unwrap();
/// assert_eq!(format_iso8601_millis(&ts), "2019-09-26T05:58:30.996+00:00");
/// ```
pub fn format_iso8601_millis(ts: &DateTime<Utc>) -> String {
    ts.format(ISO8601_MILLIS_FORMAT).to_string()
}

/// Parses ISO-8601 text with exactly three fractional digits.
///
/// The offset may be written as `±HH:MM`, `±HHMM` or `Z`. Parsing is
/// locale independent and the result is normalized to UTC.
///
/// ```
/// # use anyvalue::strategy::date::parse_iso8601_millis;
/// let ts = parse_iso8601_millis("2019-09-26T07:58:30.996+02:00").unwrap();
/// assert_eq!(ts.timestamp_millis(), 1_569_477_510_996);
/// assert!(parse_iso8601_millis("2019-09-26T07:58:30+02:00").is_none());
/// ```
pub fn parse_iso8601_millis(text: &str) -> Option<DateTime<Utc>> {
    // chrono treats the fraction as optional, the format does not
    if !text.contains('.') {
        return None;
    }

    if let Some(naive) = text.strip_suffix('Z') {
        return NaiveDateTime::parse_from_str(naive, ISO8601_MILLIS_NAIVE)
            .ok()
            .map(|ts| ts.and_utc());
    }

    [ISO8601_MILLIS_FORMAT, ISO8601_MILLIS_COMPACT_OFFSET]
        .iter()
        .find_map(|format| DateTime::parse_from_str(text, format).ok())
        .map(|ts| ts.with_timezone(&Utc))
}

/// Interprets fractional seconds since the Unix epoch.
fn timestamp_from_secs_f64(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }

    let mut whole = secs.floor();
    let mut nanos = ((secs - whole) * 1e9).round();
    if nanos >= 1e9 {
        whole += 1.0;
        nanos = 0.0;
    }
    if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
        return None;
    }

    DateTime::from_timestamp(whole as i64, nanos as u32)
}

type DecodeDate = dyn Fn(&Value) -> Result<DateTime<Utc>, ValueError> + Send + Sync;

/// A named, swappable policy resolving a [`Value`] into a timestamp.
///
/// Strategies are plain values: clone them, store them in a
/// [`CodecConfig`](crate::codec::CodecConfig) or pass them to
/// [`Value::as_timestamp_with`].
///
/// ```
/// # use anyvalue::{Value, strategy::DateDecodingStrategy};
/// let strategy = DateDecodingStrategy::milliseconds_since_1970();
/// let ts = strategy.decode(&Value::Int(1_569_477_510_996)).unwrap();
/// assert_eq!(ts.timestamp(), 1_569_477_510);
///
/// assert!(strategy.decode(&Value::from("soon")).is_err());
/// ```
#[derive(Clone)]
pub struct DateDecodingStrategy {
    name: Cow<'static, str>,
    decode: Arc<DecodeDate>,
}

impl DateDecodingStrategy {
    /// Wraps an arbitrary decoding function.
    pub fn custom<F>(name: impl Into<Cow<'static, str>>, decode: F) -> Self
    where
        F: Fn(&Value) -> Result<DateTime<Utc>, ValueError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            decode: Arc::new(decode),
        }
    }

    /// Only accepts [`Value::Timestamp`].
    pub fn deferred() -> Self {
        Self::custom("deferred", DateTime::<Utc>::from_value)
    }

    /// Accepts timestamps and ISO-8601 text with millisecond precision.
    pub fn iso8601_millis() -> Self {
        Self::custom("iso8601-millis", |value| match value {
            Value::Timestamp(ts) => Ok(*ts),
            Value::Text(text) => parse_iso8601_millis(text)
                .ok_or_else(|| ValueError::not_initializable(TYPE_NAME, value)),
            _ => Err(ValueError::not_initializable(TYPE_NAME, value)),
        })
    }

    /// Accepts timestamps and numbers of seconds since the Unix epoch.
    pub fn seconds_since_1970() -> Self {
        Self::custom("seconds", |value| {
            let decoded = match value {
                Value::Timestamp(ts) => Some(*ts),
                Value::Int(secs) => DateTime::from_timestamp(*secs, 0),
                Value::Float(secs) => timestamp_from_secs_f64(*secs),
                _ => None,
            };
            decoded.ok_or_else(|| ValueError::not_initializable(TYPE_NAME, value))
        })
    }

    /// Accepts timestamps and numbers of milliseconds since the Unix epoch.
    pub fn milliseconds_since_1970() -> Self {
        Self::custom("milliseconds", |value| {
            let decoded = match value {
                Value::Timestamp(ts) => Some(*ts),
                Value::Int(millis) => DateTime::from_timestamp_millis(*millis),
                Value::Float(millis) => timestamp_from_secs_f64(*millis / 1000.0),
                _ => None,
            };
            decoded.ok_or_else(|| ValueError::not_initializable(TYPE_NAME, value))
        })
    }

    /// The strategy's name, as given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves `value` into a timestamp.
    pub fn decode(&self, value: &Value) -> Result<DateTime<Utc>, ValueError> {
        (self.decode)(value)
    }
}

impl Default for DateDecodingStrategy {
    fn default() -> Self {
        Self::deferred()
    }
}

impl fmt::Debug for DateDecodingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateDecodingStrategy")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// How timestamps are written by the codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateEncodingStrategy {
    /// ISO-8601 text with milliseconds and a `+00:00` offset
    #[default]
    Iso8601Millis,
    /// Fractional seconds since the Unix epoch, as a float
    #[serde(rename = "seconds")]
    SecondsSince1970,
    /// Whole milliseconds since the Unix epoch, as an integer
    #[serde(rename = "milliseconds")]
    MillisecondsSince1970,
}
