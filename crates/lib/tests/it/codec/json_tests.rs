//! JSON reading and writing.

use anyvalue::{
    Codec, CodecConfig, Error, Value,
    strategy::{BytesEncodingStrategy, DateDecodingStrategy, DateEncodingStrategy},
};
use serde::de::{IntoDeserializer, value::U128Deserializer};

use crate::helpers::{SAMPLE_JSON, assert_sample, iso_codec, sample_timestamp, sample_value};

// ===== DECODING =====

#[test]
fn test_decoding_sample_document() {
    let value = iso_codec().from_json_str(SAMPLE_JSON).unwrap();
    assert_sample(&value);
}

#[test]
fn test_decoding_from_bytes() {
    let value = iso_codec().from_json_slice(SAMPLE_JSON.as_bytes()).unwrap();
    assert_sample(&value);
}

#[test]
fn test_whole_numbers_decode_as_int() {
    let value = Codec::new().from_json_str("[1, -1, 1.0, 1.5]").unwrap();
    assert_eq!(
        value,
        Value::List(vec![
            Value::Int(1),
            Value::Int(-1),
            Value::Float(1.0),
            Value::Float(1.5),
        ])
    );
}

#[test]
fn test_large_unsigned_decodes_as_float() {
    let value = Codec::new().from_json_str("18446744073709551615").unwrap();
    assert_eq!(value, Value::Float(u64::MAX as f64));

    let value = Codec::new().from_json_str("9223372036854775807").unwrap();
    assert_eq!(value, Value::Int(i64::MAX));
}

#[test]
fn test_default_codec_keeps_date_text() {
    let value = Codec::new()
        .from_json_str(r#""2019-09-26T07:58:30.996+0200""#)
        .unwrap();
    assert_eq!(value, Value::from("2019-09-26T07:58:30.996+0200"));

    let value: Value = serde_json::from_str(r#""2019-09-26T07:58:30.996+0200""#).unwrap();
    assert!(matches!(value, Value::Text(_)));
}

#[test]
fn test_date_recognition_follows_strategy() {
    let seconds = Codec::new().with_date_decoding(DateDecodingStrategy::seconds_since_1970());
    // Numbers are matched before strings, so epoch strategies never turn them into timestamps
    assert_eq!(seconds.from_json_str("1569477510").unwrap(), Value::Int(1_569_477_510));

    let iso = iso_codec();
    assert_eq!(
        iso.from_json_str(r#""2019-09-26T05:58:30.996+00:00""#).unwrap(),
        Value::Timestamp(sample_timestamp())
    );
    assert_eq!(
        iso.from_json_str(r#""2019-09-26""#).unwrap(),
        Value::from("2019-09-26")
    );
}

#[test]
fn test_malformed_json_is_a_serialization_error() {
    for text in ["", "{", "[1,]", "{\"a\" 1}", "nul", "[1] [2]"] {
        let err = Codec::new().from_json_str(text).unwrap_err();
        assert!(err.is_serialization_error(), "{text}: {err}");
        assert_eq!(err.module(), "serialize");
    }
}

#[test]
fn test_oversized_integers_are_unrecognized() {
    let deserializer: U128Deserializer<serde::de::value::Error> = u128::MAX.into_deserializer();
    let err = Codec::new().decode(deserializer).unwrap_err();
    assert!(err.to_string().contains("does not fit in 64 bits"));

    let deserializer: U128Deserializer<serde::de::value::Error> = 42u128.into_deserializer();
    assert_eq!(Codec::new().decode(deserializer), Ok(Value::Int(42)));
}

#[test]
fn test_unrecognized_value_error_surface() {
    let err: Error = anyvalue::ValueError::UnrecognizedValue {
        reason: "enum token".into(),
    }
    .into();
    assert!(err.is_unrecognized());
    assert!(!err.is_serialization_error());
    assert_eq!(err.to_string(), "unrecognized value: enum token");
}

// ===== ENCODING =====

#[test]
fn test_encoding_round_trips_sample() {
    let codec = iso_codec();
    let json = codec.to_json_string(&sample_value()).unwrap();
    let decoded = codec.from_json_str(&json).unwrap();
    assert_sample(&decoded);
}

#[test]
fn test_encoding_is_sorted_and_compact() {
    let value = Value::from_map([("b", Value::Null), ("a", Value::from_list([true]))]);
    assert_eq!(
        Codec::new().to_json_string(&value).unwrap(),
        r#"{"a":[true],"b":null}"#
    );
    assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"a":[true],"b":null}"#);

    let pretty = Codec::new().to_json_string_pretty(&value).unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(Codec::new().from_json_str(&pretty).unwrap(), value);

    let bytes = Codec::new().to_json_vec(&value).unwrap();
    assert_eq!(bytes, br#"{"a":[true],"b":null}"#);
}

#[test]
fn test_hex_data_encoding() {
    let value = Value::from_map([(
        "data",
        Value::Bytes(vec![0x01, 0x02, 0x03, 0x0a, 0x0f, 0xba, 0xdd, 0xef]),
    )]);

    let hex = Codec::new().with_bytes_encoding(BytesEncodingStrategy::Hex);
    assert_eq!(hex.to_json_string(&value).unwrap(), r#"{"data":"0102030a0fbaddef"}"#);

    let prefixed = Codec::new().with_bytes_encoding(BytesEncodingStrategy::PrefixedHex);
    assert_eq!(
        prefixed.to_json_string(&value).unwrap(),
        r#"{"data":"0x0102030a0fbaddef"}"#
    );

    let base64 = Codec::new();
    assert_eq!(
        base64.to_json_string(&value).unwrap(),
        r#"{"data":"AQIDCg+63e8="}"#
    );
}

#[test]
fn test_hex_data_decoding() {
    let value = iso_codec().from_json_str(r#"{"data":"0102030A0FBADDEF"}"#).unwrap();
    let data = value
        .get("data")
        .and_then(|data| data.as_bytes_with(&anyvalue::strategy::BytesDecodingStrategy::hex()));
    assert_eq!(data, Some(vec![0x01, 0x02, 0x03, 0x0a, 0x0f, 0xba, 0xdd, 0xef]));
}

#[test]
fn test_date_encoding_strategies() {
    let value = Value::Timestamp(sample_timestamp());

    let iso = Codec::new();
    assert_eq!(
        iso.to_json_string(&value).unwrap(),
        r#""2019-09-26T05:58:30.996+00:00""#
    );

    let millis = Codec::new().with_date_encoding(DateEncodingStrategy::MillisecondsSince1970);
    assert_eq!(millis.to_json_string(&value).unwrap(), "1569477510996");

    let seconds = Codec::new().with_date_encoding(DateEncodingStrategy::SecondsSince1970);
    let encoded = seconds.to_json_string(&value).unwrap();
    let decoded = seconds.from_json_str(&encoded).unwrap();
    let secs = decoded.as_float().unwrap();
    assert!((secs - 1_569_477_510.996).abs() < 1e-3, "{secs}");
}

#[test]
fn test_round_trip_under_fixed_strategies() {
    let config = CodecConfig {
        date_decoding: DateDecodingStrategy::iso8601_millis(),
        ..CodecConfig::default()
    };
    let codec = Codec::with_config(config);

    let value = Value::from_map([
        ("when", Value::Timestamp(sample_timestamp())),
        ("n", Value::Int(-3)),
        ("x", Value::Float(0.25)),
        ("whole", Value::Float(2.0)),
        ("s", Value::from("plain text")),
        (
            "nested",
            Value::List(vec![Value::Null, Value::Bool(true), Value::empty_map()]),
        ),
    ]);

    let json = codec.to_json_string(&value).unwrap();
    assert_eq!(codec.from_json_str(&json).unwrap(), value);
}

#[test]
fn test_non_finite_floats_encode_as_null() {
    let json = Codec::new().to_json_string(&Value::Float(f64::NAN)).unwrap();
    assert_eq!(json, "null");
}
