//! The strict ToValue / FromValue protocol.

use std::collections::{BTreeMap, HashMap};

use anyvalue::{FromValue, ToValue, Value, ValueError};
use chrono::{DateTime, Utc};
use serde_bytes::ByteBuf;

use crate::helpers::sample_timestamp;

// ===== SCALARS =====

#[test]
fn test_scalars_round_trip() {
    assert_eq!(bool::from_value(&true.to_value()), Ok(true));
    assert_eq!(i64::from_value(&(-5i64).to_value()), Ok(-5));
    assert_eq!(i32::from_value(&7i32.to_value()), Ok(7));
    assert_eq!(f64::from_value(&1.25f64.to_value()), Ok(1.25));
    assert_eq!(String::from_value(&"s".to_value()), Ok("s".to_string()));

    let ts = sample_timestamp();
    assert_eq!(DateTime::<Utc>::from_value(&ts.to_value()), Ok(ts));

    let bytes = ByteBuf::from(vec![1, 2, 3]);
    assert_eq!(ByteBuf::from_value(&bytes.to_value()), Ok(bytes));
}

#[test]
fn test_strict_conversions_do_not_coerce() {
    assert!(i64::from_value(&Value::Float(1.0)).is_err());
    assert!(f64::from_value(&Value::Int(1)).is_err());
    assert!(bool::from_value(&Value::Int(1)).is_err());
    assert!(String::from_value(&Value::Int(1)).is_err());
    assert!(DateTime::<Utc>::from_value(&Value::from("2019-09-26T05:58:30.996+00:00")).is_err());
    assert!(ByteBuf::from_value(&Value::from("dGVzdA==")).is_err());
}

#[test]
fn test_narrow_float_rejects_out_of_range() {
    assert_eq!(f32::from_value(&Value::Float(1.5)), Ok(1.5));
    assert!(f32::from_value(&Value::Float(f64::INFINITY)).unwrap().is_infinite());
    assert!(f32::from_value(&Value::Float(f64::NAN)).unwrap().is_nan());

    let err = f32::from_value(&Value::Float(1e300)).unwrap_err();
    assert!(err.is_not_initializable());
    assert_eq!(err.type_name(), Some("f32"));
    assert!(f32::from_value(&Value::Float(-1e300)).is_err());
}

#[test]
fn test_error_carries_type_and_value() {
    let value = Value::from("nope");
    let err = i64::from_value(&value).unwrap_err();

    assert!(err.is_not_initializable());
    assert_eq!(err.type_name(), Some("i64"));
    assert_eq!(err.from_value(), Some(&value));
    assert_eq!(err.to_string(), "cannot initialize i64 from \"nope\"");

    let err: anyvalue::Error = err.into();
    assert_eq!(err.module(), "value");
    assert!(err.is_not_initializable());
}

// ===== COLLECTIONS =====

#[test]
fn test_vec_conversion_fails_fast() {
    let value = Value::List(vec![Value::Int(1), Value::from("two"), Value::Bool(false)]);
    let err = Vec::<i64>::from_value(&value).unwrap_err();

    // The first offending element is reported, not the list
    assert_eq!(
        err,
        ValueError::NotInitializable {
            type_name: "i64",
            from: Value::from("two"),
        }
    );
}

#[test]
fn test_vec_requires_a_list() {
    assert!(Vec::<i64>::from_value(&Value::Int(1)).is_err());
    assert_eq!(Vec::<i64>::from_value(&Value::empty_list()), Ok(vec![]));
}

#[test]
fn test_maps_convert_per_entry() {
    let mut native = BTreeMap::new();
    native.insert("a".to_string(), 1i64);
    native.insert("b".to_string(), 2i64);

    let value = native.to_value();
    assert_eq!(value, Value::from_map([("a", 1i64), ("b", 2i64)]));
    assert_eq!(BTreeMap::<String, i64>::from_value(&value), Ok(native.clone()));

    let hashed = HashMap::<String, i64>::from_value(&value).unwrap();
    assert_eq!(hashed.len(), 2);
    assert_eq!(hashed.to_value(), value);

    let bad = Value::from_map([("a", Value::Int(1)), ("b", Value::Null)]);
    assert!(BTreeMap::<String, i64>::from_value(&bad).is_err());
}

#[test]
fn test_option_maps_null() {
    assert_eq!(Option::<i64>::from_value(&Value::Null), Ok(None));
    assert_eq!(Option::<i64>::from_value(&Value::Int(4)), Ok(Some(4)));
    assert!(Option::<i64>::from_value(&Value::from("x")).is_err());
    assert_eq!(None::<String>.to_value(), Value::Null);
}

#[test]
fn test_nested_collections() {
    let native = vec![vec![1i64], vec![], vec![2, 3]];
    let value = native.to_value();
    assert_eq!(value.to_string(), "[[1], [], [2, 3]]");
    assert_eq!(value.convert::<Vec<Vec<i64>>>(), Ok(native));
}

#[test]
fn test_get_as_combines_lookup_and_conversion() {
    let doc = Value::from_map([("n", Value::Int(3)), ("s", Value::from("x"))]);
    assert_eq!(doc.get_as::<i64>("n"), Some(3));
    assert_eq!(doc.get_as::<i64>("s"), None);
    assert_eq!(doc.get_as::<i64>("missing"), None);
    assert_eq!(doc.get_as::<Option<String>>("s"), Some(Some("x".to_string())));
}
