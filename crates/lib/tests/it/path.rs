//! Key path integration tests
//!
//! Reads through `get`, `get_index` and `get_path`; writes through `set`,
//! `set_index` and `set_path`.

use anyvalue::{KeyPath, Value, key_path};

fn nested() -> Value {
    Value::from_map([("a", Value::from_map([("b", vec![10i64, 20, 30])]))])
}

fn mixed_list() -> Value {
    Value::List(vec![
        Value::Int(123),
        Value::from("str"),
        Value::from_list([12.3]),
    ])
}

// ===== KEY PATH PARSING =====

#[test]
fn test_parse_and_display() {
    let path: KeyPath = "a.b.1".parse().unwrap();
    assert_eq!(path.segments(), ["a", "b", "1"]);
    assert_eq!(path.to_string(), "a.b.1");
    assert_eq!(KeyPath::from("x"), KeyPath::from_segments(["x"]));
    assert_eq!(KeyPath::from(String::from("x.y")).len(), 2);
}

#[test]
fn test_empty_path_resolves_to_self() {
    let doc = nested();
    assert_eq!(doc.get_path(""), Some(&doc));
    assert_eq!(doc.get_path(KeyPath::new()), Some(&doc));
}

// ===== READS =====

#[test]
fn test_get_path_through_maps_and_lists() {
    let doc = nested();
    assert_eq!(doc.get_path("a.b.1"), Some(&Value::Int(20)));
    assert_eq!(doc.get_path("a.b.5"), None);
    assert_eq!(doc.get_path("a.c"), None);
    assert_eq!(doc.get_path("a.b.x"), None);
    assert_eq!(doc.get_path("a.b.1.z"), None);
}

#[test]
fn test_get_path_rejects_negative_segments() {
    let doc = nested();
    assert_eq!(doc.get_path("a.b.-1"), None);
    // Direct index reads do accept negatives
    assert_eq!(
        doc.get_path("a.b").and_then(|list| list.get_index(-1)),
        Some(&Value::Int(30))
    );
}

#[test]
fn test_negative_indexing() {
    let list = mixed_list();
    assert_eq!(list.get_index(-1), Some(&Value::from_list([12.3])));
    assert_eq!(list.get_index(-2), Some(&Value::from("str")));
    assert_eq!(list.get_index(-3), Some(&Value::Int(123)));
    assert_eq!(list.get_index(-4), None);
    assert_eq!(list.get("-1"), Some(&Value::from_list([12.3])));
}

#[test]
fn test_get_on_maps_and_scalars() {
    let map = Value::from_map([("1", "one"), ("k", "v")]);
    assert_eq!(map.get("k"), Some(&Value::from("v")));
    assert_eq!(map.get_index(1), Some(&Value::from("one")));
    assert_eq!(map.get("missing"), None);

    assert_eq!(Value::Int(1).get("k"), None);
    assert_eq!(Value::Int(1).get_index(0), None);
    assert_eq!(mixed_list().get("str"), None);
}

#[test]
fn test_keys_containing_dots() {
    let doc = Value::from_map([(
        "hosts",
        Value::from_map([("example.com", Value::from_map([("port", 443i64)]))]),
    )]);

    assert_eq!(doc.get_path("hosts.example.com.port"), None);
    assert_eq!(
        doc.get_path(key_path!("hosts", "example.com", "port")),
        Some(&Value::Int(443))
    );
    assert_eq!(doc.get_as::<i64>(key_path!("hosts", "example.com", "port")), Some(443));
}

// ===== INDEX AND KEY WRITES =====

#[test]
fn test_index_write_pads_with_null() {
    let mut list = Value::empty_list();
    list.set_index(3, 12.3);
    assert_eq!(
        list,
        Value::List(vec![Value::Null, Value::Null, Value::Null, Value::Float(12.3)])
    );

    list.set_index(3, Value::Null);
    assert_eq!(list, Value::List(vec![Value::Null, Value::Null, Value::Null]));
}

#[test]
fn test_index_write_beyond_addressable_padding_is_skipped() {
    let mut list = Value::List(vec![Value::Int(1)]);
    list.set_index(i64::MAX, 2);
    list.set(&i64::MAX.to_string(), 3);
    assert_eq!(list, Value::List(vec![Value::Int(1)]));
}

#[test]
fn test_index_write_replaces_and_removes() {
    let mut list = mixed_list();
    list.set_index(-1, "last");
    assert_eq!(list.get_index(2), Some(&Value::from("last")));

    list.set_index(0, Value::Null);
    assert_eq!(list, Value::List(vec![Value::from("str"), Value::from("last")]));

    // Removing out of bounds and writing before the start change nothing
    list.set_index(10, Value::Null);
    list.set_index(-10, 1);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_index_write_ignores_non_lists() {
    let mut map = Value::from_map([("0", 1i64)]);
    map.set_index(0, 2);
    assert_eq!(map, Value::from_map([("0", 1i64)]));

    let mut scalar = Value::Int(5);
    scalar.set_index(0, 1);
    assert_eq!(scalar, Value::Int(5));
}

#[test]
fn test_key_writes() {
    let mut map = Value::empty_map();
    map.set("a", 1);
    map.set("a", 2);
    assert_eq!(map.get("a"), Some(&Value::Int(2)));

    map.set("a", Value::Null);
    assert!(map.is_empty());

    let mut list = Value::empty_list();
    list.set("1", "x");
    assert_eq!(list, Value::List(vec![Value::Null, Value::from("x")]));
    list.set("not a number", "y");
    assert_eq!(list.len(), 2);

    let mut scalar = Value::from("s");
    scalar.set("k", 1);
    assert_eq!(scalar, Value::from("s"));
}

#[test]
fn test_remove() {
    let mut map = Value::from_map([("a", 1i64), ("b", 2i64)]);
    assert_eq!(map.remove("a"), Some(Value::Int(1)));
    assert_eq!(map.remove("a"), None);

    let mut list = mixed_list();
    assert_eq!(list.remove("-1"), Some(Value::from_list([12.3])));
    assert_eq!(list.remove("5"), None);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_get_mut_edits_in_place() {
    let mut doc = nested();
    if let Some(list) = doc.get_path_mut("a.b") {
        list.set_index(0, 11);
    }
    *doc.get_mut("a").unwrap().get_mut("b").unwrap().get_mut("-1").unwrap() = Value::Int(33);
    assert_eq!(doc.get_as::<Vec<i64>>("a.b"), Some(vec![11, 20, 33]));
}

// ===== PATH WRITES =====

#[test]
fn test_set_path_creates_intermediate_maps() {
    let mut doc = Value::empty_map();
    doc.set_path("user.profile.name", "Alice").unwrap();
    doc.set_path("user.profile.age", 30).unwrap();

    assert_eq!(doc.get_as::<String>("user.profile.name"), Some("Alice".into()));
    assert_eq!(doc.get_path("user.profile").map(Value::len), Some(2));
}

#[test]
fn test_set_path_replaces_scalar_intermediates() {
    let mut doc = Value::from_map([("a", 1i64)]);
    doc.set_path("a.b", true).unwrap();
    assert_eq!(doc.get_path("a.b"), Some(&Value::Bool(true)));
}

#[test]
fn test_set_path_into_lists() {
    let mut doc = nested();
    doc.set_path("a.b.1", 21).unwrap();
    doc.set_path("a.b.4", 50).unwrap();
    assert_eq!(doc.get_path("a.b").unwrap().to_string(), "[10, 21, 30, null, 50]");

    doc.set_path("a.b.0.deep", "x").unwrap();
    assert_eq!(doc.get_path("a.b.0.deep"), Some(&Value::from("x")));

    let err = doc.set_path("a.b.9.deep", "x").unwrap_err();
    assert!(err.is_path_error());
    assert_eq!(err.path(), Some("a.b.9.deep"));

    assert!(doc.set_path("a.b.nope", 1).is_err());
}

#[test]
fn test_set_path_null_deletes() {
    let mut doc = nested();
    doc.set_path("a.b", Value::Null).unwrap();
    assert_eq!(doc, Value::from_map([("a", Value::empty_map())]));

    // Deleting below a missing key is a no-op
    doc.set_path("x.y.z", Value::Null).unwrap();
    assert_eq!(doc.get("x"), None);
}

#[test]
fn test_set_path_null_leaves_leaf_intermediates_alone() {
    let original = Value::from_map([
        ("a", Value::Int(5)),
        ("l", Value::from_list([7i64])),
    ]);
    let mut doc = original.clone();

    doc.set_path("a.b", Value::Null).unwrap();
    doc.set_path("l.0.x", Value::Null).unwrap();
    doc.set_path("a.b.c", Value::Null).unwrap();
    assert_eq!(doc, original);
}

#[test]
fn test_set_path_rejects_unallocatable_padding() {
    let mut doc = Value::from_map([("a", Value::empty_list())]);
    let err = doc.set_path("a.9223372036854775807", 1).unwrap_err();
    assert!(err.is_path_error());
    assert_eq!(err.path(), Some("a.9223372036854775807"));
    assert_eq!(doc.get_path("a"), Some(&Value::empty_list()));
}

#[test]
fn test_set_path_on_scalar_root() {
    let mut scalar = Value::Int(1);
    let err = scalar.set_path("a", 2).unwrap_err();
    assert!(err.is_path_error());
    assert_eq!(scalar, Value::Int(1));

    scalar.set_path("", "replaced").unwrap();
    assert_eq!(scalar, Value::from("replaced"));
}
