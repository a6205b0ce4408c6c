//! Tier 1: Nested-value reader invariants
//!
//! The reader returns the absent value exactly when some prefix of the path
//! is missing or cannot be traversed.

use crate::test_utils::orders;
use arrayops::{get_path, Field, JsonPath, Selector};
use serde_json::{json, Value};

#[test]
fn tier1_reads_nested_field() {
    let data = orders();
    assert_eq!(get_path(&data[0], "customer.tier"), Some(&json!("gold")));
    assert_eq!(get_path(&data[0], "id"), Some(&json!(1)));
}

#[test]
fn tier1_missing_intermediate_is_absent() {
    let data = orders();
    assert_eq!(get_path(&data[3], "customer.tier"), None);
    assert_eq!(get_path(&data[3], "customer"), None);
}

#[test]
fn tier1_non_traversable_intermediate_is_absent() {
    let record = json!({"a": 5, "b": "str", "c": [1], "d": null, "e": true});
    for path in ["a.x", "b.x", "c.0", "d.x", "e.x"] {
        assert_eq!(get_path(&record, path), None, "path {path}");
    }
}

#[test]
fn tier1_absent_iff_some_prefix_absent() {
    let record = json!({"a": {"b": {"c": 0}}, "z": {}});
    let cases = [
        ("a", true),
        ("a.b", true),
        ("a.b.c", true),
        ("a.b.c.d", false),
        ("a.x.c", false),
        ("z", true),
        ("z.q", false),
    ];
    for (path, present) in cases {
        let parsed = JsonPath::from(path);
        let prefixes_present = (1..=parsed.len())
            .all(|n| JsonPath::from_segments(&parsed.segments()[..n]).resolve(&record).is_some());
        assert_eq!(get_path(&record, path).is_some(), present, "path {path}");
        assert_eq!(prefixes_present, present, "prefixes of {path}");
    }
}

#[test]
fn tier1_falsy_values_are_present() {
    let record = json!({"zero": 0, "empty": "", "no": false, "nil": null});
    assert_eq!(get_path(&record, "zero"), Some(&json!(0)));
    assert_eq!(get_path(&record, "empty"), Some(&json!("")));
    assert_eq!(get_path(&record, "no"), Some(&json!(false)));
    assert_eq!(get_path(&record, "nil"), Some(&Value::Null));
}

#[test]
fn tier1_selectors_agree_on_top_level_fields() {
    let data = orders();
    for record in &data {
        assert_eq!(
            Field::new("status").select(record),
            JsonPath::from("status").select(record)
        );
    }
}

#[test]
fn tier1_reader_does_not_mutate() {
    let data = orders();
    let before = data.clone();
    for record in &data {
        let _ = get_path(record, "customer.region");
        let _ = get_path(record, "missing.path");
    }
    assert_eq!(data, before);
}
