//! Tier 2: Operation contracts and worked scenarios

use crate::test_utils::{ids, orders};
use arrayops::{
    filter_by_conditions, group_by, merge_by_labels, sort_by_label, Conditions, Field, JsonPath,
    SortOrder, ABSENT_GROUP_KEY,
};
use serde_json::json;

// ============================================================================
// sort_by_label
// ============================================================================

#[test]
fn tier2_sort_nested_scenario() {
    let data = vec![
        json!({"a": {"b": 3}}),
        json!({"a": {"b": 1}}),
        json!({"a": {"b": 2}}),
    ];
    assert_eq!(
        sort_by_label(&data, &JsonPath::from("a.b"), SortOrder::Asc),
        vec![
            json!({"a": {"b": 1}}),
            json!({"a": {"b": 2}}),
            json!({"a": {"b": 3}}),
        ]
    );
}

#[test]
fn tier2_sort_by_total_both_directions() {
    let data = orders();
    let asc = sort_by_label(&data, &Field::new("total"), SortOrder::Asc);
    assert_eq!(ids(&asc), vec![2, 4, 3, 1]);
    let desc = sort_by_label(&data, &Field::new("total"), SortOrder::Desc);
    assert_eq!(ids(&desc), vec![1, 3, 4, 2]);
}

#[test]
fn tier2_sort_missing_nested_key_sorts_first() {
    let data = orders();
    let sorted = sort_by_label(&data, &JsonPath::from("customer.tier"), SortOrder::Asc);
    // Order 4 has no customer; gold records keep input order
    assert_eq!(ids(&sorted), vec![4, 1, 3, 2]);
}

#[test]
fn tier2_simplified_field_variant() {
    let data = vec![json!({"name": "b"}), json!({"name": "a"})];
    let by_field = sort_by_label(&data, &Field::new("name"), SortOrder::Asc);
    let by_path = sort_by_label(&data, &JsonPath::from("name"), SortOrder::Asc);
    assert_eq!(by_field, by_path);
    assert_eq!(by_field[0]["name"], "a");
}

// ============================================================================
// merge_by_labels
// ============================================================================

#[test]
fn tier2_merge_scenario() {
    let primary = vec![json!({"id": 1, "name": "A"})];
    let secondary = vec![json!({"id": 1, "val": 10}), json!({"id": 2, "val": 20})];
    let merged = merge_by_labels(&primary, &secondary, &[JsonPath::from("id")]);
    assert_eq!(
        merged,
        vec![
            json!({"id": 1, "val": 10, "name": "A"}),
            json!({"id": 2, "val": 20}),
        ]
    );
}

#[test]
fn tier2_merge_on_nested_labels() {
    let regions = vec![
        json!({"customer": {"region": "eu"}, "currency": "EUR"}),
        json!({"customer": {"region": "us"}, "currency": "USD"}),
    ];
    let merged = merge_by_labels(&regions, &orders(), &[JsonPath::from("customer.region")]);
    assert_eq!(merged.len(), 4);
    assert_eq!(merged[0]["currency"], "EUR");
    assert_eq!(merged[1]["currency"], "USD");
    assert_eq!(merged[2]["currency"], "USD");
    assert!(merged[3].get("currency").is_none());
    // Shallow merge: primary's customer object replaces secondary's
    assert_eq!(merged[0]["customer"], json!({"region": "eu"}));
}

// ============================================================================
// filter_by_conditions
// ============================================================================

#[test]
fn tier2_filter_multiple_conditions() {
    let conditions = Conditions::new()
        .with("status", "open")
        .with("customer.tier", "gold");
    assert_eq!(ids(&filter_by_conditions(&orders(), &conditions)), vec![1, 3]);
}

#[test]
fn tier2_filter_empty_conditions_returns_input() {
    let data = orders();
    assert_eq!(filter_by_conditions(&data, &Conditions::new()), data);
}

#[test]
fn tier2_filter_structured_value_is_caller_visible() {
    let conditions = Conditions::new().with("customer", json!({"tier": "gold", "region": "eu"}));
    assert!(filter_by_conditions(&orders(), &conditions).is_empty());
}

// ============================================================================
// group_by
// ============================================================================

#[test]
fn tier2_group_scenario() {
    let data = vec![json!({"t": "x"}), json!({"t": "y"}), json!({"t": "x"})];
    let groups = group_by(&data, &JsonPath::from("t"));
    assert_eq!(groups.len(), 2);
    assert_eq!(groups["x"], vec![json!({"t": "x"}), json!({"t": "x"})]);
    assert_eq!(groups["y"], vec![json!({"t": "y"})]);
}

#[test]
fn tier2_group_nested_with_placeholder() {
    let groups = group_by(&orders(), &JsonPath::from("customer.region"));
    assert_eq!(
        groups.keys().collect::<Vec<_>>(),
        vec!["eu", "us", ABSENT_GROUP_KEY]
    );
    assert_eq!(ids(&groups["us"]), vec![2, 3]);
    assert_eq!(ids(&groups[ABSENT_GROUP_KEY]), vec![4]);
}
