//! Tier 4: Configurable policies
//!
//! Empty label/condition sets match everything by default; `MatchNone`
//! flips that. Mixed-kind sort keys order by kind by default; `Reject`
//! turns them into an error.

use crate::test_utils::{ids, orders};
use arrayops::{
    merge_by_labels, try_sort_by_label, ArrayOps, Conditions, CrossTypePolicy,
    EmptyCriteriaPolicy, Error, Field, JsonPath, OpsOptions, SortOrder,
};
use serde_json::json;

#[test]
fn tier4_empty_labels_merge_first_primary_by_default() {
    let primary = vec![json!({"flag": "first"}), json!({"flag": "second"})];
    let labels: Vec<JsonPath> = Vec::new();
    let merged = merge_by_labels(&primary, &orders(), &labels);
    assert!(merged.iter().all(|r| r["flag"] == "first"));
}

#[test]
fn tier4_match_none_disables_empty_criteria() {
    let ops = ArrayOps::with_options(OpsOptions::new().empty_criteria(EmptyCriteriaPolicy::MatchNone));
    let data = orders();
    let labels: Vec<JsonPath> = Vec::new();

    assert!(ops.filter_by_conditions(&data, &Conditions::new()).is_empty());
    assert_eq!(ops.merge_by_labels(&[json!({"flag": 1})], &data, &labels), data);

    // Non-empty criteria behave as usual
    let open = ops.filter_by_conditions(&data, &Conditions::new().with("status", "open"));
    assert_eq!(ids(&open), vec![1, 3, 4]);
}

#[test]
fn tier4_mixed_kinds_order_by_kind() {
    let data = vec![
        json!({"id": 1, "k": "text"}),
        json!({"id": 2, "k": 5}),
        json!({"id": 3, "k": null}),
        json!({"id": 4}),
        json!({"id": 5, "k": true}),
    ];
    let sorted = ArrayOps::new()
        .sort_by_label(&data, &Field::new("k"), SortOrder::Asc)
        .unwrap();
    assert_eq!(ids(&sorted), vec![4, 3, 5, 2, 1]);
}

#[test]
fn tier4_reject_policy_fails_loudly() {
    let data = orders();
    let err = try_sort_by_label(&data, &JsonPath::from("customer.tier"), SortOrder::Asc)
        .unwrap_err();
    assert_eq!(
        err,
        Error::IncomparableValues {
            left: "string",
            right: "absent"
        }
    );

    let ops = ArrayOps::with_options(OpsOptions::new().cross_type(CrossTypePolicy::Reject));
    let sorted = ops
        .sort_by_label(&data, &Field::new("total"), SortOrder::Desc)
        .unwrap();
    assert_eq!(ids(&sorted), vec![1, 3, 4, 2]);
}

#[test]
fn tier4_options_load_from_json() {
    let opts: OpsOptions = serde_json::from_value(json!({
        "empty_criteria": "match_none",
        "cross_type": "reject",
        "absent_group_key": "n/a"
    }))
    .unwrap();
    let ops = ArrayOps::with_options(opts);
    let groups = ops.group_by(&orders(), &JsonPath::from("customer.tier"));
    assert_eq!(ids(&groups["n/a"]), vec![4]);
}

#[test]
fn tier4_sort_order_from_str() {
    assert_eq!("desc".parse::<SortOrder>(), Ok(SortOrder::Desc));
    assert!(matches!(
        "descending".parse::<SortOrder>(),
        Err(Error::InvalidSortOrder(_))
    ));
}
