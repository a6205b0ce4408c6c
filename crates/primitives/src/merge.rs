//! Merge two record collections on matching labels
//!
//! The output always has the length and order of `secondary`. Each secondary
//! record is paired with the first `primary` record whose values at every
//! label are strictly equal (see [`strict_eq`]), and the two are shallow
//! merged with the primary record's fields winning. Unmatched secondary
//! records are copied as-is.
//!
//! ```
//! use arrayops_core::JsonPath;
//! use arrayops_primitives::merge_by_labels;
//! use serde_json::json;
//!
//! let primary = vec![json!({"id": 1, "name": "A"})];
//! let secondary = vec![json!({"id": 1, "val": 10}), json!({"id": 2, "val": 20})];
//! let merged = merge_by_labels(&primary, &secondary, &[JsonPath::from("id")]);
//! assert_eq!(merged, vec![json!({"id": 1, "val": 10, "name": "A"}), json!({"id": 2, "val": 20})]);
//! ```

use crate::options::EmptyCriteriaPolicy;
use arrayops_core::{strict_eq, Record, Selector};
use serde_json::{Map, Value};

fn labels_match<L: Selector>(labels: &[L], primary: &Record, secondary: &Record) -> bool {
    labels
        .iter()
        .all(|label| strict_eq(label.select(primary), label.select(secondary)))
}

/// Shallow merge: `base` fields first, then `overrides` fields replacing or appending.
///
/// Non-object inputs contribute no fields. Strings and arrays are not
/// exploded into index-keyed fields.
fn shallow_merge(base: &Record, overrides: Option<&Record>) -> Record {
    let mut merged = match base {
        Value::Object(fields) => fields.clone(),
        _ => Map::new(),
    };
    if let Some(Value::Object(fields)) = overrides {
        for (name, value) in fields {
            merged.insert(name.clone(), value.clone());
        }
    }
    Value::Object(merged)
}

/// Merge `primary` into `secondary` wherever all `labels` match
///
/// An empty `labels` slice matches every secondary record against the first
/// primary record.
pub fn merge_by_labels<L: Selector>(
    primary: &[Record],
    secondary: &[Record],
    labels: &[L],
) -> Vec<Record> {
    merge_by_labels_with(primary, secondary, labels, EmptyCriteriaPolicy::MatchAll)
}

/// Merge with an explicit policy for an empty `labels` slice
pub fn merge_by_labels_with<L: Selector>(
    primary: &[Record],
    secondary: &[Record],
    labels: &[L],
    empty_labels: EmptyCriteriaPolicy,
) -> Vec<Record> {
    tracing::trace!(
        target: "arrayops::merge",
        primary = primary.len(),
        secondary = secondary.len(),
        labels = labels.len(),
        "merge_by_labels"
    );
    if labels.is_empty() {
        tracing::warn!(
            target: "arrayops::merge",
            policy = ?empty_labels,
            "merge called with no labels"
        );
    }

    let can_match = !labels.is_empty() || empty_labels.matches_empty();
    secondary
        .iter()
        .map(|item| {
            let found = if can_match {
                primary
                    .iter()
                    .find(|candidate| labels_match(labels, candidate, item))
            } else {
                None
            };
            shallow_merge(item, found)
        })
        .collect()
}
