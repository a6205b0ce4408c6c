//! Group records by the string form of a selected key

use arrayops_core::{group_key, Record, Selector, ABSENT_GROUP_KEY};
use indexmap::IndexMap;

/// Group name -> records in input order; group names in first-occurrence order
pub type Groups = IndexMap<String, Vec<Record>>;

/// Group records by the value at `key`
///
/// Group names come from [`group_key`]; records with an absent or null key
/// land in the `"undefined"` group. Every record appears in exactly one group.
///
/// ```
/// use arrayops_core::JsonPath;
/// use arrayops_primitives::group_by;
/// use serde_json::json;
///
/// let data = vec![json!({"t": "x"}), json!({"t": "y"}), json!({"t": "x"})];
/// let groups = group_by(&data, &JsonPath::from("t"));
/// assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["x", "y"]);
/// assert_eq!(groups["x"], vec![json!({"t": "x"}), json!({"t": "x"})]);
/// assert_eq!(groups["y"], vec![json!({"t": "y"})]);
/// ```
pub fn group_by<S: Selector + ?Sized>(data: &[Record], key: &S) -> Groups {
    group_by_with(data, key, ABSENT_GROUP_KEY)
}

/// Group with a custom name for the absent/null group
pub fn group_by_with<S: Selector + ?Sized>(
    data: &[Record],
    key: &S,
    absent_key: &str,
) -> Groups {
    tracing::trace!(target: "arrayops::group", len = data.len(), "group_by");

    let mut groups = Groups::new();
    for record in data {
        let name = group_key(key.select(record)).unwrap_or_else(|| absent_key.to_string());
        groups.entry(name).or_default().push(record.clone());
    }
    groups
}
