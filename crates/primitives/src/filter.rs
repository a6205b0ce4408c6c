//! Filter records by equality conditions
//!
//! A record passes when, for every `(path, value)` condition, the value at
//! `path` is strictly equal to `value` (see [`strict_eq`]). Condition values
//! that are arrays or objects never match: the record's value is always a
//! different allocation.
//!
//! A condition can also require the path to be absent
//! ([`Conditions::with_absent`]). Absent is distinct from a present `null`:
//! `with("k", Value::Null)` keeps `{"k": null}` and drops `{}`, while
//! `with_absent("k")` does the reverse.

use crate::options::EmptyCriteriaPolicy;
use arrayops_core::{strict_eq, JsonPath, Record};
use serde_json::{Map, Value};

/// Ordered set of `path == value` conditions
///
/// ```
/// use arrayops_primitives::{filter_by_conditions, Conditions};
/// use serde_json::json;
///
/// let data = vec![
///     json!({"user": {"role": "admin"}, "active": true}),
///     json!({"user": {"role": "guest"}, "active": true}),
/// ];
/// let conditions = Conditions::new()
///     .with("user.role", "admin")
///     .with("active", true);
/// assert_eq!(filter_by_conditions(&data, &conditions), vec![data[0].clone()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conditions {
    /// `None` requires the path to resolve to nothing
    entries: Vec<(JsonPath, Option<Value>)>,
}

impl Conditions {
    /// Create an empty condition set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition (builder pattern)
    pub fn with(mut self, path: impl Into<JsonPath>, value: impl Into<Value>) -> Self {
        self.push(path, value);
        self
    }

    /// Add a condition (mutating)
    pub fn push(&mut self, path: impl Into<JsonPath>, value: impl Into<Value>) {
        self.entries.push((path.into(), Some(value.into())));
    }

    /// Require `path` to be absent (builder pattern)
    pub fn with_absent(mut self, path: impl Into<JsonPath>) -> Self {
        self.push_absent(path);
        self
    }

    /// Require `path` to be absent (mutating)
    pub fn push_absent(&mut self, path: impl Into<JsonPath>) {
        self.entries.push((path.into(), None));
    }

    /// Number of conditions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no conditions
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(path, required value)` pairs; `None` means absent
    pub fn iter(&self) -> impl Iterator<Item = (&JsonPath, Option<&Value>)> {
        self.entries.iter().map(|(path, value)| (path, value.as_ref()))
    }

    /// Check every condition against one record
    ///
    /// An empty condition set matches.
    pub fn matches(&self, record: &Record) -> bool {
        self.entries
            .iter()
            .all(|(path, expected)| strict_eq(path.resolve(record), expected.as_ref()))
    }
}

impl<P: Into<JsonPath>, V: Into<Value>> FromIterator<(P, V)> for Conditions {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        Conditions {
            entries: iter
                .into_iter()
                .map(|(path, value)| (path.into(), Some(value.into())))
                .collect(),
        }
    }
}

/// Each key of the object is a dotted path
impl From<Map<String, Value>> for Conditions {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

/// Keep the records that satisfy every condition, in input order
///
/// An empty condition set keeps every record.
pub fn filter_by_conditions(data: &[Record], conditions: &Conditions) -> Vec<Record> {
    filter_by_conditions_with(data, conditions, EmptyCriteriaPolicy::MatchAll)
}

/// Filter with an explicit policy for an empty condition set
pub fn filter_by_conditions_with(
    data: &[Record],
    conditions: &Conditions,
    empty_conditions: EmptyCriteriaPolicy,
) -> Vec<Record> {
    tracing::trace!(
        target: "arrayops::filter",
        len = data.len(),
        conditions = conditions.len(),
        "filter_by_conditions"
    );

    if conditions.is_empty() && !empty_conditions.matches_empty() {
        return Vec::new();
    }
    data.iter()
        .filter(|record| conditions.matches(record))
        .cloned()
        .collect()
}
