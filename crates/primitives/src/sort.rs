//! Sort records by a selected key
//!
//! One entry point covers both nested paths and plain top-level fields: the
//! key is any [`Selector`], so `JsonPath::from("a.b")` and `Field::new("a")`
//! go through the same code.
//!
//! # Ordering
//!
//! Keys order with [`compare_values`]. Records with equal keys keep their
//! input order in both directions (the sort is stable). Missing keys sort
//! first in ascending order and last in descending order.
//!
//! # Example
//!
//! ```
//! use arrayops_core::JsonPath;
//! use arrayops_primitives::{sort_by_label, SortOrder};
//! use serde_json::json;
//!
//! let data = vec![json!({"a": {"b": 3}}), json!({"a": {"b": 1}}), json!({"a": {"b": 2}})];
//! let sorted = sort_by_label(&data, &JsonPath::from("a.b"), SortOrder::Asc);
//! assert_eq!(sorted, vec![json!({"a": {"b": 1}}), json!({"a": {"b": 2}}), json!({"a": {"b": 3}})]);
//! ```

use crate::options::{CrossTypePolicy, OpsOptions};
use arrayops_core::{compare_values, strict_compare, Error, Record, Result, Selector};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest key first (default)
    #[default]
    Asc,
    /// Largest key first
    Desc,
}

impl SortOrder {
    /// Orient an ascending comparison result for this direction
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    /// Accepts "asc" or "desc", case-insensitive
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Desc)
        } else {
            Err(Error::InvalidSortOrder(s.to_string()))
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

fn keyed<'a, S: Selector + ?Sized>(
    data: &'a [Record],
    key: &S,
) -> Vec<(Option<&'a Value>, &'a Record)> {
    data.iter().map(|record| (key.select(record), record)).collect()
}

fn undecorate(keyed: Vec<(Option<&Value>, &Record)>) -> Vec<Record> {
    keyed.into_iter().map(|(_, record)| record.clone()).collect()
}

/// Return a sorted copy of `data`
///
/// Never fails: keys of different kinds are ordered by kind (see
/// [`compare_values`]). The input slice is left untouched.
pub fn sort_by_label<S: Selector + ?Sized>(
    data: &[Record],
    key: &S,
    order: SortOrder,
) -> Vec<Record> {
    tracing::trace!(target: "arrayops::sort", len = data.len(), %order, "sort_by_label");

    let mut decorated = keyed(data, key);
    decorated.sort_by(|(a, _), (b, _)| order.apply(compare_values(*a, *b)));
    undecorate(decorated)
}

/// Return a sorted copy of `data`, refusing mixed-kind keys
///
/// Fails with [`Error::IncomparableValues`] if any two records would be
/// compared across kinds, or if any key is absent. Collections with fewer
/// than two records never compare anything and always succeed.
pub fn try_sort_by_label<S: Selector + ?Sized>(
    data: &[Record],
    key: &S,
    order: SortOrder,
) -> Result<Vec<Record>> {
    tracing::trace!(target: "arrayops::sort", len = data.len(), %order, "try_sort_by_label");

    let mut decorated = keyed(data, key);
    if let Some(((first, _), rest)) = decorated.split_first() {
        // Every key must share the first key's kind; after that no comparison can fail
        for (other, _) in rest {
            if let Err(e) = strict_compare(*first, *other) {
                tracing::debug!(target: "arrayops::sort", error = %e, "strict sort rejected keys");
                return Err(e);
            }
        }
    }
    decorated.sort_by(|(a, _), (b, _)| order.apply(compare_values(*a, *b)));
    Ok(undecorate(decorated))
}

/// Sort according to `options.cross_type`
pub fn sort_with<S: Selector + ?Sized>(
    data: &[Record],
    key: &S,
    order: SortOrder,
    options: &OpsOptions,
) -> Result<Vec<Record>> {
    match options.cross_type {
        CrossTypePolicy::TypeOrder => Ok(sort_by_label(data, key, order)),
        CrossTypePolicy::Reject => try_sort_by_label(data, key, order),
    }
}
