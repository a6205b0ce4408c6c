//! Configured entry point for the record operations
//!
//! `ArrayOps` holds an [`OpsOptions`] and applies it to every call. It has no
//! other state: clones are independent and it is `Send + Sync`.
//!
//! # Example
//!
//! ```
//! use arrayops::{ArrayOps, Conditions, EmptyCriteriaPolicy, OpsOptions};
//! use serde_json::json;
//!
//! let ops = ArrayOps::with_options(
//!     OpsOptions::new().empty_criteria(EmptyCriteriaPolicy::MatchNone),
//! );
//! let data = vec![json!({"a": 1})];
//! assert!(ops.filter_by_conditions(&data, &Conditions::new()).is_empty());
//! ```

use crate::types::{Conditions, Groups, OpsOptions, Record, Result, Selector, SortOrder};
use arrayops_primitives::{filter, group, merge, sort};

/// Record operations bound to one set of options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayOps {
    options: OpsOptions,
}

impl ArrayOps {
    /// Create a handle with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle with the given options
    pub fn with_options(options: OpsOptions) -> Self {
        tracing::debug!(target: "arrayops", ?options, "ArrayOps configured");
        Self { options }
    }

    /// The options applied to every call
    pub fn options(&self) -> &OpsOptions {
        &self.options
    }

    /// Sorted copy of `data`
    ///
    /// Only fails under [`crate::CrossTypePolicy::Reject`].
    pub fn sort_by_label<S: Selector + ?Sized>(
        &self,
        data: &[Record],
        key: &S,
        order: SortOrder,
    ) -> Result<Vec<Record>> {
        sort::sort_with(data, key, order, &self.options)
    }

    /// Merge `primary` into `secondary` on matching `labels`
    pub fn merge_by_labels<L: Selector>(
        &self,
        primary: &[Record],
        secondary: &[Record],
        labels: &[L],
    ) -> Vec<Record> {
        merge::merge_by_labels_with(primary, secondary, labels, self.options.empty_criteria)
    }

    /// Records satisfying every condition
    pub fn filter_by_conditions(&self, data: &[Record], conditions: &Conditions) -> Vec<Record> {
        filter::filter_by_conditions_with(data, conditions, self.options.empty_criteria)
    }

    /// Records grouped by the string form of `key`
    pub fn group_by<S: Selector + ?Sized>(&self, data: &[Record], key: &S) -> Groups {
        group::group_by_with(data, key, &self.options.absent_group_key)
    }
}
