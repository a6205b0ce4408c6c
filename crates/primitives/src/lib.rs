//! Record operations for arrayops
//!
//! This crate implements the four collection operations, all built on the
//! nested-value reader from `arrayops-core`:
//! - sort: reorder records by a selected key
//! - merge: pair records from two collections on matching labels
//! - filter: keep records meeting every equality condition
//! - group: bucket records by the string form of a key
//!
//! Every operation borrows its input and returns new records.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod group;
pub mod merge;
pub mod options;
pub mod sort;

pub use filter::{filter_by_conditions, filter_by_conditions_with, Conditions};
pub use group::{group_by, group_by_with, Groups};
pub use merge::{merge_by_labels, merge_by_labels_with};
pub use options::{CrossTypePolicy, EmptyCriteriaPolicy, OpsOptions};
pub use sort::{sort_by_label, sort_with, try_sort_by_label, SortOrder};
