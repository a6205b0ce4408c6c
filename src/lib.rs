//! arrayops: path-addressed helpers for collections of JSON records
//!
//! Four operations share one nested-value reader:
//! - [`sort_by_label`]: sorted copy by a nested path or top-level field
//! - [`merge_by_labels`]: pair two collections on matching labels
//! - [`filter_by_conditions`]: keep records meeting every equality condition
//! - [`group_by`]: bucket records by the string form of a key
//!
//! The free functions use default behavior. [`ArrayOps`] applies an
//! [`OpsOptions`] to every call.
//!
//! # Example
//!
//! ```
//! use arrayops::{get_path, group_by, sort_by_label, JsonPath, SortOrder};
//! use serde_json::json;
//!
//! let data = vec![
//!     json!({"user": {"name": "b", "team": "red"}}),
//!     json!({"user": {"name": "a", "team": "blue"}}),
//!     json!({"user": {"name": "c", "team": "red"}}),
//! ];
//!
//! assert_eq!(get_path(&data[0], "user.name"), Some(&json!("b")));
//!
//! let sorted = sort_by_label(&data, &JsonPath::from("user.name"), SortOrder::Asc);
//! assert_eq!(sorted[0]["user"]["name"], "a");
//!
//! let teams = group_by(&data, &JsonPath::from("user.team"));
//! assert_eq!(teams["red"].len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod ops;
pub mod types;

pub use ops::ArrayOps;
pub use types::*;

pub use arrayops_core::get_path;
pub use arrayops_primitives::{
    filter_by_conditions, group_by, merge_by_labels, sort_by_label, try_sort_by_label,
};
