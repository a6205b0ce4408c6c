//! Behavior options for the record operations.
//!
//! The defaults reproduce the plain free functions exactly. Use the builder
//! methods to opt into the stricter policies:
//!
//! ```
//! use arrayops_primitives::{CrossTypePolicy, EmptyCriteriaPolicy, OpsOptions};
//!
//! let opts = OpsOptions::new()
//!     .empty_criteria(EmptyCriteriaPolicy::MatchNone)
//!     .cross_type(CrossTypePolicy::Reject);
//! assert_eq!(opts.absent_group_key, "undefined");
//! ```

use arrayops_core::ABSENT_GROUP_KEY;
use serde::{Deserialize, Serialize};

/// What an empty label set or empty condition set matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyCriteriaPolicy {
    /// "All of nothing" holds: every record matches (default).
    #[default]
    MatchAll,
    /// No criteria, no match.
    MatchNone,
}

impl EmptyCriteriaPolicy {
    /// Outcome of matching against an empty criteria set.
    pub fn matches_empty(self) -> bool {
        matches!(self, EmptyCriteriaPolicy::MatchAll)
    }
}

/// How sorting treats keys of different kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossTypePolicy {
    /// Order by kind: absent < null < bool < number < string < array < object (default).
    #[default]
    TypeOrder,
    /// Fail the sort when keys differ in kind or a key is absent.
    Reject,
}

/// Options for [`crate::sort`], [`crate::merge`], [`crate::filter`] and [`crate::group`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpsOptions {
    /// Policy for empty merge labels and empty filter conditions.
    pub empty_criteria: EmptyCriteriaPolicy,
    /// Policy for sort keys of different kinds.
    pub cross_type: CrossTypePolicy,
    /// Group name for records whose key is absent or null.
    pub absent_group_key: String,
}

impl OpsOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the empty-criteria policy.
    pub fn empty_criteria(mut self, policy: EmptyCriteriaPolicy) -> Self {
        self.empty_criteria = policy;
        self
    }

    /// Set the cross-type sort policy.
    pub fn cross_type(mut self, policy: CrossTypePolicy) -> Self {
        self.cross_type = policy;
        self
    }

    /// Set the group name used for absent and null keys.
    pub fn absent_group_key(mut self, key: impl Into<String>) -> Self {
        self.absent_group_key = key.into();
        self
    }
}

impl Default for OpsOptions {
    fn default() -> Self {
        Self {
            empty_criteria: EmptyCriteriaPolicy::MatchAll,
            cross_type: CrossTypePolicy::TypeOrder,
            absent_group_key: ABSENT_GROUP_KEY.to_string(),
        }
    }
}
