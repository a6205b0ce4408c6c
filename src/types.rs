//! Public types for the arrayops API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Records and addressing
// ============================================================================

pub use arrayops_core::{selector, Field, JsonPath, Record, Selector, PATH_SEPARATOR};

// ============================================================================
// Value semantics
// ============================================================================

pub use arrayops_core::value::{compare_values, group_key, kind_name, strict_eq};
pub use arrayops_core::ABSENT_GROUP_KEY;

// ============================================================================
// Operation inputs and outputs
// ============================================================================

pub use arrayops_primitives::{Conditions, Groups, SortOrder};

// Options for configuring an ArrayOps handle
pub use arrayops_primitives::{CrossTypePolicy, EmptyCriteriaPolicy, OpsOptions};

// Errors
pub use arrayops_core::{Error, Result};
