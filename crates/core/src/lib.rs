//! Core types for arrayops
//!
//! This crate defines the building blocks every record operation shares:
//! - Record: a JSON value (normally an object) within a collection
//! - JsonPath / Field: how a value inside a record is addressed
//! - Selector: the accessor trait the operations are generic over
//! - value: ordering, strict equality and group-name semantics
//! - Error: the few failures the operations can report

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod path;
pub mod value;

pub use error::{Error, Result};
pub use path::{get_path, selector, Field, JsonPath, Record, Selector, PATH_SEPARATOR};
pub use value::{compare_values, group_key, strict_compare, strict_eq, ABSENT_GROUP_KEY};
