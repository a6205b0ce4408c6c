//! Value semantics shared by the record operations
//!
//! Resolved values are `Option<&Value>`: `None` is the absent value (a
//! missing field), `Some(Value::Null)` is a field explicitly set to null.
//!
//! - [`compare_values`]: total order used for sorting
//! - [`strict_compare`]: same order, but refuses mixed kinds
//! - [`strict_eq`]: equality used for matching and filtering
//! - [`group_key`]: string form used as a group name

use crate::error::{Error, Result};
use serde_json::{Number, Value};
use std::cmp::Ordering;

/// Group name for records whose key is absent or null
pub const ABSENT_GROUP_KEY: &str = "undefined";

/// Group-name form of any object value
pub const OBJECT_GROUP_KEY: &str = "[object Object]";

/// Human-readable kind of a resolved value
pub fn kind_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "absent",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

// absent < null < bool < number < string < array < object
fn kind_rank(value: Option<&Value>) -> u8 {
    match value {
        None => 0,
        Some(Value::Null) => 1,
        Some(Value::Bool(_)) => 2,
        Some(Value::Number(_)) => 3,
        Some(Value::String(_)) => 4,
        Some(Value::Array(_)) => 5,
        Some(Value::Object(_)) => 6,
    }
}

fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a.cmp(&b);
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a.cmp(&b);
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    compare_numbers(a, b) == Ordering::Equal
}

// Caller guarantees both sides have the same kind rank.
fn compare_same_kind(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => compare_numbers(a, b),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Array(a), Value::Array(b)) => {
            for (x, y) in a.iter().zip(b.iter()) {
                let ord = compare_values(Some(x), Some(y));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            a.len().cmp(&b.len())
        }
        _ => Ordering::Equal,
    }
}

/// Total order over resolved values
///
/// Values of different kinds order by kind:
/// `absent < null < bool < number < string < array < object`.
/// Within a kind, bools order `false < true`, numbers numerically, strings
/// by code point, arrays element-wise and then by length. All objects
/// compare equal to each other.
///
/// ```
/// use arrayops_core::value::compare_values;
/// use serde_json::json;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_values(Some(&json!(2)), Some(&json!(10))), Ordering::Less);
/// assert_eq!(compare_values(None, Some(&json!(null))), Ordering::Less);
/// assert_eq!(compare_values(Some(&json!("1")), Some(&json!(2))), Ordering::Greater);
/// ```
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) if kind_rank(a) == kind_rank(b) => compare_same_kind(x, y),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

/// Order two resolved values of the same kind
///
/// Fails with [`Error::IncomparableValues`] when the kinds differ or either
/// side is absent. Same-kind values order exactly as in [`compare_values`].
pub fn strict_compare(a: Option<&Value>, b: Option<&Value>) -> Result<Ordering> {
    match (a, b) {
        (Some(x), Some(y)) if kind_rank(a) == kind_rank(b) => Ok(compare_same_kind(x, y)),
        _ => Err(Error::IncomparableValues {
            left: kind_name(a),
            right: kind_name(b),
        }),
    }
}

/// Strict equality between resolved values
///
/// No coercion between kinds. Absent equals only absent and null equals only
/// null. Numbers compare numerically (`1 == 1.0`). Arrays and objects are
/// equal only when both sides are the same value in memory, so two
/// structurally identical objects from different records never match.
///
/// ```
/// use arrayops_core::value::strict_eq;
/// use serde_json::json;
///
/// assert!(strict_eq(Some(&json!(1)), Some(&json!(1.0))));
/// assert!(!strict_eq(Some(&json!(1)), Some(&json!("1"))));
/// assert!(!strict_eq(None, Some(&json!(null))));
///
/// let obj = json!({"a": 1});
/// assert!(strict_eq(Some(&obj), Some(&obj)));
/// assert!(!strict_eq(Some(&obj), Some(&json!({"a": 1}))));
/// ```
pub fn strict_eq(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(Value::Null), Some(Value::Null)) => true,
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x == y,
        (Some(Value::Number(x)), Some(Value::Number(y))) => numbers_equal(x, y),
        (Some(Value::String(x)), Some(Value::String(y))) => x == y,
        (Some(x @ Value::Array(_)), Some(y @ Value::Array(_)))
        | (Some(x @ Value::Object(_)), Some(y @ Value::Object(_))) => std::ptr::eq(x, y),
        _ => false,
    }
}

fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        // -0 prints as "0"
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.abs() >= 1e21 || f.abs() < 1e-6 => format_exponent(f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Shortest digits with an explicitly signed exponent: `1e+21`, `1.5e-7`
fn format_exponent(f: f64) -> String {
    let formatted = format!("{:e}", f);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => OBJECT_GROUP_KEY.to_string(),
    }
}

/// String form of a resolved value, used as a group name
///
/// Returns `None` for absent and null values; callers substitute their
/// placeholder (normally [`ABSENT_GROUP_KEY`]).
///
/// | Value | Group name |
/// |-------|------------|
/// | `"x"` | `x` |
/// | `true` | `true` |
/// | `1`, `1.0` | `1` |
/// | `1.5` | `1.5` |
/// | `1e21`, `2.5e22` | `1e+21`, `2.5e+22` |
/// | `1e-7` | `1e-7` |
/// | `[1, null, "a"]` | `1,,a` |
/// | `{...}` | `[object Object]` |
pub fn group_key(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(v) => Some(stringify(v)),
    }
}
