//! Record paths and selectors
//!
//! This module defines how a record is addressed:
//! - JsonPath: dot-separated field path into a record (e.g., "user.address.city")
//! - Field: a single top-level field name, no nested traversal
//! - Selector: the accessor trait both of them (and plain functions) implement
//!
//! Resolution never fails. A missing field, or an intermediate value that is
//! not an object, resolves to `None` (the absent value).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A single structured item within a collection.
pub type Record = Value;

/// Separator between field names in a path string.
pub const PATH_SEPARATOR: char = '.';

// =============================================================================
// Selector
// =============================================================================

/// Reads one value out of a record.
///
/// This is the typed accessor every operation is written against. String
/// paths ([`JsonPath`]) and single fields ([`Field`]) are conveniences built
/// on top of it; callers with static knowledge of their records can pass a
/// function instead.
///
/// # Examples
///
/// ```
/// use arrayops_core::{Field, JsonPath, Selector};
/// use serde_json::{json, Value};
///
/// let record = json!({"user": {"age": 30}});
///
/// let path = JsonPath::from("user.age");
/// assert_eq!(path.select(&record), Some(&json!(30)));
///
/// let field = Field::new("user");
/// assert!(field.select(&record).unwrap().is_object());
///
/// fn user_age(record: &Value) -> Option<&Value> {
///     record.get("user")?.get("age")
/// }
/// assert_eq!(user_age.select(&record), Some(&json!(30)));
///
/// // Capturing closures go through `selector` so the returned reference
/// // is tied to the record.
/// let key = String::from("user");
/// let by_key = arrayops_core::selector(move |r| r.get(key.as_str()));
/// assert!(by_key.select(&record).is_some());
/// ```
pub trait Selector {
    /// Return the selected value, or `None` when it is absent.
    fn select<'a>(&self, record: &'a Value) -> Option<&'a Value>;
}

impl<F> Selector for F
where
    F: for<'a> Fn(&'a Value) -> Option<&'a Value>,
{
    fn select<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        self(record)
    }
}

/// Pin a closure to the [`Selector`] signature.
///
/// Closure return lifetimes are not inferred from the argument, so
/// `|r| r.get("k")` alone does not satisfy `for<'a> Fn(&'a Value) ->
/// Option<&'a Value>`. Passing it through here fixes the signature and lets
/// the closure capture its environment.
pub fn selector<F>(f: F) -> F
where
    F: for<'a> Fn(&'a Value) -> Option<&'a Value>,
{
    f
}

// =============================================================================
// Field
// =============================================================================

/// A single top-level field name
///
/// Unlike [`JsonPath`], the name is used verbatim: `Field::new("a.b")`
/// addresses a key literally named `"a.b"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Field(String);

impl Field {
    /// Create a field selector
    pub fn new(name: impl Into<String>) -> Self {
        Field(name.into())
    }

    /// The field name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Selector for Field {
    fn select<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        record.as_object()?.get(&self.0)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// JsonPath
// =============================================================================

/// A dot-separated path into a record
///
/// # Path Syntax
///
/// | Syntax | Meaning | Example |
/// |--------|---------|---------|
/// | `key` | Top-level field | `user` |
/// | `key1.key2` | Nested field | `user.name` |
/// | (root) | The record itself | `JsonPath::root()` |
///
/// There are no array-index segments and no escaping. Parsing splits on
/// every `.` and never fails; empty segments are kept as the empty field
/// name, so `"a..b"` has three segments.
///
/// # Examples
///
/// ```
/// use arrayops_core::JsonPath;
///
/// let user_name = JsonPath::root().key("user").key("name");
/// let parsed: JsonPath = "user.name".into();
/// assert_eq!(parsed, user_name);
/// assert_eq!(parsed.to_string(), "user.name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct JsonPath {
    segments: Vec<String>,
}

impl JsonPath {
    /// Create the root path (empty path)
    pub fn root() -> Self {
        JsonPath {
            segments: Vec::new(),
        }
    }

    /// Create a path from field names
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        JsonPath {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a path string on `.`
    pub fn parse(s: &str) -> Self {
        Self::from_segments(s.split(PATH_SEPARATOR))
    }

    /// Get the path segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Get the number of segments in the path
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if this is the root path (empty)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check if this is the root path
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a field (builder pattern)
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.segments.push(key.into());
        self
    }

    /// Walk the record one field at a time.
    ///
    /// Short-circuits to `None` as soon as a segment is missing or the
    /// current value cannot be traversed (anything other than an object).
    /// The root path resolves to the record itself.
    pub fn resolve<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(record, |current, segment| current.as_object()?.get(segment))
    }

    /// Render the path back to its dotted form
    pub fn to_path_string(&self) -> String {
        self.segments.join(".")
    }
}

impl Selector for JsonPath {
    fn select<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        self.resolve(record)
    }
}

impl FromStr for JsonPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(JsonPath::parse(s))
    }
}

impl From<&str> for JsonPath {
    fn from(s: &str) -> Self {
        JsonPath::parse(s)
    }
}

impl From<String> for JsonPath {
    fn from(s: String) -> Self {
        JsonPath::parse(&s)
    }
}

impl From<&String> for JsonPath {
    fn from(s: &String) -> Self {
        JsonPath::parse(s)
    }
}

impl From<Field> for JsonPath {
    fn from(field: Field) -> Self {
        JsonPath {
            segments: vec![field.0],
        }
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_path_string())
    }
}

/// Nested-value reader for a dotted path string
///
/// Shorthand for `JsonPath::parse(path).resolve(record)`.
///
/// ```
/// use arrayops_core::get_path;
/// use serde_json::json;
///
/// let record = json!({"a": {"b": 3}});
/// assert_eq!(get_path(&record, "a.b"), Some(&json!(3)));
/// assert_eq!(get_path(&record, "a.c"), None);
/// assert_eq!(get_path(&record, "a.b.c"), None);
/// ```
pub fn get_path<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    path.split(PATH_SEPARATOR)
        .try_fold(record, |current, segment| current.as_object()?.get(segment))
}
