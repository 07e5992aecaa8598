use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Deserialize;

/// Interpolation data: placeholder names mapped to values.
pub type Data = BTreeMap<String, Value>;

/// A runtime value that can be substituted into a translation template.
///
/// Nested maps make dot-path placeholders such as `{{ user.name }}`
/// addressable, and numeric segments index into lists (`{{ tags.0 }}`).
/// Only scalars have a textual form; `Null`, `List` and `Map` render as
/// empty text.
///
/// # Example
///
/// ```
/// use lingo::Value;
///
/// let count: Value = 42.into();
/// let name: Value = "Ada".into();
/// assert_eq!(count.to_string(), "42");
/// assert_eq!(name.to_string(), "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// An explicit absence of a value.
    Null,

    /// A boolean value.
    Bool(bool),

    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),

    /// A sequence addressed by numeric dot-path segments.
    List(Vec<Value>),

    /// A nested record addressed through dot-paths.
    Map(Data),
}

impl Value {
    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a nested map, if it is one.
    pub fn as_map(&self) -> Option<&Data> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Get this value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Resolve one dot-path segment against this value.
    ///
    /// Maps are keyed by name, lists by a decimal index.
    pub fn child(&self, segment: &str) -> Option<&Value> {
        match self {
            Value::Map(m) => m.get(segment),
            Value::List(items) => items.get(segment.parse::<usize>().ok()?),
            _ => None,
        }
    }

    /// Follow a dot-path through nested maps and lists, starting at `data`.
    ///
    /// Returns `None` as soon as a segment is missing or a scalar value
    /// is traversed.
    pub fn lookup<'a, S: AsRef<str>>(data: &'a Data, path: &[S]) -> Option<&'a Value> {
        let (first, rest) = path.split_first()?;
        let mut current = data.get(first.as_ref())?;
        for segment in rest {
            current = current.child(segment.as_ref())?;
        }
        Some(current)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Null | Value::List(_) | Value::Map(_) => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}

// From implementations for common types

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Data> for Value {
    fn from(m: Data) -> Self {
        Value::Map(m)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}
