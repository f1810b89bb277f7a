//! Evaluation results

mod coerce;
mod display;

pub use coerce::string_to_number;
pub use display::format_number;

use serde::{Serialize, Serializer};

/// The statically determined value of an attribute.
///
/// `Undefined` and `Unknown` are distinct: `Undefined` means the source
/// provably evaluates to JavaScript `undefined`, while `Unknown` means the
/// value depends on runtime state and was not judged.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// A string
    String(String),

    /// A JavaScript number (IEEE 754 double)
    Number(f64),

    /// A boolean
    Boolean(bool),

    /// JavaScript `undefined`
    Undefined,

    /// Not statically resolvable; callers see this as `null`
    Unknown,
}

impl PropValue {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        PropValue::String(s.into())
    }

    /// Check if value is `undefined`
    pub fn is_undefined(&self) -> bool {
        matches!(self, PropValue::Undefined)
    }

    /// Check if value could not be determined
    pub fn is_unknown(&self) -> bool {
        matches!(self, PropValue::Unknown)
    }

    /// Check if value is the number `NaN`
    pub fn is_nan(&self) -> bool {
        matches!(self, PropValue::Number(n) if n.is_nan())
    }

    /// Get the string, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get the number, if this is a numeric value
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the boolean, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Render as JSON the way a JavaScript caller would observe the value.
    ///
    /// Returns `None` for `Undefined`. `Unknown` and non-finite numbers
    /// become `null`, as `JSON.stringify` does.
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            PropValue::Undefined => None,
            PropValue::Unknown => Some(serde_json::Value::Null),
            PropValue::String(s) => Some(serde_json::Value::String(s.clone())),
            PropValue::Boolean(b) => Some(serde_json::Value::Bool(*b)),
            PropValue::Number(n) => Some(
                serde_json::Number::from_f64(*n)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null),
            ),
        }
    }
}

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropValue::String(s) => serializer.serialize_str(s),
            PropValue::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            PropValue::Number(_) => serializer.serialize_unit(),
            PropValue::Boolean(b) => serializer.serialize_bool(*b),
            PropValue::Undefined => serializer.serialize_none(),
            PropValue::Unknown => serializer.serialize_unit(),
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::String(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::String(s)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Boolean(b)
    }
}
