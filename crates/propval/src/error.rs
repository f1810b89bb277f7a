//! Error types for ESTree conversion
//!
//! The public evaluation entry points never fail. [`AstError`] describes
//! JSON input that does not have the shape of a JSX attribute, and
//! [`DepthExceeded`] aborts an evaluation internally before it is reported
//! as `Unknown`.

use thiserror::Error;

/// Malformed or unexpected ESTree input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AstError {
    /// Input was not a JSON object
    #[error("Expected an ESTree node, got {got}")]
    NotANode {
        /// JSON type received
        got: &'static str,
    },

    /// Node kind does not fit where it appeared
    #[error("Unexpected node: expected {expected}, got {got}")]
    UnexpectedNode {
        /// What was expected
        expected: &'static str,
        /// ESTree `type` received
        got: String,
    },

    /// A required field is absent
    #[error("Missing field `{field}` on {node}")]
    MissingField {
        /// ESTree `type` of the node
        node: String,
        /// Field name
        field: &'static str,
    },

    /// A field is present but has the wrong JSON type or value
    #[error("Invalid field `{field}` on {node}: expected {expected}, got {got}")]
    InvalidField {
        /// ESTree `type` of the node
        node: String,
        /// Field name
        field: &'static str,
        /// Description of the expected value
        expected: &'static str,
        /// What was received
        got: String,
    },
}

/// An expression nested deeper than `EvalContext::max_depth`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Expression nests deeper than {max_depth} levels")]
pub struct DepthExceeded {
    /// The configured limit
    pub max_depth: usize,
}

/// Result type alias for ESTree conversion
pub type Result<T> = std::result::Result<T, AstError>;

/// Human-readable name of a JSON value's type, for error messages.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
