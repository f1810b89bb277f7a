//! Evaluation context configuration

use serde::{Deserialize, Serialize};

/// Configuration for an evaluation pass.
///
/// The evaluator holds no state across calls, so one context can be shared
/// freely between threads and reused for every attribute in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalContext {
    /// Maximum nesting of unary operands and template substitutions.
    /// Deeper expressions evaluate to `Unknown`.
    pub max_depth: usize,

    /// Whether to emit a `trace` event for every dispatched node
    pub trace: bool,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_depth: 256,
            trace: false,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom nesting limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Enable or disable per-node tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = EvalContext::new();
        assert_eq!(ctx.max_depth, 256);
        assert!(!ctx.trace);
    }

    #[test]
    fn test_builder() {
        let ctx = EvalContext::with_max_depth(4).with_trace(true);
        assert_eq!(ctx.max_depth, 4);
        assert!(ctx.trace);
    }

    #[test]
    fn test_deserialize_partial_config_uses_defaults() {
        let ctx: EvalContext = serde_json::from_str(r#"{ "trace": true }"#).unwrap();
        assert_eq!(ctx, EvalContext::new().with_trace(true));
    }
}
