//! Literal-value evaluation
//!
//! Maps an attribute to the value it would most likely have at runtime,
//! without executing anything. Only literals, identifiers, template
//! literals and unary expressions are resolved; every kind whose value
//! depends on program state is `Unknown`.

pub mod identifier;
pub mod literal;
pub mod template;
pub mod unary;

use tracing::{debug, trace};

use crate::ast::estree;
use crate::ast::{AttributeValue, Expression, JsxAttribute};
use crate::error::DepthExceeded;
use crate::{EvalContext, PropValue};

/// Result of evaluating one node.
///
/// The only failure is hitting the nesting limit, which aborts the whole
/// evaluation; the entry points below report it as [`PropValue::Unknown`].
pub type EvalResult = std::result::Result<PropValue, DepthExceeded>;

/// Trait for evaluating AST nodes to static values.
pub trait Evaluate {
    /// Evaluate this node at the given nesting depth.
    fn eval(&self, ctx: &EvalContext, depth: usize) -> EvalResult;
}

// ═══════════════════════════════════════════════════════════════════════
// Attribute Entry Points
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for JsxAttribute {
    fn eval(&self, ctx: &EvalContext, depth: usize) -> EvalResult {
        match &self.value {
            // `<input disabled />`
            None => Ok(PropValue::Boolean(true)),
            Some(value) => value.eval(ctx, depth),
        }
    }
}

impl Evaluate for AttributeValue {
    fn eval(&self, ctx: &EvalContext, depth: usize) -> EvalResult {
        match self {
            AttributeValue::Literal(lit) => lit.eval(ctx, depth),
            AttributeValue::ExpressionContainer(expr) => expr.eval(ctx, depth),
            AttributeValue::Element(_) => Ok(PropValue::Unknown),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Expression {
    fn eval(&self, ctx: &EvalContext, depth: usize) -> EvalResult {
        if depth > ctx.max_depth {
            debug!(
                depth,
                max_depth = ctx.max_depth,
                kind = self.kind_name(),
                "nesting limit reached"
            );
            return Err(DepthExceeded {
                max_depth: ctx.max_depth,
            });
        }
        if ctx.trace {
            trace!(kind = self.kind_name(), depth, "evaluate");
        }

        match self {
            Expression::Literal(lit) => lit.eval(ctx, depth),
            Expression::Identifier(id) => id.eval(ctx, depth),
            Expression::TemplateLiteral(tpl) => tpl.eval(ctx, depth),
            Expression::Unary(unary) => unary.eval(ctx, depth),

            // Runtime-dependent: never looked into
            Expression::Member(_)
            | Expression::Call(_)
            | Expression::New(_)
            | Expression::This
            | Expression::Conditional(_)
            | Expression::Binary(_)
            | Expression::Logical(_)
            | Expression::Object
            | Expression::ArrowFunction
            | Expression::Function
            | Expression::JsxElement
            | Expression::JsxFragment => Ok(PropValue::Unknown),

            Expression::Other { .. } => Ok(PropValue::Unknown),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate an attribute with the default context.
pub fn evaluate(attribute: &JsxAttribute) -> PropValue {
    evaluate_with(attribute, &EvalContext::default())
}

/// Evaluate an attribute with an explicit context.
///
/// An attribute that nests deeper than `ctx.max_depth` is `Unknown` as a
/// whole.
pub fn evaluate_with(attribute: &JsxAttribute, ctx: &EvalContext) -> PropValue {
    settle(attribute.eval(ctx, 0))
}

/// Evaluate an attribute's value node on its own.
pub fn evaluate_value(value: &AttributeValue, ctx: &EvalContext) -> PropValue {
    settle(value.eval(ctx, 0))
}

/// Evaluate a bare expression, as if it appeared in `foo={...}`.
pub fn evaluate_expression(expr: &Expression, ctx: &EvalContext) -> PropValue {
    settle(expr.eval(ctx, 0))
}

fn settle(result: EvalResult) -> PropValue {
    result.unwrap_or_else(|err| {
        debug!(error = %err, "evaluation abandoned");
        PropValue::Unknown
    })
}

/// Evaluate an ESTree `JSXAttribute` given as JSON.
///
/// Anything that is not a well-formed `JSXAttribute` node evaluates to
/// `Undefined`.
pub fn evaluate_json(node: &serde_json::Value) -> PropValue {
    match estree::attribute_from_json(node) {
        Ok(attribute) => evaluate(&attribute),
        Err(err) => {
            debug!(error = %err, "not a JSX attribute");
            PropValue::Undefined
        }
    }
}
