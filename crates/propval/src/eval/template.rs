//! Template literal reconstruction

use crate::ast::{Expression, TemplateLiteral};
use crate::error::DepthExceeded;
use crate::{EvalContext, PropValue};

use super::{EvalResult, Evaluate};

impl Evaluate for TemplateLiteral {
    fn eval(&self, ctx: &EvalContext, depth: usize) -> EvalResult {
        let mut out = String::new();
        let mut substitutions = self.expressions.iter();

        for quasi in &self.quasis {
            out.push_str(&quasi.raw);
            if let Some(expr) = substitutions.next() {
                push_substitution(&mut out, expr, ctx, depth + 1)?;
            }
        }
        // Malformed input with surplus substitutions: keep them in order
        for expr in substitutions {
            push_substitution(&mut out, expr, ctx, depth + 1)?;
        }

        Ok(PropValue::String(out))
    }
}

/// Append one substitution.
///
/// `undefined` is dropped. Values that cannot be resolved keep a
/// placeholder: their source text in braces, e.g. `{baz}`.
fn push_substitution(
    out: &mut String,
    expr: &Expression,
    ctx: &EvalContext,
    depth: usize,
) -> Result<(), DepthExceeded> {
    match expr.eval(ctx, depth)? {
        PropValue::Undefined => {}
        PropValue::Unknown => {
            out.push('{');
            out.push_str(&expr.to_string());
            out.push('}');
        }
        value => out.push_str(&value.to_string()),
    }
    Ok(())
}
