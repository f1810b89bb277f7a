//! Source printer for expressions
//!
//! `Display` renders an expression back to JavaScript source. It is used to
//! spell unresolved template substitutions, so it favours readability over
//! exact reproduction: sub-expressions are parenthesized conservatively and
//! opaque kinds print as their ESTree type name.

use std::fmt;

use super::*;
use crate::value::format_number;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(lit) => write!(f, "{}", lit),
            Expression::Identifier(id) => write!(f, "{}", id.name),
            Expression::TemplateLiteral(tpl) => write!(f, "{}", tpl),

            Expression::Unary(unary) => {
                write!(f, "{}", unary.operator.as_str())?;
                if unary.operator.is_keyword() {
                    write!(f, " ")?;
                }
                write_operand(f, &unary.argument)
            }

            Expression::Member(member) => {
                write_operand(f, &member.object)?;
                match (member.computed, member.optional) {
                    (false, false) => write!(f, ".{}", member.property),
                    (false, true) => write!(f, "?.{}", member.property),
                    (true, false) => write!(f, "[{}]", member.property),
                    (true, true) => write!(f, "?.[{}]", member.property),
                }
            }

            Expression::Call(call) => {
                write_operand(f, &call.callee)?;
                if call.optional {
                    write!(f, "?.")?;
                }
                write_arguments(f, &call.arguments)
            }

            Expression::New(call) => {
                write!(f, "new ")?;
                write_operand(f, &call.callee)?;
                write_arguments(f, &call.arguments)
            }

            Expression::This => write!(f, "this"),

            Expression::Conditional(cond) => {
                write_operand(f, &cond.test)?;
                write!(f, " ? ")?;
                write_operand(f, &cond.consequent)?;
                write!(f, " : ")?;
                write_operand(f, &cond.alternate)
            }

            Expression::Binary(bin) | Expression::Logical(bin) => {
                write_operand(f, &bin.left)?;
                write!(f, " {} ", bin.operator)?;
                write_operand(f, &bin.right)
            }

            Expression::Object
            | Expression::ArrowFunction
            | Expression::Function
            | Expression::JsxElement
            | Expression::JsxFragment
            | Expression::Other { .. } => write!(f, "{}", self.kind_name()),
        }
    }
}

/// Write a sub-expression, parenthesized if it binds looser than an operand.
fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expression) -> fmt::Result {
    match expr {
        Expression::Conditional(_) | Expression::Binary(_) | Expression::Logical(_) => {
            write!(f, "({})", expr)
        }
        _ => write!(f, "{}", expr),
    }
}

fn write_arguments(f: &mut fmt::Formatter<'_>, arguments: &[Expression]) -> fmt::Result {
    write!(f, "(")?;
    for (i, arg) in arguments.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", arg)?;
    }
    write!(f, ")")
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(raw) = &self.raw {
            return write!(f, "{}", raw);
        }

        match &self.value {
            LiteralValue::String(s) => {
                // JSON string escapes are valid JavaScript string escapes
                let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
                write!(f, "{}", quoted)
            }
            LiteralValue::Number(n) => write!(f, "{}", format_number(*n)),
            LiteralValue::Boolean(b) => write!(f, "{}", b),
            LiteralValue::Null => write!(f, "null"),
            LiteralValue::RegExp { pattern, flags } => write!(f, "/{}/{}", pattern, flags),
            LiteralValue::BigInt(digits) => write!(f, "{}n", digits),
        }
    }
}

impl fmt::Display for TemplateLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`")?;
        let mut substitutions = self.expressions.iter();
        for quasi in &self.quasis {
            write!(f, "{}", quasi.raw)?;
            if let Some(expr) = substitutions.next() {
                write!(f, "${{{}}}", expr)?;
            }
        }
        for expr in substitutions {
            write!(f, "${{{}}}", expr)?;
        }
        write!(f, "`")
    }
}
