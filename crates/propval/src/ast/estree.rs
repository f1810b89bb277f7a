//! Conversion from ESTree JSON
//!
//! Accepts the JSON emitted by ESTree-compatible parsers with JSX support
//! (espree, acorn-jsx, typescript-estree) as well as Babel's variant of the
//! format (`StringLiteral`, `OptionalMemberExpression`, `extra.raw`, ...).
//!
//! # Pipeline
//!
//! ```text
//! JS Source → [external parser] → ESTree JSON → [estree] → JsxAttribute → [eval] → PropValue
//! ```
//!
//! Unknown fields such as `loc`, `range` or `start` are ignored. Expression
//! kinds outside the model become [`Expression::Other`]; only structurally
//! broken input is an error.

use serde_json::{Map, Value};
use tracing::trace;

use super::*;
use crate::error::{json_type_name, AstError, Result};

type Node = Map<String, Value>;

// ═══════════════════════════════════════════════════════════════════════
// Attributes
// ═══════════════════════════════════════════════════════════════════════

/// Convert a `JSXAttribute` node.
pub fn attribute_from_json(value: &Value) -> Result<JsxAttribute> {
    let node = as_node(value)?;
    let kind = node_type(node)?;
    if kind != "JSXAttribute" {
        return Err(AstError::UnexpectedNode {
            expected: "JSXAttribute",
            got: kind.to_string(),
        });
    }

    let name = attribute_name(field(node, kind, "name")?)?;
    let value = match node.get("value") {
        None | Some(Value::Null) => None,
        Some(value) => Some(attribute_value(value)?),
    };

    Ok(JsxAttribute { name, value })
}

/// Convert an element's attribute list.
///
/// Accepts a `JSXOpeningElement`, a `JSXElement`, or a bare array of
/// `JSXAttribute` / `JSXSpreadAttribute` nodes.
pub fn attributes_from_json(value: &Value) -> Result<Vec<JsxAttributeItem>> {
    let items = match value {
        Value::Array(items) => items.as_slice(),
        _ => {
            let node = as_node(value)?;
            let kind = node_type(node)?;
            match kind {
                "JSXOpeningElement" => array_field(node, kind, "attributes")?,
                "JSXElement" => return attributes_from_json(field(node, kind, "openingElement")?),
                other => {
                    return Err(AstError::UnexpectedNode {
                        expected: "JSXOpeningElement or JSXElement",
                        got: other.to_string(),
                    })
                }
            }
        }
    };

    items.iter().map(attribute_item).collect()
}

fn attribute_item(value: &Value) -> Result<JsxAttributeItem> {
    let node = as_node(value)?;
    let kind = node_type(node)?;
    match kind {
        "JSXAttribute" => Ok(JsxAttributeItem::Attribute(attribute_from_json(value)?)),
        "JSXSpreadAttribute" => {
            let argument = expression_from_json(field(node, kind, "argument")?)?;
            Ok(JsxAttributeItem::Spread(argument))
        }
        other => Err(AstError::UnexpectedNode {
            expected: "JSXAttribute or JSXSpreadAttribute",
            got: other.to_string(),
        }),
    }
}

fn attribute_name(value: &Value) -> Result<AttributeName> {
    let node = as_node(value)?;
    let kind = node_type(node)?;
    match kind {
        "JSXIdentifier" => Ok(AttributeName::Identifier(
            str_field(node, kind, "name")?.to_string(),
        )),
        "JSXNamespacedName" => Ok(AttributeName::Namespaced {
            namespace: jsx_identifier_name(field(node, kind, "namespace")?)?,
            name: jsx_identifier_name(field(node, kind, "name")?)?,
        }),
        other => Err(AstError::UnexpectedNode {
            expected: "JSXIdentifier or JSXNamespacedName",
            got: other.to_string(),
        }),
    }
}

fn jsx_identifier_name(value: &Value) -> Result<String> {
    let node = as_node(value)?;
    let kind = node_type(node)?;
    if kind != "JSXIdentifier" {
        return Err(AstError::UnexpectedNode {
            expected: "JSXIdentifier",
            got: kind.to_string(),
        });
    }
    Ok(str_field(node, kind, "name")?.to_string())
}

fn attribute_value(value: &Value) -> Result<AttributeValue> {
    let node = as_node(value)?;
    let kind = node_type(node)?;
    match kind {
        "JSXExpressionContainer" => Ok(AttributeValue::ExpressionContainer(
            expression_from_json(field(node, kind, "expression")?)?,
        )),
        "JSXElement" | "JSXFragment" => Ok(AttributeValue::Element(expression_from_json(value)?)),
        _ if is_literal_kind(kind) => Ok(AttributeValue::Literal(literal(node, kind)?)),
        // Not valid JSX, but only the value is in doubt, not the attribute
        other => {
            trace!(kind = other, "unrecognized attribute value");
            Ok(AttributeValue::ExpressionContainer(Expression::other(other)))
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Expressions
// ═══════════════════════════════════════════════════════════════════════

/// Convert an expression node.
pub fn expression_from_json(value: &Value) -> Result<Expression> {
    let node = as_node(value)?;
    let kind = node_type(node)?;
    trace!(kind, "converting ESTree expression");

    let expr = match kind {
        _ if is_literal_kind(kind) => Expression::Literal(literal(node, kind)?),

        "Identifier" => Expression::ident(str_field(node, kind, "name")?),
        "PrivateIdentifier" => Expression::ident(format!("#{}", str_field(node, kind, "name")?)),

        "TemplateLiteral" => Expression::TemplateLiteral(template_literal(node, kind)?),

        "UnaryExpression" => {
            let op = str_field(node, kind, "operator")?;
            let operator =
                UnaryOperator::from_estree(op).ok_or_else(|| AstError::InvalidField {
                    node: kind.to_string(),
                    field: "operator",
                    expected: "a unary operator",
                    got: op.to_string(),
                })?;
            Expression::unary(operator, expression_from_json(field(node, kind, "argument")?)?)
        }

        "MemberExpression" | "OptionalMemberExpression" => Expression::Member(MemberExpression {
            object: boxed_field(node, kind, "object")?,
            property: boxed_field(node, kind, "property")?,
            computed: bool_field(node, "computed"),
            optional: bool_field(node, "optional"),
        }),

        "CallExpression" | "OptionalCallExpression" => Expression::Call(call(node, kind)?),
        "NewExpression" => Expression::New(call(node, kind)?),

        "ThisExpression" => Expression::This,

        "ConditionalExpression" => Expression::Conditional(ConditionalExpression {
            test: boxed_field(node, kind, "test")?,
            consequent: boxed_field(node, kind, "consequent")?,
            alternate: boxed_field(node, kind, "alternate")?,
        }),

        "BinaryExpression" => Expression::Binary(binary(node, kind)?),
        "LogicalExpression" => Expression::Logical(binary(node, kind)?),

        "ObjectExpression" => Expression::Object,
        "ArrowFunctionExpression" => Expression::ArrowFunction,
        "FunctionExpression" => Expression::Function,
        "JSXElement" => Expression::JsxElement,
        "JSXFragment" => Expression::JsxFragment,

        // Wrappers with no meaning of their own
        "ChainExpression" | "ParenthesizedExpression" => {
            return expression_from_json(field(node, kind, "expression")?)
        }

        other => Expression::other(other),
    };

    Ok(expr)
}

fn boxed_field(node: &Node, kind: &str, name: &'static str) -> Result<Box<Expression>> {
    Ok(Box::new(expression_from_json(field(node, kind, name)?)?))
}

fn call(node: &Node, kind: &str) -> Result<CallExpression> {
    Ok(CallExpression {
        callee: boxed_field(node, kind, "callee")?,
        arguments: array_field(node, kind, "arguments")?
            .iter()
            .map(expression_from_json)
            .collect::<Result<_>>()?,
        optional: bool_field(node, "optional"),
    })
}

fn binary(node: &Node, kind: &str) -> Result<BinaryExpression> {
    Ok(BinaryExpression {
        operator: str_field(node, kind, "operator")?.to_string(),
        left: boxed_field(node, kind, "left")?,
        right: boxed_field(node, kind, "right")?,
    })
}

fn template_literal(node: &Node, kind: &str) -> Result<TemplateLiteral> {
    Ok(TemplateLiteral {
        quasis: array_field(node, kind, "quasis")?
            .iter()
            .map(template_element)
            .collect::<Result<_>>()?,
        expressions: array_field(node, kind, "expressions")?
            .iter()
            .map(expression_from_json)
            .collect::<Result<_>>()?,
    })
}

fn template_element(value: &Value) -> Result<TemplateElement> {
    let node = as_node(value)?;
    let kind = node_type(node)?;
    if kind != "TemplateElement" {
        return Err(AstError::UnexpectedNode {
            expected: "TemplateElement",
            got: kind.to_string(),
        });
    }

    let text = field(node, kind, "value")?;
    let text = text
        .as_object()
        .ok_or_else(|| invalid(kind, "value", "an object", text))?;

    Ok(TemplateElement {
        raw: str_field(text, kind, "raw")?.to_string(),
        cooked: text
            .get("cooked")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

// ═══════════════════════════════════════════════════════════════════════
// Literals
// ═══════════════════════════════════════════════════════════════════════

fn is_literal_kind(kind: &str) -> bool {
    matches!(
        kind,
        "Literal"
            | "StringLiteral"
            | "NumericLiteral"
            | "BooleanLiteral"
            | "NullLiteral"
            | "RegExpLiteral"
            | "BigIntLiteral"
    )
}

fn literal(node: &Node, kind: &str) -> Result<Literal> {
    let value = match kind {
        "Literal" => estree_literal_value(node, kind)?,
        "StringLiteral" => LiteralValue::String(str_field(node, kind, "value")?.to_string()),
        "NumericLiteral" => LiteralValue::Number(number_field(node, kind, "value")?),
        "BooleanLiteral" => {
            let value = field(node, kind, "value")?;
            LiteralValue::Boolean(
                value
                    .as_bool()
                    .ok_or_else(|| invalid(kind, "value", "a boolean", value))?,
            )
        }
        "NullLiteral" => LiteralValue::Null,
        "RegExpLiteral" => LiteralValue::RegExp {
            pattern: str_field(node, kind, "pattern")?.to_string(),
            flags: node
                .get("flags")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        },
        "BigIntLiteral" => LiteralValue::BigInt(str_field(node, kind, "value")?.to_string()),
        other => {
            return Err(AstError::UnexpectedNode {
                expected: "a literal",
                got: other.to_string(),
            })
        }
    };

    Ok(Literal {
        value,
        raw: raw_text(node),
    })
}

/// Value of an ESTree `Literal`; regex and bigint literals carry extra fields.
fn estree_literal_value(node: &Node, kind: &str) -> Result<LiteralValue> {
    if let Some(Value::Object(regex)) = node.get("regex") {
        return Ok(LiteralValue::RegExp {
            pattern: str_field(regex, kind, "pattern")?.to_string(),
            flags: regex
                .get("flags")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        });
    }
    if let Some(Value::String(digits)) = node.get("bigint") {
        return Ok(LiteralValue::BigInt(digits.clone()));
    }

    match field(node, kind, "value")? {
        Value::String(s) => Ok(LiteralValue::String(s.clone())),
        Value::Bool(b) => Ok(LiteralValue::Boolean(*b)),
        Value::Null => Ok(LiteralValue::Null),
        Value::Number(_) => Ok(LiteralValue::Number(number_field(node, kind, "value")?)),
        other => Err(invalid(kind, "value", "a primitive", other)),
    }
}

/// Source spelling: ESTree puts it in `raw`, Babel in `extra.raw`.
fn raw_text(node: &Node) -> Option<String> {
    node.get("raw")
        .or_else(|| node.get("extra").and_then(|extra| extra.get("raw")))
        .and_then(Value::as_str)
        .map(str::to_string)
}

// ═══════════════════════════════════════════════════════════════════════
// Field Access
// ═══════════════════════════════════════════════════════════════════════

fn as_node(value: &Value) -> Result<&Node> {
    value.as_object().ok_or(AstError::NotANode {
        got: json_type_name(value),
    })
}

fn node_type(node: &Node) -> Result<&str> {
    match node.get("type") {
        Some(Value::String(kind)) => Ok(kind.as_str()),
        Some(other) => Err(invalid("<node>", "type", "a string", other)),
        None => Err(AstError::MissingField {
            node: "<node>".to_string(),
            field: "type",
        }),
    }
}

fn field<'a>(node: &'a Node, kind: &str, name: &'static str) -> Result<&'a Value> {
    node.get(name).ok_or_else(|| AstError::MissingField {
        node: kind.to_string(),
        field: name,
    })
}

fn str_field<'a>(node: &'a Node, kind: &str, name: &'static str) -> Result<&'a str> {
    let value = field(node, kind, name)?;
    value
        .as_str()
        .ok_or_else(|| invalid(kind, name, "a string", value))
}

fn number_field(node: &Node, kind: &str, name: &'static str) -> Result<f64> {
    let value = field(node, kind, name)?;
    value
        .as_f64()
        .ok_or_else(|| invalid(kind, name, "a number", value))
}

fn array_field<'a>(node: &'a Node, kind: &str, name: &'static str) -> Result<&'a [Value]> {
    let value = field(node, kind, name)?;
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| invalid(kind, name, "an array", value))
}

fn bool_field(node: &Node, name: &str) -> bool {
    node.get(name).and_then(Value::as_bool).unwrap_or(false)
}

fn invalid(kind: &str, field: &'static str, expected: &'static str, got: &Value) -> AstError {
    AstError::InvalidField {
        node: kind.to_string(),
        field,
        expected,
        got: json_type_name(got).to_string(),
    }
}
