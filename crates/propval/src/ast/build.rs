//! Convenience constructors for building attribute and expression trees

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Attributes
// ═══════════════════════════════════════════════════════════════════

impl JsxAttribute {
    /// Create an attribute with an arbitrary value.
    pub fn new(name: impl Into<String>, value: Option<AttributeValue>) -> Self {
        Self {
            name: AttributeName::Identifier(name.into()),
            value,
        }
    }

    /// Create a boolean-shorthand attribute: `<div foo />`
    pub fn shorthand(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    /// Create a quoted-string attribute: `<div foo="bar" />`
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, Some(AttributeValue::Literal(Literal::string(value))))
    }

    /// Create a braced-expression attribute: `<div foo={expr} />`
    pub fn expression(name: impl Into<String>, expr: Expression) -> Self {
        Self::new(name, Some(AttributeValue::ExpressionContainer(expr)))
    }
}

// ═══════════════════════════════════════════════════════════════════
// Literals
// ═══════════════════════════════════════════════════════════════════

impl Literal {
    /// Create a literal without a recorded source spelling.
    pub fn new(value: LiteralValue) -> Self {
        Self { value, raw: None }
    }

    /// Create a string literal
    pub fn string(s: impl Into<String>) -> Self {
        Self::new(LiteralValue::String(s.into()))
    }

    /// Attach the source spelling.
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }
}

// ═══════════════════════════════════════════════════════════════════
// Expressions
// ═══════════════════════════════════════════════════════════════════

impl Expression {
    /// Create a string literal expression
    pub fn string(s: impl Into<String>) -> Self {
        Expression::Literal(Literal::string(s))
    }

    /// Create a numeric literal expression
    pub fn number(n: f64) -> Self {
        Expression::Literal(Literal::new(LiteralValue::Number(n)))
    }

    /// Create a boolean literal expression
    pub fn boolean(b: bool) -> Self {
        Expression::Literal(Literal::new(LiteralValue::Boolean(b)))
    }

    /// Create a `null` literal expression
    pub fn null() -> Self {
        Expression::Literal(Literal::new(LiteralValue::Null))
    }

    /// Create an identifier reference
    pub fn ident(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier { name: name.into() })
    }

    /// Create a prefix unary expression
    pub fn unary(operator: UnaryOperator, argument: Expression) -> Self {
        Expression::Unary(UnaryExpression {
            operator,
            argument: Box::new(argument),
        })
    }

    /// Create a template literal from its static chunks and substitutions.
    ///
    /// Chunks are used as both raw and cooked text.
    pub fn template(quasis: &[&str], expressions: Vec<Expression>) -> Self {
        Expression::TemplateLiteral(TemplateLiteral {
            quasis: quasis
                .iter()
                .map(|q| TemplateElement {
                    raw: q.to_string(),
                    cooked: Some(q.to_string()),
                })
                .collect(),
            expressions,
        })
    }

    /// Create a non-computed member access: `object.property`
    pub fn member(object: Expression, property: impl Into<String>) -> Self {
        Expression::Member(MemberExpression {
            object: Box::new(object),
            property: Box::new(Expression::ident(property)),
            computed: false,
            optional: false,
        })
    }

    /// Create a call: `callee(arguments...)`
    pub fn call(callee: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Call(CallExpression {
            callee: Box::new(callee),
            arguments,
            optional: false,
        })
    }

    /// Create a binary expression: `left operator right`
    pub fn binary(operator: impl Into<String>, left: Expression, right: Expression) -> Self {
        Expression::Binary(BinaryExpression {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Create an opaque expression of the given ESTree kind
    pub fn other(kind: impl Into<String>) -> Self {
        Expression::Other { kind: kind.into() }
    }
}
