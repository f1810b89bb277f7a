//! AST model for JSX attributes and the expressions they can hold
//!
//! This is a closed subset of the ESTree node kinds. Kinds the evaluator
//! resolves (literals, identifiers, template literals, unary expressions)
//! are modelled in full. Member, call, new, conditional, binary and logical
//! expressions carry their sub-expressions only so they can be printed back
//! as source text. Everything else is opaque.

mod build;
mod display;
pub mod estree;

use std::fmt;

// ═══════════════════════════════════════════════════════════════════════
// Attributes
// ═══════════════════════════════════════════════════════════════════════

/// One entry in a JSX element's attribute list.
#[derive(Debug, Clone, PartialEq)]
pub enum JsxAttributeItem {
    /// A named attribute: `foo="bar"`, `foo={1}`, `foo`
    Attribute(JsxAttribute),

    /// A spread attribute: `{...props}`
    Spread(Expression),
}

impl JsxAttributeItem {
    /// The named attribute, if this is not a spread.
    pub fn as_attribute(&self) -> Option<&JsxAttribute> {
        match self {
            JsxAttributeItem::Attribute(attr) => Some(attr),
            JsxAttributeItem::Spread(_) => None,
        }
    }
}

impl From<JsxAttribute> for JsxAttributeItem {
    fn from(attr: JsxAttribute) -> Self {
        JsxAttributeItem::Attribute(attr)
    }
}

/// A named JSX attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct JsxAttribute {
    /// Attribute name
    pub name: AttributeName,

    /// Attribute value; `None` for boolean shorthand (`<input disabled />`)
    pub value: Option<AttributeValue>,
}

/// The name of a JSX attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeName {
    /// `foo`
    Identifier(String),

    /// `xlink:href`
    Namespaced {
        /// Namespace part (`xlink`)
        namespace: String,
        /// Local part (`href`)
        name: String,
    },
}

impl AttributeName {
    /// Check whether this name spells `candidate`.
    pub fn matches(&self, candidate: &str, ignore_case: bool) -> bool {
        let eq = |a: &str, b: &str| {
            if ignore_case {
                a.eq_ignore_ascii_case(b)
            } else {
                a == b
            }
        };

        match self {
            AttributeName::Identifier(name) => eq(name.as_str(), candidate),
            AttributeName::Namespaced { namespace, name } => match candidate.split_once(':') {
                Some((ns, local)) => eq(namespace.as_str(), ns) && eq(name.as_str(), local),
                None => false,
            },
        }
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeName::Identifier(name) => write!(f, "{}", name),
            AttributeName::Namespaced { namespace, name } => write!(f, "{}:{}", namespace, name),
        }
    }
}

/// The value side of a JSX attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Quoted string: `foo="bar"`
    Literal(Literal),

    /// Braced expression: `foo={bar}`. An empty container (`foo={}`) holds
    /// an [`Expression::Other`] of kind `JSXEmptyExpression`.
    ExpressionContainer(Expression),

    /// Element or fragment used directly as a value: `foo=<bar />`
    Element(Expression),
}

// ═══════════════════════════════════════════════════════════════════════
// Expressions
// ═══════════════════════════════════════════════════════════════════════

/// An expression that can appear inside an attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// `"bar"`, `42`, `true`, `null`, `/re/g`, `10n`
    Literal(Literal),

    /// `bar`
    Identifier(Identifier),

    /// `` `bar ${baz}` ``
    TemplateLiteral(TemplateLiteral),

    /// `-bar`, `!bar`, `typeof bar`, ...
    Unary(UnaryExpression),

    /// `bar.baz`, `bar[baz]`, `bar?.baz`
    Member(MemberExpression),

    /// `bar()`
    Call(CallExpression),

    /// `new Bar()`
    New(CallExpression),

    /// `this`
    This,

    /// `bar ? baz : bam`
    Conditional(ConditionalExpression),

    /// `1 == "1"`
    Binary(BinaryExpression),

    /// `bar && baz`, `bar || baz`, `bar ?? baz`
    Logical(BinaryExpression),

    /// `{ bar: "baz" }`
    Object,

    /// `() => {}`
    ArrowFunction,

    /// `function() {}`
    Function,

    /// `<bar />`
    JsxElement,

    /// `<></>`
    JsxFragment,

    /// Any other node kind, identified by its ESTree type name
    Other {
        /// ESTree `type` of the node
        kind: String,
    },
}

impl Expression {
    /// The ESTree type name of this expression.
    pub fn kind_name(&self) -> &str {
        match self {
            Expression::Literal(_) => "Literal",
            Expression::Identifier(_) => "Identifier",
            Expression::TemplateLiteral(_) => "TemplateLiteral",
            Expression::Unary(_) => "UnaryExpression",
            Expression::Member(_) => "MemberExpression",
            Expression::Call(_) => "CallExpression",
            Expression::New(_) => "NewExpression",
            Expression::This => "ThisExpression",
            Expression::Conditional(_) => "ConditionalExpression",
            Expression::Binary(_) => "BinaryExpression",
            Expression::Logical(_) => "LogicalExpression",
            Expression::Object => "ObjectExpression",
            Expression::ArrowFunction => "ArrowFunctionExpression",
            Expression::Function => "FunctionExpression",
            Expression::JsxElement => "JSXElement",
            Expression::JsxFragment => "JSXFragment",
            Expression::Other { kind } => kind.as_str(),
        }
    }
}

/// A literal value with its optional source spelling.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    /// The literal's value
    pub value: LiteralValue,

    /// Source text as written, when the parser recorded it
    pub raw: Option<String>,
}

/// The value carried by a [`Literal`].
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// String literal
    String(String),
    /// Numeric literal
    Number(f64),
    /// `true` / `false`
    Boolean(bool),
    /// `null`
    Null,
    /// Regular expression literal
    RegExp {
        /// Pattern between the slashes
        pattern: String,
        /// Flags after the closing slash
        flags: String,
    },
    /// BigInt literal, as decimal digits without the `n` suffix
    BigInt(String),
}

/// An identifier reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// Identifier name
    pub name: String,
}

impl Identifier {
    /// Whether this identifier is the global `undefined`.
    pub fn is_undefined(&self) -> bool {
        self.name == "undefined"
    }
}

/// A template literal: static chunks interleaved with substitutions.
///
/// A well-formed template has exactly one more quasi than expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateLiteral {
    /// Static text chunks
    pub quasis: Vec<TemplateElement>,

    /// Substitution expressions, one between each pair of quasis
    pub expressions: Vec<Expression>,
}

/// One static chunk of a template literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateElement {
    /// Text as written in source, escapes untouched
    pub raw: String,

    /// Text with escapes processed; `None` for invalid escapes in tagged templates
    pub cooked: Option<String>,
}

/// A prefix unary operation.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    /// The operator
    pub operator: UnaryOperator,

    /// The operand
    pub argument: Box<Expression>,
}

/// JavaScript prefix unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `!`
    Not,
    /// `~`
    BitNot,
    /// `typeof`
    Typeof,
    /// `void`
    Void,
    /// `delete`
    Delete,
}

impl UnaryOperator {
    /// Parse an ESTree operator string.
    pub fn from_estree(op: &str) -> Option<Self> {
        match op {
            "-" => Some(UnaryOperator::Minus),
            "+" => Some(UnaryOperator::Plus),
            "!" => Some(UnaryOperator::Not),
            "~" => Some(UnaryOperator::BitNot),
            "typeof" => Some(UnaryOperator::Typeof),
            "void" => Some(UnaryOperator::Void),
            "delete" => Some(UnaryOperator::Delete),
            _ => None,
        }
    }

    /// The operator as written in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOperator::Minus => "-",
            UnaryOperator::Plus => "+",
            UnaryOperator::Not => "!",
            UnaryOperator::BitNot => "~",
            UnaryOperator::Typeof => "typeof",
            UnaryOperator::Void => "void",
            UnaryOperator::Delete => "delete",
        }
    }

    /// Keyword operators need a space before their operand.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            UnaryOperator::Typeof | UnaryOperator::Void | UnaryOperator::Delete
        )
    }
}

/// Property access.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpression {
    /// Accessed object
    pub object: Box<Expression>,
    /// Property; an identifier unless `computed`
    pub property: Box<Expression>,
    /// `obj[prop]` rather than `obj.prop`
    pub computed: bool,
    /// Optional chaining (`?.`)
    pub optional: bool,
}

/// Function call or constructor invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    /// Called expression
    pub callee: Box<Expression>,
    /// Call arguments
    pub arguments: Vec<Expression>,
    /// Optional call (`f?.()`)
    pub optional: bool,
}

/// `test ? consequent : alternate`
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpression {
    /// Condition
    pub test: Box<Expression>,
    /// Value when the condition holds
    pub consequent: Box<Expression>,
    /// Value otherwise
    pub alternate: Box<Expression>,
}

/// An infix operation; used for both binary and logical expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    /// Operator as written (`==`, `+`, `&&`, ...)
    pub operator: String,
    /// Left operand
    pub left: Box<Expression>,
    /// Right operand
    pub right: Box<Expression>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_name_matches_exact() {
        let name = AttributeName::Identifier("onClick".to_string());
        assert!(name.matches("onClick", false));
        assert!(!name.matches("onclick", false));
        assert!(name.matches("onclick", true));
    }

    #[test]
    fn test_namespaced_name_matches() {
        let name = AttributeName::Namespaced {
            namespace: "xlink".to_string(),
            name: "href".to_string(),
        };
        assert!(name.matches("xlink:href", false));
        assert!(!name.matches("href", false));
        assert!(name.matches("XLink:HREF", true));
        assert_eq!(name.to_string(), "xlink:href");
    }

    #[test]
    fn test_unary_operator_from_estree() {
        assert_eq!(UnaryOperator::from_estree("~"), Some(UnaryOperator::BitNot));
        assert_eq!(
            UnaryOperator::from_estree("typeof"),
            Some(UnaryOperator::Typeof)
        );
        assert!(UnaryOperator::Delete.is_keyword());
        assert!(!UnaryOperator::Not.is_keyword());
        // Update operators are not unary expressions in ESTree
        assert_eq!(UnaryOperator::from_estree("++"), None);
    }

    #[test]
    fn test_kind_name_for_other() {
        let expr = Expression::Other {
            kind: "SequenceExpression".to_string(),
        };
        assert_eq!(expr.kind_name(), "SequenceExpression");
        assert_eq!(Expression::This.kind_name(), "ThisExpression");
    }
}
