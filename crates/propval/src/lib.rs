//! # propval
//!
//! Static literal-value evaluation for JSX attributes.
//!
//! Lint rules often need to know what an attribute will most likely be at
//! runtime (`tabIndex={-1}`, `aria-hidden="true"`, `` alt={`${name} logo`} ``)
//! without running any code. `propval` answers that for every form that can
//! be judged from syntax alone and declines, with [`PropValue::Unknown`],
//! for everything that depends on program state.
//!
//! ## Architecture
//!
//! - **AST**: a closed model of JSX attributes and their expressions,
//!   converted from ESTree JSON by [`ast::estree`]
//! - **Lookup**: find an attribute by name in an element's attribute list
//! - **Evaluator**: node-kind dispatch producing a [`PropValue`]
//!
//! ## Example
//!
//! ```
//! use propval::ast::{Expression, JsxAttribute, UnaryOperator};
//! use propval::{evaluate, find, JsxAttributeItem, PropValue};
//!
//! let attrs: Vec<JsxAttributeItem> = vec![
//!     JsxAttribute::string("role", "button").into(),
//!     JsxAttribute::expression(
//!         "tabIndex",
//!         Expression::unary(UnaryOperator::Minus, Expression::number(1.0)),
//!     )
//!     .into(),
//! ];
//!
//! let tab_index = find(&attrs, "tabIndex").unwrap();
//! assert_eq!(evaluate(tab_index), PropValue::Number(-1.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod context;
pub mod error;
pub mod eval;
pub mod lookup;
pub mod value;

// Re-export main types
pub use ast::{AttributeName, AttributeValue, Expression, JsxAttribute, JsxAttributeItem};
pub use context::EvalContext;
pub use error::{AstError, DepthExceeded, Result};
pub use eval::{
    evaluate, evaluate_expression, evaluate_json, evaluate_value, evaluate_with, EvalResult,
    Evaluate,
};
pub use lookup::{find, find_with, has_prop, prop_name, LookupOptions};
pub use value::PropValue;

/// propval version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
