//! Identifier evaluation
//!
//! Bindings are never resolved. The only identifier with a static value is
//! the global `undefined`.

use crate::ast::Identifier;
use crate::{EvalContext, PropValue};

use super::{EvalResult, Evaluate};

impl Evaluate for Identifier {
    fn eval(&self, _ctx: &EvalContext, _depth: usize) -> EvalResult {
        Ok(if self.is_undefined() {
            PropValue::Undefined
        } else {
            PropValue::Unknown
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Identifier {
        Identifier {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_undefined_identifier() {
        let result = ident("undefined").eval(&EvalContext::default(), 0);
        assert_eq!(result, Ok(PropValue::Undefined));
    }

    #[test]
    fn test_other_identifiers_are_unknown() {
        let ctx = EvalContext::default();
        assert_eq!(ident("bar").eval(&ctx, 0), Ok(PropValue::Unknown));
        assert_eq!(ident("NaN").eval(&ctx, 0), Ok(PropValue::Unknown));
        assert_eq!(ident("Undefined").eval(&ctx, 0), Ok(PropValue::Unknown));
    }
}
