//! Literal evaluation

use crate::ast::{Literal, LiteralValue};
use crate::{EvalContext, PropValue};

use super::{EvalResult, Evaluate};

impl Evaluate for Literal {
    fn eval(&self, _ctx: &EvalContext, _depth: usize) -> EvalResult {
        Ok(eval_literal(&self.value))
    }
}

/// Evaluate a literal value.
///
/// The strings `"true"` and `"false"` become booleans, and `null` becomes
/// the string `"null"`, matching how attribute values serialize to markup.
pub fn eval_literal(value: &LiteralValue) -> PropValue {
    match value {
        LiteralValue::String(s) => match s.as_str() {
            "true" => PropValue::Boolean(true),
            "false" => PropValue::Boolean(false),
            _ => PropValue::string(s.as_str()),
        },
        LiteralValue::Number(n) => PropValue::Number(*n),
        LiteralValue::Boolean(b) => PropValue::Boolean(*b),
        LiteralValue::Null => PropValue::string("null"),

        // Neither is a primitive the evaluator can represent
        LiteralValue::RegExp { .. } | LiteralValue::BigInt(_) => PropValue::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_literal() {
        let result = eval_literal(&LiteralValue::String("bar".to_string()));
        assert_eq!(result, PropValue::string("bar"));
    }

    #[test]
    fn test_boolean_strings_are_coerced() {
        assert_eq!(
            eval_literal(&LiteralValue::String("true".to_string())),
            PropValue::Boolean(true)
        );
        assert_eq!(
            eval_literal(&LiteralValue::String("false".to_string())),
            PropValue::Boolean(false)
        );
    }

    #[test]
    fn test_boolean_coercion_is_case_sensitive() {
        assert_eq!(
            eval_literal(&LiteralValue::String("True".to_string())),
            PropValue::string("True")
        );
        assert_eq!(
            eval_literal(&LiteralValue::String(" false".to_string())),
            PropValue::string(" false")
        );
    }

    #[test]
    fn test_null_becomes_string() {
        assert_eq!(eval_literal(&LiteralValue::Null), PropValue::string("null"));
    }

    #[test]
    fn test_number_and_boolean_are_identity() {
        assert_eq!(
            eval_literal(&LiteralValue::Number(1.0)),
            PropValue::Number(1.0)
        );
        assert_eq!(
            eval_literal(&LiteralValue::Boolean(false)),
            PropValue::Boolean(false)
        );
    }

    #[test]
    fn test_regex_and_bigint_are_unknown() {
        let re = LiteralValue::RegExp {
            pattern: "a".to_string(),
            flags: String::new(),
        };
        assert_eq!(eval_literal(&re), PropValue::Unknown);
        assert_eq!(
            eval_literal(&LiteralValue::BigInt("1".to_string())),
            PropValue::Unknown
        );
    }
}
