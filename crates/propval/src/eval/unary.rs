//! Unary operation evaluation

use crate::ast::{Expression, UnaryExpression, UnaryOperator};
use crate::{EvalContext, PropValue};

use super::{EvalResult, Evaluate};

impl Evaluate for UnaryExpression {
    fn eval(&self, ctx: &EvalContext, depth: usize) -> EvalResult {
        Ok(match self.operator {
            UnaryOperator::Minus => eval_neg(&self.operand(ctx, depth)?),
            UnaryOperator::Plus => eval_plus(&self.operand(ctx, depth)?),
            UnaryOperator::Not => eval_not(&self.operand(ctx, depth)?),
            UnaryOperator::BitNot => eval_bit_not(&self.operand(ctx, depth)?),

            // `delete` on anything but a reference succeeds
            UnaryOperator::Delete => PropValue::Boolean(true),
            UnaryOperator::Void => PropValue::Undefined,
            // The operand's type is not classified.
            UnaryOperator::Typeof => PropValue::Undefined,
        })
    }
}

impl UnaryExpression {
    /// The operand's value for coercion.
    ///
    /// An unresolved identifier stands in as the string of its own name, so
    /// `!bar` is `false` and `-bar` is `NaN`.
    fn operand(&self, ctx: &EvalContext, depth: usize) -> EvalResult {
        match self.argument.as_ref() {
            Expression::Identifier(id) if !id.is_undefined() => {
                Ok(PropValue::string(id.name.as_str()))
            }
            argument => argument.eval(ctx, depth + 1),
        }
    }
}

/// Evaluate unary negation (`-x`).
pub(crate) fn eval_neg(operand: &PropValue) -> PropValue {
    PropValue::Number(-operand.to_number())
}

/// Evaluate unary plus (`+x`).
pub(crate) fn eval_plus(operand: &PropValue) -> PropValue {
    PropValue::Number(operand.to_number())
}

/// Evaluate logical NOT (`!x`).
pub(crate) fn eval_not(operand: &PropValue) -> PropValue {
    PropValue::Boolean(!operand.to_boolean())
}

/// Evaluate bitwise NOT (`~x`).
pub(crate) fn eval_bit_not(operand: &PropValue) -> PropValue {
    PropValue::Number(f64::from(!operand.to_int32()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(op: UnaryOperator, argument: Expression) -> PropValue {
        let expr = Expression::unary(op, argument);
        crate::evaluate_expression(&expr, &EvalContext::default())
    }

    #[test]
    fn test_neg_number() {
        assert_eq!(eval_neg(&PropValue::Number(42.0)), PropValue::Number(-42.0));
    }

    #[test]
    fn test_neg_string() {
        assert!(eval_neg(&PropValue::string("bar")).is_nan());
        assert_eq!(eval_neg(&PropValue::string("7")), PropValue::Number(-7.0));
    }

    #[test]
    fn test_neg_boolean() {
        assert_eq!(eval_neg(&PropValue::Boolean(true)), PropValue::Number(-1.0));
    }

    #[test]
    fn test_plus_string() {
        assert_eq!(eval_plus(&PropValue::string(" 12 ")), PropValue::Number(12.0));
        assert!(eval_plus(&PropValue::string("bar")).is_nan());
    }

    #[test]
    fn test_not() {
        assert_eq!(eval_not(&PropValue::string("bar")), PropValue::Boolean(false));
        assert_eq!(eval_not(&PropValue::string("")), PropValue::Boolean(true));
        assert_eq!(eval_not(&PropValue::Number(0.0)), PropValue::Boolean(true));
    }

    #[test]
    fn test_bit_not() {
        assert_eq!(eval_bit_not(&PropValue::Number(0.0)), PropValue::Number(-1.0));
        assert_eq!(eval_bit_not(&PropValue::Number(5.0)), PropValue::Number(-6.0));
        assert_eq!(eval_bit_not(&PropValue::string("bar")), PropValue::Number(-1.0));
    }

    #[test]
    fn test_identifier_operand_uses_its_name() {
        assert!(eval(UnaryOperator::Minus, Expression::ident("bar")).is_nan());
        assert_eq!(
            eval(UnaryOperator::Not, Expression::ident("bar")),
            PropValue::Boolean(false)
        );
        assert_eq!(
            eval(UnaryOperator::BitNot, Expression::ident("bar")),
            PropValue::Number(-1.0)
        );
    }

    #[test]
    fn test_undefined_operand_is_not_a_name() {
        assert!(eval(UnaryOperator::Plus, Expression::ident("undefined")).is_nan());
        assert_eq!(
            eval(UnaryOperator::Not, Expression::ident("undefined")),
            PropValue::Boolean(true)
        );
    }

    #[test]
    fn test_unknown_operand_coerces_like_null() {
        let member = Expression::member(Expression::ident("a"), "b");
        assert_eq!(
            eval(UnaryOperator::Not, member.clone()),
            PropValue::Boolean(true)
        );
        assert_eq!(eval(UnaryOperator::Plus, member), PropValue::Number(0.0));
    }

    #[test]
    fn test_literal_operand_goes_through_literal_coercion() {
        // "true" is a boolean by the time it is negated
        assert_eq!(
            eval(UnaryOperator::Minus, Expression::string("true")),
            PropValue::Number(-1.0)
        );
        // null evaluates to the string "null"
        assert!(eval(UnaryOperator::Plus, Expression::null()).is_nan());
    }

    #[test]
    fn test_delete_void_typeof_ignore_operand() {
        let x = Expression::ident("x");
        assert_eq!(eval(UnaryOperator::Delete, x.clone()), PropValue::Boolean(true));
        assert_eq!(eval(UnaryOperator::Void, x.clone()), PropValue::Undefined);
        assert_eq!(eval(UnaryOperator::Typeof, x), PropValue::Undefined);
        assert_eq!(
            eval(UnaryOperator::Typeof, Expression::string("s")),
            PropValue::Undefined
        );
    }

    #[test]
    fn test_nested_unary() {
        let double_not = Expression::unary(UnaryOperator::Not, Expression::ident("bar"));
        assert_eq!(eval(UnaryOperator::Not, double_not), PropValue::Boolean(true));
    }
}
