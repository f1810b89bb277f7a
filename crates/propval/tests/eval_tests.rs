use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use propval::ast::{Expression, JsxAttribute, UnaryOperator};
use propval::*;

// ═══════════════════════════════════════════════════════════════════════
// Scenario Table
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_scenarios() {
    let cases = vec![
        (JsxAttribute::shorthand("foo"), PropValue::Boolean(true)),
        (JsxAttribute::string("foo", "bar"), PropValue::string("bar")),
        (
            JsxAttribute::expression("foo", Expression::number(1.0)),
            PropValue::Number(1.0),
        ),
        (JsxAttribute::string("foo", "true"), PropValue::Boolean(true)),
        (
            JsxAttribute::expression("foo", Expression::null()),
            PropValue::string("null"),
        ),
        (
            JsxAttribute::expression("foo", Expression::member(Expression::ident("bar"), "baz")),
            PropValue::Unknown,
        ),
        (
            JsxAttribute::expression("foo", Expression::call(Expression::ident("bar"), vec![])),
            PropValue::Unknown,
        ),
    ];

    for (attr, expected) in cases {
        assert_eq!(evaluate(&attr), expected, "{:?}", attr);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Context
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_trace_does_not_change_results() {
    let attr = JsxAttribute::expression(
        "foo",
        Expression::template(
            &["", "px"],
            vec![Expression::unary(UnaryOperator::Plus, Expression::string("12"))],
        ),
    );
    let traced = EvalContext::new().with_trace(true);
    assert_eq!(evaluate_with(&attr, &traced), evaluate(&attr));
    assert_eq!(evaluate(&attr), PropValue::string("12px"));
}

#[test]
fn test_depth_limit_applies_inside_templates() {
    let inner = Expression::template(&["<", ">"], vec![Expression::number(1.0)]);
    let outer = Expression::template(&["[", "]"], vec![inner]);
    let attr = JsxAttribute::expression("foo", outer);

    assert_eq!(evaluate(&attr), PropValue::string("[<1>]"));
    assert_eq!(
        evaluate_with(&attr, &EvalContext::with_max_depth(1)),
        PropValue::Unknown
    );
    assert_eq!(
        evaluate_with(&attr, &EvalContext::with_max_depth(2)),
        PropValue::string("[<1>]")
    );
}

#[test]
fn test_evaluate_value_and_expression_directly() {
    let ctx = EvalContext::default();
    let attr = JsxAttribute::string("foo", "false");
    let value = attr.value.as_ref().unwrap();
    assert_eq!(evaluate_value(value, &ctx), PropValue::Boolean(false));
    assert_eq!(
        evaluate_expression(&Expression::ident("undefined"), &ctx),
        PropValue::Undefined
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Concurrency
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_shared_across_threads() {
    let attr = Arc::new(JsxAttribute::expression(
        "foo",
        Expression::unary(UnaryOperator::BitNot, Expression::ident("bar")),
    ));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let attr = Arc::clone(&attr);
            thread::spawn(move || evaluate(&attr))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), PropValue::Number(-1.0));
    }
}
