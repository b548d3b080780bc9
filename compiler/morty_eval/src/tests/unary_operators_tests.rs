use crate::{evaluate_unary, Value, FALSE, NULL, TRUE};
use morty_ir::UnaryOp;
use pretty_assertions::assert_eq;

#[test]
fn bang_follows_truthiness() {
    assert_eq!(evaluate_unary(UnaryOp::Not, &TRUE), FALSE);
    assert_eq!(evaluate_unary(UnaryOp::Not, &FALSE), TRUE);
    assert_eq!(evaluate_unary(UnaryOp::Not, &NULL), TRUE);
    assert_eq!(evaluate_unary(UnaryOp::Not, &Value::Int(5)), FALSE);
    assert_eq!(evaluate_unary(UnaryOp::Not, &Value::Int(0)), FALSE);
    assert_eq!(evaluate_unary(UnaryOp::Not, &Value::string("")), FALSE);
}

#[test]
fn minus_negates_integers() {
    assert_eq!(evaluate_unary(UnaryOp::Neg, &Value::Int(5)), Value::Int(-5));
    assert_eq!(evaluate_unary(UnaryOp::Neg, &Value::Int(-5)), Value::Int(5));
    assert_eq!(
        evaluate_unary(UnaryOp::Neg, &Value::Int(i64::MIN)),
        Value::Int(i64::MIN)
    );
}

#[test]
fn minus_on_non_integer_is_an_error() {
    assert_eq!(
        evaluate_unary(UnaryOp::Neg, &TRUE),
        Value::error("unknown operator: -BOOLEAN")
    );
    assert_eq!(
        evaluate_unary(UnaryOp::Neg, &Value::string("a")),
        Value::error("unknown operator: -STRING")
    );
    assert_eq!(
        evaluate_unary(UnaryOp::Neg, &NULL),
        Value::error("unknown operator: -NULL")
    );
}
