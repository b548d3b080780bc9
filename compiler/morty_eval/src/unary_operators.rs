//! Unary operator implementations.

use morty_ir::UnaryOp;

use crate::errors::unknown_prefix_operator;
use crate::Value;

/// Evaluate a unary operation on an already-evaluated, non-carrier operand.
///
/// `!` works on every value by truthiness. `-` is integer-only and wraps
/// (`-i64::MIN == i64::MIN`).
pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> Value {
    match op {
        UnaryOp::Not => Value::from_bool(!operand.is_truthy()),
        UnaryOp::Neg => match operand {
            Value::Int(n) => Value::Int(n.wrapping_neg()),
            _ => unknown_prefix_operator(op, operand),
        },
    }
}
