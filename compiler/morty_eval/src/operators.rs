//! Binary operator implementations.
//!
//! Resolution order for `left op right`:
//! 1. both integers: integer arithmetic and comparison
//! 2. both strings: concatenation and value equality
//! 3. `==` / `!=`: object identity
//! 4. differing types: type mismatch
//! 5. anything else: unknown operator

use morty_ir::BinaryOp;

use crate::errors::{division_by_zero, type_mismatch, unknown_infix_operator};
use crate::Value;

/// Evaluate a binary operation on two already-evaluated, non-carrier
/// operands.
pub fn evaluate_binary(left: &Value, op: BinaryOp, right: &Value) -> Value {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, op, *b),
        (Value::Str(a), Value::Str(b)) => match op {
            BinaryOp::Add => Value::string(format!("{}{}", **a, **b)),
            BinaryOp::Eq => Value::from_bool(**a == **b),
            BinaryOp::NotEq => Value::from_bool(**a != **b),
            _ => unknown_infix_operator(left, op, right),
        },
        _ if op.is_equality() => {
            let same = left.is_same_object(right);
            Value::from_bool(if op == BinaryOp::Eq { same } else { !same })
        }
        _ if left.type_name() != right.type_name() => type_mismatch(left, op, right),
        _ => unknown_infix_operator(left, op, right),
    }
}

/// Integer arithmetic wraps on overflow. Division truncates toward zero.
fn eval_int_binary(a: i64, op: BinaryOp, b: i64) -> Value {
    match op {
        BinaryOp::Add => Value::Int(a.wrapping_add(b)),
        BinaryOp::Sub => Value::Int(a.wrapping_sub(b)),
        BinaryOp::Mul => Value::Int(a.wrapping_mul(b)),
        BinaryOp::Div => {
            if b == 0 {
                division_by_zero()
            } else {
                Value::Int(a.wrapping_div(b))
            }
        }
        BinaryOp::Lt => Value::from_bool(a < b),
        BinaryOp::Gt => Value::from_bool(a > b),
        BinaryOp::Eq => Value::from_bool(a == b),
        BinaryOp::NotEq => Value::from_bool(a != b),
    }
}
