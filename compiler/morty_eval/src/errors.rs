//! Centralized runtime error constructors.
//!
//! Every `Value::Error` the evaluator produces is built here, so message
//! wording lives in one place. REPL users and tests match on these strings.

use morty_ir::{BinaryOp, UnaryOp};

use crate::Value;

/// `-true`, `-"a"`
pub fn unknown_prefix_operator(op: UnaryOp, operand: &Value) -> Value {
    Value::error(format!(
        "unknown operator: {}{}",
        op.as_symbol(),
        operand.type_name()
    ))
}

/// Operator not defined for two operands of the same type: `true + true`.
pub fn unknown_infix_operator(left: &Value, op: BinaryOp, right: &Value) -> Value {
    Value::error(format!(
        "unknown operator: {} {} {}",
        left.type_name(),
        op.as_symbol(),
        right.type_name()
    ))
}

/// Non-equality operator between different types: `5 + true`.
pub fn type_mismatch(left: &Value, op: BinaryOp, right: &Value) -> Value {
    Value::error(format!(
        "type mismatch: {} {} {}",
        left.type_name(),
        op.as_symbol(),
        right.type_name()
    ))
}

pub fn identifier_not_found(name: &str) -> Value {
    Value::error(format!("identifier not found: {name}"))
}

pub fn not_a_function(callee: &Value) -> Value {
    Value::error(format!("not a function: {}", callee.type_name()))
}

/// User function called with the wrong number of arguments.
pub fn wrong_arity(expected: usize, got: usize) -> Value {
    Value::error(format!(
        "wrong number of arguments: expected {expected}, got {got}"
    ))
}

pub fn division_by_zero() -> Value {
    Value::error("division by zero")
}

// Built-in errors

/// Built-in called with the wrong number of arguments.
pub fn builtin_arg_count(got: usize, want: usize) -> Value {
    Value::error(format!(
        "wrong number of arguments. got={got}, want={want}"
    ))
}

pub fn builtin_unsupported_argument(builtin: &str, arg: &Value) -> Value {
    Value::error(format!(
        "argument to `{builtin}` not supported, got {}",
        arg.type_name()
    ))
}
