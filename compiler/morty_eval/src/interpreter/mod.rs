//! Tree-walking interpreter for Morty.
//!
//! Evaluation is synchronous, depth-first, and left-to-right. Statement
//! evaluation yields `Option<Value>`: `None` means the statement produces no
//! value (`let`, named function declarations). Expressions always yield a
//! `Value`.
//!
//! # Control flow
//!
//! `return` and runtime errors are ordinary values (`Value::Return`,
//! `Value::Error`). Whenever a sub-evaluation produces one, the enclosing
//! evaluation stops and hands it upward unchanged. A call unwraps `Return`
//! at the function boundary and the program unwraps it at the top level;
//! `Error` is never unwrapped and reaches the caller of `eval_program`.

mod builder;
mod function_call;

pub use builder::InterpreterBuilder;

use std::rc::Rc;

use morty_ir::{Block, Expr, ExprKind, FunctionLiteral, Program, Stmt, StmtKind};
use morty_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::errors::identifier_not_found;
use crate::operators::evaluate_binary;
use crate::print_handler::SharedPrintHandler;
use crate::unary_operators::evaluate_unary;
use crate::value::NULL;
use crate::{builtins, Environment, Value};

/// Evaluates parsed programs against an [`Environment`].
///
/// The interpreter itself holds no bindings, so one instance can serve any
/// number of environments.
pub struct Interpreter {
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Interpreter printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Output captured by a buffer print handler.
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    pub fn clear_print_output(&self) {
        self.print_handler.clear();
    }

    /// Evaluate every statement of `program` in `env`.
    ///
    /// Returns the value of the last statement, the value of a top-level
    /// `return` (unwrapped), or the first runtime error. `None` when the
    /// last statement produced no value.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn eval_program(&self, program: &Program, env: &Environment) -> Option<Value> {
        let mut result = None;

        for stmt in &program.statements {
            result = self.eval_stmt(stmt, env);
            if let Some(Value::Return(inner)) = &result {
                return Some((**inner).clone());
            }
            if let Some(Value::Error(message)) = &result {
                debug!(error = %**message, "runtime error");
                break;
            }
        }

        result
    }

    /// Evaluate a block in `env`, stopping at the first carrier.
    ///
    /// Blocks do not open a new frame: a `let` inside an `if` branch binds
    /// in the surrounding function (or global) frame.
    pub(crate) fn eval_block(&self, block: &Block, env: &Environment) -> Option<Value> {
        let mut result = None;

        for stmt in &block.statements {
            result = self.eval_stmt(stmt, env);
            if result.as_ref().is_some_and(Value::is_carrier) {
                break;
            }
        }

        result
    }

    fn eval_stmt(&self, stmt: &Stmt, env: &Environment) -> Option<Value> {
        match &stmt.kind {
            StmtKind::Let { name, value } => {
                let value = self.eval_expr(value, env);
                if value.is_carrier() {
                    return Some(value);
                }
                env.set(name.name.as_str(), value);
                None
            }
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr, env),
                    None => NULL,
                };
                if value.is_carrier() {
                    return Some(value);
                }
                Some(Value::return_value(value))
            }
            StmtKind::Expression(expr) => match &expr.kind {
                // A named function as a statement is a declaration.
                ExprKind::Function(literal) if literal.name.is_some() => {
                    Self::eval_function_literal(literal, env);
                    None
                }
                // Nested in an expression, a named literal still binds its name.
                _ => Some(self.eval_expr(expr, env)),
            },
            StmtKind::Block(block) => self.eval_block(block, env),
        }
    }

    /// Evaluate an expression to a value (possibly a carrier).
    pub fn eval_expr(&self, expr: &Expr, env: &Environment) -> Value {
        ensure_sufficient_stack(|| match &expr.kind {
            ExprKind::Ident(name) => Self::eval_ident(name, env),
            ExprKind::Int(n) => Value::Int(*n),
            ExprKind::Str(s) => Value::string(s.as_str()),
            ExprKind::Bool(b) => Value::from_bool(*b),
            ExprKind::Prefix { op, operand } => {
                let operand = self.eval_expr(operand, env);
                if operand.is_carrier() {
                    return operand;
                }
                evaluate_unary(*op, &operand)
            }
            ExprKind::Infix { op, left, right } => {
                let left = self.eval_expr(left, env);
                if left.is_carrier() {
                    return left;
                }
                let right = self.eval_expr(right, env);
                if right.is_carrier() {
                    return right;
                }
                evaluate_binary(&left, *op, &right)
            }
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = self.eval_expr(condition, env);
                if condition.is_carrier() {
                    return condition;
                }
                let branch = if condition.is_truthy() {
                    Some(consequence)
                } else {
                    alternative.as_ref()
                };
                branch
                    .and_then(|block| self.eval_block(block, env))
                    .unwrap_or(NULL)
            }
            ExprKind::Function(literal) => Self::eval_function_literal(literal, env),
            ExprKind::Call { callee, arguments } => {
                let function = self.eval_expr(callee, env);
                if function.is_carrier() {
                    return function;
                }
                match self.eval_expressions(arguments, env) {
                    Ok(args) => self.apply_function(&function, &args),
                    Err(carrier) => carrier,
                }
            }
            ExprKind::Array(elements) => match self.eval_expressions(elements, env) {
                Ok(items) => Value::array(items),
                Err(carrier) => carrier,
            },
        })
    }

    /// Environment chain first, then the built-in registry.
    fn eval_ident(name: &str, env: &Environment) -> Value {
        env.get(name)
            .or_else(|| builtins::lookup(name).map(Value::Builtin))
            .unwrap_or_else(|| identifier_not_found(name))
    }

    /// Close over `env`. A named literal also binds itself in `env`, which
    /// is what lets it call itself recursively.
    fn eval_function_literal(literal: &Rc<FunctionLiteral>, env: &Environment) -> Value {
        let function = Value::function(Rc::clone(literal), env.clone());
        if let Some(name) = &literal.name {
            env.set(name.name.as_str(), function.clone());
        }
        function
    }

    /// Evaluate left to right; the first carrier aborts the list.
    fn eval_expressions(&self, exprs: &[Expr], env: &Environment) -> Result<Vec<Value>, Value> {
        let mut values = Vec::with_capacity(exprs.len());
        for expr in exprs {
            let value = self.eval_expr(expr, env);
            if value.is_carrier() {
                return Err(value);
            }
            values.push(value);
        }
        Ok(values)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
