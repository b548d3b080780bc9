//! Morty evaluator.
//!
//! Runtime values, lexical environments, operators, built-ins, and the
//! tree-walking [`Interpreter`] that ties them together.
//!
//! ```text
//! let tokens = morty_lexer::lex("let x = 2; x * 21");
//! let output = morty_parse::parse(&tokens);
//! let env = Environment::new();
//! let value = Interpreter::new().eval_program(&output.program, &env);
//! assert_eq!(value, Some(Value::Int(42)));
//! ```

pub mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use environment::{Environment, LocalScope, Scope};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{buffer_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler};
pub use unary_operators::evaluate_unary;
pub use value::{Builtin, BuiltinFn, FunctionValue, Heap, Value, FALSE, NULL, TRUE};

#[cfg(test)]
mod tests;
