//! Runtime values for the Morty interpreter.
//!
//! # Singletons and identity
//!
//! `TRUE`, `FALSE` and `NULL` are the only boolean and null values that
//! exist; every comparison or negation produces one of them through
//! [`Value::from_bool`]. Because the variants carry no allocation, two
//! booleans are the same object exactly when they hold the same `bool`.
//!
//! Heap values (`Str`, `Array`, `Function`, ...) go through [`Heap`], whose
//! constructor is private to this module:
//!
//! ```text
//! let s = Value::string("hello");     // OK
//! let s = Value::Str(Heap::new(..));  // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Control-flow carriers
//!
//! `Return` and `Error` are not ordinary data. The interpreter stops
//! evaluating a statement sequence as soon as one appears and never binds
//! one to a name. See [`Value::is_carrier`].

mod heap;

use std::fmt;
use std::rc::Rc;

use morty_ir::{Block, FunctionLiteral, Ident};

use crate::print_handler::PrintHandlerImpl;
use crate::Environment;

pub use heap::Heap;

/// Signature of a native built-in.
///
/// Built-ins receive the evaluated arguments and the interpreter's print
/// handler (for `puts`), and report failure by returning a `Value::Error`.
pub type BuiltinFn = fn(&[Value], &PrintHandlerImpl) -> Value;

pub const TRUE: Value = Value::Bool(true);
pub const FALSE: Value = Value::Bool(false);
pub const NULL: Value = Value::Null;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    Int(i64),
    Str(Heap<String>),
    Bool(bool),
    Null,
    /// Wraps the value of a `return` while it unwinds to the enclosing call.
    Return(Heap<Value>),
    /// Runtime error message. Propagates like `Return` but is never unwrapped.
    Error(Heap<String>),
    Function(Heap<FunctionValue>),
    Builtin(Builtin),
    Array(Heap<Vec<Value>>),
}

impl Value {
    // Factory methods

    #[inline]
    pub fn string(s: impl Into<String>) -> Value {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn array(items: Vec<Value>) -> Value {
        Value::Array(Heap::new(items))
    }

    #[inline]
    pub fn error(message: impl Into<String>) -> Value {
        Value::Error(Heap::new(message.into()))
    }

    #[inline]
    pub fn return_value(inner: Value) -> Value {
        Value::Return(Heap::new(inner))
    }

    /// A closure over `env`, the environment the literal was evaluated in.
    pub fn function(literal: Rc<FunctionLiteral>, env: Environment) -> Value {
        Value::Function(Heap::new(FunctionValue { literal, env }))
    }

    /// Map a Rust `bool` to the `TRUE`/`FALSE` singletons.
    #[inline]
    pub const fn from_bool(b: bool) -> Value {
        if b {
            TRUE
        } else {
            FALSE
        }
    }

    // Queries

    /// Type tag used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "INTEGER",
            Value::Str(_) => "STRING",
            Value::Bool(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::Return(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Array(_) => "ARRAY",
        }
    }

    /// `NULL` and `FALSE` are falsy; everything else, including `0` and
    /// the empty string, is truthy.
    #[inline]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Bool(false))
    }

    /// `Return` or `Error`: must short-circuit and never be bound.
    #[inline]
    pub const fn is_carrier(&self) -> bool {
        matches!(self, Value::Return(_) | Value::Error(_))
    }

    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Strip one `Return` wrapper, leaving other values untouched.
    pub fn unwrap_return(self) -> Value {
        match self {
            Value::Return(inner) => (*inner).clone(),
            other => other,
        }
    }

    /// Object identity, as used by `==`/`!=` once the integer and string
    /// rules have been ruled out.
    ///
    /// Booleans and null compare as singletons, integers (which have no
    /// allocation) by value, built-ins by name, and every heap value by
    /// allocation. Two arrays with equal elements are therefore different
    /// objects.
    pub fn is_same_object(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Str(a), Value::Str(b)) | (Value::Error(a), Value::Error(b)) => {
                Heap::ptr_eq(a, b)
            }
            (Value::Return(a), Value::Return(b)) => Heap::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Heap::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            (Value::Array(a), Value::Array(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Human-readable rendering, as printed by the REPL.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::Return(inner) => write!(f, "{}", **inner),
            Value::Error(msg) => write!(f, "ERROR: {}", **msg),
            Value::Function(func) => write!(f, "{}", func.literal),
            Value::Builtin(_) => f.write_str("builtin function"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &***s),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Null => f.write_str("Null"),
            Value::Return(inner) => write!(f, "Return({:?})", **inner),
            Value::Error(msg) => write!(f, "Error({:?})", &***msg),
            Value::Function(func) => write!(f, "{func:?}"),
            Value::Builtin(b) => write!(f, "{b:?}"),
            Value::Array(items) => f.debug_list().entries(items.iter()).finish(),
        }
    }
}

/// Structural equality, for tests and tooling.
///
/// This is not the language's `==`; see [`Value::is_same_object`].
/// Functions are only equal to themselves.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) | (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Return(a), Value::Return(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Heap::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            (Value::Array(a), Value::Array(b)) => a == b,
            _ => false,
        }
    }
}

/// A user-defined function together with the environment it closes over.
pub struct FunctionValue {
    literal: Rc<FunctionLiteral>,
    env: Environment,
}

impl FunctionValue {
    pub fn name(&self) -> Option<&str> {
        self.literal.name.as_ref().map(|n| n.name.as_str())
    }

    pub fn parameters(&self) -> &[Ident] {
        &self.literal.parameters
    }

    pub fn body(&self) -> &Block {
        &self.literal.body
    }

    /// The defining environment (shared, not a snapshot).
    pub fn env(&self) -> &Environment {
        &self.env
    }
}

// Manual impl: the captured environment usually contains this function,
// so printing it would recurse forever.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name())
            .field("arity", &self.parameters().len())
            .finish_non_exhaustive()
    }
}

/// A native function from the built-in registry.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        Builtin { name, func }
    }

    #[inline]
    pub fn call(&self, args: &[Value], print: &PrintHandlerImpl) -> Value {
        (self.func)(args, print)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

#[cfg(test)]
mod tests;
