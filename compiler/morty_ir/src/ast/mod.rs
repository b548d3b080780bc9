//! Syntax tree produced by the parser.
//!
//! Statements and expressions are closed enums wrapped in a node struct that
//! carries the span of the tokens the node was built from. Every node renders
//! back to canonical source through `Display` (see `render`), with prefix and
//! infix expressions fully parenthesized.

mod operators;
mod render;

use std::rc::Rc;

use crate::Span;

pub use operators::{BinaryOp, UnaryOp};

/// An identifier occurrence: a binding name, parameter, or reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Ident {
            name: name.into(),
            span,
        }
    }
}

/// Parse root: the statements of one input unit, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }
}

/// A braced statement sequence: `if` branches and function bodies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StmtKind {
    /// `let name = value;`
    Let { name: Ident, value: Expr },
    /// `return value;` or a bare `return;`
    Return(Option<Expr>),
    /// An expression followed by an optional `;`.
    Expression(Expr),
    /// A nested `{ ... }` sequence.
    Block(Block),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    Ident(String),
    Int(i64),
    Str(String),
    Bool(bool),
    Prefix {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Infix {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    If {
        condition: Box<Expr>,
        consequence: Block,
        alternative: Option<Block>,
    },
    /// Shared so function values can hold the body without cloning the tree.
    Function(Rc<FunctionLiteral>),
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
    Array(Vec<Expr>),
}

/// `fn [name](params) { body }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionLiteral {
    pub name: Option<Ident>,
    pub parameters: Vec<Ident>,
    pub body: Block,
}
