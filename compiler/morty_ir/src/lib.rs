//! Morty IR - shared syntax types
//!
//! This crate contains the data structures every other Morty crate speaks:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - AST nodes (`Program`, `Stmt`, `Expr`, `Block`)
//! - Operator enums and their source symbols
//!
//! The tree is built once by the parser and never mutated afterwards.
//! Function literals sit behind `Rc` so runtime closures can share a body
//! without copying it.

pub mod ast;
mod span;
mod token;

pub use ast::{
    BinaryOp, Block, Expr, ExprKind, FunctionLiteral, Ident, Program, Stmt, StmtKind, UnaryOp,
};
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
