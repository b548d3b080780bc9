//! Grammar productions, split by syntactic category.
//!
//! - `stmt`: statements, blocks, and the recovering statement loop
//! - `expr`: the Pratt expression parser and its prefix/infix rules

mod expr;
mod stmt;
