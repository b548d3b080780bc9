//! Operator binding power.

use morty_ir::{BinaryOp, TokenKind};

/// Binding power, weakest first. Derived `Ord` gives the comparisons the
/// Pratt loop needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// `-x` `!x`
    Prefix,
    /// `f(x)`
    Call,
}

/// What an infix-position token does to the expression on its left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfixRule {
    Binary(BinaryOp),
    Call,
}

/// Infix rule and precedence for `kind`, or `None` if it cannot continue
/// an expression.
pub fn infix_rule(kind: TokenKind) -> Option<(InfixRule, Precedence)> {
    let rule = match kind {
        TokenKind::Eq => (InfixRule::Binary(BinaryOp::Eq), Precedence::Equals),
        TokenKind::NotEq => (InfixRule::Binary(BinaryOp::NotEq), Precedence::Equals),
        TokenKind::Lt => (InfixRule::Binary(BinaryOp::Lt), Precedence::LessGreater),
        TokenKind::Gt => (InfixRule::Binary(BinaryOp::Gt), Precedence::LessGreater),
        TokenKind::Plus => (InfixRule::Binary(BinaryOp::Add), Precedence::Sum),
        TokenKind::Minus => (InfixRule::Binary(BinaryOp::Sub), Precedence::Sum),
        TokenKind::Star => (InfixRule::Binary(BinaryOp::Mul), Precedence::Product),
        TokenKind::Slash => (InfixRule::Binary(BinaryOp::Div), Precedence::Product),
        TokenKind::LParen => (InfixRule::Call, Precedence::Call),
        _ => return None,
    };
    Some(rule)
}
