//! Expression parsing (Pratt).
//!
//! `parse_expression(min)` parses one prefix form, then keeps folding infix
//! operators into the left operand while they bind tighter than `min`.
//! Passing an operator's own precedence as the new `min` for its right
//! operand makes equal-precedence chains associate to the left.

use std::rc::Rc;

use morty_ir::{BinaryOp, Expr, ExprKind, FunctionLiteral, Ident, TokenKind, UnaryOp};
use morty_stack::ensure_sufficient_stack;

use crate::precedence::{infix_rule, InfixRule};
use crate::{ParseError, ParseErrorKind, Parser, Precedence};

impl Parser<'_> {
    pub(crate) fn parse_expression(&mut self, min: Precedence) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            let mut left = self.parse_prefix()?;

            while let Some((rule, precedence)) = infix_rule(self.cursor.current_kind()) {
                if precedence <= min {
                    break;
                }
                left = match rule {
                    InfixRule::Binary(op) => self.parse_infix(left, op, precedence)?,
                    InfixRule::Call => self.parse_call(left)?,
                };
            }

            Ok(left)
        })
    }

    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        let span = token.span;

        let kind = match token.kind {
            TokenKind::Ident => ExprKind::Ident(token.literal.clone()),
            TokenKind::Int => {
                let value = token.literal.parse::<i64>().map_err(|_| {
                    ParseError::new(ParseErrorKind::InvalidInteger(token.literal.clone()), span)
                })?;
                ExprKind::Int(value)
            }
            TokenKind::Str => ExprKind::Str(token.literal.clone()),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Bang | TokenKind::Minus => return self.parse_unary(),
            TokenKind::LParen => return self.parse_grouped(),
            TokenKind::If => return self.parse_if(),
            TokenKind::Function => return self.parse_function(),
            TokenKind::LBracket => return self.parse_array(),
            TokenKind::Illegal => {
                return Err(ParseError::new(
                    ParseErrorKind::IllegalCharacter(token.literal.clone()),
                    span,
                ))
            }
            kind => return Err(ParseError::new(ParseErrorKind::NoPrefixRule(kind), span)),
        };

        self.cursor.advance();
        Ok(Expr::new(kind, span))
    }

    /// `!x` or `-x`
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.advance();
        let op = if token.kind == TokenKind::Bang {
            UnaryOp::Not
        } else {
            UnaryOp::Neg
        };
        let operand = self.parse_expression(Precedence::Prefix)?;
        let span = token.span.merge(operand.span);

        Ok(Expr::new(
            ExprKind::Prefix {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    fn parse_infix(
        &mut self,
        left: Expr,
        op: BinaryOp,
        precedence: Precedence,
    ) -> Result<Expr, ParseError> {
        self.cursor.advance();
        let right = self.parse_expression(precedence)?;
        let span = left.span.merge(right.span);

        Ok(Expr::new(
            ExprKind::Infix {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        ))
    }

    /// `callee(args)`; the `(` arrives as an infix operator.
    fn parse_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        self.cursor.advance();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        let span = callee.span.merge(self.cursor.previous_span());

        Ok(Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                arguments,
            },
            span,
        ))
    }

    /// `( expr )`. Grouping leaves no node behind; the tree shape already
    /// records it.
    fn parse_grouped(&mut self) -> Result<Expr, ParseError> {
        self.cursor.advance();
        let inner = self.parse_expression(Precedence::Lowest)?;
        self.cursor.expect(TokenKind::RParen)?;
        Ok(inner)
    }

    /// `if <cond> { ... } [else { ... }]`
    fn parse_if(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let condition = self.parse_expression(Precedence::Lowest)?;
        let consequence = self.parse_block()?;
        let alternative = if self.cursor.eat(TokenKind::Else) {
            Some(self.parse_block()?)
        } else {
            None
        };

        let span = start.merge(self.cursor.previous_span());
        Ok(Expr::new(
            ExprKind::If {
                condition: Box::new(condition),
                consequence,
                alternative,
            },
            span,
        ))
    }

    /// `fn [name](a, b) { ... }`
    fn parse_function(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let name = if self.cursor.check(TokenKind::Ident) {
            let token = self.cursor.advance();
            Some(Ident::new(token.literal.as_str(), token.span))
        } else {
            None
        };

        self.cursor.expect(TokenKind::LParen)?;
        let parameters = self.parse_parameters()?;
        let body = self.parse_block()?;

        let span = start.merge(self.cursor.previous_span());
        let literal = FunctionLiteral {
            name,
            parameters,
            body,
        };
        Ok(Expr::new(ExprKind::Function(Rc::new(literal)), span))
    }

    /// Identifier list after the opening `(`, through the closing `)`.
    fn parse_parameters(&mut self) -> Result<Vec<Ident>, ParseError> {
        let mut parameters = Vec::new();
        if self.cursor.eat(TokenKind::RParen) {
            return Ok(parameters);
        }

        loop {
            let token = self.cursor.expect(TokenKind::Ident)?;
            parameters.push(Ident::new(token.literal.as_str(), token.span));
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(TokenKind::RParen)?;

        Ok(parameters)
    }

    /// `[a, b, c]`
    fn parse_array(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        let span = start.merge(self.cursor.previous_span());
        Ok(Expr::new(ExprKind::Array(elements), span))
    }

    /// Comma-separated expressions through `close`; the opener is already
    /// consumed.
    fn parse_expression_list(&mut self, close: TokenKind) -> Result<Vec<Expr>, ParseError> {
        let mut items = Vec::new();
        if self.cursor.eat(close) {
            return Ok(items);
        }

        loop {
            items.push(self.parse_expression(Precedence::Lowest)?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(close)?;

        Ok(items)
    }
}
