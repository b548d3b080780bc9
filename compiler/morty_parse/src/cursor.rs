//! Token cursor for navigating the token stream.

use morty_ir::{Span, Token, TokenKind, TokenList};

use crate::ParseError;

/// Position in a [`TokenList`].
///
/// Invariant: `pos` always indexes a real token. The list ends with `Eof`
/// and `advance` never moves past it, so `current` cannot go out of bounds.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Used for progress tracking: compare before and after a parse step.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consume the current token and return it. Stays put on `Eof`.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind`, or report what was found instead.
    pub fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(
                kind,
                self.current_kind(),
                self.current_span(),
            ))
        }
    }
}
