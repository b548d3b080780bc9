//! Parse error types.

use std::fmt;

use morty_ir::{Span, TokenKind};

/// What went wrong, independent of where.
///
/// The `Display` text is what the REPL prints under `parsing errors:`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    #[error("no prefix parse function for {0} found")]
    NoPrefixRule(TokenKind),

    #[error("could not parse {0} as integer")]
    InvalidInteger(String),

    #[error("illegal character {0:?}")]
    IllegalCharacter(String),
}

/// A recoverable syntax error with its location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    pub fn unexpected(expected: TokenKind, found: TokenKind, span: Span) -> Self {
        Self::new(ParseErrorKind::UnexpectedToken { expected, found }, span)
    }

    /// The human-readable message, without location.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ParseError {}
