//! Parser for Morty.
//!
//! Turns a [`TokenList`] into a [`Program`] using Pratt (operator-precedence)
//! parsing for expressions and recursive descent for statements.
//!
//! Parsing never fails outright. Each statement that cannot be parsed adds
//! one [`ParseError`], the cursor skips to the next statement boundary, and
//! parsing continues, so every independent mistake in an input is reported.
//! The caller decides whether a non-empty error list blocks evaluation.

mod cursor;
mod error;
mod grammar;
mod precedence;
mod recovery;

use morty_ir::{Program, TokenList};
use tracing::debug;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use precedence::Precedence;

/// Result of parsing one input unit: the (possibly partial) program plus
/// every error found along the way, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error messages without locations, as the REPL prints them.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ParseError::message).collect()
    }
}

/// Parser state: a cursor plus the errors accumulated so far.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            errors: Vec::new(),
        }
    }

    /// Parse statements until end of input.
    pub fn parse_program(mut self) -> ParseOutput {
        let statements = self.parse_statement_list(false);

        if !self.errors.is_empty() {
            debug!(count = self.errors.len(), "parse finished with errors");
        }

        ParseOutput {
            program: Program::new(statements),
            errors: self.errors,
        }
    }
}

/// Parse a token stream into a program.
pub fn parse(tokens: &TokenList) -> ParseOutput {
    Parser::new(tokens).parse_program()
}
