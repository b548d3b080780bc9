//! Error recovery for the parser.
//!
//! After a statement fails to parse, the parser skips tokens until it
//! reaches a statement boundary and resumes there. Boundaries are kept in
//! a bitset so membership is a single AND.

use morty_ir::TokenKind;
use tracing::trace;

use crate::cursor::Cursor;

/// A set of token kinds, one bit per `TokenKind` discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }
}

/// Where a top-level statement may start (or the previous one ended).
pub const STMT_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::Semicolon)
    .with(TokenKind::Let)
    .with(TokenKind::Return)
    .with(TokenKind::Eof);

/// Tokens that close a nested construct.
pub const CLOSERS: TokenSet = TokenSet::new().with(TokenKind::RBrace);

/// Inside a block, the closing brace also ends the statement list.
pub const BLOCK_BOUNDARY: TokenSet = STMT_BOUNDARY.union(CLOSERS);

/// Skip to the next token in `recovery`. A `;` boundary is consumed since
/// it terminates the broken statement; any other boundary starts the next
/// one and is left in place.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) {
    let start = cursor.position();
    while !recovery.contains(cursor.current_kind()) {
        cursor.advance();
    }
    cursor.eat(TokenKind::Semicolon);
    trace!(
        skipped = cursor.position() - start,
        "resynchronized at {}",
        cursor.current_kind()
    );
}
