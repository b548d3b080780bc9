//! Tokens produced by the lexer and consumed by the parser.

use std::fmt;
use std::ops::Index;

use crate::Span;

/// Token kinds.
///
/// Fieldless so a kind fits in one byte and can index a bitset; the source
/// text of identifiers and literals lives on [`Token::literal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    Illegal,
    Eof,

    // Identifiers and literals
    Ident,
    Int,
    Str,

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Star,
    Slash,
    Lt,
    Gt,
    Eq,
    NotEq,

    // Delimiters
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// Index of this kind inside a `u64` bitset.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Name used in parser diagnostics.
    ///
    /// Literal classes and keywords use upper-case class names (`IDENT`,
    /// `LET`), punctuation uses its own symbol.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Str => "STRING",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its literal text and source span.
///
/// For strings `literal` holds the contents without the surrounding quotes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            literal: literal.into(),
            span,
        }
    }
}

/// Lexer output.
///
/// Invariant: non-empty, and the last token is always `Eof`. The parser
/// cursor relies on this to never index out of bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Build a list from raw tokens, appending `Eof` at `eof_offset` when the
    /// input does not already end with one.
    pub fn new(mut tokens: Vec<Token>, eof_offset: u32) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            tokens.push(Token::new(TokenKind::Eof, "", Span::point(eof_offset)));
        }
        TokenList { tokens }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Never true for a list built through `new`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
