//! Lexer for Morty using logos.
//!
//! Produces a [`TokenList`] that always ends with `Eof`. Unknown input never
//! stops lexing: each unrecognized character becomes an `Illegal` token and
//! the parser reports it.

use logos::Logos;
use morty_ir::{Span, Token, TokenKind, TokenList};

/// Raw token from logos (before conversion to `TokenKind`).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
enum RawToken {
    // Keywords
    #[token("fn")]
    Function,
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,

    // Operators
    #[token("==")]
    Eq,
    #[token("=")]
    Assign,
    #[token("!=")]
    NotEq,
    #[token("!")]
    Bang,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // Delimiters
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // Literals
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r#""[^"]*""#)]
    Str,
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

impl RawToken {
    fn kind(self) -> TokenKind {
        match self {
            RawToken::Function => TokenKind::Function,
            RawToken::Let => TokenKind::Let,
            RawToken::True => TokenKind::True,
            RawToken::False => TokenKind::False,
            RawToken::If => TokenKind::If,
            RawToken::Else => TokenKind::Else,
            RawToken::Return => TokenKind::Return,
            RawToken::Eq => TokenKind::Eq,
            RawToken::Assign => TokenKind::Assign,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Int => TokenKind::Int,
            RawToken::Str => TokenKind::Str,
            RawToken::Ident => TokenKind::Ident,
        }
    }
}

/// Lex `source` into tokens.
///
/// Integer literals keep their digits as text; range checking happens in
/// the parser so an oversized literal becomes a parse error rather than a
/// silent `Illegal` token.
pub fn lex(source: &str) -> TokenList {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let slice = lexer.slice();

        let token = match result {
            Ok(RawToken::Str) => {
                // Strip the surrounding quotes
                let content = &slice[1..slice.len() - 1];
                Token::new(TokenKind::Str, content, span)
            }
            Ok(raw) => Token::new(raw.kind(), slice, span),
            Err(()) => Token::new(TokenKind::Illegal, slice, span),
        };
        tokens.push(token);
    }

    TokenList::new(tokens, Span::from_range(source.len()..source.len()).end)
}
