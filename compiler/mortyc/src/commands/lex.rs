//! The `lex` command: dump a file's token stream.

use std::io::Write;
use std::path::Path;

use morty_ir::TokenKind;

use super::{line_col, read_file, RunStatus};
use crate::DriverError;

/// One line per token: position, kind, and the source text it covers.
/// Fails when the input contains illegal characters.
pub fn lex_source<W: Write>(
    name: &str,
    source: &str,
    out: &mut W,
) -> Result<RunStatus, DriverError> {
    let tokens = morty_lexer::lex(source);
    writeln!(out, "Tokens for '{name}' ({} tokens):", tokens.len())?;

    let mut illegal = false;
    for token in &tokens {
        let (line, col) = line_col(source, token.span.start);
        writeln!(
            out,
            "  {line}:{col} {} {:?}",
            token.kind,
            token.span.slice(source)
        )?;
        illegal |= token.kind == TokenKind::Illegal;
    }

    Ok(if illegal {
        RunStatus::Failed
    } else {
        RunStatus::Success
    })
}

/// Lex the file at `path`. Any extension is accepted.
pub fn lex_file<W: Write>(path: &Path, out: &mut W) -> Result<RunStatus, DriverError> {
    let source = read_file(path)?;
    lex_source(&path.display().to_string(), &source, out)
}
