//! The `parse` command: print the canonical rendering of a file's AST.

use std::io::Write;
use std::path::Path;

use super::{line_col, read_file, RunStatus};
use crate::DriverError;

/// Write the rendered program, or every syntax error as
/// `<name>:<line>:<col>: <message>`.
pub fn parse_source<W: Write>(
    name: &str,
    source: &str,
    out: &mut W,
) -> Result<RunStatus, DriverError> {
    let tokens = morty_lexer::lex(source);
    let output = morty_parse::parse(&tokens);

    if output.has_errors() {
        for error in &output.errors {
            let (line, col) = line_col(source, error.span.start);
            writeln!(out, "{name}:{line}:{col}: {error}")?;
        }
        return Ok(RunStatus::Failed);
    }

    writeln!(out, "{}", output.program)?;
    Ok(RunStatus::Success)
}

/// Parse the file at `path`. Any extension is accepted.
pub fn parse_file<W: Write>(path: &Path, out: &mut W) -> Result<RunStatus, DriverError> {
    let source = read_file(path)?;
    parse_source(&path.display().to_string(), &source, out)
}
