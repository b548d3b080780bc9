//! The `run` command: evaluate a `.morty` file.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::debug;

use super::{check_extension, read_file};
use crate::repl::{self, ReplMode};
use crate::{DriverError, Session};

/// How a run ended, for the process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// At least one parse error or runtime error was reported.
    Failed,
}

impl RunStatus {
    fn from_failed(failed: bool) -> Self {
        if failed {
            RunStatus::Failed
        } else {
            RunStatus::Success
        }
    }
}

/// Evaluate `source` as a single unit and write the outcome to `out`.
pub fn run_source<W: Write>(
    session: &Session,
    source: &str,
    out: &mut W,
) -> Result<RunStatus, DriverError> {
    let outcome = session.run(source);
    outcome.write_to(out)?;
    Ok(RunStatus::from_failed(outcome.is_failure()))
}

/// Run the file at `path`.
///
/// By default the whole file is one unit. With `per_line`, every line is
/// its own unit fed through the REPL loop under a `RESULTS:` header.
pub fn run_file<W: Write>(
    session: &Session,
    path: &Path,
    per_line: bool,
    out: &mut W,
) -> Result<RunStatus, DriverError> {
    check_extension(path)?;
    let source = read_file(path)?;
    debug!(path = %path.display(), bytes = source.len(), per_line, "running file");

    if per_line {
        run_lines(session, source.as_bytes(), out)
    } else {
        run_source(session, &source, out)
    }
}

fn run_lines<R: BufRead, W: Write>(
    session: &Session,
    input: R,
    out: &mut W,
) -> Result<RunStatus, DriverError> {
    let summary = repl::start(session, input, out, ReplMode::Script)?;
    Ok(RunStatus::from_failed(summary.failures > 0))
}
