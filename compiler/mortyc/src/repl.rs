//! Line-oriented read-eval-print loop.
//!
//! Every input line is a separate source unit evaluated in one shared
//! [`Session`]. The same loop drives both the interactive prompt and the
//! line-by-line file runner.
//!
//! Lines are decoded lossily: invalid UTF-8 becomes U+FFFD, which the lexer
//! reports as an illegal character, and the loop moves on to the next line.

use std::io::{BufRead, Write};

use crate::{DriverError, Session};

pub const PROMPT: &str = ">> ";

/// How the loop presents itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplMode {
    /// Print [`PROMPT`] before reading each line.
    Interactive,
    /// No prompt; a single `RESULTS:` header before any output.
    Script,
}

/// Summary of a finished loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplSummary {
    pub lines: usize,
    pub failures: usize,
}

/// Run the loop until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(
    session: &Session,
    mut input: R,
    out: &mut W,
    mode: ReplMode,
) -> Result<ReplSummary, DriverError> {
    let mut summary = ReplSummary::default();

    if mode == ReplMode::Script {
        writeln!(out, "RESULTS:")?;
    }

    let mut buf = Vec::new();
    loop {
        if mode == ReplMode::Interactive {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        buf.clear();
        if input
            .read_until(b'\n', &mut buf)
            .map_err(DriverError::Input)?
            == 0
        {
            break;
        }
        let text = String::from_utf8_lossy(&buf);
        let line = text.strip_suffix('\n').unwrap_or(&text);
        let line = line.strip_suffix('\r').unwrap_or(line);

        let outcome = session.run(line);
        summary.lines += 1;
        if outcome.is_failure() {
            summary.failures += 1;
        }
        outcome.write_to(out)?;
    }

    if mode == ReplMode::Interactive {
        writeln!(out)?;
    }
    Ok(summary)
}
