//! Command handlers for the `morty` binary.
//!
//! Each handler writes program output to a caller-supplied writer and
//! returns host failures as [`DriverError`], so the binary decides how to
//! exit and tests can capture everything.

mod lex;
mod parse;
mod run;

pub use lex::{lex_file, lex_source};
pub use parse::{parse_file, parse_source};
pub use run::{run_file, run_source, RunStatus};

use std::path::Path;

use crate::DriverError;

pub const SOURCE_EXTENSION: &str = "morty";

/// Reject paths without the `.morty` extension.
pub fn check_extension(path: &Path) -> Result<(), DriverError> {
    if path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
        Ok(())
    } else {
        Err(DriverError::NotMortyFile {
            path: path.to_path_buf(),
        })
    }
}

/// Read a source file as UTF-8.
pub fn read_file(path: &Path) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|err| DriverError::read(path, err))
}

/// 1-based line and column (in chars) of a byte offset.
pub fn line_col(source: &str, offset: u32) -> (usize, usize) {
    let offset = (offset as usize).min(source.len());
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}
