//! Host-level driver errors.
//!
//! Syntax and runtime errors in Morty programs are not `DriverError`s: they
//! are reported to the user as program output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a .morty file", path.display())]
    NotMortyFile { path: PathBuf },

    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl DriverError {
    /// Classify a failure to read `path`.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => DriverError::NotFound { path },
            _ => DriverError::Read { path, source },
        }
    }
}
