//! Morty interpreter driver.
//!
//! Wires the lexer, parser, and evaluator into a [`Session`], and builds the
//! user-facing surfaces on top of it: the interactive REPL, the file runner,
//! and the `parse` AST dump used by the `morty` binary.

pub mod commands;
mod error;
pub mod repl;
mod session;

pub use error::DriverError;
pub use session::{Session, SessionOutcome};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call more than once. Logging stays off unless `RUST_LOG` or
/// `MORTY_LOG` holds a filter, e.g. `MORTY_LOG=morty_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let directives = std::env::var("RUST_LOG").or_else(|_| std::env::var("MORTY_LOG"));
        if let Ok(directives) = directives {
            tracing_subscriber::registry()
                .with(EnvFilter::new(directives))
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
