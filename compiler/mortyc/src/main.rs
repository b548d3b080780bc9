//! Morty interpreter CLI.

use std::io::{self, Write};
use std::path::Path;

use mortyc::commands::{lex_file, parse_file, run_file, RunStatus};
use mortyc::repl::{self, ReplMode};
use mortyc::{init_tracing, DriverError, Session};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let result = match args.get(1).map(String::as_str) {
        None => start_repl(),
        Some("run") => {
            let mut per_line = false;
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if arg == "--lines" || arg == "-l" {
                    per_line = true;
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: morty run <file.morty> [--lines]");
                std::process::exit(1);
            };
            run(Path::new(path), per_line)
        }
        Some("parse") => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: morty parse <file>");
                std::process::exit(1);
            };
            parse_file(Path::new(path), &mut io::stdout().lock())
        }
        Some("lex") => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: morty lex <file>");
                std::process::exit(1);
            };
            lex_file(Path::new(path), &mut io::stdout().lock())
        }
        Some("help" | "--help" | "-h") => {
            print_usage();
            Ok(RunStatus::Success)
        }
        Some(path) if !path.starts_with('-') => run(Path::new(path), false),
        Some(other) => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(RunStatus::Success) => {}
        Ok(RunStatus::Failed) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn start_repl() -> Result<RunStatus, DriverError> {
    println!("Hello! This is the Morty programming language!");
    println!("Type commands; end input with Ctrl-D.");
    io::stdout().flush()?;

    let session = Session::new();
    repl::start(&session, io::stdin().lock(), &mut io::stdout(), ReplMode::Interactive)?;
    Ok(RunStatus::Success)
}

fn run(path: &Path, per_line: bool) -> Result<RunStatus, DriverError> {
    let session = Session::new();
    let mut out = io::stdout().lock();
    let status = run_file(&session, path, per_line, &mut out)?;
    out.flush()?;
    Ok(status)
}

fn print_usage() {
    println!("Morty interpreter");
    println!();
    println!("Usage: morty [command] [args]");
    println!();
    println!("Commands:");
    println!("  (none)                       Start the interactive REPL");
    println!("  run <file.morty> [--lines]   Evaluate a file (--lines: one unit per line)");
    println!("  <file.morty>                 Same as `run <file.morty>`");
    println!("  parse <file>                 Print the parsed program or syntax errors");
    println!("  lex <file>                   Print the token stream");
    println!("  help                         Show this message");
    println!();
    println!("Built-ins: {}", morty_eval::builtins::names().join(", "));
    println!();
    println!("Logging: set RUST_LOG or MORTY_LOG, e.g. MORTY_LOG=morty_eval=debug");
}
