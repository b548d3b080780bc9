//! One interpreter session: a persistent global environment fed by
//! successive source units.

use std::io::{self, Write};

use morty_eval::{Environment, Interpreter, Value};
use tracing::debug;

/// Result of running one source unit.
#[derive(Debug, PartialEq)]
pub enum SessionOutcome {
    /// The unit did not parse; nothing was evaluated.
    ParseErrors(Vec<String>),
    /// The unit was evaluated. `None` when it produced no value.
    Value(Option<Value>),
}

impl SessionOutcome {
    /// Parse failure or runtime error.
    pub fn is_failure(&self) -> bool {
        match self {
            SessionOutcome::ParseErrors(_) => true,
            SessionOutcome::Value(value) => value.as_ref().is_some_and(Value::is_error),
        }
    }

    /// Write the outcome the way the REPL shows it.
    ///
    /// Parse errors go under a `  parsing errors:` header, one tab-indented
    /// message per line. Values are written with `inspect`. No value writes
    /// nothing.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            SessionOutcome::ParseErrors(messages) => {
                writeln!(out, "  parsing errors:")?;
                for message in messages {
                    writeln!(out, "\t{message}")?;
                }
            }
            SessionOutcome::Value(Some(value)) => writeln!(out, "{}", value.inspect())?,
            SessionOutcome::Value(None) => {}
        }
        Ok(())
    }
}

/// Owns the global environment shared by every unit run through it.
pub struct Session {
    env: Environment,
    interpreter: Interpreter,
}

impl Session {
    /// Session printing `puts` output to stdout.
    pub fn new() -> Self {
        Self::with_interpreter(Interpreter::new())
    }

    pub fn with_interpreter(interpreter: Interpreter) -> Self {
        Session {
            env: Environment::new(),
            interpreter,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Lex, parse, and (if parsing succeeded) evaluate `source`.
    ///
    /// Bindings made before a runtime error stay in the environment.
    pub fn run(&self, source: &str) -> SessionOutcome {
        let tokens = morty_lexer::lex(source);
        let output = morty_parse::parse(&tokens);
        if output.has_errors() {
            debug!(errors = output.errors.len(), "skipping evaluation");
            return SessionOutcome::ParseErrors(output.error_messages());
        }
        SessionOutcome::Value(self.interpreter.eval_program(&output.program, &self.env))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
