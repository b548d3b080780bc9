//! Built-in function registry.
//!
//! The registry is built on first use and read-only afterwards. Names are
//! resolved here only after every environment frame has missed, so a user
//! binding named `len` hides the built-in.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::errors::{builtin_arg_count, builtin_unsupported_argument};
use crate::print_handler::PrintHandlerImpl;
use crate::value::{Builtin, NULL};
use crate::Value;

static REGISTRY: OnceLock<FxHashMap<&'static str, Builtin>> = OnceLock::new();

fn registry() -> &'static FxHashMap<&'static str, Builtin> {
    REGISTRY.get_or_init(|| {
        [Builtin::new("len", len), Builtin::new("puts", puts)]
            .into_iter()
            .map(|builtin| (builtin.name, builtin))
            .collect()
    })
}

/// Find a built-in by name.
pub fn lookup(name: &str) -> Option<Builtin> {
    registry().get(name).copied()
}

/// Names of all built-ins, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = registry().keys().copied().collect();
    names.sort_unstable();
    names
}

/// `len(x)`: byte length of a string, element count of an array.
fn len(args: &[Value], _print: &PrintHandlerImpl) -> Value {
    let [arg] = args else {
        return builtin_arg_count(args.len(), 1);
    };
    let count = match arg {
        Value::Str(s) => s.len(),
        Value::Array(items) => items.len(),
        other => return builtin_unsupported_argument("len", other),
    };
    Value::Int(i64::try_from(count).unwrap_or(i64::MAX))
}

/// `puts(a, b, ...)`: print each argument on its own line.
fn puts(args: &[Value], print: &PrintHandlerImpl) -> Value {
    for arg in args {
        print.println(&arg.inspect());
    }
    NULL
}

#[cfg(test)]
mod tests;
