//! Function application.

use tracing::trace;

use super::Interpreter;
use crate::errors::{not_a_function, wrong_arity};
use crate::value::NULL;
use crate::{Environment, Value};

impl Interpreter {
    /// Apply an evaluated callee to evaluated arguments.
    ///
    /// User functions run in a fresh frame whose parent is the environment
    /// they were defined in (not the caller's), with parameters bound by
    /// position. A `return` inside the body stops at this boundary.
    #[tracing::instrument(level = "debug", skip_all, fields(callee = function.type_name(), argc = args.len()))]
    pub(crate) fn apply_function(&self, function: &Value, args: &[Value]) -> Value {
        match function {
            Value::Function(func) => {
                let params = func.parameters();
                if params.len() != args.len() {
                    return wrong_arity(params.len(), args.len());
                }

                let frame = Environment::enclosed(func.env());
                for (param, arg) in params.iter().zip(args) {
                    frame.set(param.name.as_str(), arg.clone());
                }
                trace!(name = func.name().unwrap_or("<anonymous>"), "entering function body");

                self.eval_block(func.body(), &frame)
                    .unwrap_or(NULL)
                    .unwrap_return()
            }
            Value::Builtin(builtin) => builtin.call(args, &self.print_handler),
            other => not_a_function(other),
        }
    }
}
