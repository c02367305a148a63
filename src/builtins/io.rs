//! I/O builtins: `print` and `load`

use std::fs;

use super::{expect_args, Builtin, BuiltinRegistry};
use crate::error::{Error, Result};
use crate::parser::parse_source;
use crate::runtime::{eval, read_expression, EnvRef, Value};

/// Register I/O builtins
pub fn register(registry: &mut BuiltinRegistry) {
    registry.register(Print);
    registry.register(Load);
}

/// Renders values the way `print` writes them: space-separated
pub fn render(values: &[Value]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reads, parses and evaluates every top-level form of `path` in `env`
///
/// A form that evaluates to an error is printed and the next form runs.
/// Read and parse failures abort before anything is evaluated.
pub fn load_file(env: &EnvRef, path: &str) -> Result<Value> {
    let load_failed = |message: String| Error::LoadFailed {
        path: path.to_string(),
        message,
    };

    let source = fs::read_to_string(path).map_err(|e| load_failed(e.to_string()))?;
    let program = parse_source(&source).map_err(|e| load_failed(e.to_string()))?;

    tracing::debug!(path, forms = program.expressions.len(), "loading file");

    for expression in &program.expressions {
        let result = eval(env, read_expression(expression));
        if result.is_error() {
            tracing::warn!(path, error = %result, "form failed during load");
            println!("{}", result);
        }
    }

    Ok(Value::empty())
}

/// Print values to stdout
///
/// Usage: `(print "x is" x)` writes `"x is" 3` and a newline
pub struct Print;

impl Builtin for Print {
    fn name(&self) -> &str {
        "print"
    }

    fn description(&self) -> &str {
        "Print values separated by spaces, followed by a newline"
    }

    fn execute(&self, _env: &EnvRef, args: Vec<Value>) -> Result<Value> {
        println!("{}", render(&args));
        Ok(Value::empty())
    }
}

/// Evaluate a source file in the caller's environment
///
/// Usage: `(load "prelude.lspy")`
pub struct Load;

impl Builtin for Load {
    fn name(&self) -> &str {
        "load"
    }

    fn description(&self) -> &str {
        "Evaluate every form of a source file"
    }

    fn execute(&self, env: &EnvRef, args: Vec<Value>) -> Result<Value> {
        let [path] = expect_args(self.name(), args)?;

        match &path {
            Value::String(path) => load_file(env, path),
            other => Err(Error::type_mismatch(
                self.name(),
                0,
                "string",
                other.type_name(),
            )),
        }
    }
}
