//! List builtins: `head`, `tail`, `list`, `eval`, `join`

use super::{expect_args, expect_literal_list, expect_min_args, Builtin, BuiltinRegistry};
use crate::error::{Error, Result};
use crate::runtime::{eval, EnvRef, Value};

/// Register list builtins
pub fn register(registry: &mut BuiltinRegistry) {
    registry.register(Head);
    registry.register(Tail);
    registry.register(List);
    registry.register(Eval);
    registry.register(Join);
}

fn single_list(function: &str, args: Vec<Value>) -> Result<Vec<Value>> {
    let [arg] = expect_args(function, args)?;
    expect_literal_list(function, 0, arg)
}

fn non_empty_list(function: &str, args: Vec<Value>) -> Result<Vec<Value>> {
    let cells = single_list(function, args)?;
    if cells.is_empty() {
        return Err(Error::EmptyList {
            function: function.to_string(),
        });
    }
    Ok(cells)
}

/// First element of a literal list, still wrapped in a list
///
/// Usage: `(head {1 2 3})` returns `{1}`
pub struct Head;

impl Builtin for Head {
    fn name(&self) -> &str {
        "head"
    }

    fn description(&self) -> &str {
        "List holding only the first element"
    }

    fn execute(&self, _env: &EnvRef, args: Vec<Value>) -> Result<Value> {
        let mut cells = non_empty_list(self.name(), args)?;
        cells.truncate(1);
        Ok(Value::LiteralList(cells))
    }
}

/// Literal list without its first element
///
/// Usage: `(tail {1 2 3})` returns `{2 3}`
pub struct Tail;

impl Builtin for Tail {
    fn name(&self) -> &str {
        "tail"
    }

    fn description(&self) -> &str {
        "List without its first element"
    }

    fn execute(&self, _env: &EnvRef, args: Vec<Value>) -> Result<Value> {
        let mut cells = non_empty_list(self.name(), args)?;
        cells.remove(0);
        Ok(Value::LiteralList(cells))
    }
}

/// Collects its arguments into a literal list
pub struct List;

impl Builtin for List {
    fn name(&self) -> &str {
        "list"
    }

    fn description(&self) -> &str {
        "Literal list of the arguments"
    }

    fn execute(&self, _env: &EnvRef, args: Vec<Value>) -> Result<Value> {
        Ok(Value::LiteralList(args))
    }
}

/// Evaluates a literal list as code in the caller's environment
///
/// Usage: `(eval {+ 1 2})` returns `3`
pub struct Eval;

impl Builtin for Eval {
    fn name(&self) -> &str {
        "eval"
    }

    fn description(&self) -> &str {
        "Evaluate a literal list as an expression"
    }

    fn execute(&self, env: &EnvRef, args: Vec<Value>) -> Result<Value> {
        let cells = single_list(self.name(), args)?;
        Ok(eval(env, Value::EvalList(cells)))
    }
}

/// Concatenates literal lists in argument order
pub struct Join;

impl Builtin for Join {
    fn name(&self) -> &str {
        "join"
    }

    fn description(&self) -> &str {
        "Concatenate literal lists"
    }

    fn execute(&self, _env: &EnvRef, args: Vec<Value>) -> Result<Value> {
        expect_min_args(self.name(), &args, 1)?;

        let mut joined = Vec::new();
        for (index, arg) in args.into_iter().enumerate() {
            joined.extend(expect_literal_list(self.name(), index, arg)?);
        }
        Ok(Value::LiteralList(joined))
    }
}
