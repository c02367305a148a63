//! Control builtins: `if` and `fn`

use super::{expect_args, expect_literal_list, expect_number, symbol_names, Builtin, BuiltinRegistry};
use crate::error::Result;
use crate::runtime::{eval, EnvRef, Value};

/// Register control builtins
pub fn register(registry: &mut BuiltinRegistry) {
    registry.register(If);
    registry.register(Lambda);
}

/// Conditional evaluation of one of two literal lists
///
/// Usage: `(if (> x 0) {print "positive"} {print "other"})`
///
/// Only a condition of exactly `1` selects the first branch.
pub struct If;

impl Builtin for If {
    fn name(&self) -> &str {
        "if"
    }

    fn description(&self) -> &str {
        "Evaluate the first branch when the condition is 1, else the second"
    }

    fn execute(&self, env: &EnvRef, args: Vec<Value>) -> Result<Value> {
        let [cond, then, otherwise] = expect_args(self.name(), args)?;

        let cond = expect_number(self.name(), 0, &cond)?;
        let then = expect_literal_list(self.name(), 1, then)?;
        let otherwise = expect_literal_list(self.name(), 2, otherwise)?;

        let branch = if cond == 1.0 { then } else { otherwise };
        Ok(eval(env, Value::EvalList(branch)))
    }
}

/// Closure constructor
///
/// Usage: `(fn {x & rest} {join {x} rest})`
pub struct Lambda;

impl Builtin for Lambda {
    fn name(&self) -> &str {
        "fn"
    }

    fn description(&self) -> &str {
        "Create a function from a formal list and a body"
    }

    fn execute(&self, _env: &EnvRef, args: Vec<Value>) -> Result<Value> {
        let [formals, body] = expect_args(self.name(), args)?;

        let formals = expect_literal_list(self.name(), 0, formals)?;
        let body = expect_literal_list(self.name(), 1, body)?;
        let formals = symbol_names(self.name(), &formals)?;

        Ok(Value::lambda(formals, body))
    }
}
