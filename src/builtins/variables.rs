//! Binding builtins: `def` (global) and `=` (local)

use super::{expect_literal_list, split_first_arg, symbol_names, Builtin, BuiltinRegistry};
use crate::error::{Error, Result};
use crate::runtime::{EnvRef, Environment, Value};

/// Register binding builtins
pub fn register(registry: &mut BuiltinRegistry) {
    registry.register(Binding::new(Scope::Global));
    registry.register(Binding::new(Scope::Local));
}

/// Where a binding lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Root of the caller's environment chain (`def`)
    Global,
    /// Caller's innermost environment (`=`)
    Local,
}

/// Binds a literal list of symbols to the remaining arguments
///
/// Usage: `(def {x y} 1 2)`, `(= {tmp} 3)`
pub struct Binding {
    scope: Scope,
}

impl Binding {
    /// Creates the builtin for `scope`
    pub fn new(scope: Scope) -> Self {
        Binding { scope }
    }
}

impl Builtin for Binding {
    fn name(&self) -> &str {
        match self.scope {
            Scope::Global => "def",
            Scope::Local => "=",
        }
    }

    fn description(&self) -> &str {
        match self.scope {
            Scope::Global => "Bind symbols in the global environment",
            Scope::Local => "Bind symbols in the current environment",
        }
    }

    fn execute(&self, env: &EnvRef, args: Vec<Value>) -> Result<Value> {
        let (symbols, values) = split_first_arg(self.name(), args)?;
        let symbols = expect_literal_list(self.name(), 0, symbols)?;
        let names = symbol_names(self.name(), &symbols)?;

        if names.len() != values.len() {
            return Err(Error::DefinitionLengthMismatch {
                function: self.name().to_string(),
                symbols: names.len(),
                values: values.len(),
            });
        }

        for (name, value) in names.iter().zip(values) {
            match self.scope {
                Scope::Global => {
                    tracing::debug!(symbol = %name, "defining global");
                    Environment::define(env, name, value);
                }
                Scope::Local => env.borrow_mut().put(name, value),
            }
        }

        Ok(Value::empty())
    }
}
