use crate::builtins::{io, BuiltinRegistry};
use crate::error::Result;
use crate::parser::{parse_source, Program};
use crate::runtime::{eval, read_expression, EnvRef, Environment, Value};

/// An interpreter session
///
/// Owns the root environment. Every evaluation entry point runs against it,
/// so definitions made by one call are visible to the next.
pub struct Interpreter {
    root: EnvRef,
}

impl Interpreter {
    /// Creates a session with the standard builtin library
    pub fn new() -> Self {
        Interpreter::with_registry(&BuiltinRegistry::new())
    }

    /// Creates a session whose root holds exactly the builtins of `registry`
    pub fn with_registry(registry: &BuiltinRegistry) -> Self {
        let mut root = Environment::new();
        registry.install(&mut root);
        Interpreter {
            root: root.into_ref(),
        }
    }

    /// Root environment handle
    pub fn root(&self) -> &EnvRef {
        &self.root
    }

    /// Looks up a global binding, as an error value when unbound
    pub fn lookup(&self, name: &str) -> Value {
        self.root.borrow().get(name).unwrap_or_else(Value::from)
    }

    /// Evaluates a value against the root environment
    pub fn eval(&self, value: Value) -> Value {
        eval(&self.root, value)
    }

    /// Evaluates each top-level form in order and returns every result
    pub fn eval_program(&self, program: &Program) -> Vec<Value> {
        program
            .expressions
            .iter()
            .map(|expression| self.eval(read_expression(expression)))
            .collect()
    }

    /// Parses and evaluates source text
    ///
    /// Nothing is evaluated when the text fails to parse.
    pub fn eval_source(&self, source: &str) -> Result<Vec<Value>> {
        let program = parse_source(source)?;
        Ok(self.eval_program(&program))
    }

    /// Loads a file into the session, as `load` does
    pub fn load_file(&self, path: &str) -> Value {
        io::load_file(&self.root, path).unwrap_or_else(Value::from)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
