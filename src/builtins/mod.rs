//! Builtin system for lispy
//!
//! Provides the `Builtin` trait, the registry the root environment is
//! populated from, and the primitive library.

pub mod comparison;
pub mod control;
pub mod io;
pub mod lists;
pub mod math;
pub mod variables;

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::runtime::{EnvRef, Environment, Value};

/// Builtin trait - every primitive operation implements this
pub trait Builtin {
    /// Name the builtin is bound to in the root environment
    fn name(&self) -> &str;

    /// Builtin description
    fn description(&self) -> &str;

    /// Execute the builtin against the caller's environment
    ///
    /// Arguments arrive already evaluated. An `Err` becomes an error value
    /// at the call site.
    fn execute(&self, env: &EnvRef, args: Vec<Value>) -> Result<Value>;
}

/// Shared handle to a builtin
///
/// Two handles are equal only when they point at the same registration.
#[derive(Clone)]
pub struct BuiltinRef(Rc<dyn Builtin>);

impl BuiltinRef {
    /// Wraps a builtin in a new handle
    pub fn new<B: Builtin + 'static>(builtin: B) -> Self {
        BuiltinRef(Rc::new(builtin))
    }

    /// Name of the wrapped builtin
    pub fn name(&self) -> &str {
        self.0.name()
    }

    /// Description of the wrapped builtin
    pub fn description(&self) -> &str {
        self.0.description()
    }

    /// Runs the builtin, turning a failure into an error value
    pub fn call(&self, env: &EnvRef, args: Vec<Value>) -> Value {
        self.0.execute(env, args).unwrap_or_else(Value::from)
    }
}

impl PartialEq for BuiltinRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for BuiltinRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Builtin({})", self.name())
    }
}

/// Builtin registry
pub struct BuiltinRegistry {
    builtins: HashMap<String, BuiltinRef>,
}

impl BuiltinRegistry {
    /// Create new registry with the full primitive library
    pub fn new() -> Self {
        let mut registry = BuiltinRegistry::empty();

        lists::register(&mut registry);
        control::register(&mut registry);
        variables::register(&mut registry);
        math::register(&mut registry);
        comparison::register(&mut registry);
        io::register(&mut registry);

        registry
    }

    /// Create empty registry (for testing and embedding)
    pub fn empty() -> Self {
        BuiltinRegistry {
            builtins: HashMap::new(),
        }
    }

    /// Register a builtin, replacing any previous one with the same name
    pub fn register<B: Builtin + 'static>(&mut self, builtin: B) {
        let name = builtin.name().to_string();
        self.builtins.insert(name, BuiltinRef::new(builtin));
    }

    /// Get builtin by name
    pub fn get(&self, name: &str) -> Result<BuiltinRef> {
        self.builtins
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnboundSymbol {
                name: name.to_string(),
            })
    }

    /// Check if builtin exists
    pub fn has(&self, name: &str) -> bool {
        self.builtins.contains_key(name)
    }

    /// List all builtin names, sorted
    pub fn list_builtins(&self) -> Vec<String> {
        let mut names: Vec<_> = self.builtins.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get builtin count
    pub fn count(&self) -> usize {
        self.builtins.len()
    }

    /// Binds every builtin into `env` under its name
    ///
    /// Handles are shared with the registry, so each installed value is
    /// `==` to the one in any other environment installed from it.
    pub fn install(&self, env: &mut Environment) {
        for name in self.list_builtins() {
            if let Some(builtin) = self.builtins.get(&name) {
                env.put(&name, Value::builtin(builtin.clone()));
            }
        }
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Argument validation shared by the primitive library

/// Takes exactly `N` arguments
pub(crate) fn expect_args<const N: usize>(function: &str, args: Vec<Value>) -> Result<[Value; N]> {
    <[Value; N]>::try_from(args).map_err(|args| Error::arity(function, N.to_string(), args.len()))
}

/// Splits off the first argument, failing when there is none
pub(crate) fn split_first_arg(function: &str, args: Vec<Value>) -> Result<(Value, Vec<Value>)> {
    let mut args = args.into_iter();
    match args.next() {
        Some(first) => Ok((first, args.collect())),
        None => Err(Error::arity(function, "at least 1", 0)),
    }
}

/// Fails unless at least `count` arguments were passed
pub(crate) fn expect_min_args(function: &str, args: &[Value], count: usize) -> Result<()> {
    if args.len() < count {
        return Err(Error::arity(
            function,
            format!("at least {}", count),
            args.len(),
        ));
    }
    Ok(())
}

/// Extracts the number at argument `index`
pub(crate) fn expect_number(function: &str, index: usize, value: &Value) -> Result<f64> {
    value
        .as_number()
        .ok_or_else(|| Error::type_mismatch(function, index, "number", value.type_name()))
}

/// Takes the cells of the literal list at argument `index`
pub(crate) fn expect_literal_list(function: &str, index: usize, value: Value) -> Result<Vec<Value>> {
    match value {
        Value::LiteralList(cells) => Ok(cells),
        other => Err(Error::type_mismatch(
            function,
            index,
            "literal-list",
            other.type_name(),
        )),
    }
}

/// Collects symbol names, failing on the first non-symbol cell
pub(crate) fn symbol_names(function: &str, cells: &[Value]) -> Result<Vec<String>> {
    cells
        .iter()
        .map(|cell| {
            cell.as_symbol()
                .map(str::to_string)
                .ok_or_else(|| Error::NonSymbol {
                    function: function.to_string(),
                    got: cell.type_name().to_string(),
                })
        })
        .collect()
}
