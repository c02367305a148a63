use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::runtime::Value;

/// Shared handle to an environment
///
/// The root environment lives for the whole session; child environments are
/// created per closure call and reference their parent through this handle.
pub type EnvRef = Rc<RefCell<Environment>>;

/// Ordered symbol bindings with an optional parent scope
///
/// Symbols are unique within one environment. Values go in and come out by
/// copy, so nothing outside can alias a stored binding.
#[derive(Clone, Default)]
pub struct Environment {
    /// Enclosing scope (None for the root)
    parent: Option<EnvRef>,
    /// Bound names, parallel to `values`
    symbols: Vec<String>,
    /// Bound values, parallel to `symbols`
    values: Vec<Value>,
}

impl Environment {
    /// Creates an empty environment with no parent
    pub fn new() -> Self {
        Environment::default()
    }

    /// Creates an empty environment chained to `parent`
    pub fn with_parent(parent: EnvRef) -> Self {
        Environment {
            parent: Some(parent),
            ..Environment::default()
        }
    }

    /// Moves the environment behind a shared handle
    pub fn into_ref(self) -> EnvRef {
        Rc::new(RefCell::new(self))
    }

    /// Returns the parent scope
    pub fn parent(&self) -> Option<&EnvRef> {
        self.parent.as_ref()
    }

    /// Replaces the parent scope
    pub fn set_parent(&mut self, parent: Option<EnvRef>) {
        self.parent = parent;
    }

    /// Looks `name` up here, then along the parent chain
    ///
    /// Returns a copy of the bound value.
    pub fn get(&self, name: &str) -> Result<Value> {
        if let Some(idx) = self.position(name) {
            return Ok(self.values[idx].clone());
        }

        match &self.parent {
            Some(parent) => parent.borrow().get(name),
            None => Err(Error::UnboundSymbol {
                name: name.to_string(),
            }),
        }
    }

    /// Binds `name` in this environment only
    ///
    /// Overwrites an existing local binding in place, otherwise appends.
    /// Ancestors are never touched.
    pub fn put(&mut self, name: &str, value: Value) {
        match self.position(name) {
            Some(idx) => self.values[idx] = value,
            None => {
                self.symbols.push(name.to_string());
                self.values.push(value);
            }
        }
    }

    /// Binds `name` in the root of the chain that `env` belongs to
    pub fn define(env: &EnvRef, name: &str, value: Value) {
        Environment::root(env).borrow_mut().put(name, value);
    }

    /// Walks the parent chain up to the topmost environment
    pub fn root(env: &EnvRef) -> EnvRef {
        let mut current = Rc::clone(env);
        loop {
            let parent = current.borrow().parent.clone();
            match parent {
                Some(parent) => current = parent,
                None => return current,
            }
        }
    }

    /// Copies the bindings, sharing the same parent
    pub fn copy(&self) -> Environment {
        self.clone()
    }

    /// Returns true if `name` is bound in this environment (not ancestors)
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Bound names in insertion order
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Number of local bindings
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true when nothing is bound locally
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.symbols.iter().position(|s| s == name)
    }
}

// The parent chain is summarised rather than printed: the root holds every
// builtin and global definition.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Environment")
            .field("symbols", &self.symbols)
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}
