use std::fmt;

use crate::builtins::BuiltinRef;
use crate::error::Error;
use crate::runtime::Environment;

/// Runtime value representation
///
/// `Clone` is a deep copy: list cells, closure formals, bodies and captured
/// bindings are all duplicated. Only builtins are shared, since their
/// identity is what makes two builtins equal.
#[derive(Debug, Clone)]
pub enum Value {
    /// 64-bit floating-point number
    Number(f64),
    /// Identifier resolved against an environment when evaluated
    Symbol(String),
    /// Literal text
    String(String),
    /// First-class error datum
    Error(String),
    /// Parenthesized form: evaluating it applies the first cell to the rest
    EvalList(Vec<Value>),
    /// Braced form: inert data, never evaluated implicitly
    LiteralList(Vec<Value>),
    /// Builtin primitive or user closure
    Function(Function),
}

/// Callable value
#[derive(Debug, Clone)]
pub enum Function {
    /// Primitive operation, compared by identity
    Builtin(BuiltinRef),
    /// User-defined function created by `fn`
    Closure(Closure),
}

/// User-defined function
///
/// `env` starts empty with no parent. Partial application stores the bound
/// formals there; full application parents it to the caller's environment.
#[derive(Debug, Clone)]
pub struct Closure {
    /// Formal parameters still waiting for arguments
    pub formals: Vec<String>,
    /// Body cells, evaluated as one evaluable list
    pub body: Vec<Value>,
    /// Arguments bound so far
    pub env: Environment,
}

impl Closure {
    /// Creates a closure with a fresh, empty environment
    pub fn new(formals: Vec<String>, body: Vec<Value>) -> Self {
        Closure {
            formals,
            body,
            env: Environment::new(),
        }
    }
}

impl Value {
    /// Creates a number value
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// Creates a symbol value
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Creates a string value
    pub fn string(text: impl Into<String>) -> Self {
        Value::String(text.into())
    }

    /// Creates an error value
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    /// Creates an evaluable list from its cells
    pub fn eval_list(cells: Vec<Value>) -> Self {
        Value::EvalList(cells)
    }

    /// Creates a literal list from its cells
    pub fn literal_list(cells: Vec<Value>) -> Self {
        Value::LiteralList(cells)
    }

    /// The empty form `()`, returned by side-effecting builtins
    pub fn empty() -> Self {
        Value::EvalList(Vec::new())
    }

    /// Creates a closure value
    pub fn lambda(formals: Vec<String>, body: Vec<Value>) -> Self {
        Value::Function(Function::Closure(Closure::new(formals, body)))
    }

    /// Wraps a builtin
    pub fn builtin(builtin: BuiltinRef) -> Self {
        Value::Function(Function::Builtin(builtin))
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Symbol(_) => "symbol",
            Value::String(_) => "string",
            Value::Error(_) => "error",
            Value::EvalList(_) => "eval-list",
            Value::LiteralList(_) => "literal-list",
            Value::Function(_) => "function",
        }
    }

    /// Returns true for `Value::Error`
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Returns the number payload, if any
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the symbol name, if any
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Error> for Value {
    fn from(err: Error) -> Self {
        Value::Error(err.to_string())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Function::Builtin(a), Function::Builtin(b)) => a == b,
            // Captured bindings take no part in closure equality
            (Function::Closure(a), Function::Closure(b)) => {
                a.formals == b.formals && a.body == b.body
            }
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::EvalList(a), Value::EvalList(b)) => a == b,
            (Value::LiteralList(a), Value::LiteralList(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            _ => false,
        }
    }
}

fn write_cells(f: &mut fmt::Formatter, open: &str, cells: &[Value], close: &str) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", cell)?;
    }
    write!(f, "{}", close)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Error(e) => write!(f, "{}", e),
            Value::EvalList(cells) => write_cells(f, "(", cells, ")"),
            Value::LiteralList(cells) => write_cells(f, "{", cells, "}"),
            Value::Function(function) => write!(f, "{}", function),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Function::Builtin(_) => write!(f, "builtin"),
            Function::Closure(closure) => {
                write!(f, "(\\ {{")?;
                for (i, formal) in closure.formals.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", formal)?;
                }
                write!(f, "}} ")?;
                write_cells(f, "{", &closure.body, "}")?;
                write!(f, ")")
            }
        }
    }
}
