//! # Lispy - A Small Lisp Interpreter
//!
//! An expression-oriented Lisp with S-expression syntax, first-class errors,
//! curried closures and a compact builtin library.
//!
//! ## Quick Start
//!
//! ### Basic Usage
//!
//! Execute lispy code from a string:
//!
//! ```rust
//! use lispy::{Interpreter, Value};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let code = r#"
//!     (def {add} (fn {a b} {+ a b}))
//!     (add 20 22)
//! "#;
//!
//! let interp = Interpreter::new();
//! let results = interp.eval_source(code)?;
//!
//! assert_eq!(results.last(), Some(&Value::Number(42.0)));
//! # Ok(())
//! # }
//! ```
//!
//! ### Step by Step
//!
//! The scanner, parser and reader can be driven separately:
//!
//! ```rust
//! use lispy::runtime::read_expression;
//! use lispy::{Interpreter, Parser, Scanner, Value};
//!
//! # fn main() -> lispy::Result<()> {
//! let mut scanner = Scanner::new("(head {1 2 3})");
//! let tokens = scanner.scan_tokens()?;
//! let mut parser = Parser::new(tokens);
//! let program = parser.parse()?;
//!
//! let interp = Interpreter::new();
//! let result = interp.eval(read_expression(&program.expressions[0]));
//!
//! assert_eq!(result, Value::LiteralList(vec![Value::Number(1.0)]));
//! # Ok(())
//! # }
//! ```
//!
//! ## Language Overview
//!
//! ### Data Types
//!
//! - **Atoms**: numbers (`f64`), symbols, strings `"text"`
//! - **Evaluable lists**: `(+ 1 2)` evaluate every cell, then apply the first
//! - **Literal lists**: `{1 2 3}` are inert data
//! - **Functions**: builtins and closures created with `fn`
//! - **Errors**: ordinary values that propagate outward
//!
//! ### Functions
//!
//! Closures curry: applying one to fewer arguments than it has formals
//! returns a closure waiting for the rest. A formal list may end in
//! `& rest` to collect remaining arguments.
//!
//! ```rust
//! # use lispy::{Interpreter, Value};
//! let interp = Interpreter::new();
//! let results = interp
//!     .eval_source(r#"
//!         (def {add3} (fn {a b c} {+ a b c}))
//!         (def {add1} (add3 0 1))
//!         (add1 41)
//!         ((fn {x & xs} {xs}) 1 2 3)
//!     "#)
//!     .unwrap();
//!
//! assert_eq!(results[2], Value::Number(42.0));
//! assert_eq!(results[3].to_string(), "{2 3}");
//! ```
//!
//! ### Builtins
//!
//! - **Lists**: `head`, `tail`, `list`, `eval`, `join`
//! - **Arithmetic**: `+`, `-`, `*`, `/`
//! - **Comparison**: `<`, `>`, `<=`, `>=`, `==` (result is `1` or `0`)
//! - **Control**: `if`, `fn`
//! - **Bindings**: `def` (global), `=` (current scope)
//! - **I/O**: `print`, `load`
//!
//! ## Error Handling
//!
//! Failures inside the language are values, not Rust errors:
//!
//! ```rust
//! # use lispy::{Interpreter, Value};
//! let interp = Interpreter::new();
//! let results = interp.eval_source("(/ 10 0)").unwrap();
//! assert_eq!(results[0], Value::Error("Cannot divide by 0".to_string()));
//! ```
//!
//! Only malformed source text is reported as [`Error`]:
//!
//! ```rust
//! # use lispy::{Error, Interpreter};
//! let interp = Interpreter::new();
//! assert_eq!(interp.eval_source("(+ 1 2"), Err(Error::UnexpectedEof));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Scanner → Tokens → Parser → Program → Reader → Value → Evaluator
//! ```
//!
//! - [`Scanner`] - Tokenizes source code
//! - [`Parser`] - Builds the syntax tree
//! - [`runtime::read_program`] - Turns syntax into runtime values
//! - [`Interpreter`] - Owns the global environment and evaluates
//! - [`BuiltinRegistry`] - The primitive library

/// Version of the lispy interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod builtins;
pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod runtime;

// Re-export main types
pub use builtins::{Builtin, BuiltinRef, BuiltinRegistry};
pub use error::{Error, Result};
pub use lexer::{SExprScanner, Token, TokenKind};
pub use parser::{Expression, Program, SExprParser};
pub use runtime::{Closure, EnvRef, Environment, Function, Interpreter, Value};

/// Type alias for the S-expression scanner (lexer).
/// Converts raw source text into tokens for the parser.
pub type Scanner = SExprScanner;

/// Type alias for the S-expression parser.
/// Converts tokens into a syntax tree.
pub type Parser = SExprParser;
