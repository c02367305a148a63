//! Error types for the lispy interpreter

use thiserror::Error;

/// Interpreter errors
///
/// Scan and parse failures, configuration problems and REPL I/O are reported
/// to the host as `Err(Error)`. Every other variant describes a failure inside
/// the language; those are converted into [`Value::Error`] at the apply
/// boundary so they flow through programs as ordinary data.
///
/// [`Value::Error`]: crate::runtime::Value::Error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Parse errors
    /// Syntax error encountered during parsing
    ///
    /// **Triggered by:** a closing delimiter with nothing to close
    /// **Example:** `(+ 1 2))`
    #[error("Syntax error at line {line}, column {col}: {message}")]
    SyntaxError {
        /// Line number where error occurred
        line: usize,
        /// Column number where error occurred
        col: usize,
        /// Error description
        message: String,
    },

    /// General parse error (bad characters, unterminated strings)
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Input ended inside an open list
    #[error("Unexpected end of file")]
    UnexpectedEof,

    /// Unexpected token encountered during parsing
    #[error("Unexpected token: expected {expected}, got {got}")]
    UnexpectedToken {
        /// Expected token description
        expected: String,
        /// Actual token received
        got: String,
    },

    // Runtime errors
    /// Symbol not bound anywhere in the environment chain
    ///
    /// The message deliberately leaves out the name; programs compare error
    /// values by their text.
    #[error("Unbound Symbol")]
    UnboundSymbol {
        /// Symbol that was looked up
        name: String,
    },

    /// Builtin called with the wrong number of arguments
    #[error("Function '{function}' passed {got} arguments, expected {expected}")]
    ArityMismatch {
        /// Builtin name
        function: String,
        /// Expected count description (e.g. `1`, `at least 2`)
        expected: String,
        /// Actual argument count
        got: usize,
    },

    /// Builtin argument of the wrong variant
    ///
    /// **Example:** `(head 1)`, `(+ 1 {2})`
    #[error("Function '{function}' passed incorrect type for argument {index}: got {got}, expected {expected}")]
    TypeMismatch {
        /// Builtin name
        function: String,
        /// Zero-based argument position
        index: usize,
        /// Expected type name
        expected: String,
        /// Actual type name
        got: String,
    },

    /// List builtin given `{}`
    #[error("Function '{function}' passed {{}}")]
    EmptyList {
        /// Builtin name
        function: String,
    },

    /// Division by exactly zero
    #[error("Cannot divide by 0")]
    DivisionByZero,

    /// `def`, `=` or `fn` given something other than a symbol to bind
    #[error("Function '{function}' cannot bind non-symbol: got {got}")]
    NonSymbol {
        /// Builtin name
        function: String,
        /// Type of the offending element
        got: String,
    },

    /// `def`/`=` symbol list and value list differ in length
    #[error("Function '{function}' passed {symbols} symbols but {values} values")]
    DefinitionLengthMismatch {
        /// Builtin name
        function: String,
        /// Number of symbols
        symbols: usize,
        /// Number of values
        values: usize,
    },

    /// Head of an evaluable list is not a function
    #[error("First Element is not a function")]
    NotAFunction,

    /// Closure applied to more arguments than it has formals
    #[error("Function passed too many arguments")]
    TooManyArguments,

    /// `&` in a formal list not followed by exactly one symbol
    #[error("Symbol & not followed by a single symbol.")]
    MalformedRestMarker,

    /// `load` could not read or parse its file
    #[error("Could not load {path}: {message}")]
    LoadFailed {
        /// Path given to `load`
        path: String,
        /// Host I/O or parse message
        message: String,
    },

    // Host errors
    /// Invalid command line
    #[error("Usage error: {0}")]
    Usage(String),

    /// Terminal or file I/O failure outside the language
    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    /// Arity error for builtin `function`
    pub fn arity(function: &str, expected: impl Into<String>, got: usize) -> Self {
        Error::ArityMismatch {
            function: function.to_string(),
            expected: expected.into(),
            got,
        }
    }

    /// Type error for argument `index` of builtin `function`
    pub fn type_mismatch(function: &str, index: usize, expected: &str, got: &str) -> Self {
        Error::TypeMismatch {
            function: function.to_string(),
            index,
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Result type for lispy operations
pub type Result<T> = std::result::Result<T, Error>;
