use serde::{Deserialize, Serialize};
use std::fmt;

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
    /// Line number where token appears (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: String, line: usize, column: usize) -> Self {
        Token {
            kind,
            lexeme,
            line,
            column,
        }
    }
}

/// All possible token types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Opening parenthesis `(`
    LeftParen,
    /// Closing parenthesis `)`
    RightParen,
    /// Opening brace `{`
    LeftBrace,
    /// Closing brace `}`
    RightBrace,

    /// Numeric literal (always 64-bit float)
    Number(f64),
    /// Symbol such as `head`, `+` or `&`
    Symbol(String),
    /// String literal, contents taken verbatim
    String(String),

    /// End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::LeftParen => write!(f, "`(`"),
            TokenKind::RightParen => write!(f, "`)`"),
            TokenKind::LeftBrace => write!(f, "`{{`"),
            TokenKind::RightBrace => write!(f, "`}}`"),
            TokenKind::Number(n) => write!(f, "number {}", n),
            TokenKind::Symbol(s) => write!(f, "symbol `{}`", s),
            TokenKind::String(s) => write!(f, "string \"{}\"", s),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}
