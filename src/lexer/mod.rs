//! Lexical analysis
//!
//! Converts source text into a stream of tokens for the S-expression parser.

mod sexpr_scanner;
mod token;

pub use sexpr_scanner::SExprScanner;
pub use token::{Token, TokenKind};
