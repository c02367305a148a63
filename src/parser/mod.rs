//! Parser module
//!
//! Parses S-expression tokens into a syntax tree.

mod ast;
mod sexpr_parser;

pub use ast::{Expression, Program};
pub use sexpr_parser::SExprParser;

use crate::error::Result;
use crate::lexer::SExprScanner;

/// Scans and parses `source` in one step
pub fn parse_source(source: &str) -> Result<Program> {
    let mut scanner = SExprScanner::new(source);
    let tokens = scanner.scan_tokens()?;
    SExprParser::new(tokens).parse()
}
