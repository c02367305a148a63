use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete parsed input: every top-level form in source order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    /// Top-level forms
    pub expressions: Vec<Expression>,
}

/// A single syntax-tree node
///
/// Exactly one payload is present per node, so the transducer in
/// `runtime::reader` can match exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Numeric literal: `42`, `-1.5`
    Number(f64),
    /// Symbol: `head`, `+`, `&`
    Symbol(String),
    /// String literal, quotes removed and contents kept verbatim
    String(String),
    /// Parenthesized list: `(f x y)`
    SExpr(Vec<Expression>),
    /// Braced list: `{1 2 3}`
    QExpr(Vec<Expression>),
}

impl Expression {
    /// Short name of the node kind, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Number(_) => "number",
            Expression::Symbol(_) => "symbol",
            Expression::String(_) => "string",
            Expression::SExpr(_) => "s-expression",
            Expression::QExpr(_) => "q-expression",
        }
    }
}

fn write_children(f: &mut fmt::Formatter, children: &[Expression]) -> fmt::Result {
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", child)?;
    }
    Ok(())
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Symbol(s) => write!(f, "{}", s),
            Expression::String(s) => write!(f, "\"{}\"", s),
            Expression::SExpr(children) => {
                write!(f, "(")?;
                write_children(f, children)?;
                write!(f, ")")
            }
            Expression::QExpr(children) => {
                write!(f, "{{")?;
                write_children(f, children)?;
                write!(f, "}}")
            }
        }
    }
}
