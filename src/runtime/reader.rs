//! Syntax tree to runtime value transduction

use crate::parser::{Expression, Program};
use crate::runtime::Value;

/// Reads a whole program as one evaluable list of its top-level forms
pub fn read_program(program: &Program) -> Value {
    Value::EvalList(program.expressions.iter().map(read_expression).collect())
}

/// Reads a single syntax node
pub fn read_expression(expression: &Expression) -> Value {
    match expression {
        Expression::Number(n) => Value::Number(*n),
        Expression::Symbol(name) => Value::Symbol(name.clone()),
        Expression::String(text) => Value::String(text.clone()),
        Expression::SExpr(children) => Value::EvalList(children.iter().map(read_expression).collect()),
        Expression::QExpr(children) => {
            Value::LiteralList(children.iter().map(read_expression).collect())
        }
    }
}

impl From<&Expression> for Value {
    fn from(expression: &Expression) -> Self {
        read_expression(expression)
    }
}
