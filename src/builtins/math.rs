//! Arithmetic builtins

use super::{expect_number, Builtin, BuiltinRegistry};
use crate::error::{Error, Result};
use crate::runtime::{EnvRef, Value};

/// Register arithmetic builtins
pub fn register(registry: &mut BuiltinRegistry) {
    registry.register(Arithmetic::new(ArithOp::Add));
    registry.register(Arithmetic::new(ArithOp::Sub));
    registry.register(Arithmetic::new(ArithOp::Mul));
    registry.register(Arithmetic::new(ArithOp::Div));
}

/// Arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl ArithOp {
    /// Symbol the operator is bound to
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }

    fn apply(self, acc: f64, rhs: f64) -> Result<f64> {
        Ok(match self {
            ArithOp::Add => acc + rhs,
            ArithOp::Sub => acc - rhs,
            ArithOp::Mul => acc * rhs,
            ArithOp::Div => {
                if rhs == 0.0 {
                    return Err(Error::DivisionByZero);
                }
                acc / rhs
            }
        })
    }
}

/// Left fold of one operator over numeric arguments
///
/// Usage: `(- 10 3 2)` returns `5`, `(- 4)` returns `-4`
pub struct Arithmetic {
    op: ArithOp,
}

impl Arithmetic {
    /// Creates the builtin for `op`
    pub fn new(op: ArithOp) -> Self {
        Arithmetic { op }
    }
}

impl Builtin for Arithmetic {
    fn name(&self) -> &str {
        self.op.symbol()
    }

    fn description(&self) -> &str {
        match self.op {
            ArithOp::Add => "Sum of the arguments",
            ArithOp::Sub => "Difference of the arguments, or negation of one",
            ArithOp::Mul => "Product of the arguments",
            ArithOp::Div => "Quotient of the arguments",
        }
    }

    fn execute(&self, _env: &EnvRef, args: Vec<Value>) -> Result<Value> {
        // Every operand is checked before any arithmetic happens
        let operands = args
            .iter()
            .enumerate()
            .map(|(index, arg)| expect_number(self.name(), index, arg))
            .collect::<Result<Vec<f64>>>()?;

        let (first, rest) = match operands.split_first() {
            Some(split) => split,
            None => return Err(Error::arity(self.name(), "at least 1", 0)),
        };

        if rest.is_empty() && self.op == ArithOp::Sub {
            return Ok(Value::Number(-first));
        }

        let mut acc = *first;
        for rhs in rest {
            acc = self.op.apply(acc, *rhs)?;
        }
        Ok(Value::Number(acc))
    }
}
