//! Comparison builtins
//!
//! Each returns `1` or `0`. Only the first two arguments are compared.

use super::{expect_min_args, expect_number, Builtin, BuiltinRegistry};
use crate::error::Result;
use crate::runtime::{EnvRef, Value};

/// Register comparison builtins
pub fn register(registry: &mut BuiltinRegistry) {
    for op in [
        CompareOp::Lt,
        CompareOp::Gt,
        CompareOp::Le,
        CompareOp::Ge,
        CompareOp::Eq,
    ] {
        registry.register(Comparison::new(op));
    }
}

/// Comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `==`, structural equality on any two values
    Eq,
}

impl CompareOp {
    /// Symbol the operator is bound to
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
            CompareOp::Le => "<=",
            CompareOp::Ge => ">=",
            CompareOp::Eq => "==",
        }
    }
}

/// Binary comparison builtin
pub struct Comparison {
    op: CompareOp,
}

impl Comparison {
    /// Creates the builtin for `op`
    pub fn new(op: CompareOp) -> Self {
        Comparison { op }
    }

    fn compare(&self, lhs: &Value, rhs: &Value) -> Result<bool> {
        if self.op == CompareOp::Eq {
            return Ok(lhs == rhs);
        }

        let a = expect_number(self.name(), 0, lhs)?;
        let b = expect_number(self.name(), 1, rhs)?;
        Ok(match self.op {
            CompareOp::Lt => a < b,
            CompareOp::Gt => a > b,
            CompareOp::Le => a <= b,
            CompareOp::Ge => a >= b,
            CompareOp::Eq => a == b,
        })
    }
}

impl Builtin for Comparison {
    fn name(&self) -> &str {
        self.op.symbol()
    }

    fn description(&self) -> &str {
        match self.op {
            CompareOp::Eq => "1 if the values are equal, else 0",
            _ => "1 if the numeric comparison holds, else 0",
        }
    }

    fn execute(&self, _env: &EnvRef, args: Vec<Value>) -> Result<Value> {
        expect_min_args(self.name(), &args, 2)?;

        let holds = self.compare(&args[0], &args[1])?;
        Ok(Value::Number(if holds { 1.0 } else { 0.0 }))
    }
}
