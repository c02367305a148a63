//! Runtime for lispy programs
//!
//! Values, the environment chain, and the evaluator that gives programs
//! their meaning.

mod environment;
mod evaluator;
mod interpreter;
mod reader;
mod value;

pub use environment::{EnvRef, Environment};
pub use evaluator::{apply, eval, eval_list, REST_MARKER};
pub use interpreter::Interpreter;
pub use reader::{read_expression, read_program};
pub use value::{Closure, Function, Value};
