//! Evaluation and function application
//!
//! Evaluation never unwinds: every failure is returned as a [`Value::Error`]
//! and travels up through the enclosing lists like any other value.

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::runtime::{Closure, EnvRef, Function, Value};

/// Formal that collects all remaining arguments into a literal list
pub const REST_MARKER: &str = "&";

/// Evaluates `value` in `env`
///
/// Symbols are looked up, evaluable lists are evaluated and applied, and
/// everything else evaluates to itself.
pub fn eval(env: &EnvRef, value: Value) -> Value {
    match value {
        Value::Symbol(name) => env.borrow().get(&name).unwrap_or_else(Value::from),
        Value::EvalList(cells) => eval_list(env, cells),
        other => other,
    }
}

/// Evaluates the cells of an evaluable list and applies the first to the rest
///
/// All cells are evaluated left to right before anything else happens; the
/// leftmost error among the results wins.
pub fn eval_list(env: &EnvRef, cells: Vec<Value>) -> Value {
    let mut cells: Vec<Value> = cells.into_iter().map(|cell| eval(env, cell)).collect();

    if let Some(idx) = cells.iter().position(Value::is_error) {
        return cells.swap_remove(idx);
    }

    let mut cells = cells.into_iter();
    let Some(head) = cells.next() else {
        return Value::empty();
    };
    let args: Vec<Value> = cells.collect();

    match head {
        // A lone closure is called with no arguments, so `(f)` runs a
        // zero-formal function instead of returning it. This also applies to
        // a closure reached through a symbol, as in a body of `{x}`.
        Value::Function(Function::Closure(closure)) if args.is_empty() => {
            apply_closure(env, closure, args)
        }
        only if args.is_empty() => only,
        Value::Function(function) => apply(env, function, args),
        _ => Error::NotAFunction.into(),
    }
}

/// Applies `function` to `args` on behalf of the caller environment `env`
pub fn apply(env: &EnvRef, function: Function, args: Vec<Value>) -> Value {
    match function {
        Function::Builtin(builtin) => builtin.call(env, args),
        Function::Closure(closure) => apply_closure(env, closure, args),
    }
}

/// Binds `args` against the closure's formals
///
/// While formals remain the curried closure is returned. Once all are bound
/// the closure's environment is parented to the caller's and the body runs
/// there.
fn apply_closure(env: &EnvRef, mut closure: Closure, args: Vec<Value>) -> Value {
    if let Err(err) = bind_arguments(&mut closure, args) {
        return err.into();
    }

    if !closure.formals.is_empty() {
        tracing::trace!(
            remaining = closure.formals.len(),
            "returning partially applied closure"
        );
        return Value::Function(Function::Closure(closure));
    }

    let Closure { body, env: mut local, .. } = closure;
    local.set_parent(Some(Rc::clone(env)));
    tracing::trace!(bindings = local.len(), "applying closure");

    let local = local.into_ref();
    eval(&local, Value::EvalList(body))
}

fn bind_arguments(closure: &mut Closure, args: Vec<Value>) -> Result<()> {
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if closure.formals.is_empty() {
            return Err(Error::TooManyArguments);
        }

        let formal = closure.formals.remove(0);
        if formal == REST_MARKER {
            let rest = std::iter::once(arg).chain(args).collect();
            return bind_rest(closure, rest);
        }

        closure.env.put(&formal, arg);
    }

    // Out of arguments with only the rest marker left: bind it to `{}`
    if closure.formals.first().map(String::as_str) == Some(REST_MARKER) {
        closure.formals.remove(0);
        return bind_rest(closure, Vec::new());
    }

    Ok(())
}

fn bind_rest(closure: &mut Closure, rest: Vec<Value>) -> Result<()> {
    if closure.formals.len() != 1 {
        return Err(Error::MalformedRestMarker);
    }

    let name = closure.formals.remove(0);
    closure.env.put(&name, Value::LiteralList(rest));
    Ok(())
}
