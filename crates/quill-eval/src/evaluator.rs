//! The recursive reduction engine.

use crate::builtins::dispatch;
use crate::error::RuntimeError;
use crate::value::Value;

/// Reduce a value to its final form.
///
/// Only applications reduce; every other value, a quoted list included,
/// is already in normal form and returns unchanged. Never auto-evaluating
/// `Qexpr` is the semantic difference between the two list forms.
pub fn eval(value: Value) -> Value {
    match value {
        Value::Sexpr(cells) => eval_sexpr(cells),
        normal => normal,
    }
}

fn eval_sexpr(cells: Vec<Value>) -> Value {
    // Reduce every child first, left to right.
    let mut cells: Vec<Value> = cells.into_iter().map(eval).collect();

    // First error wins; the siblings are dropped with the vector.
    if let Some(at) = cells.iter().position(|cell| cell.is_error()) {
        return cells.swap_remove(at);
    }

    // An empty application is itself a value.
    if cells.is_empty() {
        return Value::Sexpr(cells);
    }

    // A single expression stands for itself; the shell is discarded.
    if cells.len() == 1 {
        return cells.remove(0);
    }

    let head = cells.remove(0);
    match head {
        Value::Symbol(name) => dispatch(&name, cells),
        _ => Value::error(RuntimeError::NotASymbol),
    }
}
