//! Builds runtime values from the parser's syntax tree.

use crate::error::RuntimeError;
use crate::value::Value;
use quill_types::syntax::{NodeKind, SyntaxNode};

/// Convert a syntax tree into a [`Value`] tree.
///
/// The input is only borrowed, so the same tree can be read again. Number
/// leaves parse their raw text here, so a literal outside the `i64` range
/// becomes an `invalid number` error value instead of a larger number
/// type or a panic. Delimiter nodes contribute nothing; every other child
/// is built in surface order.
pub fn read(node: &SyntaxNode) -> Value {
    match node.kind {
        NodeKind::Number => read_number(node),
        NodeKind::Symbol => Value::Symbol(node.text.clone()),
        NodeKind::Root | NodeKind::Sexpr => read_cells(Value::sexpr(), node),
        NodeKind::Qexpr => read_cells(Value::qexpr(), node),
        // Delimiters never reach here: list construction skips them.
        NodeKind::Delimiter => Value::sexpr(),
    }
}

fn read_number(node: &SyntaxNode) -> Value {
    match node.text.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::error(RuntimeError::InvalidNumber),
    }
}

fn read_cells(mut list: Value, node: &SyntaxNode) -> Value {
    for child in node.meaningful_children() {
        list.push(read(child));
    }
    list
}
