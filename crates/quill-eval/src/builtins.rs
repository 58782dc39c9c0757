//! Builtin dispatch: the list primitives and the arithmetic operators.
//!
//! Every builtin takes an already-evaluated argument list (the leading
//! function symbol removed) and returns a single value. The argument
//! list is consumed on every path, success or failure.

use crate::error::RuntimeError;
use crate::evaluator::eval;
use crate::value::Value;

type Builtin = fn(Vec<Value>) -> Value;

/// Named builtins, looked up before the operator set.
const BUILTINS: &[(&str, Builtin)] = &[
    ("list", builtin_list),
    ("head", builtin_head),
    ("tail", builtin_tail),
    ("join", builtin_join),
    ("eval", builtin_eval),
];

/// Apply the builtin or operator named `name` to `args`.
pub(crate) fn dispatch(name: &str, args: Vec<Value>) -> Value {
    if let Some((_, builtin)) = BUILTINS.iter().find(|(n, _)| *n == name) {
        return builtin(args);
    }
    if let Some(op) = Op::from_symbol(name) {
        return fold_op(op, args);
    }
    Value::error(RuntimeError::UnknownFunction)
}

// ── List primitives ───────────────────────────────────────────────────────

fn builtin_list(args: Vec<Value>) -> Value {
    // The argument list itself becomes the quoted list; nothing is copied.
    Value::Qexpr(args)
}

/// Shared contract of `head`, `tail` and `eval`: exactly one argument,
/// which must be a quoted list.
fn unary_qexpr(name: &'static str, mut args: Vec<Value>) -> Result<Value, Value> {
    if args.len() != 1 {
        return Err(Value::error(RuntimeError::TooManyArguments(name)));
    }
    let arg = args.remove(0);
    if !arg.is_qexpr() {
        return Err(Value::error(RuntimeError::IncorrectType(name)));
    }
    Ok(arg)
}

fn builtin_head(args: Vec<Value>) -> Value {
    let list = match unary_qexpr("head", args) {
        Ok(list) => list,
        Err(err) => return err,
    };
    // `take` extracts the first child and drops the rest with the shell.
    match list.take(0) {
        Some(first) => Value::Qexpr(vec![first]),
        None => Value::error(RuntimeError::EmptyList("head")),
    }
}

fn builtin_tail(args: Vec<Value>) -> Value {
    let mut list = match unary_qexpr("tail", args) {
        Ok(list) => list,
        Err(err) => return err,
    };
    match list.pop(0) {
        Some(_) => list,
        None => Value::error(RuntimeError::EmptyList("tail")),
    }
}

fn builtin_join(args: Vec<Value>) -> Value {
    if args.iter().any(|arg| !arg.is_qexpr()) {
        return Value::error(RuntimeError::IncorrectType("join"));
    }
    let mut joined = Value::qexpr();
    for arg in args {
        joined.join(arg);
    }
    joined
}

fn builtin_eval(args: Vec<Value>) -> Value {
    match unary_qexpr("eval", args) {
        Ok(list) => eval(list.into_sexpr()),
        Err(err) => err,
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl Op {
    /// Exact membership in the operator set; never a substring match.
    fn from_symbol(name: &str) -> Option<Op> {
        match name {
            "+" => Some(Op::Add),
            "-" => Some(Op::Sub),
            "*" => Some(Op::Mul),
            "/" => Some(Op::Div),
            "%" => Some(Op::Rem),
            "^" => Some(Op::Pow),
            _ => None,
        }
    }

    /// One fold step. Arithmetic wraps on overflow; `/` and `%` check the
    /// divisor before dividing.
    fn apply(self, lhs: i64, rhs: i64) -> Result<i64, RuntimeError> {
        match self {
            Op::Add => Ok(lhs.wrapping_add(rhs)),
            Op::Sub => Ok(lhs.wrapping_sub(rhs)),
            Op::Mul => Ok(lhs.wrapping_mul(rhs)),
            Op::Div if rhs == 0 => Err(RuntimeError::DivisionByZero),
            Op::Div => Ok(lhs.wrapping_div(rhs)),
            Op::Rem if rhs == 0 => Err(RuntimeError::DivisionByZero),
            Op::Rem => Ok(lhs.wrapping_rem(rhs)),
            Op::Pow => pow(lhs, rhs),
        }
    }
}

/// Strict left fold over the operands, seeded with the first.
fn fold_op(op: Op, args: Vec<Value>) -> Value {
    let mut nums = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Value::Number(n) => nums.push(n),
            _ => return Value::error(RuntimeError::NonNumber),
        }
    }

    // Dispatch never sends an empty argument list: a one-element
    // application collapses before it gets here.
    let Some((&seed, rest)) = nums.split_first() else {
        return Value::error(RuntimeError::NonNumber);
    };

    if op == Op::Sub && rest.is_empty() {
        return Value::Number(seed.wrapping_neg());
    }

    let mut acc = seed;
    for &rhs in rest {
        match op.apply(acc, rhs) {
            Ok(next) => acc = next,
            // Abort the fold; the remaining operands are discarded.
            Err(kind) => return Value::error(kind),
        }
    }
    Value::Number(acc)
}

/// Integer exponentiation by squaring over wrapping multiplication, which
/// matches repeated multiplication mod 2^64 and terminates for any
/// exponent. `base^0 = 1`; a negative exponent is an error.
fn pow(base: i64, exponent: i64) -> Result<i64, RuntimeError> {
    if exponent < 0 {
        return Err(RuntimeError::NegativeExponent);
    }
    let mut acc: i64 = 1;
    let mut base = base;
    let mut exponent = exponent as u64;
    while exponent > 0 {
        if exponent & 1 == 1 {
            acc = acc.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exponent >>= 1;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(nums: &[i64]) -> Vec<Value> {
        nums.iter().map(|&n| Value::Number(n)).collect()
    }

    fn qexpr(nums: &[i64]) -> Value {
        Value::Qexpr(numbers(nums))
    }

    #[test]
    fn unknown_name_falls_through() {
        assert_eq!(
            dispatch("def", numbers(&[1])),
            Value::error(RuntimeError::UnknownFunction)
        );
    }

    #[test]
    fn operator_match_is_exact_not_substring() {
        // "+-" is a substring of the operator set but names no operator.
        assert_eq!(
            dispatch("+-", numbers(&[1, 2])),
            Value::error(RuntimeError::UnknownFunction)
        );
    }

    #[test]
    fn list_retags_its_arguments() {
        assert_eq!(dispatch("list", numbers(&[1, 2, 3])), qexpr(&[1, 2, 3]));
        assert_eq!(dispatch("list", vec![]), Value::qexpr());
    }

    #[test]
    fn head_takes_the_first_element_only() {
        assert_eq!(dispatch("head", vec![qexpr(&[1, 2, 3])]), qexpr(&[1]));
    }

    #[test]
    fn head_contract_violations() {
        assert_eq!(
            dispatch("head", vec![qexpr(&[1]), qexpr(&[2])]),
            Value::error(RuntimeError::TooManyArguments("head"))
        );
        assert_eq!(
            dispatch("head", numbers(&[1])),
            Value::error(RuntimeError::IncorrectType("head"))
        );
        assert_eq!(
            dispatch("head", vec![Value::qexpr()]),
            Value::error(RuntimeError::EmptyList("head"))
        );
    }

    #[test]
    fn tail_drops_the_first_element() {
        assert_eq!(dispatch("tail", vec![qexpr(&[1, 2, 3])]), qexpr(&[2, 3]));
        assert_eq!(dispatch("tail", vec![qexpr(&[9])]), qexpr(&[]));
        assert_eq!(
            dispatch("tail", vec![Value::qexpr()]),
            Value::error(RuntimeError::EmptyList("tail"))
        );
    }

    #[test]
    fn join_concatenates_in_argument_order() {
        assert_eq!(
            dispatch("join", vec![qexpr(&[1, 2]), qexpr(&[3]), Value::qexpr()]),
            qexpr(&[1, 2, 3])
        );
    }

    #[test]
    fn join_rejects_non_lists() {
        assert_eq!(
            dispatch("join", vec![qexpr(&[1]), Value::Number(2)]),
            Value::error(RuntimeError::IncorrectType("join"))
        );
    }

    #[test]
    fn arithmetic_folds_left() {
        assert_eq!(dispatch("-", numbers(&[10, 3, 2])), Value::Number(5));
        assert_eq!(dispatch("/", numbers(&[100, 5, 2])), Value::Number(10));
        assert_eq!(dispatch("%", numbers(&[10, 3])), Value::Number(1));
    }

    #[test]
    fn unary_minus_negates() {
        assert_eq!(dispatch("-", numbers(&[5])), Value::Number(-5));
        // With two or more operands `-` subtracts instead.
        assert_eq!(dispatch("-", numbers(&[5, 2])), Value::Number(3));
    }

    #[test]
    fn zero_divisor_aborts_the_fold() {
        assert_eq!(
            dispatch("/", numbers(&[10, 0, 3])),
            Value::error(RuntimeError::DivisionByZero)
        );
        assert_eq!(
            dispatch("%", numbers(&[10, 0])),
            Value::error(RuntimeError::DivisionByZero)
        );
    }

    #[test]
    fn non_number_is_rejected_before_any_arithmetic() {
        assert_eq!(
            dispatch("+", vec![Value::Number(1), qexpr(&[2])]),
            Value::error(RuntimeError::NonNumber)
        );
    }

    #[test]
    fn exponentiation() {
        assert_eq!(dispatch("^", numbers(&[2, 10])), Value::Number(1024));
        assert_eq!(dispatch("^", numbers(&[7, 1])), Value::Number(7));
        assert_eq!(dispatch("^", numbers(&[7, 0])), Value::Number(1));
        assert_eq!(dispatch("^", numbers(&[-2, 3])), Value::Number(-8));
        assert_eq!(
            dispatch("^", numbers(&[2, -1])),
            Value::error(RuntimeError::NegativeExponent)
        );
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(
            dispatch("+", numbers(&[i64::MAX, 1])),
            Value::Number(i64::MIN)
        );
        assert_eq!(
            dispatch("/", numbers(&[i64::MIN, -1])),
            Value::Number(i64::MIN)
        );
    }
}
