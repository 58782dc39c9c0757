//! Runtime error kinds for the Quill evaluator.

use thiserror::Error;

/// Everything that can go wrong during reduction.
///
/// These are not a Rust error channel: a `RuntimeError` travels inside
/// [`crate::Value::Error`] and flows through reduction like any other
/// value. The `Display` text is the canonical user-facing message;
/// tests match on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A numeric literal outside the representable `i64` range.
    #[error("invalid number")]
    InvalidNumber,
    /// Wrong argument count for a single-argument builtin.
    #[error("Function '{0}' passed too many arguments!")]
    TooManyArguments(&'static str),
    /// A builtin was given something other than the quoted list it needs.
    #[error("Function '{0}' passed incorrect type!")]
    IncorrectType(&'static str),
    /// `head`/`tail` on an empty quoted list.
    #[error("Function '{0}' passed {{}}!")]
    EmptyList(&'static str),
    /// An arithmetic operator saw a non-number argument.
    #[error("Cannot operate on non-number!")]
    NonNumber,
    /// Zero divisor in `/` or `%`.
    #[error("Division By Zero!")]
    DivisionByZero,
    /// `^` with a negative exponent.
    #[error("Negative Exponent!")]
    NegativeExponent,
    /// An application whose head reduced to something other than a symbol.
    #[error("S-expression does not start with symbol!")]
    NotASymbol,
    /// A symbol naming no builtin and no operator.
    #[error("Unknown Function!")]
    UnknownFunction,
}
