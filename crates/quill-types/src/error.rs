use crate::SourceFile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of syntax errors reported before fail-fast.
pub const MAX_ERRORS: usize = 20;

/// Numeric syntax error code (E100–E199).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    /// A character the lexer cannot start any token with.
    pub const UNEXPECTED_CHARACTER: Self = Self(100);
    /// An opening `(` or `{` with no matching closer before end of input.
    pub const UNCLOSED_DELIMITER: Self = Self(101);
    /// A token the parser cannot use here, e.g. a stray `)` or `}`.
    pub const UNEXPECTED_TOKEN: Self = Self(102);
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// A structured Quill syntax error.
///
/// Runtime failures are not represented here: they are ordinary values in
/// the evaluator. This type only covers lexing and parsing, where there is
/// no value to carry the failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuillError {
    /// Source file name.
    pub file: String,
    /// Error code (e.g. E100).
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// 1-based source line.
    pub line: u32,
    /// 1-based source column.
    pub column: u32,
    /// The exact source line for context.
    pub source_line: String,
}

impl QuillError {
    /// Create a new error at a byte offset of `file`.
    pub fn new(
        file: &SourceFile,
        code: ErrorCode,
        message: impl Into<String>,
        offset: usize,
    ) -> Self {
        let (line, column) = file.line_col(offset);
        Self {
            file: file.name.clone(),
            code,
            message: message.into(),
            line,
            column,
            source_line: file.line(line).unwrap_or("").to_string(),
        }
    }
}

impl fmt::Display for QuillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} {}",
            self.file, self.line, self.column, self.code, self.message
        )
    }
}

impl std::error::Error for QuillError {}

/// Collection of syntax errors with the fail-fast cap applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseErrors {
    pub errors: Vec<QuillError>,
    pub total_errors: usize,
}

impl ParseErrors {
    /// Create an empty collection (no errors).
    pub fn empty() -> Self {
        Self {
            errors: Vec::new(),
            total_errors: 0,
        }
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.total_errors > 0
    }

    /// Returns `true` once the fail-fast cap is reached.
    pub fn at_limit(&self) -> bool {
        self.total_errors >= MAX_ERRORS
    }

    /// Add an error, respecting the [`MAX_ERRORS`] limit.
    pub fn push(&mut self, error: QuillError) {
        if self.errors.len() < MAX_ERRORS {
            self.errors.push(error);
        }
        self.total_errors += 1;
    }
}
