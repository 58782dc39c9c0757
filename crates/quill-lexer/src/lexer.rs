//! Core Quill lexer: converts source text to a token stream.
//!
//! - Whitespace (spaces, tabs, newlines) separates tokens and is dropped
//! - `-` directly followed by a digit starts a numeric literal; on its own
//!   it is the subtraction symbol
//! - Error recovery: collects up to [`quill_types::MAX_ERRORS`] errors
//!   instead of stopping at the first

use quill_types::{ErrorCode, ParseErrors, QuillError, SourceFile, Span};

use crate::token::{Token, TokenKind};

/// The Quill lexer.
///
/// Converts source text into a vector of [`Token`]s, collecting errors
/// along the way. The stream always ends with [`TokenKind::Eof`].
pub struct Lexer<'src> {
    /// The full source text as bytes.
    source: &'src [u8],
    /// Source file for error reporting.
    source_file: &'src SourceFile,
    /// Current byte offset into `source`.
    pos: usize,
    /// Collected errors.
    errors: ParseErrors,
}

/// Result of lexing: tokens + any errors collected.
pub struct LexResult {
    /// The token stream (always ends with [`TokenKind::Eof`]).
    pub tokens: Vec<Token>,
    /// Errors encountered during lexing.
    pub errors: ParseErrors,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source file.
    pub fn new(source_file: &'src SourceFile) -> Self {
        Self {
            source: source_file.source.as_bytes(),
            source_file,
            pos: 0,
            errors: ParseErrors::empty(),
        }
    }

    /// Lex the entire source into a token stream.
    pub fn lex(mut self) -> LexResult {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            if self.at_end() || self.errors.at_limit() {
                break;
            }
            if let Some(token) = self.scan_token() {
                tokens.push(token);
            }
        }

        tokens.push(Token::new(TokenKind::Eof, Span::point(self.pos)));

        LexResult {
            tokens,
            errors: self.errors,
        }
    }

    // ── Character-level helpers ───────────────────────────────────────────

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let ch = self.source.get(self.pos).copied()?;
        self.pos += 1;
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == b' ' || ch == b'\t' || ch == b'\r' || ch == b'\n' {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn emit_error(&mut self, code: ErrorCode, message: impl Into<String>, offset: usize) {
        self.errors
            .push(QuillError::new(self.source_file, code, message, offset));
    }

    // ── Token scanning ────────────────────────────────────────────────────

    /// Scan one token starting at the current (non-whitespace) position.
    /// Returns `None` after reporting an unexpected character.
    fn scan_token(&mut self) -> Option<Token> {
        let start = self.pos;
        let ch = self.advance()?;

        let kind = match ch {
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'0'..=b'9' => self.scan_number(start),
            b'-' if self.peek().is_some_and(|c| c.is_ascii_digit()) => self.scan_number(start),
            b'+' | b'-' | b'*' | b'/' | b'%' | b'^' => {
                TokenKind::Symbol((ch as char).to_string())
            }
            b'a'..=b'z' | b'A'..=b'Z' => self.scan_name(start),
            _ => {
                self.emit_error(
                    ErrorCode::UNEXPECTED_CHARACTER,
                    format!("unexpected character '{}'", ch as char),
                    start,
                );
                return None;
            }
        };

        Some(Token::new(kind, Span::new(start, self.pos)))
    }

    /// Scan the remaining digits of a numeric literal (`-?[0-9]+`).
    /// The sign or first digit has already been consumed.
    fn scan_number(&mut self, start: usize) -> TokenKind {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        TokenKind::Number(self.text_from(start))
    }

    /// Scan the remaining letters of a symbol name like `head`.
    fn scan_name(&mut self, start: usize) -> TokenKind {
        while self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.advance();
        }
        TokenKind::Symbol(self.text_from(start))
    }

    fn text_from(&self, start: usize) -> String {
        // Token boundaries always fall on ASCII, so the slice is valid UTF-8.
        String::from_utf8_lossy(&self.source[start..self.pos]).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> LexResult {
        let file = SourceFile::new("test.ql", source);
        Lexer::new(&file).lex()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_input_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds("   \t\n"), vec![TokenKind::Eof]);
    }

    #[test]
    fn negative_number_vs_minus_symbol() {
        assert_eq!(
            kinds("-5"),
            vec![TokenKind::Number("-5".into()), TokenKind::Eof]
        );
        assert_eq!(
            kinds("- 5"),
            vec![
                TokenKind::Symbol("-".into()),
                TokenKind::Number("5".into()),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn spans_are_byte_ranges() {
        let result = lex("head {12}");
        assert_eq!(result.tokens[0].span, Span::new(0, 4));
        assert_eq!(result.tokens[1].span, Span::new(5, 6));
        assert_eq!(result.tokens[2].span, Span::new(6, 8));
        assert_eq!(result.tokens[3].span, Span::new(8, 9));
    }
}
