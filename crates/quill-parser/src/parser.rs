//! Core parser: recursive descent over the token stream.
//!
//! Produces the lossless [`SyntaxNode`] tree described in `quill-types`:
//! delimiter tokens stay in the tree as children, in surface order, so the
//! tree mirrors the grammar's surface exactly. Collects errors and keeps
//! going where recovery is possible.

use quill_lexer::token::{Token, TokenKind};
use quill_types::syntax::{NodeKind, SyntaxNode};
use quill_types::{ErrorCode, ParseErrors, QuillError, SourceFile, Span};

/// The Quill parser.
///
/// Consumes a token stream produced by the lexer and builds the syntax
/// tree. The stream must end with [`TokenKind::Eof`], which the lexer
/// guarantees.
pub struct Parser<'src> {
    /// The token stream.
    tokens: Vec<Token>,
    /// Current index into `tokens`.
    pos: usize,
    /// Source file for error context.
    source_file: &'src SourceFile,
    /// Collected errors.
    errors: ParseErrors,
}

/// Result of parsing.
pub struct ParseResult {
    /// The root node, or `None` when parsing aborted at the error cap.
    pub root: Option<SyntaxNode>,
    /// Errors encountered during parsing.
    pub errors: ParseErrors,
}

impl<'src> Parser<'src> {
    /// Create a new parser from a token stream and source file.
    pub fn new(tokens: Vec<Token>, source_file: &'src SourceFile) -> Self {
        Self {
            tokens,
            pos: 0,
            source_file,
            errors: ParseErrors::empty(),
        }
    }

    // ── Token cursor ──────────────────────────────────────────────────────

    /// Returns the current token without advancing.
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or_else(|| {
            self.tokens
                .last()
                .expect("token stream should end with Eof")
        })
    }

    /// Returns the kind of the current token.
    fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    /// Advance the cursor by one and return the consumed token.
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Returns `true` if the current token is `Eof`.
    fn at_end(&self) -> bool {
        matches!(self.peek_kind(), TokenKind::Eof)
    }

    /// Report an error at a byte offset.
    fn error_at(&mut self, code: ErrorCode, message: impl Into<String>, offset: usize) {
        self.errors
            .push(QuillError::new(self.source_file, code, message, offset));
    }

    // ── Grammar ───────────────────────────────────────────────────────────

    /// Parse the token stream into a root node holding the top-level
    /// expressions in order.
    pub fn parse(mut self) -> ParseResult {
        let mut children = Vec::new();
        while !self.at_end() {
            if self.errors.at_limit() {
                return ParseResult {
                    root: None,
                    errors: self.errors,
                };
            }
            if let Some(expr) = self.parse_expr() {
                children.push(expr);
            }
        }

        let span = Span::new(0, self.source_file.source.len());
        ParseResult {
            root: Some(SyntaxNode::interior(NodeKind::Root, span, children)),
            errors: self.errors,
        }
    }

    /// Parse one expression: a number, a symbol, `( ... )` or `{ ... }`.
    ///
    /// Returns `None` at `Eof` or after reporting a stray closing
    /// delimiter (which is consumed, so parsing can continue).
    fn parse_expr(&mut self) -> Option<SyntaxNode> {
        match self.peek_kind().clone() {
            TokenKind::Number(text) => {
                let span = self.advance().span;
                Some(SyntaxNode::leaf(NodeKind::Number, text, span))
            }
            TokenKind::Symbol(text) => {
                let span = self.advance().span;
                Some(SyntaxNode::leaf(NodeKind::Symbol, text, span))
            }
            TokenKind::LParen => self.parse_list(NodeKind::Sexpr, TokenKind::RParen),
            TokenKind::LBrace => self.parse_list(NodeKind::Qexpr, TokenKind::RBrace),
            TokenKind::RParen | TokenKind::RBrace => {
                let token = self.advance();
                self.error_at(
                    ErrorCode::UNEXPECTED_TOKEN,
                    format!("unexpected '{}'", token.kind),
                    token.span.start,
                );
                None
            }
            TokenKind::Eof => None,
        }
    }

    /// Parse a delimited list. The current token is the opener; both
    /// delimiters become children of the produced node.
    fn parse_list(&mut self, kind: NodeKind, close: TokenKind) -> Option<SyntaxNode> {
        let open = self.advance();
        let open_offset = open.span.start;
        let mut span = open.span;
        let mut children = vec![Self::delimiter(open)];

        loop {
            if self.errors.at_limit() {
                return None;
            }
            if self.peek_kind() == &close {
                let token = self.advance();
                span = span.merge(token.span);
                children.push(Self::delimiter(token));
                break;
            }
            if self.at_end() {
                self.error_at(
                    ErrorCode::UNCLOSED_DELIMITER,
                    format!("unclosed '{}'", children[0].text),
                    open_offset,
                );
                break;
            }
            if let Some(expr) = self.parse_expr() {
                span = span.merge(expr.span);
                children.push(expr);
            }
        }

        Some(SyntaxNode::interior(kind, span, children))
    }

    fn delimiter(token: Token) -> SyntaxNode {
        SyntaxNode::leaf(NodeKind::Delimiter, token.kind.to_string(), token.span)
    }
}
