//! The concrete syntax tree produced by the parser.
//!
//! The tree is lossless: delimiter tokens (`(`, `)`, `{`, `}`) are kept as
//! children in surface order. Consumers that only care about structure,
//! like the value builder in `quill-eval`, skip [`NodeKind::Delimiter`]
//! nodes.

use crate::Span;

/// The grammar rule a [`SyntaxNode`] matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The whole input line: zero or more expressions.
    Root,
    /// A signed decimal integer literal. Leaf; carries its raw text.
    Number,
    /// A symbol naming a builtin or operator. Leaf; carries its text.
    Symbol,
    /// A parenthesised application `( ... )`.
    Sexpr,
    /// A brace-quoted list `{ ... }`.
    Qexpr,
    /// A structural delimiter token kept for losslessness. Leaf.
    Delimiter,
}

/// One node of the concrete syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// Raw text for leaf nodes; empty for interior nodes.
    pub text: String,
    pub span: Span,
    /// Ordered children for interior nodes; empty for leaves.
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Create a leaf node carrying its source text.
    pub fn leaf(kind: NodeKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            children: Vec::new(),
        }
    }

    /// Create an interior node from its ordered children.
    pub fn interior(kind: NodeKind, span: Span, children: Vec<SyntaxNode>) -> Self {
        Self {
            kind,
            text: String::new(),
            span,
            children,
        }
    }

    /// Returns `true` for delimiter tokens, which carry no meaning beyond
    /// structure and are skipped when building values.
    pub fn is_delimiter(&self) -> bool {
        self.kind == NodeKind::Delimiter
    }

    /// The node's children with delimiters filtered out, in surface order.
    pub fn meaningful_children(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().filter(|c| !c.is_delimiter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_has_no_children() {
        let n = SyntaxNode::leaf(NodeKind::Number, "42", Span::new(0, 2));
        assert_eq!(n.kind, NodeKind::Number);
        assert_eq!(n.text, "42");
        assert!(n.children.is_empty());
        assert!(!n.is_delimiter());
    }

    #[test]
    fn meaningful_children_skip_delimiters() {
        let open = SyntaxNode::leaf(NodeKind::Delimiter, "{", Span::new(0, 1));
        let one = SyntaxNode::leaf(NodeKind::Number, "1", Span::new(1, 2));
        let close = SyntaxNode::leaf(NodeKind::Delimiter, "}", Span::new(2, 3));
        let list = SyntaxNode::interior(NodeKind::Qexpr, Span::new(0, 3), vec![open, one, close]);

        let kept: Vec<&str> = list.meaningful_children().map(|c| c.text.as_str()).collect();
        assert_eq!(kept, vec!["1"]);
        // The tree itself still holds all three children, in surface order.
        assert_eq!(list.children.len(), 3);
        assert_eq!(list.children[0].text, "{");
        assert_eq!(list.children[2].text, "}");
    }
}
