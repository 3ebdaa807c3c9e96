//! The tree interface the hint rules are written against.
//!
//! Rules never touch Rowan directly. They see a [`TreeNode`]: something with a
//! coarse [`NodeKind`], navigable family links and a byte range. The impl for
//! [`SyntaxElement`] below connects the lossless tree from
//! `readable-whitespace-syntax`; any other tree with the same shape (tokens
//! as siblings of nodes, trivia kept) works just as well.

use readable_whitespace_syntax::{SyntaxElement, SyntaxKind};
use rowan::NodeOrToken;

/// Classification of a tree element as far as the hint rules care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    ReturnStatement,
    /// Any statement other than `return`
    Statement,
    /// `{ ... }` holding statements
    Block,
    /// A run of spaces, tabs and line endings
    Whitespace,
    Comment,
    /// A single `}` token
    RightBrace,
    Other,
}

impl NodeKind {
    pub fn is_statement(self) -> bool {
        matches!(self, Self::ReturnStatement | Self::Statement)
    }

    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Comment)
    }
}

impl From<SyntaxKind> for NodeKind {
    fn from(kind: SyntaxKind) -> Self {
        match kind {
            SyntaxKind::RETURN_STMT => Self::ReturnStatement,
            kind if kind.is_statement() => Self::Statement,
            SyntaxKind::BLOCK => Self::Block,
            SyntaxKind::WHITESPACE => Self::Whitespace,
            kind if kind.is_comment() => Self::Comment,
            SyntaxKind::RBRACE => Self::RightBrace,
            _ => Self::Other,
        }
    }
}

/// Read-only navigation over a concrete syntax tree.
///
/// Tokens are elements too: whitespace, comments and braces have parents and
/// siblings like any composite node. Offsets are byte offsets into the text
/// the tree was parsed from.
pub trait TreeNode: Clone {
    fn kind(&self) -> NodeKind;
    fn parent(&self) -> Option<Self>;
    fn prev_sibling(&self) -> Option<Self>;
    fn next_sibling(&self) -> Option<Self>;
    fn first_child(&self) -> Option<Self>;
    fn last_child(&self) -> Option<Self>;
    fn start_offset(&self) -> usize;
    fn end_offset(&self) -> usize;
}

impl TreeNode for SyntaxElement {
    fn kind(&self) -> NodeKind {
        match self {
            NodeOrToken::Node(node) => node.kind().into(),
            NodeOrToken::Token(token) => token.kind().into(),
        }
    }

    fn parent(&self) -> Option<Self> {
        let parent = match self {
            NodeOrToken::Node(node) => node.parent(),
            NodeOrToken::Token(token) => token.parent(),
        };
        parent.map(NodeOrToken::Node)
    }

    fn prev_sibling(&self) -> Option<Self> {
        match self {
            NodeOrToken::Node(node) => node.prev_sibling_or_token(),
            NodeOrToken::Token(token) => token.prev_sibling_or_token(),
        }
    }

    fn next_sibling(&self) -> Option<Self> {
        match self {
            NodeOrToken::Node(node) => node.next_sibling_or_token(),
            NodeOrToken::Token(token) => token.next_sibling_or_token(),
        }
    }

    fn first_child(&self) -> Option<Self> {
        match self {
            NodeOrToken::Node(node) => node.first_child_or_token(),
            NodeOrToken::Token(_) => None,
        }
    }

    fn last_child(&self) -> Option<Self> {
        match self {
            NodeOrToken::Node(node) => node.last_child_or_token(),
            NodeOrToken::Token(_) => None,
        }
    }

    fn start_offset(&self) -> usize {
        text_range(self).start().into()
    }

    fn end_offset(&self) -> usize {
        text_range(self).end().into()
    }
}

fn text_range(element: &SyntaxElement) -> rowan::TextRange {
    match element {
        NodeOrToken::Node(node) => node.text_range(),
        NodeOrToken::Token(token) => token.text_range(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use readable_whitespace_syntax::parse;
    use rstest::rstest;

    fn root(source: &str) -> SyntaxElement {
        NodeOrToken::Node(parse(source))
    }

    fn children(node: &SyntaxElement) -> Vec<NodeKind> {
        let mut kinds = Vec::new();
        let mut child = TreeNode::first_child(node);
        while let Some(element) = child {
            kinds.push(TreeNode::kind(&element));
            child = TreeNode::next_sibling(&element);
        }
        kinds
    }

    #[rstest]
    #[case(SyntaxKind::RETURN_STMT, NodeKind::ReturnStatement)]
    #[case(SyntaxKind::IF_STMT, NodeKind::Statement)]
    #[case(SyntaxKind::EMPTY_STMT, NodeKind::Statement)]
    #[case(SyntaxKind::BLOCK, NodeKind::Block)]
    #[case(SyntaxKind::CLASS_BODY, NodeKind::Other)]
    #[case(SyntaxKind::WHITESPACE, NodeKind::Whitespace)]
    #[case(SyntaxKind::LINE_COMMENT, NodeKind::Comment)]
    #[case(SyntaxKind::BLOCK_COMMENT, NodeKind::Comment)]
    #[case(SyntaxKind::RBRACE, NodeKind::RightBrace)]
    #[case(SyntaxKind::LBRACE, NodeKind::Other)]
    fn classifies_syntax_kinds(#[case] kind: SyntaxKind, #[case] expected: NodeKind) {
        assert_eq!(NodeKind::from(kind), expected);
    }

    #[test]
    fn tokens_are_navigable_siblings() {
        let tree = root("{ a(); }");
        let initializer = TreeNode::first_child(&tree).unwrap();
        // A top-level `{` is an initializer holding a block
        let block = TreeNode::first_child(&initializer).unwrap();
        assert_eq!(TreeNode::kind(&block), NodeKind::Block);
        assert_eq!(
            children(&block),
            vec![
                NodeKind::Other,
                NodeKind::Whitespace,
                NodeKind::Statement,
                NodeKind::Whitespace,
                NodeKind::RightBrace,
            ]
        );

        let close = TreeNode::last_child(&block).unwrap();
        assert_eq!(TreeNode::start_offset(&close), 7);
        assert_eq!(TreeNode::end_offset(&close), 8);
        assert_eq!(TreeNode::parent(&close), Some(block));
    }

    #[test]
    fn tokens_have_no_children() {
        let tree = root("x;");
        let field = TreeNode::first_child(&tree).unwrap();
        let semicolon = TreeNode::last_child(&field).unwrap();
        assert_eq!(TreeNode::start_offset(&semicolon), 1);
        assert!(TreeNode::first_child(&semicolon).is_none());
        assert!(TreeNode::last_child(&semicolon).is_none());
        assert!(TreeNode::next_sibling(&semicolon).is_none());
    }
}
