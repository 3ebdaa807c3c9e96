//! SyntaxKind enum for all tokens and nodes in the brace-language CST.
//!
//! Following the rust-analyzer model, all tokens and nodes share a single enum.
//! Every byte in the source must appear as a token in the tree.

/// All syntax kinds for the brace-language CST.
///
/// This enum represents both tokens (lexer output) and composite nodes (parser output).
/// The `repr(u16)` ensures efficient storage in rowan's green tree.
///
/// We use SCREAMING_CASE following the rust-analyzer convention for SyntaxKind.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // === Tokens (lexer output) ===
    /// Any run of spaces, tabs and line endings
    WHITESPACE,
    /// `// ...` up to (not including) the line ending
    LINE_COMMENT,
    /// `/* ... */`, including doc comments
    BLOCK_COMMENT,
    /// Identifier (also contextual keywords such as `record` or `var`)
    IDENT,
    /// Numeric literal
    NUMBER,
    /// `"..."`
    STRING,
    /// `'...'`
    CHAR,

    RETURN_KW,
    IF_KW,
    ELSE_KW,
    WHILE_KW,
    FOR_KW,
    DO_KW,
    TRY_KW,
    CATCH_KW,
    FINALLY_KW,
    SWITCH_KW,
    CASE_KW,
    DEFAULT_KW,
    THROW_KW,
    BREAK_KW,
    CONTINUE_KW,
    SYNCHRONIZED_KW,
    CLASS_KW,
    INTERFACE_KW,
    ENUM_KW,
    NEW_KW,

    /// `{`
    LBRACE,
    /// `}`
    RBRACE,
    /// `(`
    LPAREN,
    /// `)`
    RPAREN,
    /// `[`
    LBRACKET,
    /// `]`
    RBRACKET,
    /// `;`
    SEMICOLON,
    /// `,`
    COMMA,
    /// `.`
    DOT,
    /// `:`
    COLON,
    /// `->`
    ARROW,
    /// `@`
    AT,
    /// Run of operator characters (`=`, `+=`, `&&`, `<`, ...)
    OPERATOR,
    /// Byte sequence the lexer could not classify
    UNKNOWN,
    /// End of file marker
    EOF,

    // === Composite Nodes (parser output) ===
    /// Root of the file
    ROOT,
    /// Class, interface or enum declaration
    CLASS,
    /// `{ ... }` holding class members
    CLASS_BODY,
    /// Method or constructor declaration
    METHOD,
    /// `( ... )` after a method name
    PARAM_LIST,
    /// Field declaration, enum constants, or any other member ending in `;`
    FIELD,
    /// `static { ... }` or `{ ... }` inside a class body
    INITIALIZER,
    /// `{ ... }` holding statements
    BLOCK,
    /// Parenthesised header of `if`, `while`, `for`, `switch`, ...
    CONDITION,

    // Statements
    RETURN_STMT,
    IF_STMT,
    WHILE_STMT,
    FOR_STMT,
    DO_WHILE_STMT,
    TRY_STMT,
    SWITCH_STMT,
    SWITCH_LABEL_STMT,
    THROW_STMT,
    BREAK_STMT,
    CONTINUE_STMT,
    SYNCHRONIZED_STMT,
    /// A nested `{ ... }` used as a statement
    BLOCK_STMT,
    /// Local class declaration
    DECLARATION_STMT,
    /// Expression or local variable declaration ending in `;`
    EXPR_STMT,
    /// A lone `;`
    EMPTY_STMT,

    /// `catch (...) { ... }`
    CATCH_CLAUSE,
    /// `finally { ... }`
    FINALLY_CLAUSE,
    /// Expression tokens, possibly containing lambda blocks or anonymous classes
    EXPR,

    /// Error recovery node
    ERROR,
}

impl SyntaxKind {
    /// Returns true if this kind represents a token (lexer output).
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::EOF as u16)
    }

    /// Returns true if this kind represents a composite node.
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    /// Returns true if this kind is trivia (whitespace or comments).
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(self, Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Returns true for nodes that count as statements inside a [`SyntaxKind::BLOCK`].
    pub fn is_statement(self) -> bool {
        (self as u16) >= (Self::RETURN_STMT as u16) && (self as u16) <= (Self::EMPTY_STMT as u16)
    }

    /// Keywords that introduce a type declaration.
    pub fn is_type_keyword(self) -> bool {
        matches!(self, Self::CLASS_KW | Self::INTERFACE_KW | Self::ENUM_KW)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language definition for rowan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BraceLang {}

impl rowan::Language for BraceLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 <= SyntaxKind::ERROR as u16);
        // SAFETY: We check bounds above and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type alias for our syntax nodes.
pub type SyntaxNode = rowan::SyntaxNode<BraceLang>;
/// Type alias for our syntax tokens.
pub type SyntaxToken = rowan::SyntaxToken<BraceLang>;
/// Type alias for syntax elements (node or token).
pub type SyntaxElement = rowan::SyntaxElement<BraceLang>;

#[cfg(test)]
mod tests {
    use super::*;
    use rowan::Language;

    #[test]
    fn token_kinds_are_tokens() {
        assert!(SyntaxKind::WHITESPACE.is_token());
        assert!(SyntaxKind::RBRACE.is_token());
        assert!(SyntaxKind::EOF.is_token());
    }

    #[test]
    fn node_kinds_are_nodes() {
        assert!(SyntaxKind::ROOT.is_node());
        assert!(SyntaxKind::BLOCK.is_node());
        assert!(SyntaxKind::RETURN_STMT.is_node());
    }

    #[test]
    fn trivia_detection() {
        assert!(SyntaxKind::WHITESPACE.is_trivia());
        assert!(SyntaxKind::LINE_COMMENT.is_trivia());
        assert!(SyntaxKind::BLOCK_COMMENT.is_trivia());
        assert!(!SyntaxKind::IDENT.is_trivia());
        assert!(!SyntaxKind::WHITESPACE.is_comment());
    }

    #[test]
    fn statement_detection() {
        assert!(SyntaxKind::RETURN_STMT.is_statement());
        assert!(SyntaxKind::EMPTY_STMT.is_statement());
        assert!(SyntaxKind::BLOCK_STMT.is_statement());
        assert!(!SyntaxKind::BLOCK.is_statement());
        assert!(!SyntaxKind::CATCH_CLAUSE.is_statement());
        assert!(!SyntaxKind::METHOD.is_statement());
    }

    #[test]
    fn rowan_conversion_roundtrip() {
        let kind = SyntaxKind::IF_STMT;
        let raw: rowan::SyntaxKind = kind.into();
        let back = BraceLang::kind_from_raw(raw);
        assert_eq!(kind, back);
    }
}
