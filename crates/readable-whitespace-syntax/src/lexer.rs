//! # Lexer - Tokenizing Brace-Language Source
//!
//! This module provides the first stage of parsing: breaking source text into
//! tokens using the [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! The most important property of this lexer is that **every byte in the input
//! appears in exactly one token**. We never skip or discard characters. This
//! is what makes round-tripping possible:
//!
//! ```
//! use readable_whitespace_syntax::lexer::lex;
//!
//! let input = "return x; // done\n";
//! let tokens = lex(input);
//!
//! // Concatenating all token texts gives back the original
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Whitespace Is One Token
//!
//! Spaces, tabs and line endings are lexed together into a single
//! `WHITESPACE` token. The gap between two statements is therefore exactly one
//! tree element, and "does this gap already contain a blank line" is a
//! question about a single token's span.
//!
//! ## Why Two Token Enums?
//!
//! Logos needs its own enum for `#[derive(Logos)]`, while Rowan uses our
//! [`SyntaxKind`]. [`TokenKind::to_syntax_kind`] converts between them.
//!
//! ## Public API
//!
//! - [`lex`] - Tokenize input, returning `Vec<Token>`
//! - [`lex_with_spans`] - Tokenize with byte offset spans
//! - [`Token`] - A token with its kind and text slice
//!
//! [`SyntaxKind`]: crate::syntax_kind::SyntaxKind

use logos::Logos;

use crate::syntax_kind::SyntaxKind;

/// Token kinds produced by the Logos lexer.
///
/// Keywords are declared with `#[token]`, which Logos prioritises over the
/// identifier regex, so `return` is a keyword while `returned` is an identifier.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\r\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r"[\p{L}_$][\p{L}\p{N}_$]*")]
    Ident,

    #[regex(r"[0-9][0-9A-Za-z_]*(\.[0-9][0-9A-Za-z_]*)?")]
    Number,

    #[regex(r#""([^"\\\r\n]|\\.)*""#)]
    String,

    #[regex(r"'([^'\\\r\n]|\\.)*'")]
    Char,

    #[token("return")]
    Return,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("for")]
    For,
    #[token("do")]
    Do,
    #[token("try")]
    Try,
    #[token("catch")]
    Catch,
    #[token("finally")]
    Finally,
    #[token("switch")]
    Switch,
    #[token("case")]
    Case,
    #[token("default")]
    Default,
    #[token("throw")]
    Throw,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("synchronized")]
    Synchronized,
    #[token("class")]
    Class,
    #[token("interface")]
    Interface,
    #[token("enum")]
    Enum,
    #[token("new")]
    New,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("->")]
    Arrow,
    #[token("@")]
    At,

    /// Any other run of operator characters
    #[regex(r"[=+\-*/%<>!&|^~?]+")]
    Operator,
}

impl TokenKind {
    /// Convert to SyntaxKind.
    pub fn to_syntax_kind(self) -> SyntaxKind {
        match self {
            TokenKind::Whitespace => SyntaxKind::WHITESPACE,
            TokenKind::LineComment => SyntaxKind::LINE_COMMENT,
            TokenKind::BlockComment => SyntaxKind::BLOCK_COMMENT,
            TokenKind::Ident => SyntaxKind::IDENT,
            TokenKind::Number => SyntaxKind::NUMBER,
            TokenKind::String => SyntaxKind::STRING,
            TokenKind::Char => SyntaxKind::CHAR,
            TokenKind::Return => SyntaxKind::RETURN_KW,
            TokenKind::If => SyntaxKind::IF_KW,
            TokenKind::Else => SyntaxKind::ELSE_KW,
            TokenKind::While => SyntaxKind::WHILE_KW,
            TokenKind::For => SyntaxKind::FOR_KW,
            TokenKind::Do => SyntaxKind::DO_KW,
            TokenKind::Try => SyntaxKind::TRY_KW,
            TokenKind::Catch => SyntaxKind::CATCH_KW,
            TokenKind::Finally => SyntaxKind::FINALLY_KW,
            TokenKind::Switch => SyntaxKind::SWITCH_KW,
            TokenKind::Case => SyntaxKind::CASE_KW,
            TokenKind::Default => SyntaxKind::DEFAULT_KW,
            TokenKind::Throw => SyntaxKind::THROW_KW,
            TokenKind::Break => SyntaxKind::BREAK_KW,
            TokenKind::Continue => SyntaxKind::CONTINUE_KW,
            TokenKind::Synchronized => SyntaxKind::SYNCHRONIZED_KW,
            TokenKind::Class => SyntaxKind::CLASS_KW,
            TokenKind::Interface => SyntaxKind::INTERFACE_KW,
            TokenKind::Enum => SyntaxKind::ENUM_KW,
            TokenKind::New => SyntaxKind::NEW_KW,
            TokenKind::LBrace => SyntaxKind::LBRACE,
            TokenKind::RBrace => SyntaxKind::RBRACE,
            TokenKind::LParen => SyntaxKind::LPAREN,
            TokenKind::RParen => SyntaxKind::RPAREN,
            TokenKind::LBracket => SyntaxKind::LBRACKET,
            TokenKind::RBracket => SyntaxKind::RBRACKET,
            TokenKind::Semicolon => SyntaxKind::SEMICOLON,
            TokenKind::Comma => SyntaxKind::COMMA,
            TokenKind::Dot => SyntaxKind::DOT,
            TokenKind::Colon => SyntaxKind::COLON,
            TokenKind::Arrow => SyntaxKind::ARROW,
            TokenKind::At => SyntaxKind::AT,
            TokenKind::Operator => SyntaxKind::OPERATOR,
        }
    }
}

/// A lexed token with its kind and text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that all bytes from the input appear in the output tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    lex_with_spans(input)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Lex and return tokens along with their byte spans.
pub fn lex_with_spans(input: &str) -> Vec<(Token<'_>, std::ops::Range<usize>)> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        let kind = match result {
            Ok(token_kind) => token_kind.to_syntax_kind(),
            // Unterminated strings, stray backslashes, `#`, ...
            Err(()) => SyntaxKind::UNKNOWN,
        };
        tokens.push((Token { kind, text }, span));
    }

    tokens
}
