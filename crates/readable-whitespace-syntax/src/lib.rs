//! # readable-whitespace-syntax
//!
//! A lossless syntax tree for brace-delimited, Java-like source using
//! [Rowan] + [Logos], following the [rust-analyzer] architecture model.
//!
//! [Rowan]: https://docs.rs/rowan
//! [Logos]: https://docs.rs/logos
//! [rust-analyzer]: https://rust-analyzer.github.io/book/contributing/syntax.html
//!
//! ## What the Tree Is For
//!
//! The tree exists so that layout questions can be answered structurally:
//! "is this `return` the direct child of a block?", "is the gap before it
//! already more than one line?", "does the statement before this gap end in
//! a `}`?". That needs a **concrete** syntax tree: whitespace runs and comments
//! are real tokens with real siblings, and every byte of the input is in the
//! tree exactly once.
//!
//! The grammar deliberately understands only statement structure. Expressions
//! stay flat token runs, except where statements can appear inside them
//! (lambda blocks and anonymous class bodies).
//!
//! ## Architecture Overview
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Events → Sink → Rowan Tree
//!               (Logos)          (Grammar)        (GreenNodeBuilder)
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! readable-whitespace-syntax/
//! ├── lib.rs           # This file - public API and tree tests
//! ├── syntax_kind.rs   # SyntaxKind enum (tokens + nodes) and Rowan integration
//! ├── lexer.rs         # Logos-based tokenizer
//! └── parser/
//!     ├── mod.rs       # Parser struct, Marker system, public parse() function
//!     ├── event.rs     # Event enum (Start, Token, Finish, Placeholder)
//!     ├── sink.rs      # Converts events to Rowan GreenNode
//!     └── grammar/
//!         ├── mod.rs         # Root parsing
//!         ├── items.rs       # Type declarations and members
//!         ├── statements.rs  # Blocks and statements
//!         └── expressions.rs # Expression runs, lambda blocks, anonymous classes
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use readable_whitespace_syntax::{parse, SyntaxKind};
//!
//! let source = "class Foo { int foo() { return 1; } }";
//! let tree = parse(source);
//!
//! // The tree preserves all text
//! assert_eq!(tree.text().to_string(), source);
//!
//! // Navigate the tree structure
//! let ret = tree
//!     .descendants()
//!     .find(|n| n.kind() == SyntaxKind::RETURN_STMT)
//!     .unwrap();
//! assert_eq!(ret.parent().unwrap().kind(), SyntaxKind::BLOCK);
//! ```

pub mod lexer;
pub mod parser;
pub mod syntax_kind;

pub use parser::parse;
pub use syntax_kind::{BraceLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Render a tree as an indented outline, one node or token per line.
///
/// ```text
/// RETURN_STMT@26..35
///   RETURN_KW@26..32 "return"
/// ```
pub fn debug_tree(node: &SyntaxNode) -> String {
    let mut result = String::new();
    write_tree(node, 0, &mut result);
    result
}

fn write_tree(node: &SyntaxNode, indent: usize, result: &mut String) {
    let prefix = "  ".repeat(indent);

    result.push_str(&format!(
        "{}{:?}@{:?}\n",
        prefix,
        node.kind(),
        node.text_range()
    ));

    for child in node.children_with_tokens() {
        match child {
            rowan::NodeOrToken::Node(n) => write_tree(&n, indent + 1, result),
            rowan::NodeOrToken::Token(t) => {
                result.push_str(&format!(
                    "{}  {:?}@{:?} {:?}\n",
                    prefix,
                    t.kind(),
                    t.text_range(),
                    t.text()
                ));
            }
        }
    }
}
