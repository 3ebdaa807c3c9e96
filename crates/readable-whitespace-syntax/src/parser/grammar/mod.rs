//! # Grammar Rules
//!
//! This module contains the grammar rules that drive parsing. Each function
//! takes a `&mut Parser` and uses its methods to:
//!
//! 1. Inspect upcoming tokens (`p.current()`, `p.at_next()`, `p.nth_significant()`)
//! 2. Consume tokens (`p.bump()`, `p.eat_next()`, `p.skip_trivia()`)
//! 3. Build tree structure (`p.start()` → marker → `complete()`/`abandon()`)
//!
//! ## Module Structure
//!
//! - [`items`] - Type declarations and class members (fields, methods, initializers)
//! - [`statements`] - Blocks and the statements inside them
//! - [`expressions`] - Expression token runs, bracketed groups, lambda blocks
//!
//! ## Error Recovery
//!
//! Grammar functions are lenient. Every loop either consumes a token or stops,
//! an unexpected closer is wrapped in an ERROR node, and unterminated
//! constructs simply end where the input does. The tree always holds every
//! input byte.
//!
//! Statements, members and bracketed groups each go through
//! [`Parser::nested`]. Past the nesting limit the rest of the enclosing group
//! is consumed flat by [`too_deep`], so no input can exhaust the stack.

mod expressions;
mod items;
mod statements;

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// Parse the root of a file.
///
/// Top level holds package/import lines and type declarations, parsed with
/// the same rules as class members.
pub fn root(p: &mut Parser<'_, '_>) {
    let m = p.start();

    loop {
        p.skip_trivia();
        if p.at_end() {
            break;
        }
        let before = p.position();
        items::member(p);
        if p.position() == before {
            error_token(p);
        }
    }

    m.complete(p, SyntaxKind::ROOT);
}

/// Consume the rest of the enclosing group into one ERROR node without
/// recursing: everything up to the closer that ends it, or the end of input.
///
/// A stray closer in first position is taken on its own so callers always
/// see progress.
fn too_deep(p: &mut Parser<'_, '_>) {
    let m = p.start();
    let start = p.position();
    let mut open = 0usize;

    loop {
        match p.current() {
            SyntaxKind::EOF => break,
            SyntaxKind::LBRACE | SyntaxKind::LPAREN | SyntaxKind::LBRACKET => open += 1,
            SyntaxKind::RBRACE | SyntaxKind::RPAREN | SyntaxKind::RBRACKET => {
                if open == 0 {
                    if p.position() == start {
                        p.bump();
                    }
                    break;
                }
                open -= 1;
            }
            _ => {}
        }
        p.bump();
    }

    m.complete(p, SyntaxKind::ERROR);
}

/// Wrap the current token in an ERROR node.
fn error_token(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    m.complete(p, SyntaxKind::ERROR);
}
