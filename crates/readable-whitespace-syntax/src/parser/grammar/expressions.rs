//! Expressions.
//!
//! Expressions are not given any inner structure beyond bracketed groups.
//! The exceptions are the places where statements can hide inside an
//! expression: lambda bodies (`-> { ... }`) are parsed as blocks and
//! anonymous classes (`new T() { ... }`) as class bodies.

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

use super::{error_token, items, statements, too_deep};

fn is_boundary(kind: SyntaxKind, stops: &[SyntaxKind]) -> bool {
    kind == SyntaxKind::EOF
        || stops.contains(&kind)
        || matches!(
            kind,
            SyntaxKind::RPAREN | SyntaxKind::RBRACKET | SyntaxKind::RBRACE
        )
}

/// Parse an EXPR node, stopping before any of `stops` or an unmatched closer.
///
/// Produces nothing when the next significant token is already a boundary.
pub(super) fn expr(p: &mut Parser<'_, '_>, stops: &[SyntaxKind]) {
    if is_boundary(p.nth_significant(0), stops) {
        return;
    }
    p.skip_trivia();
    let m = p.start();
    expr_tokens(p, stops);
    m.complete(p, SyntaxKind::EXPR);
}

/// Consume expression tokens into the current node until a boundary.
pub(super) fn expr_tokens(p: &mut Parser<'_, '_>, stops: &[SyntaxKind]) {
    // A bracketed group is recorded in `prev` by its opener
    let mut prev = SyntaxKind::EOF;
    let mut after_new = false;

    loop {
        let next = p.nth_significant(0);
        if is_boundary(next, stops) {
            break;
        }
        p.skip_trivia();

        match next {
            SyntaxKind::LPAREN => delimited(p, SyntaxKind::RPAREN),
            SyntaxKind::LBRACKET => delimited(p, SyntaxKind::RBRACKET),
            SyntaxKind::LBRACE if prev == SyntaxKind::ARROW => statements::block(p),
            SyntaxKind::LBRACE if after_new && prev == SyntaxKind::LPAREN => items::class_body(p),
            // Array initializer
            SyntaxKind::LBRACE => delimited(p, SyntaxKind::RBRACE),
            _ => p.bump(),
        }

        match next {
            SyntaxKind::NEW_KW => after_new = true,
            SyntaxKind::COMMA | SyntaxKind::ARROW | SyntaxKind::LBRACE => after_new = false,
            _ => {}
        }
        prev = next;
    }
}

/// Parse a bracketed group from its opener through the matching `close`.
///
/// A mismatched `)` or `]` inside the group becomes an ERROR node. A `}` or a
/// `return` ends an unterminated group so the enclosing block can recover.
pub(super) fn delimited(p: &mut Parser<'_, '_>, close: SyntaxKind) {
    if !p.nested(|p| group(p, close)) {
        too_deep(p);
    }
}

fn group(p: &mut Parser<'_, '_>, close: SyntaxKind) {
    p.bump();

    loop {
        expr_tokens(p, &[close, SyntaxKind::RETURN_KW]);
        let next = p.nth_significant(0);
        if next == close {
            p.skip_trivia();
            p.bump();
            break;
        }
        if matches!(next, SyntaxKind::RPAREN | SyntaxKind::RBRACKET) {
            p.skip_trivia();
            error_token(p);
            continue;
        }
        break;
    }
}
