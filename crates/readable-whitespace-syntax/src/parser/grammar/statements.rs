//! Blocks and statements.

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

use super::{error_token, expressions, items, too_deep};

/// Tokens that end an expression statement.
///
/// Besides `;`, a statement keyword also ends it, so a missing semicolon
/// does not swallow the next statement.
const STATEMENT_STOPS: &[SyntaxKind] = &[
    SyntaxKind::SEMICOLON,
    SyntaxKind::RETURN_KW,
    SyntaxKind::IF_KW,
    SyntaxKind::WHILE_KW,
    SyntaxKind::FOR_KW,
    SyntaxKind::DO_KW,
    SyntaxKind::TRY_KW,
    SyntaxKind::THROW_KW,
    SyntaxKind::BREAK_KW,
    SyntaxKind::CONTINUE_KW,
];

const LABEL_STOPS: &[SyntaxKind] = &[SyntaxKind::COLON, SyntaxKind::ARROW, SyntaxKind::SEMICOLON];

/// Parse `{ statements }`.
///
/// Whitespace and comments between statements become direct children of the
/// BLOCK node.
pub(super) fn block(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();

    loop {
        p.skip_trivia();
        if p.at(SyntaxKind::RBRACE) || p.at_end() {
            break;
        }
        let before = p.position();
        statement(p);
        if p.position() == before {
            error_token(p);
        }
    }

    p.eat(SyntaxKind::RBRACE);
    m.complete(p, SyntaxKind::BLOCK);
}

/// Parse one statement. The caller has already consumed leading trivia.
fn statement(p: &mut Parser<'_, '_>) {
    if !p.nested(statement_by_kind) {
        too_deep(p);
    }
}

fn statement_by_kind(p: &mut Parser<'_, '_>) {
    match p.current() {
        SyntaxKind::LBRACE => block_stmt(p),
        SyntaxKind::RETURN_KW => return_stmt(p),
        SyntaxKind::IF_KW => if_stmt(p),
        SyntaxKind::WHILE_KW => loop_stmt(p, SyntaxKind::WHILE_STMT),
        SyntaxKind::FOR_KW => loop_stmt(p, SyntaxKind::FOR_STMT),
        SyntaxKind::DO_KW => do_while_stmt(p),
        SyntaxKind::TRY_KW => try_stmt(p),
        SyntaxKind::SWITCH_KW => guarded_block_stmt(p, SyntaxKind::SWITCH_STMT),
        SyntaxKind::SYNCHRONIZED_KW if p.nth_significant(1) == SyntaxKind::LPAREN => {
            guarded_block_stmt(p, SyntaxKind::SYNCHRONIZED_STMT)
        }
        SyntaxKind::CASE_KW | SyntaxKind::DEFAULT_KW => switch_label(p),
        SyntaxKind::THROW_KW => keyword_stmt(p, SyntaxKind::THROW_STMT),
        SyntaxKind::BREAK_KW => keyword_stmt(p, SyntaxKind::BREAK_STMT),
        SyntaxKind::CONTINUE_KW => keyword_stmt(p, SyntaxKind::CONTINUE_STMT),
        SyntaxKind::SEMICOLON => {
            let m = p.start();
            p.bump();
            m.complete(p, SyntaxKind::EMPTY_STMT);
        }
        SyntaxKind::RPAREN | SyntaxKind::RBRACKET => error_token(p),
        _ if items::is_type_declaration(p) => {
            let m = p.start();
            items::class_decl(p);
            m.complete(p, SyntaxKind::DECLARATION_STMT);
        }
        _ => expr_stmt(p),
    }
}

/// Parse the statement that forms the body of `if`, `else`, `while`, `for` or `do`.
///
/// A body may be a braceless single statement, in which case its parent is
/// the enclosing statement rather than a BLOCK.
fn body(p: &mut Parser<'_, '_>) {
    if matches!(p.nth_significant(0), SyntaxKind::RBRACE | SyntaxKind::EOF) {
        return;
    }
    p.skip_trivia();
    statement(p);
}

/// Parse a parenthesised header such as `(x > 0)` if one follows.
fn condition(p: &mut Parser<'_, '_>) {
    if p.at_next(SyntaxKind::LPAREN) {
        p.skip_trivia();
        let m = p.start();
        expressions::delimited(p, SyntaxKind::RPAREN);
        m.complete(p, SyntaxKind::CONDITION);
    }
}

/// Parse a block if one follows.
fn block_if_present(p: &mut Parser<'_, '_>) {
    if p.at_next(SyntaxKind::LBRACE) {
        p.skip_trivia();
        block(p);
    }
}

fn block_stmt(p: &mut Parser<'_, '_>) {
    let m = p.start();
    block(p);
    m.complete(p, SyntaxKind::BLOCK_STMT);
}

fn return_stmt(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    expressions::expr(p, STATEMENT_STOPS);
    p.eat_next(SyntaxKind::SEMICOLON);
    m.complete(p, SyntaxKind::RETURN_STMT);
}

fn if_stmt(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    condition(p);
    body(p);
    if p.eat_next(SyntaxKind::ELSE_KW) {
        body(p);
    }
    m.complete(p, SyntaxKind::IF_STMT);
}

/// `while (...) body` and `for (...) body`.
fn loop_stmt(p: &mut Parser<'_, '_>, kind: SyntaxKind) {
    let m = p.start();
    p.bump();
    condition(p);
    body(p);
    m.complete(p, kind);
}

fn do_while_stmt(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    body(p);
    if p.eat_next(SyntaxKind::WHILE_KW) {
        condition(p);
    }
    p.eat_next(SyntaxKind::SEMICOLON);
    m.complete(p, SyntaxKind::DO_WHILE_STMT);
}

fn try_stmt(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    // try-with-resources
    condition(p);
    block_if_present(p);

    while p.at_next(SyntaxKind::CATCH_KW) {
        p.skip_trivia();
        let catch = p.start();
        p.bump();
        condition(p);
        block_if_present(p);
        catch.complete(p, SyntaxKind::CATCH_CLAUSE);
    }

    if p.at_next(SyntaxKind::FINALLY_KW) {
        p.skip_trivia();
        let finally = p.start();
        p.bump();
        block_if_present(p);
        finally.complete(p, SyntaxKind::FINALLY_CLAUSE);
    }

    m.complete(p, SyntaxKind::TRY_STMT);
}

/// `switch (...) { ... }` and `synchronized (...) { ... }`.
///
/// A switch body is an ordinary BLOCK whose statements include the case labels.
fn guarded_block_stmt(p: &mut Parser<'_, '_>, kind: SyntaxKind) {
    let m = p.start();
    p.bump();
    condition(p);
    block_if_present(p);
    m.complete(p, kind);
}

/// `case A, B:`, `default:`, or the arrow forms `case A ->`.
fn switch_label(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    expressions::expr(p, LABEL_STOPS);
    if !p.eat_next(SyntaxKind::COLON) {
        p.eat_next(SyntaxKind::ARROW);
    }
    m.complete(p, SyntaxKind::SWITCH_LABEL_STMT);
}

/// `throw`, `break` and `continue`, each with an optional operand.
fn keyword_stmt(p: &mut Parser<'_, '_>, kind: SyntaxKind) {
    let m = p.start();
    p.bump();
    expressions::expr(p, STATEMENT_STOPS);
    p.eat_next(SyntaxKind::SEMICOLON);
    m.complete(p, kind);
}

fn expr_stmt(p: &mut Parser<'_, '_>) {
    let m = p.start();
    expressions::expr(p, STATEMENT_STOPS);
    p.eat_next(SyntaxKind::SEMICOLON);
    m.complete(p, SyntaxKind::EXPR_STMT);
}
