//! Type declarations and class members.

use std::iter::Peekable;

use crate::lexer::Token;
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

use super::{error_token, expressions, statements, too_deep};

/// Identifiers that may precede a type keyword in a declaration.
const MODIFIERS: &[&str] = &[
    "public",
    "protected",
    "private",
    "static",
    "final",
    "abstract",
    "sealed",
    "non",
    "strictfp",
];

enum Member {
    Type,
    Method,
    Initializer,
    Field,
    Stray,
}

/// Parse one class member, or one top-level item.
pub(super) fn member(p: &mut Parser<'_, '_>) {
    if !p.nested(member_by_kind) {
        too_deep(p);
    }
}

fn member_by_kind(p: &mut Parser<'_, '_>) {
    match classify(p) {
        Member::Type => class_decl(p),
        Member::Method => method(p),
        Member::Initializer => initializer(p),
        Member::Field => field(p),
        Member::Stray => error_token(p),
    }
}

/// Decide what kind of member starts here by scanning ahead.
///
/// A `(` before any `=`, `;` or `{` means a method; a `{` first means an
/// initializer block. Annotation arguments are skipped so that
/// `@Size(max = 3) int x;` is still a field.
fn classify(p: &Parser<'_, '_>) -> Member {
    if matches!(
        p.nth_significant(0),
        SyntaxKind::RPAREN | SyntaxKind::RBRACKET | SyntaxKind::RBRACE
    ) {
        return Member::Stray;
    }
    if is_type_declaration(p) {
        return Member::Type;
    }

    let mut tokens = p.lookahead().peekable();
    while let Some(token) = tokens.next() {
        match token.kind {
            SyntaxKind::AT => skip_annotation(&mut tokens),
            SyntaxKind::LPAREN => return Member::Method,
            SyntaxKind::LBRACE => return Member::Initializer,
            SyntaxKind::SEMICOLON | SyntaxKind::RBRACE => return Member::Field,
            SyntaxKind::OPERATOR if token.text == "=" => return Member::Field,
            _ => {}
        }
    }
    Member::Field
}

/// Check whether a class, interface, enum, record or annotation type
/// declaration starts at the next significant token.
pub(super) fn is_type_declaration(p: &Parser<'_, '_>) -> bool {
    let mut tokens = p.lookahead().peekable();
    while let Some(token) = tokens.next() {
        match token.kind {
            SyntaxKind::AT => {
                if tokens
                    .peek()
                    .is_some_and(|t| t.kind == SyntaxKind::INTERFACE_KW)
                {
                    return true;
                }
                skip_annotation(&mut tokens);
            }
            kind if kind.is_type_keyword() => return true,
            SyntaxKind::IDENT if token.text == "record" => {
                return tokens.peek().is_some_and(|t| t.kind == SyntaxKind::IDENT);
            }
            SyntaxKind::IDENT if MODIFIERS.contains(&token.text) => {}
            // `non-sealed`
            SyntaxKind::OPERATOR if token.text == "-" => {}
            _ => return false,
        }
    }
    false
}

/// Skip an annotation's name and arguments; the `@` is already consumed.
fn skip_annotation<'a, 'i, I>(tokens: &mut Peekable<I>)
where
    I: Iterator<Item = &'a Token<'i>>,
    'i: 'a,
{
    if tokens.next_if(|t| t.kind == SyntaxKind::IDENT).is_none() {
        return;
    }
    while tokens.next_if(|t| t.kind == SyntaxKind::DOT).is_some() {
        tokens.next_if(|t| t.kind == SyntaxKind::IDENT);
    }
    if tokens.next_if(|t| t.kind == SyntaxKind::LPAREN).is_some() {
        let mut depth = 1usize;
        for token in tokens.by_ref() {
            match token.kind {
                SyntaxKind::LPAREN => depth += 1,
                SyntaxKind::RPAREN => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
        }
    }
}

/// Consume an annotation starting at `@`.
fn annotation(p: &mut Parser<'_, '_>) {
    p.bump();
    if !p.eat_next(SyntaxKind::IDENT) {
        return;
    }
    while p.eat_next(SyntaxKind::DOT) {
        p.eat_next(SyntaxKind::IDENT);
    }
    if p.at_next(SyntaxKind::LPAREN) {
        p.skip_trivia();
        expressions::delimited(p, SyntaxKind::RPAREN);
    }
}

/// Parse a type declaration: header tokens followed by a class body.
pub(super) fn class_decl(p: &mut Parser<'_, '_>) {
    let m = p.start();

    loop {
        match p.nth_significant(0) {
            SyntaxKind::AT => {
                p.skip_trivia();
                annotation(p);
            }
            // Record components
            SyntaxKind::LPAREN => {
                p.skip_trivia();
                expressions::delimited(p, SyntaxKind::RPAREN);
            }
            SyntaxKind::LBRACE => {
                p.skip_trivia();
                class_body(p);
                break;
            }
            SyntaxKind::SEMICOLON => {
                p.eat_next(SyntaxKind::SEMICOLON);
                break;
            }
            SyntaxKind::RBRACE | SyntaxKind::RPAREN | SyntaxKind::RBRACKET | SyntaxKind::EOF => {
                break;
            }
            _ => {
                p.skip_trivia();
                p.bump();
            }
        }
    }

    m.complete(p, SyntaxKind::CLASS);
}

/// Parse `{ members }`. Also used for anonymous class bodies.
pub(super) fn class_body(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();

    loop {
        p.skip_trivia();
        if p.at(SyntaxKind::RBRACE) || p.at_end() {
            break;
        }
        let before = p.position();
        member(p);
        if p.position() == before {
            error_token(p);
        }
    }

    p.eat(SyntaxKind::RBRACE);
    m.complete(p, SyntaxKind::CLASS_BODY);
}

fn method(p: &mut Parser<'_, '_>) {
    let m = p.start();

    // Modifiers, type parameters, return type and name
    loop {
        match p.nth_significant(0) {
            SyntaxKind::AT => {
                p.skip_trivia();
                annotation(p);
            }
            SyntaxKind::LPAREN
            | SyntaxKind::LBRACE
            | SyntaxKind::SEMICOLON
            | SyntaxKind::RBRACE
            | SyntaxKind::RPAREN
            | SyntaxKind::RBRACKET
            | SyntaxKind::EOF => break,
            _ => {
                p.skip_trivia();
                p.bump();
            }
        }
    }

    if p.at_next(SyntaxKind::LPAREN) {
        p.skip_trivia();
        let params = p.start();
        expressions::delimited(p, SyntaxKind::RPAREN);
        params.complete(p, SyntaxKind::PARAM_LIST);
    }

    // `throws ...`, annotation defaults, then the body or `;`
    loop {
        match p.nth_significant(0) {
            SyntaxKind::LBRACE => {
                p.skip_trivia();
                statements::block(p);
                break;
            }
            SyntaxKind::SEMICOLON => {
                p.eat_next(SyntaxKind::SEMICOLON);
                break;
            }
            SyntaxKind::RBRACE | SyntaxKind::RPAREN | SyntaxKind::RBRACKET | SyntaxKind::EOF => {
                break;
            }
            SyntaxKind::AT => {
                p.skip_trivia();
                annotation(p);
            }
            _ => {
                p.skip_trivia();
                p.bump();
            }
        }
    }

    m.complete(p, SyntaxKind::METHOD);
}

fn initializer(p: &mut Parser<'_, '_>) {
    let m = p.start();

    loop {
        match p.nth_significant(0) {
            SyntaxKind::LBRACE => {
                p.skip_trivia();
                statements::block(p);
                break;
            }
            SyntaxKind::RBRACE
            | SyntaxKind::RPAREN
            | SyntaxKind::RBRACKET
            | SyntaxKind::SEMICOLON
            | SyntaxKind::EOF => break,
            SyntaxKind::AT => {
                p.skip_trivia();
                annotation(p);
            }
            _ => {
                p.skip_trivia();
                p.bump();
            }
        }
    }

    m.complete(p, SyntaxKind::INITIALIZER);
}

fn field(p: &mut Parser<'_, '_>) {
    let m = p.start();
    expressions::expr_tokens(p, &[SyntaxKind::SEMICOLON]);
    p.eat_next(SyntaxKind::SEMICOLON);
    m.complete(p, SyntaxKind::FIELD);
}
