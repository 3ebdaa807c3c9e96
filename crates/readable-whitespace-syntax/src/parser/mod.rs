//! # Parser - Event-Based Tree Construction
//!
//! This module implements the core parsing logic, transforming a token stream
//! into a syntax tree using the **event-based** architecture from rust-analyzer.
//!
//! Instead of building the tree directly, grammar functions emit a flat list of
//! **events** ([`Event`]) and the [`Sink`] replays them into a Rowan tree. A
//! half-typed file therefore never leaves a half-built tree behind: grammar
//! code only ever appends events.
//!
//! ## Trivia
//!
//! Whitespace and comments are ordinary tokens in the stream. The grammar
//! follows one rule: **skip trivia before a token, never after it**. A node is
//! started only once the trivia in front of it has been consumed into the
//! parent, and a node never eats the trivia that follows its last token. As a
//! result the gaps and comments between two statements are direct children
//! of the enclosing block:
//!
//! ```text
//! BLOCK
//!   LBRACE "{"
//!   WHITESPACE "\n    "
//!   EXPR_STMT ...
//!   WHITESPACE "\n    "
//!   LINE_COMMENT "// done"
//!   WHITESPACE "\n    "
//!   RETURN_STMT ...
//!   WHITESPACE "\n"
//!   RBRACE "}"
//! ```
//!
//! ## The Marker System
//!
//! When you call `parser.start()`, you get a [`Marker`]. It **must** be either
//! completed with `marker.complete(parser, KIND)` or abandoned with
//! `marker.abandon(parser)`; dropping it otherwise panics.
//!
//! ```ignore
//! let m = parser.start();
//! parser.bump();
//! m.complete(parser, SyntaxKind::EMPTY_STMT);
//! ```
//!
//! ## Public API
//!
//! The main entry point is [`parse`]:
//!
//! ```
//! use readable_whitespace_syntax::parse;
//!
//! let tree = parse("class Foo { }\n");
//! println!("{:#?}", tree);
//! ```

pub mod event;
pub mod sink;

mod grammar;

use crate::lexer::{Token, lex};
use crate::syntax_kind::{SyntaxKind, SyntaxNode};
use event::Event;
use sink::Sink;

/// Nesting depth past which grammar functions stop recursing.
///
/// Deeper input is still kept in the tree, as flat ERROR nodes.
pub const MAX_DEPTH: usize = 256;

/// The parser state machine.
///
/// Holds the token stream (trivia included), current position, and
/// accumulated events. Grammar functions receive `&mut Parser` and use its
/// methods to:
///
/// - Inspect tokens: `current()`, `at()`, `at_end()` look at the raw next
///   token; `nth_significant()`, `at_next()` and `lookahead()` look past trivia
/// - Consume tokens: `bump()`, `eat()`, `eat_next()`, `skip_trivia()`
/// - Build structure: `start()` → `Marker` → `complete()`/`abandon()`
/// - Recurse: `nested()` bounds how deep grammar functions call each other
pub struct Parser<'t, 'input> {
    tokens: &'t [Token<'input>],
    pos: usize,
    events: Vec<Event>,
    depth: usize,
}

impl<'t, 'input> Parser<'t, 'input> {
    /// Create a new parser from a slice of tokens.
    pub fn new(tokens: &'t [Token<'input>]) -> Self {
        Self {
            tokens,
            pos: 0,
            events: Vec::new(),
            depth: 0,
        }
    }

    /// Parse the tokens and return a syntax tree.
    pub fn parse(mut self) -> SyntaxNode {
        grammar::root(&mut self);
        let sink = Sink::new(self.tokens, self.events);
        sink.finish()
    }

    /// Start a new node and return a marker.
    pub fn start(&mut self) -> Marker {
        let pos = self.events.len();
        self.events.push(Event::Placeholder);
        Marker {
            pos,
            completed: false,
        }
    }

    /// Current raw token kind (trivia included), or EOF if past end.
    pub fn current(&self) -> SyntaxKind {
        self.tokens
            .get(self.pos)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    /// Check if at end of input.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Check if current raw token is of given kind.
    pub fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    /// Consume the current token if it matches.
    pub fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume the current token unconditionally.
    pub fn bump(&mut self) {
        if !self.at_end() {
            let kind = self.current();
            self.events.push(Event::token(kind));
            self.pos += 1;
        }
    }

    /// Consume any whitespace and comments into the currently open node.
    pub fn skip_trivia(&mut self) {
        while self.current().is_trivia() {
            self.bump();
        }
    }

    /// Upcoming non-trivia tokens, without consuming anything.
    pub fn lookahead(&self) -> impl Iterator<Item = &Token<'input>> + '_ {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
    }

    /// Kind of the nth upcoming non-trivia token, or EOF.
    pub fn nth_significant(&self, n: usize) -> SyntaxKind {
        self.lookahead()
            .nth(n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    /// Check if the next non-trivia token is of given kind.
    pub fn at_next(&self, kind: SyntaxKind) -> bool {
        self.nth_significant(0) == kind
    }

    /// Consume leading trivia and the next token, but only if that token matches.
    ///
    /// When it does not match, nothing is consumed, so trailing trivia stays
    /// available to the parent node.
    pub fn eat_next(&mut self, kind: SyntaxKind) -> bool {
        if self.at_next(kind) {
            self.skip_trivia();
            self.bump();
            true
        } else {
            false
        }
    }

    /// Run `f` one nesting level deeper.
    ///
    /// Returns `false` without running `f` once [`MAX_DEPTH`] is reached.
    pub fn nested(&mut self, f: impl FnOnce(&mut Self)) -> bool {
        if self.depth >= MAX_DEPTH {
            return false;
        }
        self.depth += 1;
        f(self);
        self.depth -= 1;
        true
    }

    /// Number of raw tokens consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }
}

/// A marker for a node being constructed.
///
/// When you call `parser.start()`, a `Placeholder` event is pushed and you get
/// a `Marker` pointing to it. The marker must be completed or abandoned; the
/// `Drop` impl panics otherwise, which catches grammar bugs at runtime rather
/// than producing corrupt trees.
#[must_use = "Markers must be completed or abandoned, dropping them is a bug"]
pub struct Marker {
    /// Position in the events vector where our Placeholder lives
    pos: usize,
    /// Tracks whether complete() or abandon() was called
    completed: bool,
}

impl Marker {
    /// Complete this marker, creating a node of the given kind.
    pub fn complete(mut self, p: &mut Parser<'_, '_>, kind: SyntaxKind) {
        self.completed = true;
        let event_at_pos = &mut p.events[self.pos];
        assert!(matches!(event_at_pos, Event::Placeholder));
        *event_at_pos = Event::Start { kind };
        p.events.push(Event::Finish);
    }

    /// Abandon this marker without creating a node.
    ///
    /// Only removes the placeholder if it's the last event; otherwise the
    /// placeholder stays inert and the Sink ignores it.
    pub fn abandon(mut self, p: &mut Parser<'_, '_>) {
        self.completed = true;
        if self.pos == p.events.len() - 1 {
            match p.events.pop() {
                Some(Event::Placeholder) => {}
                _ => unreachable!(),
            }
        }
    }
}

impl Drop for Marker {
    fn drop(&mut self) {
        if !self.completed && !std::thread::panicking() {
            panic!("Marker must be either completed or abandoned");
        }
    }
}

/// Parse brace-language source into a syntax tree.
///
/// Never fails: malformed input still yields a tree holding every byte.
pub fn parse(source: &str) -> SyntaxNode {
    let tokens = lex(source);
    let parser = Parser::new(&tokens);
    parser.parse()
}
