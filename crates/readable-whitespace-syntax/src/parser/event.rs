//! # Parser Events
//!
//! Events are the intermediate representation between parsing and tree building.
//! The parser emits a **flat sequence** of them and the
//! [`Sink`](super::sink::Sink) replays the sequence into a Rowan tree:
//!
//! ```text
//! Start(RETURN_STMT)   ← Begin a RETURN_STMT node
//!   Token(RETURN_KW)   ← Add the next lexer token
//!   Token(WHITESPACE)
//!   Start(EXPR)
//!     Token(NUMBER)
//!   Finish
//!   Token(SEMICOLON)
//! Finish               ← End the RETURN_STMT node
//! ```
//!
//! Start pushes onto the Sink's node stack, Finish pops. Tokens are taken from
//! the lexer output in order, so every event stream that consumes all tokens
//! reproduces the source text exactly.

use crate::syntax_kind::SyntaxKind;

/// An event emitted by the parser during tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Begin a new composite node of the given kind.
    Start { kind: SyntaxKind },

    /// Add the next lexer token to the current node.
    Token { kind: SyntaxKind },

    /// Finish the current node.
    Finish,

    /// Reserved slot for a node whose kind is not known yet.
    ///
    /// `marker.complete()` replaces it with a `Start`; an abandoned
    /// placeholder is skipped by the Sink.
    Placeholder,
}

impl Event {
    pub fn start(kind: SyntaxKind) -> Self {
        Event::Start { kind }
    }

    pub fn token(kind: SyntaxKind) -> Self {
        Event::Token { kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_start_creation() {
        let event = Event::start(SyntaxKind::BLOCK);
        assert_eq!(
            event,
            Event::Start {
                kind: SyntaxKind::BLOCK
            }
        );
    }

    #[test]
    fn event_token_creation() {
        let event = Event::token(SyntaxKind::RBRACE);
        assert_eq!(
            event,
            Event::Token {
                kind: SyntaxKind::RBRACE
            }
        );
    }
}
