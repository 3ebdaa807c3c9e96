//! # Hint Decisions
//!
//! Walks a syntax tree and decides where a synthetic blank display line would
//! make the code easier to read. Two rules apply:
//!
//! - **Above a return.** A `return` that is a direct statement of a block with
//!   at least two statements gets a blank line above it, unless the source
//!   already has one. Comments directly above the return move with it, so the
//!   blank line goes above the comments.
//! - **Below a closing brace.** When an element ending in `}` is followed by
//!   whitespace, the line after the brace gets a blank line above it, unless
//!   that line is already empty or the code that follows is a `return` (the
//!   first rule covers returns). This also separates a nested `}` from the
//!   enclosing one.
//!
//! ```text
//! int foo() {
//!     if (false) {
//!         return 1;
//!     }
//!                                  <- below closing brace
//!     System.out.println("x");
//!                                  <- above return
//!     return 2;
//! }
//! ```
//!
//! Rules are evaluated independently for every element, in document order.
//! A rule that cannot be evaluated for one element (missing sibling, offset
//! outside the text) is skipped with a trace log; it never aborts the scan.

use thiserror::Error;

use crate::text::TextBuffer;
use crate::tree::{NodeKind, TreeNode};

/// Where the blank line goes relative to the marker offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placement {
    Above,
    Below,
}

/// A request to render one blank display line at `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HintMarker {
    /// Byte offset into the text the tree was parsed from.
    pub offset: usize,
    pub placement: Placement,
}

impl HintMarker {
    pub fn above(offset: usize) -> Self {
        Self {
            offset,
            placement: Placement::Above,
        }
    }

    pub fn below(offset: usize) -> Self {
        Self {
            offset,
            placement: Placement::Below,
        }
    }
}

/// Receiver for markers as they are decided.
pub trait HintSink {
    fn emit(&mut self, marker: HintMarker);
}

impl HintSink for Vec<HintMarker> {
    fn emit(&mut self, marker: HintMarker) {
        self.push(marker);
    }
}

/// Which rules to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintRules {
    pub above_return: bool,
    pub below_closing_brace: bool,
}

impl Default for HintRules {
    fn default() -> Self {
        Self {
            above_return: true,
            below_closing_brace: true,
        }
    }
}

/// Why a rule could not be evaluated for an element.
///
/// Never surfaces to callers: the element is skipped and the scan goes on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HintError {
    #[error("malformed tree: {0}")]
    MalformedStructure(&'static str),
    #[error("offset {offset} does not map to a line of the text")]
    AmbiguousWhitespan { offset: usize },
    #[error("anchor offset {offset} lies outside the text")]
    NoAnchorFound { offset: usize },
}

type RuleResult = Result<Option<HintMarker>, HintError>;

/// Evaluate `rules` for every element under `root` and emit the resulting
/// markers into `sink`, in document order.
pub fn collect_hints<N, S>(root: &N, text: &TextBuffer, rules: HintRules, sink: &mut S)
where
    N: TreeNode,
    S: HintSink + ?Sized,
{
    let mut emitted = 0usize;
    let mut stack = vec![root.clone()];

    while let Some(element) = stack.pop() {
        let decision = match element.kind() {
            NodeKind::ReturnStatement if rules.above_return => above_return(&element, text),
            NodeKind::Whitespace if rules.below_closing_brace => {
                below_closing_brace(&element, text)
            }
            _ => Ok(None),
        };

        match decision {
            Ok(Some(marker)) => {
                sink.emit(marker);
                emitted += 1;
            }
            Ok(None) => {}
            Err(err) => log::trace!("skipping element at {}: {err}", element.start_offset()),
        }

        // Push children in reverse so the first child is visited next
        let mut children = Vec::new();
        let mut child = element.first_child();
        while let Some(c) = child {
            child = c.next_sibling();
            children.push(c);
        }
        stack.extend(children.into_iter().rev());
    }

    log::debug!("decided {emitted} blank-line hints");
}

/// All markers for `root` with every rule enabled.
pub fn hints<N: TreeNode>(root: &N, text: &TextBuffer) -> Vec<HintMarker> {
    let mut markers = Vec::new();
    collect_hints(root, text, HintRules::default(), &mut markers);
    markers
}

/// Blank line above a return that closes a multi-statement block.
fn above_return<N: TreeNode>(ret: &N, text: &TextBuffer) -> RuleResult {
    let parent = ret
        .parent()
        .ok_or(HintError::MalformedStructure("return statement without parent"))?;
    if parent.kind() != NodeKind::Block || statement_count(&parent) < 2 {
        return Ok(None);
    }

    let Some(anchor) = anchor_above(ret, text)? else {
        return Ok(None);
    };
    let offset = anchor.start_offset();
    if offset > text.len() {
        return Err(HintError::NoAnchorFound { offset });
    }
    Ok(Some(HintMarker::above(offset)))
}

/// Walk back over the comments attached to `ret`.
///
/// Returns the topmost attached comment (or `ret` itself), or `None` when a
/// blank line already separates it from the code above.
fn anchor_above<N: TreeNode>(ret: &N, text: &TextBuffer) -> Result<Option<N>, HintError> {
    let mut anchor = ret.clone();
    let mut sibling = ret.prev_sibling();

    while let Some(element) = sibling {
        sibling = element.prev_sibling();
        match element.kind() {
            NodeKind::Whitespace => {
                if line_breaks(&element, text)? > 1 {
                    return Ok(None);
                }
            }
            NodeKind::Comment => anchor = element,
            _ => break,
        }
    }

    Ok(Some(anchor))
}

/// Blank line below a `}` that ends a statement, unless a return follows.
fn below_closing_brace<N: TreeNode>(gap: &N, text: &TextBuffer) -> RuleResult {
    if next_significant(gap).is_some_and(|next| next.kind() == NodeKind::ReturnStatement) {
        return Ok(None);
    }

    let prev = gap
        .prev_sibling()
        .ok_or(HintError::MalformedStructure("whitespace without previous sibling"))?;
    if deepest_last(prev).kind() != NodeKind::RightBrace {
        return Ok(None);
    }

    let start = gap.start_offset();
    let line = text
        .line_of_offset(start)
        .ok_or(HintError::AmbiguousWhitespan { offset: start })?;
    let next_line = line + 1;
    match text.is_line_empty(next_line) {
        None => Err(HintError::AmbiguousWhitespan { offset: start }),
        Some(true) => Ok(None),
        Some(false) => {
            let offset = text
                .line_start(next_line)
                .ok_or(HintError::AmbiguousWhitespan { offset: start })?;
            Ok(Some(HintMarker::below(offset)))
        }
    }
}

fn statement_count<N: TreeNode>(block: &N) -> usize {
    let mut count = 0;
    let mut child = block.first_child();
    while let Some(c) = child {
        if c.kind().is_statement() {
            count += 1;
        }
        child = c.next_sibling();
    }
    count
}

/// Number of line breaks inside a whitespace element.
fn line_breaks<N: TreeNode>(ws: &N, text: &TextBuffer) -> Result<usize, HintError> {
    let start = ws.start_offset();
    let end = ws.end_offset();
    let start_line = text
        .line_of_offset(start)
        .ok_or(HintError::AmbiguousWhitespan { offset: start })?;
    let end_line = text
        .line_of_offset(end)
        .ok_or(HintError::AmbiguousWhitespan { offset: end })?;
    Ok(end_line.saturating_sub(start_line))
}

fn next_significant<N: TreeNode>(element: &N) -> Option<N> {
    let mut next = element.next_sibling();
    while let Some(n) = next {
        if !n.kind().is_trivia() {
            return Some(n);
        }
        next = n.next_sibling();
    }
    None
}

fn deepest_last<N: TreeNode>(mut element: N) -> N {
    while let Some(child) = element.last_child() {
        element = child;
    }
    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use readable_whitespace_syntax::{SyntaxElement, parse};
    use rowan::NodeOrToken;
    use rstest::rstest;

    fn markers(source: &str) -> Vec<HintMarker> {
        let root: SyntaxElement = NodeOrToken::Node(parse(source));
        hints(&root, &TextBuffer::new(source))
    }

    fn offset_of(source: &str, needle: &str) -> usize {
        source
            .find(needle)
            .unwrap_or_else(|| panic!("{needle:?} not in source"))
    }

    #[test]
    fn return_after_statement_gets_line_above() {
        let source = "void f() {\n    a();\n    return 1;\n}\n";
        assert_eq!(
            markers(source),
            vec![HintMarker::above(offset_of(source, "return"))]
        );
    }

    #[test]
    fn lone_return_gets_nothing() {
        let source = "void f() {\n    return 1;\n}\n";
        assert_eq!(markers(source), vec![]);
    }

    #[test]
    fn existing_blank_line_above_return_is_respected() {
        let source = "void f() {\n    a();\n\n    return 1;\n}\n";
        assert_eq!(markers(source), vec![]);
    }

    #[test]
    fn whitespace_only_line_counts_as_blank_above_return() {
        let source = "void f() {\n    a();\n    \n    return 1;\n}\n";
        assert_eq!(markers(source), vec![]);
    }

    #[test]
    fn comments_move_with_the_return() {
        let source = "void f() {\n    a();\n    // first\n    /* second */\n    return 1;\n}\n";
        assert_eq!(
            markers(source),
            vec![HintMarker::above(offset_of(source, "// first"))]
        );
    }

    #[test]
    fn blank_line_above_comments_is_respected() {
        let source = "void f() {\n    a();\n\n    // why\n    return 1;\n}\n";
        assert_eq!(markers(source), vec![]);
    }

    #[test]
    fn blank_line_between_comment_and_return_is_respected() {
        let source = "void f() {\n    a();\n    // why\n\n    return 1;\n}\n";
        assert_eq!(markers(source), vec![]);
    }

    #[test]
    fn braceless_if_return_is_not_a_block_statement() {
        let source = "void f() {\n    a();\n    if (x) return 1;\n    b();\n}\n";
        assert_eq!(markers(source), vec![]);
    }

    #[test]
    fn brace_followed_by_statement_gets_line_below() {
        let source = "void f() {\n    if (x) {\n        a();\n    }\n    b();\n}\n";
        assert_eq!(
            markers(source),
            vec![HintMarker::below(offset_of(source, "    b();"))]
        );
    }

    #[test]
    fn brace_followed_by_return_defers_to_return_rule() {
        let source = "void f() {\n    if (x) {\n        a();\n    }\n    return 1;\n}\n";
        assert_eq!(
            markers(source),
            vec![HintMarker::above(offset_of(source, "return"))]
        );
    }

    #[test]
    fn brace_followed_by_comment_then_return_defers_too() {
        let source = "void f() {\n    if (x) {\n        a();\n    }\n    // done\n    return 1;\n}\n";
        assert_eq!(
            markers(source),
            vec![HintMarker::above(offset_of(source, "// done"))]
        );
    }

    #[test]
    fn brace_followed_by_blank_line_gets_nothing() {
        let source = "void f() {\n    while (x) {\n        a();\n    }\n\n    b();\n}\n";
        assert_eq!(markers(source), vec![]);
    }

    #[test]
    fn brace_followed_by_enclosing_brace_gets_line_below() {
        let source = "class A {\n    void f() {\n        a();\n    }\n}\n";
        assert_eq!(markers(source), vec![HintMarker::below(source.len() - 2)]);
    }

    #[test]
    fn nested_braces_are_each_separated() {
        let source = "void f() {\n    while (x) {\n        if (y) {\n            a();\n        }\n    }\n    b();\n}\n";
        assert_eq!(
            markers(source),
            vec![
                HintMarker::below(offset_of(source, "    }\n    b();")),
                HintMarker::below(offset_of(source, "    b();")),
            ]
        );
    }

    #[test]
    fn brace_at_end_of_file_gets_nothing() {
        // The line after the last brace is the empty one opened by the final newline
        let source = "void f() {\n    a();\n}\n";
        assert_eq!(markers(source), vec![]);
    }

    #[test]
    fn consecutive_methods_are_separated() {
        let source = "class A {\n    void f() {\n    }\n    void g() {\n    }\n}\n";
        assert_eq!(
            markers(source),
            vec![
                HintMarker::below(offset_of(source, "    void g")),
                HintMarker::below(source.len() - 2),
            ]
        );
    }

    #[test]
    fn gap_on_the_brace_line_marks_the_following_line() {
        let source = "void f() {\n    if (x) {\n        a();\n    } else {\n        b();\n    }\n}\n";
        assert_eq!(
            markers(source),
            vec![
                HintMarker::below(offset_of(source, "        b();")),
                HintMarker::below(source.len() - 2),
            ]
        );
    }

    #[test]
    fn statement_ending_in_semicolon_gets_nothing() {
        let source = "void f() {\n    a();\n    b();\n}\n";
        assert_eq!(markers(source), vec![]);
    }

    #[test]
    fn brace_on_last_line_without_newline_is_skipped() {
        // The line after the gap does not exist
        let source = "void f() { if (x) { a(); } b(); }";
        assert_eq!(markers(source), vec![]);
    }

    #[rstest]
    #[case(HintRules { above_return: false, below_closing_brace: true }, 1)]
    #[case(HintRules { above_return: true, below_closing_brace: false }, 1)]
    #[case(HintRules { above_return: false, below_closing_brace: false }, 0)]
    #[case(HintRules::default(), 2)]
    fn rules_can_be_disabled(#[case] rules: HintRules, #[case] expected: usize) {
        let source = "void f() {\n    if (x) {\n        a();\n    }\n    b();\n    return 1;\n}\n";
        let root: SyntaxElement = NodeOrToken::Node(parse(source));
        let mut collected: Vec<HintMarker> = Vec::new();
        collect_hints(&root, &TextBuffer::new(source), rules, &mut collected);
        assert_eq!(collected.len(), expected);
    }

    #[test]
    fn markers_arrive_in_document_order() {
        let source = "void f() {\n    if (x) {\n        a();\n    }\n    b();\n    return 1;\n}\n";
        assert_eq!(
            markers(source),
            vec![
                HintMarker::below(offset_of(source, "    b();")),
                HintMarker::above(offset_of(source, "return 1")),
            ]
        );
    }

    #[test]
    fn errors_describe_the_offset() {
        assert_eq!(
            HintError::AmbiguousWhitespan { offset: 7 }.to_string(),
            "offset 7 does not map to a line of the text"
        );
        assert_eq!(
            HintError::MalformedStructure("return statement without parent").to_string(),
            "malformed tree: return statement without parent"
        );
    }
}
