//! Line-oriented queries over the source text.
//!
//! The hint rules only ever ask four questions of the text: which line holds
//! an offset, where a line starts, how many lines there are, and whether a
//! line is empty. [`TextBuffer`] answers them from an [`xi_rope::Rope`] and
//! returns `None` for anything outside the buffer instead of panicking.

use xi_rope::Rope;

/// A byte range `[start, end)` into the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// A single line of the buffer with its byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    /// Byte span of the line (includes the line ending if present).
    pub span: Span,
    /// The line text without its line ending.
    pub text: String,
}

/// Read-only line index over the file text.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from(text),
        }
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.rope.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len() == 0
    }

    /// Number of lines. A trailing newline opens one more (empty) line.
    pub fn line_count(&self) -> usize {
        self.rope.line_of_offset(self.rope.len()) + 1
    }

    /// Zero-based line holding `offset`; an offset equal to the length is the
    /// last line.
    pub fn line_of_offset(&self, offset: usize) -> Option<usize> {
        (offset <= self.rope.len()).then(|| self.rope.line_of_offset(offset))
    }

    /// Byte offset at which `line` begins.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        (line < self.line_count()).then(|| self.rope.offset_of_line(line))
    }

    /// Span of `line`, including its line ending.
    pub fn line_span(&self, line: usize) -> Option<Span> {
        let start = self.line_start(line)?;
        let end = self.line_start(line + 1).unwrap_or(self.rope.len());
        Some(Span { start, end })
    }

    /// Whether `line` holds nothing but whitespace.
    pub fn is_line_empty(&self, line: usize) -> Option<bool> {
        let span = self.line_span(line)?;
        Some(self.slice(span).trim().is_empty())
    }

    /// Text of a span as an owned string.
    pub fn slice(&self, span: Span) -> String {
        self.rope.slice_to_cow(span.start..span.end).into_owned()
    }

    /// Iterate over the lines that hold text, with their spans.
    ///
    /// A final line ending does not produce an extra empty line here, unlike
    /// [`TextBuffer::line_count`].
    pub fn lines(&self) -> impl Iterator<Item = LineRef> + '_ {
        let mut offset = 0usize;
        self.rope.lines_raw(..).map(move |line| {
            let start = offset;
            offset += line.len();
            LineRef {
                span: Span { start, end: offset },
                text: line.trim_end_matches(['\n', '\r']).to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn empty_buffer_has_one_line() {
        let text = TextBuffer::new("");
        assert!(text.is_empty());
        assert_eq!(text.line_count(), 1);
        assert_eq!(text.line_of_offset(0), Some(0));
        assert_eq!(text.line_start(0), Some(0));
        assert_eq!(text.is_line_empty(0), Some(true));
        assert_eq!(text.lines().count(), 0);
    }

    #[rstest]
    #[case(0, Some(0))]
    #[case(3, Some(0))]
    #[case(4, Some(1))]
    #[case(7, Some(2))]
    #[case(8, Some(3))]
    #[case(9, Some(3))]
    #[case(10, None)]
    fn line_of_offset(#[case] offset: usize, #[case] expected: Option<usize>) {
        let text = TextBuffer::new("abc\nde\n\nf");
        assert_eq!(text.line_of_offset(offset), expected);
    }

    #[test]
    fn line_starts_and_count() {
        let text = TextBuffer::new("abc\nde\n");
        assert_eq!(text.line_count(), 3);
        assert_eq!(text.line_start(0), Some(0));
        assert_eq!(text.line_start(1), Some(4));
        assert_eq!(text.line_start(2), Some(7));
        assert_eq!(text.line_start(3), None);
    }

    #[test]
    fn whitespace_only_lines_are_empty() {
        let text = TextBuffer::new("a\n   \t\n\nb\n");
        assert_eq!(text.is_line_empty(0), Some(false));
        assert_eq!(text.is_line_empty(1), Some(true));
        assert_eq!(text.is_line_empty(2), Some(true));
        assert_eq!(text.is_line_empty(3), Some(false));
        assert_eq!(text.is_line_empty(4), Some(true));
        assert_eq!(text.is_line_empty(5), None);
    }

    #[test]
    fn lines_strip_endings_but_keep_spans() {
        let text = TextBuffer::new("ab\r\nc\n");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                LineRef {
                    span: Span { start: 0, end: 4 },
                    text: "ab".to_string(),
                },
                LineRef {
                    span: Span { start: 4, end: 6 },
                    text: "c".to_string(),
                },
            ]
        );
    }

    #[test]
    fn slice_of_line_span() {
        let text = TextBuffer::new("first\nsecond");
        let span = text.line_span(1).unwrap();
        assert_eq!(span.len(), 6);
        assert_eq!(text.slice(span), "second");
    }
}
