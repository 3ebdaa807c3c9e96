//! Turning markers into display lines.
//!
//! Both placements render the same way: one blank display line directly
//! before the source line that holds the marker offset. A `Below` marker
//! already points at the start of the line after the brace.

use std::collections::BTreeMap;

use crate::hints::HintMarker;
use crate::text::TextBuffer;

/// One line of rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayLine {
    /// A line of the file. `number` is zero-based.
    Source { number: usize, text: String },
    /// A synthetic blank line.
    Hint,
}

/// Interleave the source lines with one hint line per marker.
pub fn render_lines(text: &TextBuffer, markers: &[HintMarker]) -> Vec<DisplayLine> {
    let mut pending: BTreeMap<usize, usize> = BTreeMap::new();
    for marker in markers {
        match text.line_of_offset(marker.offset) {
            Some(line) => *pending.entry(line).or_default() += 1,
            None => log::warn!("marker at {} is past the end of the text", marker.offset),
        }
    }

    let mut lines = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let hints = pending.remove(&number).unwrap_or(0);
        lines.extend(std::iter::repeat_n(DisplayLine::Hint, hints));
        lines.push(DisplayLine::Source {
            number,
            text: line.text,
        });
    }

    // Markers on the empty line after a final newline
    for hints in pending.into_values() {
        lines.extend(std::iter::repeat_n(DisplayLine::Hint, hints));
    }
    lines
}

/// Plain-text preview with `glyph` standing in for each hint line.
pub fn render_to_string(source: &str, markers: &[HintMarker], glyph: &str) -> String {
    let text = TextBuffer::new(source);
    let mut out = String::with_capacity(source.len() + markers.len() * (glyph.len() + 1));
    for line in render_lines(&text, markers) {
        match line {
            DisplayLine::Source { text, .. } => out.push_str(&text),
            DisplayLine::Hint => out.push_str(glyph),
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints_for_source;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_markers_reproduces_the_lines() {
        let source = "a\nb\n";
        assert_eq!(render_to_string(source, &[], "~"), source);
    }

    #[test]
    fn both_placements_render_before_their_line() {
        let text = TextBuffer::new("a\nb\nc");
        let lines = render_lines(&text, &[HintMarker::below(2), HintMarker::above(4)]);
        assert_eq!(
            lines,
            vec![
                DisplayLine::Source {
                    number: 0,
                    text: "a".to_string()
                },
                DisplayLine::Hint,
                DisplayLine::Source {
                    number: 1,
                    text: "b".to_string()
                },
                DisplayLine::Hint,
                DisplayLine::Source {
                    number: 2,
                    text: "c".to_string()
                },
            ]
        );
    }

    #[test]
    fn each_marker_adds_exactly_one_line() {
        let text = TextBuffer::new("a\nb\n");
        let lines = render_lines(&text, &[HintMarker::above(2), HintMarker::below(2)]);
        let hints = lines.iter().filter(|l| **l == DisplayLine::Hint).count();
        assert_eq!(hints, 2);
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn marker_after_final_newline_renders_at_end() {
        let text = TextBuffer::new("a\n");
        let lines = render_lines(&text, &[HintMarker::above(2)]);
        assert_eq!(lines.last(), Some(&DisplayLine::Hint));
    }

    #[test]
    fn marker_past_the_text_is_dropped() {
        let text = TextBuffer::new("a\n");
        let lines = render_lines(&text, &[HintMarker::above(40)]);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn preview_of_method() {
        let source = "int foo() {\n    if (false) {\n        return 1;\n    }\n    System.out.println(\"x\");\n    return 2;\n}\n";
        let rendered = render_to_string(source, &hints_for_source(source), "·");
        assert_snapshot!(rendered, @r#"
        int foo() {
            if (false) {
                return 1;
            }
        ·
            System.out.println("x");
        ·
            return 2;
        }
        "#);
    }
}
