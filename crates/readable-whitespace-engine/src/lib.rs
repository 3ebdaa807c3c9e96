//! # readable-whitespace-engine
//!
//! Decides where blank display lines would make brace-delimited code easier
//! to read, without ever touching the file text.
//!
//! ## Module Structure
//!
//! ```text
//! readable-whitespace-engine/
//! ├── lib.rs      # This file - convenience entry points
//! ├── tree.rs     # TreeNode trait the rules navigate, impl for Rowan elements
//! ├── text.rs     # TextBuffer: line queries over an xi-rope
//! ├── hints.rs    # The two hint rules and the traversal
//! └── render.rs   # Interleaving hint lines with source lines
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use readable_whitespace_engine::{hints_for_source, Placement};
//!
//! let source = "void f() {\n    a();\n    return 1;\n}\n";
//! let markers = hints_for_source(source);
//!
//! assert_eq!(markers.len(), 1);
//! assert_eq!(markers[0].placement, Placement::Above);
//! assert_eq!(&source[markers[0].offset..], "return 1;\n}\n");
//! ```
//!
//! Every call recomputes markers from scratch; nothing is cached between
//! calls and neither the tree nor the text is modified.

pub mod hints;
pub mod render;
pub mod text;
pub mod tree;

pub use hints::{
    HintError, HintMarker, HintRules, HintSink, Placement, collect_hints, hints,
};
pub use render::{DisplayLine, render_lines, render_to_string};
pub use text::TextBuffer;
pub use tree::{NodeKind, TreeNode};

use readable_whitespace_syntax::{SyntaxElement, parse};
use rowan::NodeOrToken;

/// Sample shown by `--preview`, with a comment at each place a line appears.
pub const PREVIEW_SOURCE: &str = r#"class Foo {
    int foo() {
        if (false) {
            return 1;
        }
        // Extra line inserted below right brace
        System.out.println("Hello, world!");
        // Extra line inserted above return
        return 2;
    }
}
"#;

/// Parse `source` and compute its markers with every rule enabled.
pub fn hints_for_source(source: &str) -> Vec<HintMarker> {
    hints_for_source_with(source, HintRules::default())
}

/// Parse `source` and compute its markers with the given rules.
pub fn hints_for_source_with(source: &str, rules: HintRules) -> Vec<HintMarker> {
    let root: SyntaxElement = NodeOrToken::Node(parse(source));
    let text = TextBuffer::new(source);
    let mut markers = Vec::new();
    collect_hints(&root, &text, rules, &mut markers);
    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn preview_source_shows_both_placements() {
        let markers = hints_for_source(PREVIEW_SOURCE);
        let placements: Vec<_> = markers.iter().map(|m| m.placement).collect();
        assert_eq!(
            placements,
            vec![Placement::Below, Placement::Above, Placement::Below]
        );
        assert!(
            PREVIEW_SOURCE[markers[0].offset..]
                .starts_with("        // Extra line inserted below right brace")
        );
        assert!(PREVIEW_SOURCE[markers[1].offset..].starts_with("// Extra line inserted above return"));
        assert_eq!(&PREVIEW_SOURCE[markers[2].offset..], "}\n");
    }

    #[test]
    fn empty_source_has_no_hints() {
        assert_eq!(hints_for_source(""), vec![]);
    }
}
