//! Line tokenizer
//!
//! Drops blank and `#` comment lines and decides whether the remaining lines
//! form a flow spec or a plain entry list.

use crate::core::clean_line;

/// Edge marker in the flow spec language
pub const EDGE_MARKER: &str = "->";

/// A usable input line with its 1-based position in the raw input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

/// How a collection of lines is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// At least one line declares an edge; every line goes to the flow spec parser
    FlowSpec,
    /// No edges anywhere; each line is one step of a linear chain
    Entries,
}

/// Trim every line and drop blanks and comments
pub fn tokenize<S: AsRef<str>>(lines: &[S]) -> Vec<SourceLine> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(idx, raw)| {
            clean_line(raw.as_ref()).map(|text| SourceLine {
                number: idx + 1,
                text: text.to_string(),
            })
        })
        .collect()
}

/// Classify tokenized lines; mixed input is never split per line
pub fn classify(lines: &[SourceLine]) -> InputKind {
    if lines.iter().any(|line| line.text.contains(EDGE_MARKER)) {
        InputKind::FlowSpec
    } else {
        InputKind::Entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_blanks_and_comments() {
        let raw = ["  # header", "", "a -> b", "   ", "  c[Done]  "];
        let lines = tokenize(&raw);
        assert_eq!(
            lines,
            vec![
                SourceLine {
                    number: 3,
                    text: "a -> b".to_string()
                },
                SourceLine {
                    number: 5,
                    text: "c[Done]".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_classify_flow_spec_when_any_edge() {
        let lines = tokenize(&["a[Start]", "a -> b"]);
        assert_eq!(classify(&lines), InputKind::FlowSpec);
    }

    #[test]
    fn test_classify_entries_without_edges() {
        let lines = tokenize(&["Draft", "Review"]);
        assert_eq!(classify(&lines), InputKind::Entries);
    }

    #[test]
    fn test_commented_edge_does_not_switch_mode() {
        let lines = tokenize(&["Draft", "# a -> b", "Publish"]);
        assert_eq!(classify(&lines), InputKind::Entries);
    }
}
