//! Target list splitter
//!
//! Splits the right-hand side of an edge line on commas that sit outside any
//! `[]`, `{}` or `()` pair, so `a[x, y], b` yields two targets.

/// Split `text` on top-level commas, trimming segments and dropping empty ones
pub fn split_targets(text: &str) -> Vec<String> {
    let mut targets = Vec::new();
    let mut square = 0usize;
    let mut curly = 0usize;
    let mut round = 0usize;
    let mut start = 0;

    for (idx, c) in text.char_indices() {
        match c {
            '[' => square += 1,
            ']' => square = square.saturating_sub(1),
            '{' => curly += 1,
            '}' => curly = curly.saturating_sub(1),
            '(' => round += 1,
            ')' => round = round.saturating_sub(1),
            ',' if square == 0 && curly == 0 && round == 0 => {
                push_segment(&mut targets, &text[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    push_segment(&mut targets, &text[start..]);

    targets
}

fn push_segment(targets: &mut Vec<String>, segment: &str) {
    let segment = segment.trim();
    if !segment.is_empty() {
        targets.push(segment.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_target() {
        assert_eq!(split_targets("b"), vec!["b"]);
    }

    #[test]
    fn test_nested_comma_survives() {
        assert_eq!(split_targets("a[x, y], b"), vec!["a[x, y]", "b"]);
    }

    #[test]
    fn test_each_bracket_kind_protects_commas() {
        assert_eq!(
            split_targets("d{yes, no}, c((1,2)), s([a, b])"),
            vec!["d{yes, no}", "c((1,2))", "s([a, b])"]
        );
    }

    #[test]
    fn test_empty_segments_dropped() {
        assert_eq!(split_targets(" a ,, , b, "), vec!["a", "b"]);
        assert!(split_targets("").is_empty());
        assert!(split_targets(" , ").is_empty());
    }

    #[test]
    fn test_stray_closer_does_not_underflow() {
        assert_eq!(split_targets("a], b"), vec!["a]", "b"]);
    }

    #[test]
    fn test_unbalanced_opener_swallows_rest() {
        assert_eq!(split_targets("a[x, b"), vec!["a[x, b"]);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(split_targets("a[café, thé], b"), vec!["a[café, thé]", "b"]);
    }

    proptest! {
        #[test]
        fn plain_ids_split_like_str_split(ids in proptest::collection::vec("[a-z0-9_]{1,6}", 1..6)) {
            let joined = ids.join(", ");
            prop_assert_eq!(split_targets(&joined), ids);
        }

        #[test]
        fn segments_are_trimmed_and_non_empty(text in "[a-z,\\[\\]{}() ]{0,40}") {
            for segment in split_targets(&text) {
                prop_assert!(!segment.is_empty());
                prop_assert_eq!(segment.trim(), segment.as_str());
            }
        }
    }
}
