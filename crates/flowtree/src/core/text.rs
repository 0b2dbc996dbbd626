//! Shared text utilities for diagram generation

/// Escape a label or title for emission.
///
/// Backslashes are doubled first so the backslashes inserted for quotes are
/// not escaped again; line breaks collapse to a single space.
///
/// # Example
/// ```
/// use flowtree::core::escape_label;
///
/// assert_eq!(escape_label(r#"say "hi""#), r#"say \"hi\""#);
/// assert_eq!(escape_label("a\\b"), "a\\\\b");
/// assert_eq!(escape_label("two\nlines"), "two lines");
/// ```
pub fn escape_label(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}

/// Trim a raw input line, returning `None` for blanks and `#` comments.
pub fn clean_line(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        None
    } else {
        Some(trimmed)
    }
}
