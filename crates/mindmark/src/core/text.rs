//! Shared text utilities for diagram processing

/// Escape the characters SVG/XML markup reserves in text and attribute values.
///
/// Only `&`, `<`, `>` and `"` are replaced; every other character passes
/// through unchanged.
///
/// # Example
/// ```
/// use mindmark::core::escape_markup;
///
/// assert_eq!(escape_markup("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
/// ```
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Number of characters in a label, as used for sizing label backgrounds.
pub fn label_len(label: &str) -> usize {
    label.chars().count()
}
