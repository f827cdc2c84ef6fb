//! HTML escaping helpers.
//!
//! Every user-supplied string that ends up in markup goes through
//! `escape_html` (element content) or `escape_attr` (attribute values).

use std::borrow::Cow;

/// Escape special characters for HTML element content.
///
/// Returns `Cow::Borrowed` when the input needs no escaping.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape special characters for HTML attribute values (double-quoted).
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_plain() {
        let s = "hello world";
        assert!(matches!(escape_html(s), Cow::Borrowed(_)));
        assert_eq!(escape_html(s), "hello world");
    }

    #[test]
    fn test_escape_html_special() {
        assert_eq!(escape_html("<b>bold</b>"), "&lt;b&gt;bold&lt;/b&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escape_html_leaves_quotes() {
        // Quotes are only significant inside attributes
        assert_eq!(escape_html(r#"say "hi""#), r#"say "hi""#);
    }

    #[test]
    fn test_escape_attr_quotes() {
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_attr("a & <b>"), "a &amp; &lt;b&gt;");
    }

    #[test]
    fn test_escape_attr_plain_borrowed() {
        assert!(matches!(escape_attr("https://example.com"), Cow::Borrowed(_)));
    }
}
