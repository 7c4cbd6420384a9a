//! HTML sanitization utilities

/// Escapes text for safe embedding in HTML element content or attributes
///
/// # Examples
/// ```
/// use formrelay_core::utils::sanitization::escape_html;
///
/// assert_eq!(escape_html("<b>Tom & Jerry</b>"), "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Converts line breaks (`\r\n` or `\n`) into `<br>` tags
pub fn newlines_to_br(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert('xss')</script>"),
            "&lt;script&gt;alert(&#39;xss&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html(r#"a "quoted" value"#), "a &quot;quoted&quot; value");
        assert_eq!(escape_html("plain text"), "plain text");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_ampersand_first() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_newlines_to_br() {
        assert_eq!(newlines_to_br("one\ntwo"), "one<br>two");
        assert_eq!(newlines_to_br("one\r\ntwo\n\nthree"), "one<br>two<br><br>three");
        assert_eq!(newlines_to_br("single line"), "single line");
    }
}
