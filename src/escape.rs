//! Escaping of response text before it is injected into a markup surface.

/// Replaces the characters that a markup surface would interpret (`&`, `<`,
/// `>`, `"` and `'`) with their entity references.
///
/// Escaping is not idempotent: escaping an already escaped string escapes the
/// ampersands again.
///
/// ```
/// use response_raw_viewer::escape::escape_for_markup_injection;
///
/// assert_eq!(escape_for_markup_injection("<script>"), "&lt;script&gt;");
/// ```
pub fn escape_for_markup_injection(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_for_markup_injection(r#"<a href="x" title='y'>&</a>"#),
            "&lt;a href=&quot;x&quot; title=&#039;y&#039;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(escape_for_markup_injection("hello\nworld"), "hello\nworld");
        assert_eq!(escape_for_markup_injection(""), "");
        assert_eq!(escape_for_markup_injection("日本 🎉"), "日本 🎉");
    }

    #[test]
    fn escaping_twice_is_not_a_no_op() {
        let once = escape_for_markup_injection("a & b");
        assert_eq!(once, "a &amp; b");
        assert_eq!(escape_for_markup_injection(&once), "a &amp;amp; b");
    }
}
