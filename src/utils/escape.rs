//! Text escaping for outbound notification mail
//!
//! The mail transport takes plain text, but bodies are escaped anyway so a
//! submitted flag can never smuggle markup into whatever renders the
//! message downstream.

/// Escape `&`, `<` and `>` in text destined for the mail transport
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(escape_text("hello world"), "hello world");
    }

    #[test]
    fn test_markup_characters_are_escaped() {
        assert_eq!(
            escape_text("<script>a && b</script>"),
            "&lt;script&gt;a &amp;&amp; b&lt;/script&gt;"
        );
    }

    #[test]
    fn test_ampersand_is_escaped_before_reuse() {
        // double-escaping must not happen on a single pass but the order of
        // replacements must not corrupt already-escaped input either
        assert_eq!(escape_text("&lt;"), "&amp;lt;");
    }
}
