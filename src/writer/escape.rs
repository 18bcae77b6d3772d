use std::borrow::Cow;

/// Escape character data for use inside an XML element.
///
/// Replaces `&`, `<`, `>` and `"`. Borrows the input when nothing needs escaping.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    if !needs_escaping(s) {
        return Cow::Borrowed(s);
    }
    let mut result = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            c => result.push(c),
        }
    }
    Cow::Owned(result)
}

#[inline]
fn needs_escaping(s: &str) -> bool {
    s.bytes().any(|b| matches!(b, b'&' | b'<' | b'>' | b'"'))
}
