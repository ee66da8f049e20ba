//! HTML escaping for text that came from a Markdown source.

use std::borrow::Cow;

/// Escape `&`, `<` and `>` so source text can be injected as HTML.
///
/// Quotes are left alone; pass the result through [`escape_quotes`] for
/// attribute values.
///
/// # Examples
///
/// ```
/// use notedown::markdown::escape_html;
///
/// assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let Some(first) = memchr::memchr3(b'&', b'<', b'>', bytes) else {
        return Cow::Borrowed(text);
    };

    let mut result = String::with_capacity(text.len() + text.len() / 8 + 4);
    result.push_str(&text[..first]);

    for c in text[first..].chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }

    Cow::Owned(result)
}

/// Escape `"` in text that has already been through [`escape_html`], so it
/// can sit inside a double-quoted attribute value.
pub fn escape_quotes(text: &str) -> Cow<'_, str> {
    if memchr::memchr(b'"', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace('"', "&quot;"))
}
