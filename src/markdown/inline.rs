//! Inline formatting within a single block of text.
//!
//! Formatting is a fixed sequence of pattern substitutions, not a
//! nesting-aware parser:
//!
//! 1. code spans are pulled out and replaced by placeholders
//! 2. the remaining text is HTML-escaped
//! 3. external links (the generated `<a ...>` tag is also protected)
//! 4. bold, then italic, then strikethrough
//! 5. placeholders are restored
//!
//! Protected fragments never see the emphasis patterns, so `` `*x*` `` stays
//! literal and underscores in a link URL or in `target="_blank"` are not
//! mistaken for emphasis markers.

use std::borrow::Cow;

use regex::Captures;

use super::escape::{escape_html, escape_quotes};
use super::patterns::{
    BOLD_STAR_RE, BOLD_UNDERSCORE_RE, CODE_SPAN_RE, ITALIC_STAR_RE, ITALIC_UNDERSCORE_RE, LINK_RE,
    PLACEHOLDER_RE, STRIKETHROUGH_RE,
};

/// Delimits a placeholder index. Private-use, so real text does not contain it
/// once [`render_inline`] has stripped any stray occurrences.
const PLACEHOLDER: char = '\u{E000}';

/// Fragments of finished HTML hidden from later substitutions.
#[derive(Debug, Default)]
struct Protected {
    fragments: Vec<String>,
}

impl Protected {
    /// Store a fragment and return the placeholder token standing in for it.
    fn protect(&mut self, html: String) -> String {
        let index = self.fragments.len();
        self.fragments.push(html);
        format!("{PLACEHOLDER}{index}{PLACEHOLDER}")
    }

    fn restore(&self, text: &str) -> String {
        if self.fragments.is_empty() {
            return text.to_string();
        }
        PLACEHOLDER_RE
            .replace_all(text, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.fragments.get(index))
                    .cloned()
                    .unwrap_or_default()
            })
            .into_owned()
    }
}

/// Render inline Markdown in `text` to an HTML fragment.
///
/// The input is raw source text: escaping happens here. Links are only
/// recognized for absolute `http`/`https` URLs and open in a new browsing
/// context with `rel="noopener noreferrer"`.
///
/// # Examples
///
/// ```
/// use notedown::markdown::render_inline;
///
/// assert_eq!(render_inline("**bold** & _em_"), "<strong>bold</strong> &amp; <em>em</em>");
/// assert_eq!(render_inline("`*literal*`"), "<code>*literal*</code>");
/// ```
pub fn render_inline(text: &str) -> String {
    let text: Cow<'_, str> = if text.contains(PLACEHOLDER) {
        Cow::Owned(text.replace(PLACEHOLDER, ""))
    } else {
        Cow::Borrowed(text)
    };

    let mut protected = Protected::default();

    let without_code = CODE_SPAN_RE.replace_all(&text, |caps: &Captures| {
        protected.protect(format!("<code>{}</code>", escape_html(&caps[1])))
    });

    let escaped = escape_html(&without_code);

    let linked = LINK_RE.replace_all(&escaped, |caps: &Captures| {
        let href = escape_quotes(&caps[2]);
        let open = protected.protect(format!(
            r#"<a href="{href}" target="_blank" rel="noopener noreferrer">"#
        ));
        format!("{open}{}</a>", &caps[1])
    });

    let formatted = apply_emphasis(&linked);
    protected.restore(&formatted)
}

/// Bold before italic so `**` is never split into two `*` markers.
fn apply_emphasis(text: &str) -> String {
    let text = BOLD_STAR_RE.replace_all(text, "<strong>${1}</strong>");
    let text = BOLD_UNDERSCORE_RE.replace_all(&text, "<strong>${1}</strong>");
    let text = ITALIC_STAR_RE.replace_all(&text, "<em>${1}</em>");
    let text = ITALIC_UNDERSCORE_RE.replace_all(&text, "<em>${1}</em>");
    let text = STRIKETHROUGH_RE.replace_all(&text, "<s>${1}</s>");
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_escaped() {
        assert_eq!(render_inline("a <b> & c"), "a &lt;b&gt; &amp; c");
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(render_inline("**b**"), "<strong>b</strong>");
        assert_eq!(render_inline("__b__"), "<strong>b</strong>");
        assert_eq!(render_inline("*i*"), "<em>i</em>");
        assert_eq!(render_inline("_i_"), "<em>i</em>");
        assert_eq!(
            render_inline("**b** and *i*"),
            "<strong>b</strong> and <em>i</em>"
        );
    }

    #[test]
    fn test_strikethrough() {
        assert_eq!(render_inline("~~gone~~"), "<s>gone</s>");
    }

    #[test]
    fn test_code_span_protected() {
        assert_eq!(render_inline("`*not emphasis*`"), "<code>*not emphasis*</code>");
        assert_eq!(
            render_inline("`[x](https://a.com)`"),
            "<code>[x](https://a.com)</code>"
        );
    }

    #[test]
    fn test_code_span_escaped_once() {
        assert_eq!(render_inline("`a<b && c`"), "<code>a&lt;b &amp;&amp; c</code>");
    }

    #[test]
    fn test_unclosed_backtick_is_literal() {
        assert_eq!(render_inline("a ` b"), "a ` b");
    }

    #[test]
    fn test_external_link() {
        assert_eq!(
            render_inline("[site](https://example.com/a)"),
            r#"<a href="https://example.com/a" target="_blank" rel="noopener noreferrer">site</a>"#
        );
    }

    #[test]
    fn test_relative_link_not_recognized() {
        assert_eq!(render_inline("[home](/index.html)"), "[home](/index.html)");
    }

    #[test]
    fn test_link_label_gets_emphasis() {
        assert_eq!(
            render_inline("[**big**](http://a.com)"),
            r#"<a href="http://a.com" target="_blank" rel="noopener noreferrer"><strong>big</strong></a>"#
        );
    }

    #[test]
    fn test_link_url_underscores_untouched() {
        let html = render_inline("[x](https://a.com/snake_case_path) and b_c_");
        assert!(html.contains(r#"href="https://a.com/snake_case_path""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.ends_with("and b<em>c</em>"));
    }

    #[test]
    fn test_link_url_quote_escaped() {
        let html = render_inline(r#"[x](https://a.com/"onmouseover="alert(1))"#);
        assert!(!html.contains(r#"" onmouseover"#));
        assert!(html.contains("&quot;onmouseover=&quot;alert(1"));
    }

    #[test]
    fn test_link_url_ampersand_escaped() {
        let html = render_inline("[q](https://a.com/?x=1&y=2)");
        assert!(html.contains(r#"href="https://a.com/?x=1&amp;y=2""#));
    }

    #[test]
    fn test_code_span_in_link_url_stays_literal() {
        let html = render_inline("[x](https://a.com/`y`)");
        assert_eq!(html, "[x](https://a.com/<code>y</code>)");
        assert!(!html.contains('\u{E000}'));
    }

    #[test]
    fn test_code_span_in_link_label() {
        assert_eq!(
            render_inline("[`y`](https://a.com/)"),
            r#"<a href="https://a.com/" target="_blank" rel="noopener noreferrer"><code>y</code></a>"#
        );
    }

    #[test]
    fn test_stray_placeholder_removed() {
        assert_eq!(render_inline("a\u{E000}0\u{E000}b"), "a0b");
    }

    #[test]
    fn test_empty() {
        assert_eq!(render_inline(""), "");
    }
}
