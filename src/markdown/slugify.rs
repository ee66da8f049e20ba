//! Slug generation for heading anchors.
//!
//! Slugs keep non-ASCII letters, so Japanese headings stay readable in
//! fragment links (`#注目馬の見解`).

use unicode_normalization::UnicodeNormalization;

use super::patterns::{SLUG_DISALLOWED_RE, SLUG_SPACE_RE};

/// Maximum slug length, in characters.
pub const MAX_SLUG_LEN: usize = 64;

/// Slug used when nothing usable is left of the heading text.
pub const FALLBACK_SLUG: &str = "heading";

/// Generate a fragment-safe slug from heading text.
///
/// The text is NFKC-normalized, trimmed and lower-cased. Each whitespace run
/// becomes a single hyphen, then everything outside the Letter and Number
/// general categories (other than hyphens) is dropped, combining marks
/// included. The result is cut to [`MAX_SLUG_LEN`] characters.
///
/// Identical headings produce identical slugs; callers get no
/// disambiguation.
///
/// # Examples
///
/// ```
/// use notedown::markdown::slugify;
///
/// assert_eq!(slugify("Chapter One"), "chapter-one");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("!!!"), "heading");
/// ```
pub fn slugify(text: &str) -> String {
    let normalized: String = text.nfkc().collect();
    let lowered = normalized.trim_matches(is_slug_space).to_lowercase();
    let hyphenated = SLUG_SPACE_RE.replace_all(&lowered, "-");
    let kept = SLUG_DISALLOWED_RE.replace_all(&hyphenated, "");

    let slug: String = kept.chars().take(MAX_SLUG_LEN).collect();
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

fn is_slug_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}
