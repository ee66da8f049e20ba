//! Post query parameters and URL building.
//!
//! Posts are addressed as `post.html?p=<category>/<slug>`; their Markdown
//! lives at `content/<category>/<date>-<slug>.md`.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters `encodeURIComponent` escapes: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Query parameter carrying the post address.
pub const POST_QUERY_KEY: &str = "p";

/// A post address: category key plus slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostParam {
    pub category: String,
    pub slug: String,
}

impl std::fmt::Display for PostParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.category, self.slug)
    }
}

/// Percent-encode one URL component.
pub fn encode_component(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, URI_COMPONENT).into()
}

/// Parse `category/slug`; `None` if either part is missing or empty.
///
/// Anything after a second `/` is ignored.
pub fn parse_post_param(value: &str) -> Option<PostParam> {
    let mut parts = value.split('/');
    let category = parts.next().filter(|s| !s.is_empty())?;
    let slug = parts.next().filter(|s| !s.is_empty())?;
    Some(PostParam {
        category: category.to_string(),
        slug: slug.to_string(),
    })
}

/// Look up one parameter in a query string, form-decoded.
///
/// A leading `?` is ignored. Returns the first occurrence.
pub fn query_param(query: &str, key: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(name, _)| form_decode(name) == key)
        .map(|(_, value)| form_decode(value))
}

/// The post address carried in a page's query string, if valid.
pub fn post_param_from_query(query: &str) -> Option<PostParam> {
    query_param(query, POST_QUERY_KEY).and_then(|value| parse_post_param(&value))
}

/// URL of a post page, relative to the site root.
///
/// # Examples
///
/// ```
/// use notedown::site::build_post_url;
///
/// assert_eq!(build_post_url("picks", "arima kinen"), "post.html?p=picks/arima%20kinen");
/// ```
pub fn build_post_url(category: &str, slug: &str) -> String {
    format!(
        "post.html?{POST_QUERY_KEY}={}/{}",
        encode_component(category),
        encode_component(slug)
    )
}

/// Path of a post's Markdown source, relative to the site root.
pub fn build_content_path(category: &str, date: &str, slug: &str) -> String {
    format!(
        "content/{}/{date}-{}.md",
        encode_component(category),
        encode_component(slug)
    )
}

/// Display name for a category key; unknown keys are returned unchanged.
pub fn normalise_category_name(category: &str) -> &str {
    match category {
        "picks" => "過去の重要予想と反省",
        "horses" => "注目馬の見解",
        "chatter" => "雑談",
        "column" => "コラム",
        other => other,
    }
}

fn form_decode(value: &str) -> String {
    let spaced = value.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
