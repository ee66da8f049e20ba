//! Post indexes (`data/<category>.json`) and the card view models built
//! from them.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::markdown::render_inline;
use crate::util::format_date;

use super::paths::{resolve_asset_path, resolve_internal_url};
use super::router::build_post_url;

/// Default summary length, in characters.
pub const SUMMARY_LEN: usize = 120;

/// One post in a category index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostEntry {
    pub title: String,
    pub slug: String,
    /// `YYYY-MM-DD`; also part of the content file name.
    pub date: String,
    pub tags: Vec<String>,
    /// Inline Markdown shown on cards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One item of `data/featured.json`, shown on the home page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturedItem {
    pub title: String,
    pub date: String,
    /// Site-relative or absolute link target.
    pub url: Option<String>,
    /// Inline Markdown comment.
    pub comment: Option<String>,
    pub image: Option<String>,
}

/// Listing order by date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// Sort entries by their `date` string. The sort is stable, so entries with
/// equal dates keep their index order.
pub fn sort_by_date(items: &[PostEntry], order: SortOrder) -> Vec<PostEntry> {
    let mut sorted = items.to_vec();
    match order {
        SortOrder::Oldest => sorted.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::Newest => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
    }
    sorted
}

/// All distinct tags, sorted.
pub fn collect_tags(items: &[PostEntry]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Entries carrying at least one of `active` tags; all entries when `active`
/// is empty.
pub fn filter_by_tags<'a>(items: &'a [PostEntry], active: &HashSet<String>) -> Vec<&'a PostEntry> {
    items
        .iter()
        .filter(|item| active.is_empty() || item.tags.iter().any(|tag| active.contains(tag)))
        .collect()
}

/// Entries before and after `slug` in an already sorted list.
pub fn neighbours<'a>(
    sorted: &'a [PostEntry],
    slug: &str,
) -> (Option<&'a PostEntry>, Option<&'a PostEntry>) {
    let Some(index) = sorted.iter().position(|item| item.slug == slug) else {
        return (None, None);
    };
    let prev = index.checked_sub(1).and_then(|i| sorted.get(i));
    let next = sorted.get(index + 1);
    (prev, next)
}

/// Shorten `text` to `length` characters, appending `…` when cut.
pub fn summarise_text(text: &str, length: usize) -> String {
    match text.char_indices().nth(length) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

/// Everything a post card shows, with URLs resolved and summaries rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCard {
    pub title: String,
    pub url: String,
    pub image: Option<String>,
    pub date_label: String,
    pub summary_html: String,
    pub tags: Vec<String>,
}

impl PostCard {
    pub fn new(entry: &PostEntry, category: &str, root_path: &str) -> Self {
        Self {
            title: entry.title.clone(),
            url: resolve_internal_url(root_path, &build_post_url(category, &entry.slug)),
            image: entry
                .image
                .as_deref()
                .filter(|image| !image.is_empty())
                .map(|image| resolve_asset_path(root_path, image)),
            date_label: format_date(&entry.date),
            summary_html: render_inline(entry.summary.as_deref().unwrap_or_default()),
            tags: entry.tags.clone(),
        }
    }
}

/// A featured item ready for the home page grid and hero slider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturedCard {
    pub title: String,
    pub url: String,
    pub image: Option<String>,
    pub date_label: String,
    pub comment_html: String,
}

impl FeaturedCard {
    pub fn new(item: &FeaturedItem, root_path: &str) -> Self {
        Self {
            title: item.title.clone(),
            url: resolve_internal_url(root_path, item.url.as_deref().unwrap_or("#")),
            image: item
                .image
                .as_deref()
                .filter(|image| !image.is_empty())
                .map(|image| resolve_asset_path(root_path, image)),
            date_label: format_date(&item.date),
            comment_html: render_inline(item.comment.as_deref().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(slug: &str, date: &str, tags: &[&str]) -> PostEntry {
        PostEntry {
            title: slug.to_uppercase(),
            slug: slug.to_string(),
            date: date.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn entries() -> Vec<PostEntry> {
        vec![
            entry("b", "2024-02-01", &["G1", "東京"]),
            entry("a", "2024-01-01", &["G2"]),
            entry("c", "2024-03-01", &["G1"]),
        ]
    }

    fn slugs<'a>(items: impl IntoIterator<Item = &'a PostEntry>) -> Vec<&'a str> {
        items.into_iter().map(|e| e.slug.as_str()).collect()
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let parsed: Vec<PostEntry> =
            serde_json::from_str(r#"[{"title": "T", "slug": "s", "date": "2024-01-01"}]"#).unwrap();
        assert!(parsed[0].tags.is_empty());
        assert_eq!(parsed[0].summary, None);
    }

    #[test]
    fn test_sort_by_date() {
        let items = entries();
        assert_eq!(slugs(&sort_by_date(&items, SortOrder::Newest)), vec!["c", "b", "a"]);
        assert_eq!(slugs(&sort_by_date(&items, SortOrder::Oldest)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_missing_dates_last_when_newest() {
        let items = vec![entry("x", "", &[]), entry("y", "2024-01-01", &[])];
        assert_eq!(slugs(&sort_by_date(&items, SortOrder::Newest)), vec!["y", "x"]);
    }

    #[test]
    fn test_sort_order_from_str() {
        assert_eq!("oldest".parse::<SortOrder>(), Ok(SortOrder::Oldest));
        assert!("random".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_collect_tags() {
        assert_eq!(collect_tags(&entries()), vec!["G1", "G2", "東京"]);
    }

    #[test]
    fn test_filter_by_tags() {
        let items = entries();
        let none = HashSet::new();
        assert_eq!(filter_by_tags(&items, &none).len(), 3);

        let active: HashSet<String> = ["G1".to_string()].into_iter().collect();
        assert_eq!(slugs(filter_by_tags(&items, &active)), vec!["b", "c"]);
    }

    #[test]
    fn test_neighbours() {
        let sorted = sort_by_date(&entries(), SortOrder::Newest);
        let (prev, next) = neighbours(&sorted, "b");
        assert_eq!(prev.map(|e| e.slug.as_str()), Some("c"));
        assert_eq!(next.map(|e| e.slug.as_str()), Some("a"));

        let (prev, next) = neighbours(&sorted, "c");
        assert!(prev.is_none());
        assert_eq!(next.map(|e| e.slug.as_str()), Some("b"));

        assert_eq!(neighbours(&sorted, "zzz"), (None, None));
    }

    #[test]
    fn test_summarise_text() {
        assert_eq!(summarise_text("short", 10), "short");
        assert_eq!(summarise_text("abcdef", 3), "abc…");
        assert_eq!(summarise_text("有馬記念の予想", 4), "有馬記念…");
        assert_eq!(summarise_text("", SUMMARY_LEN), "");
    }

    #[test]
    fn test_post_card() {
        let mut item = entry("arima", "2023-12-24", &["G1"]);
        item.summary = Some("**本命**は<決まり>".to_string());
        item.image = Some("images/arima.jpg".to_string());

        let card = PostCard::new(&item, "picks", "..");
        assert_eq!(card.url, "../post.html?p=picks/arima");
        assert_eq!(card.image.as_deref(), Some("../images/arima.jpg"));
        assert_eq!(card.date_label, "2023年12月24日(日)");
        assert_eq!(card.summary_html, "<strong>本命</strong>は&lt;決まり&gt;");
    }

    #[test]
    fn test_featured_card_defaults() {
        let card = FeaturedCard::new(&FeaturedItem::default(), ".");
        assert_eq!(card.url, "./#");
        assert!(card.image.is_none());
        assert_eq!(card.comment_html, "");
    }
}
