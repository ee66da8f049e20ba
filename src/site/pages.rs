//! Page assembly: everything a page shows, built from indexes and content.
//!
//! These functions stop short of the DOM. They return plain structs with
//! URLs resolved against the configured root path and HTML fragments ready
//! for injection.
//!
//! Documents are always fetched by site-relative path (`data/...`,
//! `content/...`); the root path only shapes the URLs handed back.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::markdown::{Heading, render_markdown};
use crate::util::format_date;

use super::cache::DocumentCache;
use super::config::SiteConfig;
use super::index::{
    FeaturedCard, FeaturedItem, PostCard, PostEntry, SortOrder, collect_tags, filter_by_tags,
    neighbours, sort_by_date, summarise_text,
};
use super::paths::{data_path, join_path, resolve_internal_url};
use super::router::{
    PostParam, build_content_path, build_post_url, normalise_category_name, post_param_from_query,
};
use super::source::ContentSource;
use super::toc::render_toc;

/// Category keys, in navigation order.
pub const CATEGORY_KEYS: [&str; 4] = ["picks", "horses", "chatter", "column"];

/// Index file holding the home page's featured items.
pub const FEATURED_INDEX: &str = "featured.json";

/// Link to a neighbouring article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleLink {
    pub title: String,
    pub url: String,
}

/// A fully assembled article page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub entry: PostEntry,
    pub category: String,
    pub category_name: String,
    /// Document title, `<post> | <site>`.
    pub title: String,
    pub description: String,
    pub date_label: String,
    /// Rendered article body.
    pub html: String,
    pub headings: Vec<Heading>,
    /// `<li>` items for the table of contents; empty when there are no headings.
    pub toc_html: String,
    /// Newer article, when sorted newest first.
    pub prev: Option<ArticleLink>,
    /// Older article, when sorted newest first.
    pub next: Option<ArticleLink>,
}

/// Load and render the article addressed by `param`.
pub fn load_article<S: ContentSource>(
    cache: &mut DocumentCache<S>,
    config: &SiteConfig,
    param: &PostParam,
) -> Result<Article> {
    let root = config.root_path.as_str();
    let index_path = data_path(&format!("{}.json", param.category));
    let entries: Vec<PostEntry> = cache.fetch_json(&index_path)?;
    let sorted = sort_by_date(&entries, SortOrder::Newest);

    let Some(entry) = sorted.iter().find(|item| item.slug == param.slug) else {
        tracing::warn!(post = %param, "post missing from index");
        return Err(Error::PostNotFound {
            category: param.category.clone(),
            slug: param.slug.clone(),
        });
    };

    let content_path = build_content_path(&param.category, &entry.date, &entry.slug);
    let markdown = cache.fetch_text(&content_path)?;
    let rendered = render_markdown(&markdown);
    tracing::debug!(
        post = %param,
        headings = rendered.headings.len(),
        "rendered article"
    );

    let link = |item: &PostEntry| ArticleLink {
        title: item.title.clone(),
        url: resolve_internal_url(root, &build_post_url(&param.category, &item.slug)),
    };
    let (prev, next) = neighbours(&sorted, &entry.slug);

    let description_source = match entry.summary.as_deref() {
        Some(summary) if !summary.is_empty() => summary.to_string(),
        _ => collapse_newlines(&markdown),
    };

    Ok(Article {
        category: param.category.clone(),
        category_name: normalise_category_name(&param.category).to_string(),
        title: config.page_title(&entry.title),
        description: summarise_text(&description_source, config.description_len),
        date_label: format_date(&entry.date),
        toc_html: render_toc(&rendered.headings),
        html: rendered.html,
        headings: rendered.headings,
        prev: prev.map(link),
        next: next.map(link),
        entry: entry.clone(),
    })
}

/// Load the article named by the `p` parameter of a page's query string.
pub fn load_article_from_query<S: ContentSource>(
    cache: &mut DocumentCache<S>,
    config: &SiteConfig,
    query: &str,
) -> Result<Article> {
    let param =
        post_param_from_query(query).ok_or_else(|| Error::InvalidPostParam(query.to_string()))?;
    load_article(cache, config, &param)
}

/// A category listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPage {
    pub category: String,
    pub category_name: String,
    pub title: String,
    pub description: String,
    /// Every tag in the index, for the filter bar.
    pub tags: Vec<String>,
    /// Cards after sorting and tag filtering.
    pub cards: Vec<PostCard>,
}

impl CategoryPage {
    /// Whether the empty-state message should show.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Load a category index, sorted by `order` and filtered by `active_tags`.
pub fn load_category_page<S: ContentSource>(
    cache: &mut DocumentCache<S>,
    config: &SiteConfig,
    category: &str,
    order: SortOrder,
    active_tags: &HashSet<String>,
) -> Result<CategoryPage> {
    let index_path = data_path(&format!("{category}.json"));
    let entries: Vec<PostEntry> = cache.fetch_json(&index_path)?;
    let category_name = normalise_category_name(category).to_string();

    let sorted = sort_by_date(&entries, order);
    let cards = filter_by_tags(&sorted, active_tags)
        .into_iter()
        .map(|entry| PostCard::new(entry, category, &config.root_path))
        .collect();

    let description = entries
        .first()
        .and_then(|first| first.summary.clone())
        .filter(|summary| !summary.is_empty())
        .unwrap_or_else(|| format!("{category_name}の最新記事一覧"));

    Ok(CategoryPage {
        category: category.to_string(),
        title: config.page_title(&category_name),
        description: summarise_text(&description, config.description_len),
        tags: collect_tags(&entries),
        cards,
        category_name,
    })
}

/// A category entry on the home page and in navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLink {
    pub key: String,
    pub title: String,
    pub description: String,
    pub url: String,
}

/// Blurb shown under each category card on the home page.
fn category_description(key: &str) -> &'static str {
    match key {
        "picks" => "重賞や大勝負の振り返りノート。予想の改善点を記録。",
        "horses" => "血統や調教のメモ。次走で狙いたい馬を整理。",
        "chatter" => "ニュース雑感や気軽なメモ。肩の力を抜いた更新。",
        "column" => "理論・データ分析をまとめた読み応えのある記事。",
        _ => "",
    }
}

/// URL for a navigation key: `home` or a category key.
pub fn nav_url(root_path: &str, key: &str) -> String {
    if key == "home" {
        join_path(root_path, "index.html")
    } else {
        join_path(root_path, &format!("pages/{key}.html"))
    }
}

/// Links to every category page.
pub fn category_links(root_path: &str) -> Vec<CategoryLink> {
    CATEGORY_KEYS
        .iter()
        .map(|&key| CategoryLink {
            key: key.to_string(),
            title: normalise_category_name(key).to_string(),
            description: category_description(key).to_string(),
            url: nav_url(root_path, key),
        })
        .collect()
}

/// The home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
    pub title: String,
    /// Taken from the first featured item, when there is one.
    pub description: Option<String>,
    pub featured: Vec<FeaturedCard>,
    pub categories: Vec<CategoryLink>,
}

/// Load the featured index and build the home page.
pub fn load_home_page<S: ContentSource>(
    cache: &mut DocumentCache<S>,
    config: &SiteConfig,
) -> Result<HomePage> {
    let index_path = data_path(FEATURED_INDEX);
    let items: Vec<FeaturedItem> = cache.fetch_json(&index_path)?;

    let description = items.first().map(|first| {
        let text = first
            .comment
            .as_deref()
            .filter(|comment| !comment.is_empty())
            .unwrap_or(first.title.as_str());
        summarise_text(text, config.description_len)
    });

    Ok(HomePage {
        title: config.site_title.clone(),
        description,
        featured: items
            .iter()
            .map(|item| FeaturedCard::new(item, &config.root_path))
            .collect(),
        categories: category_links(&config.root_path),
    })
}

/// Replace each run of newlines with a single space.
fn collapse_newlines(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_newlines = false;
    for c in text.chars() {
        if c == '\n' {
            if !in_newlines {
                result.push(' ');
            }
            in_newlines = true;
        } else {
            result.push(c);
            in_newlines = false;
        }
    }
    result
}
