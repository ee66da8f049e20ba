//! Page assembly over the static site's documents.
//!
//! The blog is a directory of static files: JSON indexes under `data/`,
//! Markdown articles under `content/`, and HTML pages that locate everything
//! relative to their own root path. This module does what the pages need
//! minus the DOM:
//!
//! - [`paths`]: resolve site-relative URLs against a page's root path
//! - [`router`]: post query parameters, post URLs and content paths
//! - [`source`]: where documents come from (a directory, or memory)
//! - [`cache`]: per-page memoization of fetched documents
//! - [`index`]: post indexes, sorting, tag filters and cards
//! - [`toc`]: the article table of contents
//! - [`pages`]: assembled article, category and home pages
//!
//! Caches are explicit values handed to whoever needs them; nothing here is
//! process-global.

mod cache;
mod config;
mod index;
mod pages;
mod paths;
mod router;
mod source;
mod toc;

pub use cache::DocumentCache;
pub use config::{DEFAULT_SITE_TITLE, SiteConfig};
pub use index::{
    FeaturedCard, FeaturedItem, PostCard, PostEntry, SUMMARY_LEN, SortOrder, collect_tags,
    filter_by_tags, neighbours, sort_by_date, summarise_text,
};
pub use pages::{
    Article, ArticleLink, CATEGORY_KEYS, CategoryLink, CategoryPage, FEATURED_INDEX, HomePage,
    category_links, load_article, load_article_from_query, load_category_page, load_home_page,
    nav_url,
};
pub use paths::{
    data_path, is_external, join_path, resolve_asset_path, resolve_data_path, resolve_internal_url,
};
pub use router::{
    POST_QUERY_KEY, PostParam, build_content_path, build_post_url, encode_component,
    normalise_category_name, parse_post_param, post_param_from_query, query_param,
};
pub use source::{ContentSource, DirSource, MemorySource};
pub use toc::render_toc;
