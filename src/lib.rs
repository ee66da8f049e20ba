//! # notedown
//!
//! Markdown rendering and page assembly for a static blog front-end.
//!
//! ## Features
//!
//! - Render article Markdown to an HTML fragment plus a heading outline
//! - Escape all source text; only tags the renderer writes are raw HTML
//! - Build tables of contents, post cards and neighbour links
//! - Resolve site-relative URLs against a page's root path
//!
//! ## Quick Start
//!
//! ```
//! use notedown::markdown::render_markdown;
//! use notedown::site::render_toc;
//!
//! let result = render_markdown("# Arima Kinen\n\n1. **Equinox**\n2. Justin Palace");
//! assert!(result.html.contains(r#"<h1 id="arima-kinen""#));
//! assert!(result.html.contains("<li><strong>Equinox</strong></li>"));
//!
//! let toc = render_toc(&result.headings);
//! assert!(toc.contains(r##"href="#arima-kinen""##));
//! ```
//!
//! ## Assembling Pages
//!
//! Pages load their documents through a [`site::DocumentCache`] in front of a
//! [`site::ContentSource`]:
//!
//! ```
//! use notedown::site::{DocumentCache, MemorySource, SiteConfig, load_article_from_query};
//!
//! let source = MemorySource::new()
//!     .with_document("data/picks.json", r#"[{"title": "Arima", "slug": "arima", "date": "2023-12-24"}]"#)
//!     .with_document("content/picks/2023-12-24-arima.md", "# Result\n\nWon.");
//! let mut cache = DocumentCache::new(source);
//!
//! let article = load_article_from_query(&mut cache, &SiteConfig::default(), "?p=picks/arima").unwrap();
//! assert_eq!(article.headings[0].id, "result");
//! ```

pub mod error;
pub mod markdown;
pub mod site;
pub mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use markdown::{Heading, RenderResult, render_inline, render_markdown};
pub use util::format_date;
