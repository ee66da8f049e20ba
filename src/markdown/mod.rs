//! Markdown → HTML rendering for article bodies.
//!
//! The renderer is a pure function: [`render_markdown`] takes the text of one
//! Markdown document and returns an HTML fragment plus the document's
//! heading outline. It holds no state between calls and never fails.
//!
//! - [`escape`]: HTML escaping for source text
//! - [`slugify`]: fragment-safe heading slugs
//! - [`inline`]: code spans, links and emphasis within a block
//! - [`table`]: pipe tables with column alignment
//! - [`render`]: the block-level pass
//!
//! ## Design Notes
//!
//! This is deliberately not a CommonMark implementation:
//!
//! - **One block per line**: paragraphs and quotes are never merged across
//!   lines, and lists do not nest
//! - **Ordered pattern substitution** for inline markup; overlapping markers
//!   resolve by pattern order rather than by nesting
//! - **Escape everything from the source**: all `&`, `<` and `>` in the input
//!   reach the output escaped; only tags the renderer writes itself are raw
//! - **Heading slugs are not deduplicated**: two identical headings share an id

mod escape;
mod inline;
mod patterns;
mod render;
mod slugify;
mod table;

pub use escape::{escape_html, escape_quotes};
pub use inline::render_inline;
pub use render::{Heading, RenderContext, RenderResult, normalize_newlines, render_markdown};
pub use slugify::{FALLBACK_SLUG, MAX_SLUG_LEN, slugify};
pub use table::{Alignment, Table};
