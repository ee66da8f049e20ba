//! Compiled patterns for line classification and inline formatting.
//!
//! Uses LazyLock to compile each pattern once on first use.

use regex::Regex;
use std::sync::LazyLock;

// === Block patterns (matched against the trimmed line) ===

/// Opening code fence with an optional language tag: ```` ```rust ````
pub static FENCE_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^`{3,}([A-Za-z0-9_]+)?\s*$").unwrap());

/// ATX heading: `## Heading text`
pub static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)").unwrap());

/// Ordered list item: `12. content`
pub static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.\s+(.+)").unwrap());

/// Unordered list item: `- content`, `* content`, `+ content`
pub static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+]\s+(.+)").unwrap());

/// Block quote line: `> content`
pub static QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>\s?(.*)").unwrap());

/// One cell of a table separator row: `---`, `:--`, `--:`, `:-:`
pub static SEPARATOR_CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:?-+:?$").unwrap());

// === Inline patterns (in substitution order) ===

/// Inline code span: `` `code` ``
pub static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// External link: `[label](https://...)`. The URL cannot contain a
/// placeholder, so a code span inside it leaves the link unrecognized.
pub static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.+?)\]\((https?://[^\s)\x{E000}]+)\)").unwrap());

pub static BOLD_STAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

pub static BOLD_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.+?)__").unwrap());

pub static ITALIC_STAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());

pub static ITALIC_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(.+?)_").unwrap());

pub static STRIKETHROUGH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~(.+?)~~").unwrap());

/// Whitespace run in heading text, including the BOM/ZWNBSP (U+FEFF).
pub static SLUG_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x{FEFF}]+").unwrap());

/// Anything a slug may not contain: not a letter, number or hyphen.
pub static SLUG_DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\-]").unwrap());

/// Placeholder left behind for a protected fragment: `\u{E000}3\u{E000}`
pub static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x{E000}([0-9]+)\x{E000}").unwrap());
