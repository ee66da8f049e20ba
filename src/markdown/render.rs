//! Markdown → HTML rendering.
//!
//! A single left-to-right pass over the source lines. Each non-blank line is
//! classified into exactly one block type, first match wins:
//!
//! 1. code fence (toggles verbatim mode)
//! 2. heading
//! 3. thematic break
//! 4. table (header row followed by a separator row)
//! 5. ordered list item
//! 6. unordered list item
//! 7. block quote
//! 8. paragraph
//!
//! Blank lines close an open list but are kept verbatim inside a fence.
//! Nothing here can fail: malformed constructs fall through to paragraphs
//! or literal text.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::escape::escape_html;
use super::inline::render_inline;
use super::patterns::{
    FENCE_OPEN_RE, HEADING_RE, ORDERED_ITEM_RE, QUOTE_RE, UNORDERED_ITEM_RE,
};
use super::slugify::slugify;
use super::table::Table;

/// A heading found while rendering, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level, 1-6.
    pub level: u8,
    /// Heading text as written, before escaping or inline formatting.
    pub text: String,
    /// Slug used as the element id and fragment target.
    pub id: String,
}

/// Result of rendering a Markdown document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderResult {
    /// The HTML fragment.
    pub html: String,
    /// Headings in document order, for building a table of contents.
    pub headings: Vec<Heading>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    fn close_tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "</ol>",
            ListKind::Unordered => "</ul>",
        }
    }
}

/// The currently open list.
#[derive(Debug, Clone)]
struct ListContext {
    kind: ListKind,
    /// Number the list was opened with (1 for unordered lists).
    start: u64,
    /// Items emitted so far.
    count: u64,
}

impl ListContext {
    /// The number an item would get from plain sequential counting.
    fn expected_ordinal(&self) -> u64 {
        self.start.saturating_add(self.count)
    }
}

/// An open fenced code block.
#[derive(Debug, Clone)]
struct CodeBlock<'a> {
    language: Option<String>,
    lines: Vec<&'a str>,
}

/// Block-level state for one render call.
pub struct RenderContext<'a> {
    lines: Vec<&'a str>,
    // Accumulated output
    output: String,
    headings: Vec<Heading>,
    // Block state
    list: Option<ListContext>,
    code: Option<CodeBlock<'a>>,
}

impl<'a> RenderContext<'a> {
    /// Create a context over newline-normalized source text.
    ///
    /// Use [`normalize_newlines`] first; a `\r` left in the source is kept
    /// as ordinary text.
    pub fn new(source: &'a str) -> Self {
        let lines = if source.is_empty() {
            Vec::new()
        } else {
            source.split('\n').collect()
        };
        Self {
            lines,
            output: String::new(),
            headings: Vec::new(),
            list: None,
            code: None,
        }
    }

    /// Render every line, consuming the context.
    pub fn render(mut self) -> RenderResult {
        let mut index = 0;
        while index < self.lines.len() {
            index = self.render_line(index);
        }

        // An unterminated fence runs to the end of the document.
        self.flush_code_block();
        self.close_list();

        RenderResult {
            html: self.output,
            headings: self.headings,
        }
    }

    /// Render the block starting at `index`, returning the next line to visit.
    fn render_line(&mut self, index: usize) -> usize {
        let line = self.lines[index];
        let trimmed = line.trim();

        if self.code.is_some() {
            if trimmed.starts_with("```") {
                self.flush_code_block();
            } else if let Some(code) = self.code.as_mut() {
                code.lines.push(line);
            }
            return index + 1;
        }

        if trimmed.is_empty() {
            self.close_list();
            return index + 1;
        }

        if let Some(caps) = FENCE_OPEN_RE.captures(trimmed) {
            self.close_list();
            self.code = Some(CodeBlock {
                language: caps.get(1).map(|m| m.as_str().to_lowercase()),
                lines: Vec::new(),
            });
            return index + 1;
        }

        if let Some(caps) = HEADING_RE.captures(trimmed) {
            self.close_list();
            let level = caps[1].len() as u8;
            self.write_heading(level, &caps[2]);
            return index + 1;
        }

        if is_thematic_break(trimmed) {
            self.close_list();
            self.output.push_str("<hr />");
            return index + 1;
        }

        if let Some((table, next)) = Table::parse(&self.lines, index) {
            self.close_list();
            table.write_html(&mut self.output);
            return next;
        }

        if let Some(caps) = ORDERED_ITEM_RE.captures(trimmed) {
            // Digit runs too long for u64 still render, pinned to u64::MAX.
            let value = caps[1].parse::<u64>().unwrap_or(u64::MAX);
            self.write_ordered_item(value, &caps[2]);
            return index + 1;
        }

        if let Some(caps) = UNORDERED_ITEM_RE.captures(trimmed) {
            self.ensure_list(ListKind::Unordered, 1);
            self.push_list_item(None, &caps[1]);
            return index + 1;
        }

        if let Some(caps) = QUOTE_RE.captures(trimmed) {
            self.close_list();
            self.output.push_str("<blockquote>");
            self.output.push_str(&render_inline(&caps[1]));
            self.output.push_str("</blockquote>");
            return index + 1;
        }

        self.close_list();
        self.output.push_str("<p>");
        self.output.push_str(&render_inline(trimmed));
        self.output.push_str("</p>");
        index + 1
    }

    fn write_heading(&mut self, level: u8, text: &str) {
        let id = slugify(text);
        self.output.push_str(&format!(
            r#"<h{level} id="{id}" data-heading-id="{id}">{}</h{level}>"#,
            render_inline(text)
        ));
        self.headings.push(Heading {
            level,
            text: text.to_string(),
            id,
        });
    }

    fn write_ordered_item(&mut self, value: u64, content: &str) {
        self.ensure_list(ListKind::Ordered, value);
        let expected = self
            .list
            .as_ref()
            .map(ListContext::expected_ordinal)
            .unwrap_or(value);
        let explicit = (value != expected).then_some(value);
        self.push_list_item(explicit, content);
    }

    fn push_list_item(&mut self, value: Option<u64>, content: &str) {
        match value {
            Some(value) => self.output.push_str(&format!(r#"<li value="{value}">"#)),
            None => self.output.push_str("<li>"),
        }
        self.output.push_str(&render_inline(content));
        self.output.push_str("</li>");
        if let Some(list) = self.list.as_mut() {
            list.count += 1;
        }
    }

    /// Make sure a list of `kind` is open, closing a list of the other kind.
    fn ensure_list(&mut self, kind: ListKind, start: u64) {
        if self.list.as_ref().is_some_and(|list| list.kind == kind) {
            return;
        }
        self.close_list();
        match kind {
            ListKind::Ordered if start != 1 => {
                self.output.push_str(&format!(r#"<ol start="{start}">"#));
            }
            ListKind::Ordered => self.output.push_str("<ol>"),
            ListKind::Unordered => self.output.push_str("<ul>"),
        }
        self.list = Some(ListContext {
            kind,
            start,
            count: 0,
        });
    }

    fn close_list(&mut self) {
        if let Some(list) = self.list.take() {
            self.output.push_str(list.kind.close_tag());
        }
    }

    fn flush_code_block(&mut self) {
        let Some(code) = self.code.take() else {
            return;
        };
        match &code.language {
            Some(lang) => self.output.push_str(&format!(
                r#"<pre><code class="language-{lang}" data-lang="{lang}">"#
            )),
            None => self.output.push_str("<pre><code>"),
        }
        self.output.push_str(&escape_html(&code.lines.join("\n")));
        self.output.push_str("</code></pre>");
    }
}

/// Three or more of the same `-`, `*` or `_`, ignoring whitespace.
fn is_thematic_break(trimmed: &str) -> bool {
    let mut chars = trimmed.chars().filter(|c| !c.is_whitespace());
    let Some(marker) = chars.next() else {
        return false;
    };
    if !matches!(marker, '-' | '*' | '_') {
        return false;
    }
    let mut count = 1;
    for c in chars {
        if c != marker {
            return false;
        }
        count += 1;
    }
    count >= 3
}

/// Collapse `\r\n` pairs to `\n` and drop any remaining `\r`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if memchr::memchr(b'\r', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', ""))
}

/// Render a Markdown document to an HTML fragment plus its heading outline.
///
/// This is the main entry point. It never fails; empty input yields empty
/// HTML and no headings.
///
/// # Examples
///
/// ```
/// use notedown::markdown::render_markdown;
///
/// let result = render_markdown("# Title\n\ntext");
/// assert_eq!(result.html, r#"<h1 id="title" data-heading-id="title">Title</h1><p>text</p>"#);
/// assert_eq!(result.headings[0].id, "title");
/// ```
pub fn render_markdown(markdown: &str) -> RenderResult {
    let source = normalize_newlines(markdown);
    RenderContext::new(&source).render()
}
