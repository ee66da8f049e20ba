//! WASM bindings for rendering articles in the browser.
//!
//! The page scripts keep doing the fetching and DOM work; these functions
//! take Markdown text and hand back HTML fragments.

use wasm_bindgen::prelude::*;

use crate::markdown::{self, Heading};
use crate::site::render_toc;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Rendered article: body HTML plus the heading outline.
#[wasm_bindgen]
pub struct RenderedMarkdown {
    html: String,
    headings: Vec<Heading>,
}

#[wasm_bindgen]
impl RenderedMarkdown {
    #[wasm_bindgen(getter)]
    pub fn html(&self) -> String {
        self.html.clone()
    }

    /// Headings as a JSON array of `{level, text, id}`.
    #[wasm_bindgen(getter)]
    pub fn headings(&self) -> String {
        serde_json::to_string(&self.headings).unwrap_or_else(|_| "[]".to_string())
    }

    /// Table of contents `<li>` items for these headings.
    #[wasm_bindgen(getter, js_name = tocHtml)]
    pub fn toc_html(&self) -> String {
        render_toc(&self.headings)
    }
}

/// Render article Markdown.
#[wasm_bindgen]
pub fn render_markdown(text: &str) -> RenderedMarkdown {
    let result = markdown::render_markdown(text);
    RenderedMarkdown {
        html: result.html,
        headings: result.headings,
    }
}

/// Render a one-line snippet (card summary, featured comment).
#[wasm_bindgen]
pub fn render_inline_markdown(text: &str) -> String {
    markdown::render_inline(text)
}

/// Build table of contents items from a headings JSON array.
#[wasm_bindgen]
pub fn render_toc_json(json: &str) -> Result<String, JsValue> {
    let headings: Vec<Heading> =
        serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(render_toc(&headings))
}
