//! Memoizing document cache.
//!
//! One cache is created per page load (or per CLI run) and handed to the
//! code that needs documents. It never evicts: a page only touches a handful
//! of indexes and one article.

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

use super::source::ContentSource;

/// Caches fetched Markdown text and parsed JSON by path.
#[derive(Debug)]
pub struct DocumentCache<S> {
    source: S,
    text: HashMap<String, Arc<str>>,
    json: HashMap<String, Arc<serde_json::Value>>,
}

impl<S: ContentSource> DocumentCache<S> {
    /// Create an empty cache in front of `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            text: HashMap::new(),
            json: HashMap::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch a text document, from cache when possible.
    pub fn fetch_text(&mut self, path: &str) -> Result<Arc<str>> {
        if let Some(text) = self.text.get(path) {
            tracing::debug!(path, "text cache hit");
            return Ok(Arc::clone(text));
        }

        tracing::debug!(path, "fetching text");
        let text: Arc<str> = self.source.fetch_text(path)?.into();
        self.text.insert(path.to_string(), Arc::clone(&text));
        Ok(text)
    }

    /// Fetch and parse a JSON document, from cache when possible.
    ///
    /// Only successfully parsed documents are cached. A document that parses
    /// as JSON but not as `T` is cached as JSON and reported as an error.
    pub fn fetch_json<T: DeserializeOwned>(&mut self, path: &str) -> Result<T> {
        let value = self.fetch_json_value(path)?;
        T::deserialize(&*value).map_err(|source| {
            tracing::error!(path, error = %source, "unexpected JSON shape");
            Error::Json {
                path: path.to_string(),
                source,
            }
        })
    }

    /// Fetch a JSON document as an untyped value.
    pub fn fetch_json_value(&mut self, path: &str) -> Result<Arc<serde_json::Value>> {
        if let Some(value) = self.json.get(path) {
            tracing::debug!(path, "JSON cache hit");
            return Ok(Arc::clone(value));
        }

        tracing::debug!(path, "fetching JSON");
        let text = self.source.fetch_text(path)?;
        let value: serde_json::Value = serde_json::from_str(&text).map_err(|source| {
            tracing::error!(path, error = %source, "JSON parse error");
            Error::Json {
                path: path.to_string(),
                source,
            }
        })?;

        let value = Arc::new(value);
        self.json.insert(path.to_string(), Arc::clone(&value));
        Ok(value)
    }

    /// Drop every cached document.
    pub fn clear(&mut self) {
        self.text.clear();
        self.json.clear();
    }

    /// Number of cached documents (text and JSON).
    pub fn len(&self) -> usize {
        self.text.len() + self.json.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.json.is_empty()
    }
}
