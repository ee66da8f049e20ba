//! Where site documents come from.
//!
//! Paths are the site-relative URLs the page layer builds
//! (`./data/picks.json`, `../content/picks/2024-01-01-x.md`). A source maps
//! them onto its own storage.

use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::util::decode_text;

/// A read-only source of text documents.
pub trait ContentSource: Send + Sync {
    /// Fetch the full text of the document at `path`.
    fn fetch_text(&self, path: &str) -> Result<String>;
}

impl<S: ContentSource + ?Sized> ContentSource for &S {
    fn fetch_text(&self, path: &str) -> Result<String> {
        (**self).fetch_text(path)
    }
}

impl<S: ContentSource + ?Sized> ContentSource for Box<S> {
    fn fetch_text(&self, path: &str) -> Result<String> {
        (**self).fetch_text(path)
    }
}

/// Strip the query, fragment and any `.`/`..`/root prefix from a site URL.
///
/// Every page resolves paths against its own root, so once the leading
/// relative segments are gone the rest is relative to the site directory.
fn site_relative(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let mut rest = &path[..end];
    loop {
        if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix("../") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('/') {
            rest = stripped;
        } else {
            return rest;
        }
    }
}

// --- Implementation: Local Directory ---

/// Serves documents from a directory holding the built site.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a site URL to a file below the root, refusing to leave it.
    fn file_path(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(site_relative(path));
        let mut resolved = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    let decoded = percent_encoding::percent_decode(part.as_encoded_bytes())
                        .decode_utf8()
                        .ok()?;
                    if decoded == ".." || decoded.contains(['/', '\\']) {
                        return None;
                    }
                    resolved.push(&*decoded);
                }
                Component::CurDir => {}
                _ => return None,
            }
        }
        Some(resolved)
    }
}

impl ContentSource for DirSource {
    fn fetch_text(&self, path: &str) -> Result<String> {
        let file = self
            .file_path(path)
            .ok_or_else(|| Error::NotFound(path.to_string()))?;
        match std::fs::read(&file) {
            Ok(bytes) => Ok(decode_text(&bytes).into_owned()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::NotFound(path.to_string())),
            Err(source) => Err(Error::Io {
                path: path.to_string(),
                source,
            }),
        }
    }
}

// --- Implementation: In-Memory ---

/// Serves documents from a map keyed by site-relative path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, keyed by its site-relative path (`data/picks.json`).
    pub fn insert(&mut self, path: impl AsRef<str>, text: impl Into<String>) {
        self.documents
            .insert(site_relative(path.as_ref()).to_string(), text.into());
    }

    /// Builder form of [`MemorySource::insert`].
    pub fn with_document(mut self, path: impl AsRef<str>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl ContentSource for MemorySource {
    fn fetch_text(&self, path: &str) -> Result<String> {
        let key = site_relative(path);
        let decoded = percent_encoding::percent_decode_str(key).decode_utf8_lossy();
        self.documents
            .get(key)
            .or_else(|| self.documents.get(decoded.as_ref()))
            .cloned()
            .ok_or_else(|| Error::NotFound(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_relative() {
        assert_eq!(site_relative("./data/a.json"), "data/a.json");
        assert_eq!(site_relative("../../data/a.json"), "data/a.json");
        assert_eq!(site_relative("/data/a.json?v=2#top"), "data/a.json");
        assert_eq!(site_relative("data/a.json"), "data/a.json");
    }

    #[test]
    fn test_dir_source_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data/picks.json"), "[]").unwrap();

        let source = DirSource::new(dir.path());
        assert_eq!(source.fetch_text("./data/picks.json").unwrap(), "[]");
        assert_eq!(source.fetch_text("../data/picks.json").unwrap(), "[]");
    }

    #[test]
    fn test_dir_source_decodes_percent_escapes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("content/picks")).unwrap();
        std::fs::write(dir.path().join("content/picks/2024-01-01-a b.md"), "# A").unwrap();

        let source = DirSource::new(dir.path());
        let text = source
            .fetch_text("./content/picks/2024-01-01-a%20b.md")
            .unwrap();
        assert_eq!(text, "# A");
    }

    #[test]
    fn test_dir_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirSource::new(dir.path());
        assert!(matches!(
            source.fetch_text("./nope.md"),
            Err(Error::NotFound(path)) if path == "./nope.md"
        ));
    }

    #[test]
    fn test_dir_source_refuses_escape() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirSource::new(dir.path());
        assert!(matches!(
            source.fetch_text("data/../../etc/passwd"),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            source.fetch_text("data/%2E%2E/%2E%2E/etc/passwd"),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            source.fetch_text("data/..%2F..%2Fetc/passwd"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new()
            .with_document("data/picks.json", "[]")
            .with_document("./content/picks/x y.md", "text");

        assert_eq!(source.len(), 2);
        assert_eq!(source.fetch_text("../data/picks.json").unwrap(), "[]");
        assert_eq!(source.fetch_text("./content/picks/x%20y.md").unwrap(), "text");
        assert!(matches!(
            source.fetch_text("data/other.json"),
            Err(Error::NotFound(_))
        ));
    }
}
