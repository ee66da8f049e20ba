//! Site configuration.

/// Title appended to every page title.
pub const DEFAULT_SITE_TITLE: &str = "Belka's Keiba Note";

/// Configuration for assembling pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Path from the current page back to the site root (`.` or `..`), used
    /// to resolve every internal URL and document path.
    pub root_path: String,
    /// Site name, used in page titles.
    pub site_title: String,
    /// Maximum length of meta descriptions, in characters.
    pub description_len: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root_path: ".".to_string(),
            site_title: DEFAULT_SITE_TITLE.to_string(),
            description_len: super::index::SUMMARY_LEN,
        }
    }
}

impl SiteConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root_path(mut self, root_path: impl Into<String>) -> Self {
        self.root_path = root_path.into();
        self
    }

    pub fn with_site_title(mut self, site_title: impl Into<String>) -> Self {
        self.site_title = site_title.into();
        self
    }

    pub fn with_description_len(mut self, description_len: usize) -> Self {
        self.description_len = description_len;
        self
    }

    /// `<page> | <site>` title.
    pub fn page_title(&self, page: &str) -> String {
        format!("{page} | {}", self.site_title)
    }
}
