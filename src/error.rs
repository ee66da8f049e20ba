//! Error types for page assembly.
//!
//! Markdown rendering itself never fails; these errors come from loading
//! indexes and content documents.

use thiserror::Error;

/// Errors that can occur while loading or assembling site pages.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parsing error in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Invalid post parameter: {0:?}")]
    InvalidPostParam(String),

    #[error("Post not found: {category}/{slug}")]
    PostNotFound { category: String, slug: String },
}

pub type Result<T> = std::result::Result<T, Error>;
