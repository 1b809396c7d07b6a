//! Core page model shared by every Pageforge crate.
//!
//! A project is an ordered collection of named HTML documents. The `Page`
//! type is deliberately plain: path + content, serde-derived so the same
//! shape travels to the persistence and AI-edit collaborators unchanged.

use serde::{Deserialize, Serialize};

use crate::html::DEFAULT_HTML;

/// Path of the page every project starts from.
pub const INDEX_PAGE: &str = "index.html";

/// One named HTML document within a multi-page project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Unique key within the project, e.g. `"index.html"`.
    pub path: String,

    /// Full HTML document content.
    pub html: String,
}

impl Page {
    pub fn new(path: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            html: html.into(),
        }
    }

    /// The synthesized fallback page: `index.html` with the default template.
    pub fn default_index() -> Self {
        Self::new(INDEX_PAGE, DEFAULT_HTML)
    }
}
