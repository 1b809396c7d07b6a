//! Element selection payload.
//!
//! When editable mode intercepts a click inside the rendered preview, the
//! host cannot hand the sandboxed DOM node itself across the boundary. What
//! crosses instead is this payload: enough identifying information for the
//! AI-edit collaborator to address the element in a follow-up instruction.

use serde::{Deserialize, Serialize};

/// An element the user picked inside the rendered preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedElement {
    /// Lowercase tag name, e.g. `"h1"`.
    pub tag: String,

    /// Stable selector path from the document root, e.g.
    /// `"body > div:nth-child(2) > h1"`.
    pub selector: String,
}

impl SelectedElement {
    pub fn new(tag: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            selector: selector.into(),
        }
    }
}
