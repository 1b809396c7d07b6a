//! # Persistence collaborator contract
//!
//! Saving/publishing a project is an external concern; the workspace only
//! owns the payload and outcome shapes, not the transport.

use std::future::Future;

use pageforge_common::Page;
use serde::{Deserialize, Serialize};

/// What the persistence collaborator consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPayload {
    pub title: String,
    pub pages: Vec<Page>,
    pub prompts: Vec<String>,
}

/// What it answers with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublishOutcome {
    pub ok: bool,

    /// Where the project landed, when `ok`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Collaborator-provided failure message, when not `ok`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Project persistence collaborator.
pub trait ProjectStore {
    fn publish(&self, payload: ProjectPayload) -> impl Future<Output = PublishOutcome> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_parses_minimal_response() {
        let outcome: PublishOutcome = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert!(outcome.ok);
        assert!(outcome.path.is_none());

        let failed: PublishOutcome =
            serde_json::from_str(r#"{"ok":false,"error":"quota exceeded"}"#).unwrap();
        assert_eq!(failed.error.as_deref(), Some("quota exceeded"));
    }
}
