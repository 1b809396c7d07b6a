//! # AI-edit collaborator contract
//!
//! The workspace never generates HTML itself; an external agent does. The
//! contract is task-based: issue one request, receive ordered progress
//! events, then exactly one terminal event. There is no mid-flight
//! cancellation — a batch runs to completion or fails as a whole.

use pageforge_common::{Page, SelectedElement};
use pageforge_editor::HistoryEntry;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Everything the agent needs to produce the next page set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditRequest {
    pub prompt: String,

    /// The page currently shown in the editing surfaces.
    pub current_page: Page,

    /// Full current page set.
    pub pages: Vec<Page>,

    /// Prior snapshots, most recent first.
    pub html_history: Vec<HistoryEntry>,

    /// Prompts from earlier batches, oldest first.
    pub previous_prompts: Vec<String>,

    /// Element the user picked in editable mode, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_element: Option<SelectedElement>,

    /// Reference images attached to the prompt.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

/// One event on the edit stream. `Completed` and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditEvent {
    /// Cumulative HTML for the page the agent is currently writing. Drives
    /// the preview's streaming mode; does not touch the document store.
    Progress { path: String, html: String },

    /// The batch succeeded and produced a full replacement page set.
    Completed { pages: Vec<Page> },

    /// The batch failed as a whole.
    Failed { message: Option<String> },
}

/// Streaming AI-edit collaborator.
pub trait EditService {
    /// Start one edit batch. Events arrive in order on the returned
    /// channel; a channel closed without a terminal event counts as a
    /// failure.
    fn request_edit(&self, request: EditRequest) -> mpsc::Receiver<EditEvent>;
}
