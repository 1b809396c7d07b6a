//! Error types for session orchestration

use pageforge_editor::EditorError;
use thiserror::Error;

/// Shown when a collaborator fails without an explanation of its own.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// Caller input rejected before any state change (e.g. missing title).
    #[error("{0}")]
    Validation(String),

    /// A collaborator reported failure. The in-memory document is left
    /// unchanged so work is not lost.
    #[error("{0}")]
    External(String),

    #[error(transparent)]
    Editor(#[from] EditorError),
}
