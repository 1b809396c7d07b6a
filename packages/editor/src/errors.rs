//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// A mutation would give two pages the same path. The store is left
    /// unchanged.
    #[error("page already exists: {0}")]
    Conflict(String),

    /// The addressed page does not exist.
    #[error("page not found: {0}")]
    NotFound(String),
}
