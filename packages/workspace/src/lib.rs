//! # Pageforge Workspace
//!
//! Session orchestration: ties the authoritative document model
//! (`pageforge-editor`) to the live preview engine (`pageforge-preview`)
//! and drives the two external collaborators — the streaming AI-edit agent
//! and the project persistence store — without owning either's transport.
//!
//! Everything runs on the host's event loop; the only suspension points are
//! the AI event stream and the publish round-trip, both awaited without
//! blocking input handling. While an AI batch is in flight an
//! `is_ai_working` flag disables destructive input and the preview runs in
//! streaming mode.

mod ai;
mod errors;
mod publish;
mod studio;

pub use ai::{EditEvent, EditRequest, EditService};
pub use errors::{WorkspaceError, GENERIC_FAILURE};
pub use publish::{ProjectPayload, ProjectStore, PublishOutcome};
pub use studio::Studio;

// Re-export the session types hosts need alongside the studio
pub use pageforge_editor::{EditSession, HistoryEntry, Page, SelectedElement};
