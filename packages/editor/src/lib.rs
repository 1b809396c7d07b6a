//! # Pageforge Editor
//!
//! Authoritative in-memory model for a multi-page HTML editing session.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ store: ordered pages + active-page pointer  │
//! │  - create/rename/delete/set-active          │
//! │  - in-place content replacement             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ history: prepend-only snapshot ledger       │
//! │  - one frozen entry per completed AI batch  │
//! │  - paired with the prompt that produced it  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ session: one user's editing state           │
//! │  - seed recovery, selection, AI-work flag   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The store is the source of truth**: rendered previews and history
//!    entries are derived views.
//! 2. **History is frozen**: recorded snapshots share no mutable state with
//!    the live document.
//! 3. **Races are tolerated**: operations on absent pages degrade to no-ops
//!    where the UI can plausibly issue them concurrently with a deletion.
//!
//! ## Usage
//!
//! ```rust
//! use pageforge_editor::{DocumentStore, HistoryLedger};
//!
//! let mut store = DocumentStore::new();
//! store.create_page("page");
//! store.replace_html("page-2.html", "<h1>About</h1>");
//!
//! let mut ledger = HistoryLedger::new();
//! ledger.record(store.snapshot(), "add an about page");
//! ```

mod errors;
mod history;
mod session;
mod store;

pub use errors::EditorError;
pub use history::{HistoryEntry, HistoryLedger};
pub use session::EditSession;
pub use store::DocumentStore;

// Re-export common types for convenience
pub use pageforge_common::{Page, SelectedElement, DEFAULT_HTML, INDEX_PAGE};
