//! # History Ledger
//!
//! Prepend-only log of full-document snapshots, one per completed AI edit
//! batch, paired with the prompt that produced it.
//!
//! Entries are immutable once created. A recorded snapshot is a structural
//! copy: mutating the live document afterwards cannot alter it, and
//! `restore` hands back a fresh copy so the ledger itself is never aliased
//! by the store.

use chrono::{DateTime, Utc};
use pageforge_common::Page;
use serde::{Deserialize, Serialize};

/// One frozen document snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub pages: Vec<Page>,
    pub prompt: String,
    pub created_at: DateTime<Utc>,
}

/// Most-recent-first snapshot log.
#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    entries: Vec<HistoryEntry>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a snapshot. `pages` is taken by value and stored as-is; the
    /// caller passes a copy of the live document (`DocumentStore::snapshot`)
    /// so no mutable reference is shared.
    pub fn record(&mut self, pages: Vec<Page>, prompt: impl Into<String>) {
        self.entries.insert(
            0,
            HistoryEntry {
                pages,
                prompt: prompt.into(),
                created_at: Utc::now(),
            },
        );
    }

    /// Page collection at `index` (0 = most recent), cloned for the store
    /// to splice in. Does not mutate the ledger.
    pub fn restore(&self, index: usize) -> Option<Vec<Page>> {
        self.entries.get(index).map(|entry| entry.pages.clone())
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
