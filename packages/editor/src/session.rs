//! # Edit Session
//!
//! One user's editing state for a project: the document store, the history
//! ledger, the parallel prompt log, the current element selection, and the
//! AI-work flag.
//!
//! The ledger and prompt log are private so the invariant that they grow in
//! lockstep (one prompt per completed batch) cannot be broken from outside.

use pageforge_common::{is_same_html, Page, SelectedElement, DEFAULT_HTML};

use crate::{DocumentStore, HistoryEntry, HistoryLedger};

/// Editing state for one project session.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    /// The authoritative document. Mutate through its operations only.
    pub store: DocumentStore,

    ledger: HistoryLedger,
    prompts: Vec<String>,
    selected: Option<SelectedElement>,
    ai_working: bool,
}

impl EditSession {
    /// Fresh session with a single default page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from a persisted project and/or a recovery seed.
    ///
    /// The recovery seed (working copy captured when a previous session
    /// ended) wins over the persisted pages when both are present.
    pub fn start(
        initial_pages: Option<Vec<Page>>,
        prompts: Vec<String>,
        recovery_seed: Option<&str>,
    ) -> Self {
        let store = match (recovery_seed, initial_pages) {
            (Some(seed), _) => DocumentStore::from_seed(seed),
            (None, Some(pages)) => DocumentStore::from_pages(pages),
            (None, None) => DocumentStore::new(),
        };
        Self {
            store,
            prompts,
            ..Self::default()
        }
    }

    /// Prompts issued so far, oldest first.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// History entries, most recent first.
    pub fn history(&self) -> &[HistoryEntry] {
        self.ledger.entries()
    }

    pub fn is_ai_working(&self) -> bool {
        self.ai_working
    }

    pub fn selected_element(&self) -> Option<&SelectedElement> {
        self.selected.as_ref()
    }

    pub fn set_selected_element(&mut self, element: Option<SelectedElement>) {
        self.selected = element;
    }

    /// Mark an AI edit batch as in flight. Returns false when one already
    /// is; the caller must not start a second.
    pub fn begin_ai(&mut self) -> bool {
        if self.ai_working {
            return false;
        }
        self.ai_working = true;
        true
    }

    /// Complete an AI edit batch: splice the produced pages into the store,
    /// record a frozen snapshot with its prompt, and clear the selection.
    pub fn complete_ai(&mut self, pages: Vec<Page>, prompt: impl Into<String>) {
        let prompt = prompt.into();
        self.store.splice(pages);
        self.ledger.record(self.store.snapshot(), prompt.clone());
        self.prompts.push(prompt);
        self.selected = None;
        self.ai_working = false;
    }

    /// Abort an AI edit batch. The store is left exactly as it was when the
    /// batch started, so no work is lost.
    pub fn abort_ai(&mut self) {
        self.ai_working = false;
    }

    /// Splice a historical snapshot back into the store. Returns false for
    /// an out-of-range index. The ledger itself is untouched.
    pub fn restore_history(&mut self, index: usize) -> bool {
        match self.ledger.restore(index) {
            Some(pages) => {
                self.store.splice(pages);
                true
            }
            None => false,
        }
    }

    /// Whether leaving now would lose work: an AI batch is in flight, or
    /// the active page has diverged from the untouched starter template.
    pub fn has_unsaved_changes(&self) -> bool {
        self.ai_working || !is_same_html(&self.store.active_page().html, DEFAULT_HTML)
    }
}
