//! # Document Store
//!
//! Owns the ordered page collection and the active-page pointer.
//!
//! The store is the only component allowed to mutate the document. Every
//! operation keeps two invariants:
//!
//! - paths are unique within the document
//! - the active pointer resolves to an existing page, or falls back to a
//!   synthesized default page
//!
//! Content replacement is in-place: untouched pages keep their identity
//! (tracked as a per-page revision counter) so downstream consumers can
//! memoize renders.

use std::borrow::Cow;
use std::collections::HashMap;

use pageforge_common::{Page, DEFAULT_HTML, INDEX_PAGE};

use crate::EditorError;

#[derive(Debug, Clone)]
struct PageSlot {
    page: Page,
    /// Bumped whenever this page's content or path changes.
    revision: u64,
}

/// Ordered collection of pages plus the active-page pointer.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    pages: Vec<PageSlot>,
    /// Path → position, kept in sync with `pages` by every structural op.
    index: HashMap<String, usize>,
    active: String,
}

impl DocumentStore {
    /// New store with the default `index.html` page, active.
    pub fn new() -> Self {
        Self::from_pages(vec![Page::default_index()])
    }

    /// Build a store from existing pages (persisted project load).
    ///
    /// Duplicate paths keep the first occurrence. An empty list falls back
    /// to the default index page. The first page becomes active.
    pub fn from_pages(pages: Vec<Page>) -> Self {
        let mut store = Self {
            pages: Vec::new(),
            index: HashMap::new(),
            active: String::new(),
        };

        for page in pages {
            if !store.index.contains_key(&page.path) {
                store.index.insert(page.path.clone(), store.pages.len());
                store.pages.push(PageSlot { page, revision: 0 });
            }
        }

        if store.pages.is_empty() {
            let page = Page::default_index();
            store.index.insert(page.path.clone(), 0);
            store.pages.push(PageSlot { page, revision: 0 });
        }

        store.active = store.pages[0].page.path.clone();
        store
    }

    /// Build a store from a recovery seed captured at the end of a previous
    /// session: a JSON page list, or a bare HTML string treated as the
    /// content of `index.html`.
    pub fn from_seed(seed: &str) -> Self {
        match serde_json::from_str::<Vec<Page>>(seed) {
            Ok(pages) if !pages.is_empty() => Self::from_pages(pages),
            _ => Self::from_pages(vec![Page::new(INDEX_PAGE, seed)]),
        }
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<&Page> {
        self.index.get(path).map(|&i| &self.pages[i].page)
    }

    /// Pages in document order.
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().map(|slot| &slot.page)
    }

    /// Structurally independent copy of all pages, for history recording
    /// and collaborator payloads.
    pub fn snapshot(&self) -> Vec<Page> {
        self.pages.iter().map(|slot| slot.page.clone()).collect()
    }

    /// Revision counter for one page. Unchanged pages keep their revision
    /// across edits to other pages.
    pub fn page_revision(&self, path: &str) -> Option<u64> {
        self.index.get(path).map(|&i| self.pages[i].revision)
    }

    /// Path the active pointer currently holds.
    pub fn active_path(&self) -> &str {
        &self.active
    }

    /// Resolve the active pointer.
    ///
    /// Never fails: when the pointer does not match an existing page the
    /// synthesized default page is returned instead.
    pub fn active_page(&self) -> Cow<'_, Page> {
        match self.get(&self.active) {
            Some(page) => Cow::Borrowed(page),
            None => Cow::Owned(Page::default_index()),
        }
    }

    /// Append a new page with a generated unique path (`{base}-{n}.html`)
    /// and default content, and make it active.
    ///
    /// The counter starts at `len + 1` and walks forward until the path is
    /// free, so the operation cannot fail on a collision.
    pub fn create_page(&mut self, base: &str) -> &Page {
        let mut n = self.pages.len() + 1;
        let path = loop {
            let candidate = format!("{base}-{n}.html");
            if !self.index.contains_key(&candidate) {
                break candidate;
            }
            n += 1;
        };

        let slot = PageSlot {
            page: Page::new(path.clone(), DEFAULT_HTML),
            revision: 0,
        };
        self.index.insert(path.clone(), self.pages.len());
        self.pages.push(slot);
        self.active = path;

        let last = self.pages.len() - 1;
        &self.pages[last].page
    }

    /// Rename a page in place. The active pointer follows a renamed active
    /// page. Renaming a page to its own path is a no-op.
    pub fn rename_page(&mut self, old_path: &str, new_path: &str) -> Result<(), EditorError> {
        if old_path == new_path {
            return Ok(());
        }
        if self.index.contains_key(new_path) {
            return Err(EditorError::Conflict(new_path.to_string()));
        }
        let i = *self
            .index
            .get(old_path)
            .ok_or_else(|| EditorError::NotFound(old_path.to_string()))?;

        self.pages[i].page.path = new_path.to_string();
        self.pages[i].revision += 1;
        self.index.remove(old_path);
        self.index.insert(new_path.to_string(), i);

        if self.active == old_path {
            self.active = new_path.to_string();
        }
        Ok(())
    }

    /// Remove a page. When the deleted page was active, the pointer moves
    /// to the first remaining page, or to the synthesized default path if
    /// none remain.
    pub fn delete_page(&mut self, path: &str) -> Result<(), EditorError> {
        let i = *self
            .index
            .get(path)
            .ok_or_else(|| EditorError::NotFound(path.to_string()))?;

        self.pages.remove(i);
        self.rebuild_index();

        if self.active == path {
            self.active = self
                .pages
                .first()
                .map(|slot| slot.page.path.clone())
                .unwrap_or_else(|| INDEX_PAGE.to_string());
        }
        Ok(())
    }

    /// Move the active pointer. A path that does not exist is ignored
    /// rather than rejected: the caller may race a concurrent deletion.
    pub fn set_active(&mut self, path: &str) {
        if self.index.contains_key(path) {
            self.active = path.to_string();
        }
    }

    /// Replace the content of exactly one page, in place.
    ///
    /// O(1) amortized via the path index; no other page is touched, so
    /// their revisions (and any render memoized on them) stay valid. An
    /// absent path is ignored — the editing surface may still be flushing
    /// keystrokes for a page that was just deleted.
    pub fn replace_html(&mut self, path: &str, html: impl Into<String>) {
        if let Some(&i) = self.index.get(path) {
            self.pages[i].page.html = html.into();
            self.pages[i].revision += 1;
        }
    }

    /// Replace the whole collection (AI batch completion, history restore).
    ///
    /// The active pointer is kept when it still resolves, otherwise it
    /// moves to the first page.
    pub fn splice(&mut self, pages: Vec<Page>) {
        let active = self.active.clone();
        *self = Self::from_pages(pages);
        if self.index.contains_key(&active) {
            self.active = active;
        }
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (i, slot) in self.pages.iter().enumerate() {
            self.index.insert(slot.page.path.clone(), i);
        }
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
