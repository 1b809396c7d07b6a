//! # Studio
//!
//! One editing session end-to-end: the document session on one side, the
//! preview engine on the other, and the collaborator drivers between them.
//!
//! The studio is the layer that knows about wall-clock time (it stamps
//! every render with `Instant::now()`); the engines below take time as a
//! parameter and stay deterministic under test.

use std::time::Instant;

use pageforge_editor::EditSession;
use pageforge_preview::{
    ClickOutcome, LayoutManager, NavOutcome, NodeId, PreviewController, RenderMode, RenderSurface,
};

use crate::ai::{EditEvent, EditRequest, EditService};
use crate::errors::{WorkspaceError, GENERIC_FAILURE};
use crate::publish::{ProjectPayload, ProjectStore};

/// Orchestrator for one editing session.
pub struct Studio<S: RenderSurface> {
    /// The authoritative document state.
    pub session: EditSession,

    preview: PreviewController<S>,
    layout: LayoutManager,
}

impl<S: RenderSurface> Studio<S> {
    pub fn new(session: EditSession) -> Self {
        Self {
            session,
            preview: PreviewController::new(),
            layout: LayoutManager::default(),
        }
    }

    pub fn preview(&self) -> &PreviewController<S> {
        &self.preview
    }

    pub fn preview_mut(&mut self) -> &mut PreviewController<S> {
        &mut self.preview
    }

    pub fn layout(&self) -> &LayoutManager {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut LayoutManager {
        &mut self.layout
    }

    /// Mount the rendering surface and project the active page into it.
    pub fn attach_surface(&mut self, surface: S) {
        self.preview.attach(surface, Instant::now());
        self.render_active();
    }

    /// Push the active page's current HTML to the preview.
    pub fn render_active(&mut self) {
        let now = Instant::now();
        let page = self.session.store.active_page();
        self.preview.render(&page.html, now);
    }

    /// Timer tick: lets the streaming throttle apply a pending trailing
    /// value. Returns true when the preview content changed.
    pub fn tick(&mut self) -> bool {
        self.preview.poll(Instant::now())
    }

    /// Switch the visible page. Unknown paths are ignored (the click may
    /// have raced a deletion).
    pub fn select_page(&mut self, path: &str) {
        self.session.store.set_active(path);
        self.render_active();
    }

    /// Append a new page and show it.
    pub fn create_page(&mut self) -> String {
        let path = self.session.store.create_page("page").path.clone();
        tracing::info!(page = %path, "created page");
        self.render_active();
        path
    }

    pub fn rename_page(&mut self, old_path: &str, new_path: &str) -> Result<(), WorkspaceError> {
        self.session.store.rename_page(old_path, new_path)?;
        tracing::info!(from = %old_path, to = %new_path, "renamed page");
        Ok(())
    }

    pub fn delete_page(&mut self, path: &str) -> Result<(), WorkspaceError> {
        self.session.store.delete_page(path)?;
        tracing::info!(page = %path, "deleted page");
        self.render_active();
        Ok(())
    }

    /// The code-editing surface flushed new text for the active page.
    pub fn replace_active_html(&mut self, html: &str) {
        let path = self.session.store.active_path().to_string();
        self.session.store.replace_html(&path, html);
        self.render_active();
    }

    /// Splice a historical snapshot back in and show it.
    pub fn restore_history(&mut self, index: usize) -> bool {
        let restored = self.session.restore_history(index);
        if restored {
            tracing::info!(index, "restored history entry");
            self.render_active();
        }
        restored
    }

    pub fn set_editable(&mut self, enabled: bool) {
        self.preview.set_editable(enabled);
    }

    /// Route a click reported by the rendering surface.
    ///
    /// Editable-mode selection ends picking mode and records the element
    /// for the next edit request; an intercepted page link switches the
    /// active page when it resolves.
    pub fn handle_preview_click(&mut self, node: NodeId) -> ClickOutcome {
        let outcome = {
            let store = &self.session.store;
            self.preview.click(node, |path| store.contains(path))
        };
        match &outcome {
            ClickOutcome::Selected(selected) => {
                tracing::debug!(tag = %selected.tag, selector = %selected.selector, "element selected");
                self.preview.set_editable(false);
                self.session.set_selected_element(Some(selected.clone()));
            }
            ClickOutcome::Navigated(NavOutcome::SwitchPage(path)) => {
                let path = path.clone();
                tracing::debug!(page = %path, "link navigation");
                self.session.store.set_active(&path);
                self.render_active();
            }
            _ => {}
        }
        outcome
    }

    pub fn handle_preview_pointer_over(&mut self, node: NodeId) {
        self.preview.pointer_over(node);
    }

    pub fn handle_preview_pointer_out(&mut self) {
        self.preview.pointer_out();
    }

    /// The surface finished loading replaced content.
    pub fn handle_preview_load(&mut self) {
        self.preview.handle_load();
    }

    /// Run one AI edit batch to its terminal event.
    ///
    /// Progress chunks drive the preview's throttled streaming mode only;
    /// the document store changes exactly once, on `Completed`. A failed
    /// batch leaves the store as it was when the batch started.
    pub async fn run_edit<E: EditService>(
        &mut self,
        service: &E,
        prompt: impl Into<String>,
        images: Vec<String>,
    ) -> Result<(), WorkspaceError> {
        let prompt = prompt.into();
        if !self.session.begin_ai() {
            return Err(WorkspaceError::Validation(
                "an AI edit is already running".to_string(),
            ));
        }
        tracing::info!(prompt = %prompt, "starting AI edit batch");
        self.preview.set_blocked(true);
        self.preview.set_mode(RenderMode::Streaming, Instant::now());

        let request = EditRequest {
            prompt: prompt.clone(),
            current_page: self.session.store.active_page().into_owned(),
            pages: self.session.store.snapshot(),
            html_history: self.session.history().to_vec(),
            previous_prompts: self.session.prompts().to_vec(),
            selected_element: self.session.selected_element().cloned(),
            images,
        };

        let mut events = service.request_edit(request);
        let outcome = loop {
            match events.recv().await {
                Some(EditEvent::Progress { path, html }) => {
                    tracing::debug!(page = %path, bytes = html.len(), "progress chunk");
                    self.preview.render(&html, Instant::now());
                }
                Some(EditEvent::Completed { pages }) => break Ok(pages),
                Some(EditEvent::Failed { message }) => {
                    break Err(message.unwrap_or_else(|| GENERIC_FAILURE.to_string()));
                }
                None => break Err(GENERIC_FAILURE.to_string()),
            }
        };

        // streaming is over either way: flush the trailing projection
        self.preview.set_mode(RenderMode::Idle, Instant::now());
        self.preview.set_blocked(false);

        match outcome {
            Ok(pages) => {
                self.session.complete_ai(pages, prompt);
                self.render_active();
                tracing::info!(
                    pages = self.session.store.len(),
                    history = self.session.history().len(),
                    "AI edit batch recorded"
                );
                Ok(())
            }
            Err(message) => {
                self.session.abort_ai();
                // drop the streamed projection, show the store's truth
                self.render_active();
                tracing::warn!(error = %message, "AI edit batch failed");
                Err(WorkspaceError::External(message))
            }
        }
    }

    /// Hand the project to the persistence collaborator.
    ///
    /// Returns the path it landed at. A missing title aborts before any
    /// collaborator call; a collaborator failure leaves the session as-is.
    pub async fn publish<P: ProjectStore>(
        &self,
        store: &P,
        title: &str,
    ) -> Result<String, WorkspaceError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(WorkspaceError::Validation(
                "please enter a title for your project".to_string(),
            ));
        }
        let payload = ProjectPayload {
            title: title.to_string(),
            pages: self.session.store.snapshot(),
            prompts: self.session.prompts().to_vec(),
        };
        tracing::info!(title = %payload.title, pages = payload.pages.len(), "publishing project");

        let outcome = store.publish(payload).await;
        if outcome.ok {
            Ok(outcome.path.unwrap_or_default())
        } else {
            let message = outcome.error.unwrap_or_else(|| GENERIC_FAILURE.to_string());
            tracing::warn!(error = %message, "publish failed");
            Err(WorkspaceError::External(message))
        }
    }
}
