//! # Layout Manager
//!
//! Resizable two-region layout: code editor on the left, preview on the
//! right, a draggable divider between them.
//!
//! The drag is a scoped acquisition: `begin_drag` hands out a [`ResizeDrag`]
//! guard that exclusively owns the resize session (the host installs its
//! global move/up listeners for exactly the guard's lifetime). Dropping the
//! guard — explicit finish, pointer-up, or teardown — always returns the
//! manager to idle.

/// Fixed layout constants, viewport-independent.
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    /// Minimum width for either region while dragging.
    pub min_region_px: u32,
    /// Width of the divider between the regions.
    pub divider_px: u32,
    /// Responsive breakpoint: below this viewport width the two regions
    /// stack and explicit widths are cleared.
    pub breakpoint_px: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_region_px: 100,
            divider_px: 8,
            breakpoint_px: 1024,
        }
    }
}

/// Computed region widths. `None` means no explicit width: the host falls
/// back to flow layout (narrow viewports, hidden regions).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutState {
    pub editor_px: Option<u32>,
    pub preview_px: Option<u32>,
    pub resizing: bool,
}

/// Which region is primarily shown. On narrow viewports only one of the
/// two is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudioTab {
    #[default]
    Chat,
    Preview,
}

/// Two-state machine: idle, or resizing while a [`ResizeDrag`] is alive.
#[derive(Debug, Default)]
pub struct LayoutManager {
    config: LayoutConfig,
    state: LayoutState,
    tab: StudioTab,
}

impl LayoutManager {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            state: LayoutState::default(),
            tab: StudioTab::default(),
        }
    }

    pub fn state(&self) -> LayoutState {
        self.state
    }

    pub fn tab(&self) -> StudioTab {
        self.tab
    }

    pub fn is_resizing(&self) -> bool {
        self.state.resizing
    }

    /// Recompute widths from scratch for the current viewport.
    ///
    /// Above the breakpoint the editor takes one third of the available
    /// width and the preview the remaining two thirds; below it explicit
    /// widths are cleared. On the preview tab the preview spans the whole
    /// viewport.
    pub fn reset(&mut self, viewport_px: u32) {
        match self.tab {
            StudioTab::Chat => {
                if viewport_px >= self.config.breakpoint_px {
                    let available = viewport_px.saturating_sub(self.config.divider_px);
                    let editor = available / 3;
                    self.state.editor_px = Some(editor);
                    self.state.preview_px = Some(available - editor);
                } else {
                    self.state.editor_px = None;
                    self.state.preview_px = None;
                }
            }
            StudioTab::Preview => {
                self.state.editor_px = None;
                self.state.preview_px = Some(viewport_px);
            }
        }
    }

    /// Switch tabs and recompute.
    pub fn set_tab(&mut self, tab: StudioTab, viewport_px: u32) {
        self.tab = tab;
        self.reset(viewport_px);
    }

    /// Enter the resizing state. The returned guard owns the session; the
    /// manager is idle again as soon as it is dropped.
    pub fn begin_drag(&mut self) -> ResizeDrag<'_> {
        self.state.resizing = true;
        ResizeDrag { manager: self }
    }
}

/// Exclusive handle on one divider drag, created on pointer-down and
/// released on pointer-up (or any teardown path, via `Drop`).
#[derive(Debug)]
pub struct ResizeDrag<'a> {
    manager: &'a mut LayoutManager,
}

impl ResizeDrag<'_> {
    /// Recompute widths from the pointer position, clamping each region to
    /// its minimum width and to the viewport minus the divider.
    pub fn update(&mut self, pointer_x: u32, viewport_px: u32) {
        let config = self.manager.config;
        let max_editor = viewport_px
            .saturating_sub(config.divider_px + config.min_region_px)
            .max(config.min_region_px);
        let editor = pointer_x.clamp(config.min_region_px, max_editor);
        let preview = viewport_px.saturating_sub(editor + config.divider_px);

        self.manager.state.editor_px = Some(editor);
        self.manager.state.preview_px = Some(preview);
    }

    pub fn state(&self) -> LayoutState {
        self.manager.state
    }

    /// Pointer-up: end the session.
    pub fn finish(self) {}
}

impl Drop for ResizeDrag<'_> {
    fn drop(&mut self) {
        self.manager.state.resizing = false;
    }
}
