//! # Preview Controller
//!
//! Routes host-surface events to the overlay and the navigation
//! interceptor, and enforces the shared listener discipline around the
//! render lifecycle.
//!
//! Precedence on a click: while editable mode is on, selection wins;
//! link interception handles the click only when editable mode is off (or
//! the click produced no selection, e.g. on the document root).

use std::time::Instant;

use pageforge_common::SelectedElement;

use crate::bridge::{RenderBridge, RenderMode};
use crate::nav::{intercept_click, NavOutcome};
use crate::overlay::InteractionOverlay;
use crate::surface::{NodeId, NodeRef, RenderSurface};

/// Which device frame the preview imitates. Presentation-only: the engine
/// carries it so hosts restore the right frame on re-mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewDevice {
    #[default]
    Desktop,
    Mobile,
}

/// What a click inside the rendered content amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Editable mode picked an element; propagation stops here.
    Selected(SelectedElement),
    /// The navigation interceptor handled (or passed on) the click.
    Navigated(NavOutcome),
    /// No surface, or input is blocked by an in-flight AI batch.
    Ignored,
}

/// Event router over one render bridge.
#[derive(Debug)]
pub struct PreviewController<S> {
    bridge: RenderBridge<S>,
    overlay: InteractionOverlay,
    /// Set while an AI batch is in flight: pointer interaction is inert.
    blocked: bool,
    device: PreviewDevice,
}

impl<S: RenderSurface> PreviewController<S> {
    pub fn new() -> Self {
        Self {
            bridge: RenderBridge::new(),
            overlay: InteractionOverlay::new(),
            blocked: false,
            device: PreviewDevice::default(),
        }
    }

    pub fn bridge(&self) -> &RenderBridge<S> {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut RenderBridge<S> {
        &mut self.bridge
    }

    pub fn attach(&mut self, surface: S, now: Instant) {
        self.bridge.attach(surface, now);
    }

    pub fn detach(&mut self) -> Option<S> {
        self.bridge.detach()
    }

    pub fn render(&mut self, html: &str, now: Instant) {
        self.bridge.render(html, now);
    }

    pub fn set_mode(&mut self, mode: RenderMode, now: Instant) {
        self.bridge.set_mode(mode, now);
    }

    pub fn mode(&self) -> RenderMode {
        self.bridge.mode()
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        self.bridge.poll(now)
    }

    pub fn device(&self) -> PreviewDevice {
        self.device
    }

    pub fn set_device(&mut self, device: PreviewDevice) {
        self.device = device;
    }

    pub fn is_editable(&self) -> bool {
        self.overlay.is_enabled()
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// The surface finished loading freshly replaced content. The old node
    /// tree is gone, so stale hover refs are discarded and the listener set
    /// is re-established from current state.
    pub fn handle_load(&mut self) {
        self.bridge.handle_load();
        self.overlay.discard_stale(self.bridge.generation());
        self.sync_pointer_listeners();
    }

    /// Toggle editable picking mode. Turning it off resets the transient
    /// interaction state.
    pub fn set_editable(&mut self, enabled: bool) {
        self.overlay.set_enabled(enabled);
        if !enabled {
            if let Some(surface) = self.bridge.surface_mut() {
                self.overlay.clear_hover(surface);
            }
        }
        self.sync_pointer_listeners();
    }

    /// Block or unblock pointer interaction (AI batch in flight).
    pub fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
        self.sync_pointer_listeners();
    }

    pub fn pointer_over(&mut self, node: NodeId) {
        if self.blocked {
            return;
        }
        let generation = self.bridge.generation();
        if let Some(surface) = self.bridge.surface_mut() {
            self.overlay.pointer_over(surface, NodeRef { node, generation });
        }
    }

    pub fn pointer_out(&mut self) {
        if self.blocked {
            return;
        }
        if let Some(surface) = self.bridge.surface_mut() {
            self.overlay.pointer_out(surface);
        }
    }

    /// Route a click. `page_exists` answers whether a normalized page path
    /// exists in the document store.
    pub fn click<F>(&mut self, node: NodeId, page_exists: F) -> ClickOutcome
    where
        F: Fn(&str) -> bool,
    {
        if self.blocked {
            return ClickOutcome::Ignored;
        }
        let generation = self.bridge.generation();
        let Some(surface) = self.bridge.surface_mut() else {
            return ClickOutcome::Ignored;
        };

        if self.overlay.is_enabled() {
            let target = NodeRef { node, generation };
            if let Some(selected) = self.overlay.click(surface, target) {
                return ClickOutcome::Selected(selected);
            }
        }
        ClickOutcome::Navigated(intercept_click(surface, node, page_exists))
    }

    /// Detach-before-attach: at most one pointer registration at any time,
    /// across any sequence of toggles, blocks, and re-renders.
    fn sync_pointer_listeners(&mut self) {
        let want = self.overlay.is_enabled() && !self.blocked;
        if let Some(surface) = self.bridge.surface_mut() {
            surface.set_pointer_listeners(false);
            if want {
                surface.set_pointer_listeners(true);
            }
        }
    }
}

impl<S: RenderSurface> Default for PreviewController<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockSurface;

    fn controller_with_surface() -> PreviewController<MockSurface> {
        let mut controller = PreviewController::new();
        controller.attach(MockSurface::new(), Instant::now());
        controller
    }

    #[test]
    fn test_toggling_editable_never_double_attaches() {
        let mut controller = controller_with_surface();
        controller.render("<h1>hi</h1>", Instant::now());
        controller.handle_load();

        for _ in 0..10 {
            controller.set_editable(true);
            controller.set_editable(false);
        }
        controller.set_editable(true);

        let surface = controller.bridge().surface().unwrap();
        assert_eq!(surface.double_attaches, 0);
        assert!(surface.pointer_attached);

        controller.set_editable(false);
        let surface = controller.bridge().surface().unwrap();
        assert!(!surface.pointer_attached);
    }

    #[test]
    fn test_blocked_controller_ignores_interaction() {
        let mut controller = controller_with_surface();
        controller.set_editable(true);
        controller.set_blocked(true);

        let node = {
            let surface = controller.bridge.surface_mut().unwrap();
            surface.add_element("h1", Some(NodeId(0)), &[])
        };
        controller.pointer_over(node);
        assert_eq!(controller.click(node, |_| true), ClickOutcome::Ignored);

        let surface = controller.bridge().surface().unwrap();
        assert!(!surface.pointer_attached);
        assert!(surface.hover_marks.is_empty());
    }

    #[test]
    fn test_selection_takes_precedence_over_navigation() {
        let mut controller = controller_with_surface();
        controller.set_editable(true);

        let anchor = {
            let surface = controller.bridge.surface_mut().unwrap();
            surface.add_element("a", Some(NodeId(0)), &[("href", "about.html")])
        };

        match controller.click(anchor, |_| true) {
            ClickOutcome::Selected(selected) => assert_eq!(selected.tag, "a"),
            other => panic!("expected selection, got {other:?}"),
        }
    }

    #[test]
    fn test_navigation_runs_when_editable_is_off() {
        let mut controller = controller_with_surface();

        let anchor = {
            let surface = controller.bridge.surface_mut().unwrap();
            surface.add_element("a", Some(NodeId(0)), &[("href", "about.html")])
        };

        assert_eq!(
            controller.click(anchor, |p| p == "about.html"),
            ClickOutcome::Navigated(NavOutcome::SwitchPage("about.html".to_string()))
        );
    }

    #[test]
    fn test_reload_reattaches_listeners_for_editable_mode() {
        let mut controller = controller_with_surface();
        controller.set_editable(true);
        assert!(controller.bridge().surface().unwrap().pointer_attached);

        // content swap drops every registration with the old tree
        controller.render("<h1>v2</h1>", Instant::now());
        assert!(!controller.bridge().surface().unwrap().pointer_attached);

        controller.handle_load();
        let surface = controller.bridge().surface().unwrap();
        assert!(surface.pointer_attached);
        assert!(surface.link_attached);
        assert_eq!(surface.double_attaches, 0);
    }
}
