//! # Interaction Overlay
//!
//! Hover/selection state for editable picking mode.
//!
//! Active only while editable mode is enabled. Pointer activity over the
//! rendered content marks elements instead of interacting with them, and a
//! click reports the element outward as a [`SelectedElement`] so the
//! AI-edit collaborator can address it — the host never hands the sandboxed
//! node itself across the boundary.
//!
//! Hover uses toggle semantics: entering a node that is already hovered, or
//! the document root, clears the hover instead of re-setting it.

use pageforge_common::SelectedElement;

use crate::surface::{NodeRef, RenderSurface};

/// Transient editable-mode state. Reset whenever editable mode is toggled
/// off or the rendered content changes.
#[derive(Debug, Default)]
pub struct InteractionOverlay {
    enabled: bool,
    hovered: Option<NodeRef>,
}

impl InteractionOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn hovered(&self) -> Option<NodeRef> {
        self.hovered
    }

    /// Pointer entered `target`.
    ///
    /// A different, non-root node takes the hover mark; the same node again
    /// (or the root) clears it.
    pub fn pointer_over<S: RenderSurface>(&mut self, surface: &mut S, target: NodeRef) {
        if !self.enabled {
            return;
        }
        if surface.is_root(target.node) || self.hovered == Some(target) {
            self.clear_hover(surface);
            return;
        }
        if let Some(prev) = self.hovered.take() {
            if prev.generation == target.generation {
                surface.set_hover_mark(prev.node, false);
            }
        }
        surface.set_hover_mark(target.node, true);
        self.hovered = Some(target);
    }

    /// Pointer left the rendered content: clear unconditionally.
    pub fn pointer_out<S: RenderSurface>(&mut self, surface: &mut S) {
        self.clear_hover(surface);
    }

    /// Click on `target`: report it as a selection unless it is the
    /// document root. The caller stops further propagation of the click.
    pub fn click<S: RenderSurface>(&self, surface: &S, target: NodeRef) -> Option<SelectedElement> {
        if !self.enabled || surface.is_root(target.node) {
            return None;
        }
        let tag = surface.tag_name(target.node)?;
        let selector = surface.selector_for(target.node).unwrap_or_else(|| tag.clone());
        Some(SelectedElement::new(tag, selector))
    }

    /// Remove the hover mark and forget the hovered node.
    pub fn clear_hover<S: RenderSurface>(&mut self, surface: &mut S) {
        if let Some(prev) = self.hovered.take() {
            surface.set_hover_mark(prev.node, false);
        }
    }

    /// Drop any hovered reference from a generation older than `current`.
    /// The nodes it pointed at no longer exist, so there is no mark to
    /// remove.
    pub fn discard_stale(&mut self, current: u64) {
        if let Some(hovered) = self.hovered {
            if hovered.generation != current {
                self.hovered = None;
            }
        }
    }
}

/// Human-readable label for a tag name, shown on the hover badge.
pub fn tag_label(tag: &str) -> &str {
    match tag {
        "a" => "link",
        "p" => "paragraph",
        "img" => "image",
        "h1" => "heading 1",
        "h2" => "heading 2",
        "h3" => "heading 3",
        "h4" => "heading 4",
        "ul" => "list",
        "ol" => "numbered list",
        "li" => "list item",
        "div" => "container",
        "span" => "text span",
        "button" => "button",
        "input" => "input field",
        "form" => "form",
        "nav" => "navigation",
        "header" => "header",
        "footer" => "footer",
        "section" => "section",
        "table" => "table",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::NodeId;
    use crate::testing::MockSurface;

    fn node(surface: &mut MockSurface, tag: &str) -> NodeRef {
        let id = surface.add_element(tag, Some(NodeId(0)), &[]);
        NodeRef {
            node: id,
            generation: 1,
        }
    }

    #[test]
    fn test_hover_marks_new_node() {
        let mut surface = MockSurface::new();
        let target = node(&mut surface, "h1");
        let mut overlay = InteractionOverlay::new();
        overlay.set_enabled(true);

        overlay.pointer_over(&mut surface, target);
        assert_eq!(overlay.hovered(), Some(target));
        assert_eq!(surface.hover_marks, vec![(target.node, true)]);
    }

    #[test]
    fn test_hover_same_node_toggles_off() {
        let mut surface = MockSurface::new();
        let target = node(&mut surface, "h1");
        let mut overlay = InteractionOverlay::new();
        overlay.set_enabled(true);

        overlay.pointer_over(&mut surface, target);
        overlay.pointer_over(&mut surface, target);
        assert_eq!(overlay.hovered(), None);
        assert_eq!(surface.hover_marks.last(), Some(&(target.node, false)));
    }

    #[test]
    fn test_hover_root_clears() {
        let mut surface = MockSurface::new();
        let target = node(&mut surface, "h1");
        let root = NodeRef {
            node: NodeId(0),
            generation: 1,
        };
        let mut overlay = InteractionOverlay::new();
        overlay.set_enabled(true);

        overlay.pointer_over(&mut surface, target);
        overlay.pointer_over(&mut surface, root);
        assert_eq!(overlay.hovered(), None);
    }

    #[test]
    fn test_hover_moves_between_nodes() {
        let mut surface = MockSurface::new();
        let first = node(&mut surface, "h1");
        let second = node(&mut surface, "p");
        let mut overlay = InteractionOverlay::new();
        overlay.set_enabled(true);

        overlay.pointer_over(&mut surface, first);
        overlay.pointer_over(&mut surface, second);
        assert_eq!(overlay.hovered(), Some(second));
        assert_eq!(
            surface.hover_marks,
            vec![(first.node, true), (first.node, false), (second.node, true)]
        );
    }

    #[test]
    fn test_pointer_out_clears_unconditionally() {
        let mut surface = MockSurface::new();
        let target = node(&mut surface, "h1");
        let mut overlay = InteractionOverlay::new();
        overlay.set_enabled(true);

        overlay.pointer_over(&mut surface, target);
        overlay.pointer_out(&mut surface);
        assert_eq!(overlay.hovered(), None);
    }

    #[test]
    fn test_disabled_overlay_ignores_pointer() {
        let mut surface = MockSurface::new();
        let target = node(&mut surface, "h1");
        let mut overlay = InteractionOverlay::new();

        overlay.pointer_over(&mut surface, target);
        assert_eq!(overlay.hovered(), None);
        assert!(surface.hover_marks.is_empty());
    }

    #[test]
    fn test_click_reports_tag_and_selector() {
        let mut surface = MockSurface::new();
        let target = node(&mut surface, "h1");
        let mut overlay = InteractionOverlay::new();
        overlay.set_enabled(true);

        let selected = overlay.click(&surface, target).unwrap();
        assert_eq!(selected.tag, "h1");
        assert!(selected.selector.starts_with("body"));
    }

    #[test]
    fn test_click_on_root_is_not_a_selection() {
        let surface = MockSurface::new();
        let mut overlay = InteractionOverlay::new();
        overlay.set_enabled(true);

        let root = NodeRef {
            node: NodeId(0),
            generation: 1,
        };
        assert!(overlay.click(&surface, root).is_none());
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let mut surface = MockSurface::new();
        let target = node(&mut surface, "h1");
        let mut overlay = InteractionOverlay::new();
        overlay.set_enabled(true);

        overlay.pointer_over(&mut surface, target);
        overlay.discard_stale(2);
        assert_eq!(overlay.hovered(), None);
    }

    #[test]
    fn test_tag_labels() {
        assert_eq!(tag_label("h1"), "heading 1");
        assert_eq!(tag_label("img"), "image");
        assert_eq!(tag_label("custom-tag"), "custom-tag");
    }
}
