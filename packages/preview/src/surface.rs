//! Rendering-surface boundary.
//!
//! The sandboxed rendering context (an iframe-like host surface) is opaque
//! to the engine: it cannot be read or written directly. This trait is the
//! narrow channel — the host hands the engine node identifiers and events,
//! the engine hands back content, scroll requests, and listener wishes.
//!
//! Node identifiers are only meaningful within one render generation. Every
//! `replace_content` destroys the node tree, drops all listener
//! registrations with it, and invalidates every previously issued `NodeId`.

use serde::{Deserialize, Serialize};

/// Opaque node identifier inside the rendering surface.
///
/// Issued by the host when it reports pointer/click events; the engine
/// never fabricates these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

/// A node identifier stamped with the render generation it was observed in.
///
/// Compared at observation time: a ref whose generation differs from the
/// bridge's current generation is stale and must be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRef {
    pub node: NodeId,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollEdge {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// Host-implemented rendering surface.
///
/// All query methods answer against the current content; they return `None`
/// for identifiers the surface no longer knows (stale generation, detached
/// subtree). Tag names are reported lowercase.
pub trait RenderSurface {
    /// Replace the full document content. Destroys the node tree: every
    /// issued `NodeId` becomes invalid and all listener registrations are
    /// dropped.
    fn replace_content(&mut self, html: &str);

    /// Scroll the rendered root so the given edge of the content is in view.
    fn scroll_to_edge(&mut self, edge: ScrollEdge, behavior: ScrollBehavior);

    /// Smooth-scroll to the in-page anchor matching `fragment` (a full
    /// fragment reference such as `"#section1"`). Returns false when no
    /// matching element exists.
    fn scroll_to_fragment(&mut self, fragment: &str) -> bool;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Lowercase tag name, e.g. `"a"`.
    fn tag_name(&self, node: NodeId) -> Option<String>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    /// Whether `node` is the document root (the body of the rendered page).
    fn is_root(&self, node: NodeId) -> bool;

    /// Stable selector path for the node, e.g.
    /// `"body > div:nth-child(2) > h1:nth-child(1)"`.
    fn selector_for(&self, node: NodeId) -> Option<String>;

    /// Add or remove the visual hover tag on a node.
    fn set_hover_mark(&mut self, node: NodeId, marked: bool);

    /// Attach or detach the pointer-over/out/click listeners used by
    /// editable mode. `false` on an already-detached surface is a no-op.
    fn set_pointer_listeners(&mut self, attached: bool);

    /// Attach or detach link-activation interception on the anchors present
    /// in the current content.
    fn set_link_listeners(&mut self, attached: bool);
}
