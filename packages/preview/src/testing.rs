//! In-memory rendering surface for tests.
//!
//! Models just enough of a sandboxed document: a flat node arena with
//! parent links, logs of every content/scroll call, and listener
//! bookkeeping that counts double-attaches so suites can assert the
//! detach-before-attach discipline.

use crate::surface::{NodeId, RenderSurface, ScrollBehavior, ScrollEdge};

#[derive(Debug, Clone)]
struct MockNode {
    tag: String,
    parent: Option<NodeId>,
    attrs: Vec<(String, String)>,
}

#[derive(Debug, Default)]
pub struct MockSurface {
    nodes: Vec<MockNode>,
    /// Every document handed to `replace_content`, oldest first.
    pub contents: Vec<String>,
    pub scrolls: Vec<(ScrollEdge, ScrollBehavior)>,
    pub fragment_scrolls: Vec<String>,
    /// Fragments with a matching in-page anchor in the current content.
    pub known_fragments: Vec<String>,
    pub pointer_attached: bool,
    pub link_attached: bool,
    /// Pointer attaches issued while already attached. The engine's
    /// discipline keeps this at zero.
    pub double_attaches: u32,
    pub hover_marks: Vec<(NodeId, bool)>,
}

impl MockSurface {
    /// Empty document: a lone `body` root with id 0.
    pub fn new() -> Self {
        let mut surface = Self::default();
        surface.reset_tree();
        surface
    }

    /// Grow the current tree. Tests rebuild the tree they need after each
    /// simulated render, mirroring how a real surface re-parses content.
    pub fn add_element(&mut self, tag: &str, parent: Option<NodeId>, attrs: &[(&str, &str)]) -> NodeId {
        let id = NodeId(self.nodes.len() as u64);
        self.nodes.push(MockNode {
            tag: tag.to_string(),
            parent,
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        id
    }

    fn reset_tree(&mut self) {
        self.nodes.clear();
        self.nodes.push(MockNode {
            tag: "body".to_string(),
            parent: None,
            attrs: Vec::new(),
        });
    }

    fn node(&self, id: NodeId) -> Option<&MockNode> {
        self.nodes.get(id.0 as usize)
    }
}

impl RenderSurface for MockSurface {
    fn replace_content(&mut self, html: &str) {
        self.contents.push(html.to_string());
        // the old tree dies, and listener registrations with it
        self.reset_tree();
        self.pointer_attached = false;
        self.link_attached = false;
    }

    fn scroll_to_edge(&mut self, edge: ScrollEdge, behavior: ScrollBehavior) {
        self.scrolls.push((edge, behavior));
    }

    fn scroll_to_fragment(&mut self, fragment: &str) -> bool {
        if self.known_fragments.iter().any(|f| f == fragment) {
            self.fragment_scrolls.push(fragment.to_string());
            true
        } else {
            false
        }
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.parent
    }

    fn tag_name(&self, node: NodeId) -> Option<String> {
        self.node(node).map(|n| n.tag.clone())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.node(node)?
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    fn is_root(&self, node: NodeId) -> bool {
        self.node(node).is_some_and(|n| n.parent.is_none())
    }

    fn selector_for(&self, node: NodeId) -> Option<String> {
        let mut parts = Vec::new();
        let mut current = Some(node);
        while let Some(id) = current {
            let n = self.node(id)?;
            match n.parent {
                None => {
                    parts.push(n.tag.clone());
                    break;
                }
                Some(parent) => {
                    let nth = self
                        .nodes
                        .iter()
                        .enumerate()
                        .filter(|(i, other)| other.parent == Some(parent) && *i <= id.0 as usize)
                        .count();
                    parts.push(format!("{}:nth-child({nth})", n.tag));
                    current = n.parent;
                }
            }
        }
        parts.reverse();
        Some(parts.join(" > "))
    }

    fn set_hover_mark(&mut self, node: NodeId, marked: bool) {
        self.hover_marks.push((node, marked));
    }

    fn set_pointer_listeners(&mut self, attached: bool) {
        if attached {
            if self.pointer_attached {
                self.double_attaches += 1;
            }
            self.pointer_attached = true;
        } else {
            self.pointer_attached = false;
        }
    }

    fn set_link_listeners(&mut self, attached: bool) {
        self.link_attached = attached;
    }
}
