//! # Navigation Interceptor
//!
//! Rewrites link activation inside the rendered content into editor-side
//! navigation, so hand-authored `<a href="about.html">` links act as
//! in-editor page switches instead of real browser navigations that would
//! escape the sandbox.
//!
//! Always active, independent of editable mode — but when editable mode is
//! on, selection wins the click first (see the controller).

use crate::surface::{NodeId, RenderSurface};

/// Where a hyperlink destination points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Same-document fragment reference, kept verbatim (e.g. `"#section1"`).
    Fragment(String),
    /// Page-path form, normalized to end in `.html`.
    Page(String),
}

/// Classify and normalize an `href`.
///
/// A destination containing `#` but no `.html` path is a same-document
/// fragment. Anything else is normalized to its page path: everything
/// after the first `.html` is stripped and `.html` re-appended, so
/// `about.html#team`, `about.html?x=1` and bare `about` all resolve to
/// `about.html`.
pub fn resolve_href(href: &str) -> LinkTarget {
    if href.contains('#') && !href.contains(".html") {
        return LinkTarget::Fragment(href.to_string());
    }
    let stem = href.split(".html").next().unwrap_or_default();
    LinkTarget::Page(format!("{stem}.html"))
}

/// Result of intercepting a click, for the host to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// No enclosing hyperlink: the click is left alone.
    Pass,
    /// Fragment link: default navigation suppressed; the view scrolled when
    /// a matching in-page anchor exists.
    Fragment { target: String, scrolled: bool },
    /// Link to an existing page: the caller switches the active page.
    SwitchPage(String),
    /// Link to a page that does not exist: swallowed without switching.
    Swallowed(String),
}

/// Intercept a click at `target`.
///
/// Walks upward to the nearest enclosing anchor; `page_exists` answers
/// whether a normalized page path is present in the document store.
pub fn intercept_click<S, F>(surface: &mut S, target: NodeId, page_exists: F) -> NavOutcome
where
    S: RenderSurface,
    F: Fn(&str) -> bool,
{
    let Some(anchor) = find_enclosing_anchor(surface, target) else {
        return NavOutcome::Pass;
    };
    let Some(href) = surface.attribute(anchor, "href") else {
        return NavOutcome::Pass;
    };
    match resolve_href(&href) {
        LinkTarget::Fragment(fragment) => {
            let scrolled = surface.scroll_to_fragment(&fragment);
            NavOutcome::Fragment {
                target: fragment,
                scrolled,
            }
        }
        LinkTarget::Page(path) => {
            if page_exists(&path) {
                NavOutcome::SwitchPage(path)
            } else {
                NavOutcome::Swallowed(path)
            }
        }
    }
}

/// Nearest enclosing anchor element, walking up from `from` and stopping
/// at the document root.
fn find_enclosing_anchor<S: RenderSurface>(surface: &S, from: NodeId) -> Option<NodeId> {
    let mut current = Some(from);
    while let Some(node) = current {
        if surface.is_root(node) {
            return None;
        }
        if surface.tag_name(node).as_deref() == Some("a") {
            return Some(node);
        }
        current = surface.parent(node);
    }
    None
}
