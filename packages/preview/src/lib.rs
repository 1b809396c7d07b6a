//! # Pageforge Preview
//!
//! Live preview engine: projects the active page's HTML into a sandboxed
//! rendering surface and mediates every DOM-level interaction with it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ surface: the host boundary (trait)          │
//! │  - set content, scroll, query nodes         │
//! │  - the ONLY channel into the sandbox        │
//! └─────────────────────────────────────────────┘
//!                     ↑
//! ┌─────────────────────────────────────────────┐
//! │ bridge: throttled projection + generations  │
//! │ overlay: editable-mode hover/selection      │
//! │ nav: in-document link interception          │
//! └─────────────────────────────────────────────┘
//!                     ↑
//! ┌─────────────────────────────────────────────┐
//! │ controller: event routing + listener        │
//! │ discipline (selection beats navigation)     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The layout manager is independent of the surface: it only turns pointer
//! positions and viewport sizes into region widths.
//!
//! ## Core Principles
//!
//! 1. **Narrow boundary**: only the bridge touches the surface's content;
//!    everything else consumes node references.
//! 2. **Generations are authoritative**: a node reference from before the
//!    last content swap is stale and must be discarded, no matter what it
//!    appears to point at.
//! 3. **Detach before attach**: at most one listener registration per event
//!    type, across any number of mode toggles and re-renders.

pub mod bridge;
pub mod controller;
pub mod layout;
pub mod nav;
pub mod overlay;
pub mod surface;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use bridge::{RenderBridge, RenderMode, STREAM_THROTTLE};
pub use controller::{ClickOutcome, PreviewController, PreviewDevice};
pub use layout::{LayoutConfig, LayoutManager, LayoutState, ResizeDrag, StudioTab};
pub use nav::{resolve_href, LinkTarget, NavOutcome};
pub use overlay::{tag_label, InteractionOverlay};
pub use surface::{NodeId, NodeRef, RenderSurface, ScrollBehavior, ScrollEdge};

// Re-export the selection payload produced by the overlay
pub use pageforge_common::SelectedElement;
