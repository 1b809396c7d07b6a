//! # Render Bridge
//!
//! Projects one page's HTML into the rendering surface and owns the
//! streaming throttle.
//!
//! ## Modes
//!
//! - **Idle**: every `render` call replaces the surface content immediately.
//! - **Streaming**: while an AI agent streams output, the surface receives
//!   a latest-wins projection updated at most once per throttle window, so
//!   re-render cost stays bounded no matter how fast chunks arrive. The
//!   trailing value is applied by `poll` ticks, and `set_mode(Idle)` flushes
//!   whatever is still pending — the surface always eventually shows the
//!   final HTML.
//!
//! A surface that is not attached yet is an expected transient state, not
//! an error: every operation is a safe no-op, and `attach` projects the
//! most recently requested HTML so a late-mounting host catches up.

use std::time::{Duration, Instant};

use crate::surface::{RenderSurface, ScrollBehavior, ScrollEdge};

/// Fixed width of the streaming throttle window.
pub const STREAM_THROTTLE: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Idle,
    Streaming,
}

#[derive(Debug)]
struct Throttle {
    interval: Duration,
    last_applied: Option<Instant>,
    pending: Option<String>,
}

impl Throttle {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_applied: None,
            pending: None,
        }
    }

    fn ready(&self, now: Instant) -> bool {
        match self.last_applied {
            Some(t) => now.saturating_duration_since(t) >= self.interval,
            None => true,
        }
    }

    /// Latest-wins: a newer value supersedes whatever was pending.
    fn offer(&mut self, html: String, now: Instant) -> Option<String> {
        if self.ready(now) {
            self.pending = None;
            Some(html)
        } else {
            self.pending = Some(html);
            None
        }
    }

    fn poll(&mut self, now: Instant) -> Option<String> {
        if self.pending.is_some() && self.ready(now) {
            self.pending.take()
        } else {
            None
        }
    }

    fn flush(&mut self) -> Option<String> {
        self.pending.take()
    }

    fn note_applied(&mut self, now: Instant) {
        self.last_applied = Some(now);
    }
}

/// The one component allowed to push content into the rendering surface.
#[derive(Debug)]
pub struct RenderBridge<S> {
    surface: Option<S>,
    mode: RenderMode,
    throttle: Throttle,
    /// Bumped on every content replacement; node references from an older
    /// generation are stale.
    generation: u64,
    /// HTML most recently handed to `render`, applied or not.
    latest: Option<String>,
    /// HTML actually projected into the surface.
    projected: Option<String>,
}

impl<S: RenderSurface> RenderBridge<S> {
    pub fn new() -> Self {
        Self {
            surface: None,
            mode: RenderMode::Idle,
            throttle: Throttle::new(STREAM_THROTTLE),
            generation: 0,
            latest: None,
            projected: None,
        }
    }

    /// Mount a surface and immediately project the most recently requested
    /// HTML into it, if any.
    pub fn attach(&mut self, surface: S, now: Instant) {
        self.surface = Some(surface);
        if let Some(html) = self.latest.clone() {
            self.apply(&html, now);
        }
    }

    pub fn detach(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Current render generation. Bumped on every content replacement.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// HTML last projected into the surface (for re-mounting hosts).
    pub fn projected_html(&self) -> Option<&str> {
        self.projected.as_deref()
    }

    /// Switch modes. Leaving streaming flushes the pending trailing value
    /// so the final HTML is never dropped.
    pub fn set_mode(&mut self, mode: RenderMode, now: Instant) {
        if self.mode == RenderMode::Streaming && mode == RenderMode::Idle {
            if let Some(html) = self.throttle.flush() {
                self.apply(&html, now);
            }
        }
        self.mode = mode;
    }

    /// Request a render of `html`.
    ///
    /// Idle mode applies immediately; streaming mode applies at most once
    /// per throttle window and keeps the newest value pending otherwise.
    pub fn render(&mut self, html: &str, now: Instant) {
        self.latest = Some(html.to_string());
        if self.surface.is_none() {
            return;
        }
        match self.mode {
            RenderMode::Idle => self.apply(html, now),
            RenderMode::Streaming => {
                if let Some(due) = self.throttle.offer(html.to_string(), now) {
                    self.apply(&due, now);
                }
            }
        }
    }

    /// Timer tick: apply the pending trailing value once the throttle
    /// window has passed. Returns true when content was replaced.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.surface.is_none() {
            return false;
        }
        match self.throttle.poll(now) {
            Some(html) => {
                self.apply(&html, now);
                true
            }
            None => false,
        }
    }

    /// Post-load hook: scroll to the end of content while streaming (the
    /// user tracks newly appended output) or to the top otherwise, then
    /// attach link-activation interception to the anchors present in the
    /// loaded content.
    pub fn handle_load(&mut self) {
        let mode = self.mode;
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        match mode {
            RenderMode::Streaming => {
                surface.scroll_to_edge(ScrollEdge::Bottom, ScrollBehavior::Instant)
            }
            RenderMode::Idle => surface.scroll_to_edge(ScrollEdge::Top, ScrollBehavior::Smooth),
        }
        surface.set_link_listeners(true);
    }

    fn apply(&mut self, html: &str, now: Instant) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        // the swap destroys every node: listeners die with the old tree
        surface.replace_content(html);
        self.generation += 1;
        self.projected = Some(html.to_string());
        self.throttle.note_applied(now);
    }
}

impl<S: RenderSurface> Default for RenderBridge<S> {
    fn default() -> Self {
        Self::new()
    }
}
