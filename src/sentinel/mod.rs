//! Scroll sentinel: decides when the next page should be requested.
//!
//! Models the "observe the last rendered item" pattern as an explicit state
//! machine instead of ad hoc observer juggling: the screen reports the
//! current tail of the *filtered* view and visibility changes; the sentinel
//! answers whether a fetch should fire. Triggers are edge-based (not-visible
//! to visible) and gated on the fetcher being idle, so loading, exhausted and
//! errored states are never hammered by scroll ticks.

use crate::fetch::FetchState;

/// Edge-triggered visibility tracker for the tail of the member list.
#[derive(Debug, Default)]
pub struct ScrollSentinel {
    /// Id of the element currently observed as the list tail.
    tail: Option<String>,
    visible: bool,
}

impl ScrollSentinel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the sentinel at a new tail element.
    ///
    /// The conceptual detach/reattach on every tail change: when the tail
    /// moves, visibility tracking resets so the new tail's first appearance
    /// counts as a fresh not-visible-to-visible edge. Without this, growth
    /// stalls once the old tail scrolled into view.
    pub fn observe_tail(&mut self, tail: Option<&str>) {
        if self.tail.as_deref() != tail {
            self.tail = tail.map(String::from);
            self.visible = false;
        }
    }

    /// Report a visibility change for the observed tail. Returns whether the
    /// caller should request the next page: only on a not-visible-to-visible
    /// transition, and only while the fetcher is idle.
    pub fn on_visibility(&mut self, visible: bool, state: &FetchState) -> bool {
        let was_visible = std::mem::replace(&mut self.visible, visible);
        if was_visible || !visible {
            return false;
        }
        match state {
            FetchState::Idle => self.tail.is_some(),
            // Errored pages are retried only by explicit user action
            FetchState::Loading | FetchState::Exhausted | FetchState::Errored(_) => false,
        }
    }
}
