// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` scans the page once, schedules every toast it finds, and
//! drives each one through `Visible -> Fading -> Removed` as ticks arrive.
//! Each toast's sequence is independent; fades of neighbouring toasts may
//! overlap.

use super::notification::{Category, Phase, ScheduledToast};
use super::timing::DismissTiming;
use crate::page::{Document, NodeId, Selector};
use std::time::Instant;

/// Something that happened to a toast during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissEvent {
    /// The fade style was applied.
    FadeStarted { node: NodeId, index: usize },
    /// The element left the page.
    Removed { node: NodeId, index: usize },
}

/// Schedules and performs the auto-dismissal of toasts on one page.
#[derive(Debug, Default)]
pub struct Manager {
    timing: DismissTiming,
    /// Toasts in the order they were queried (index order).
    entries: Vec<ScheduledToast>,
    armed: bool,
}

impl Manager {
    /// Creates a manager with the default timing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager with custom timing.
    #[must_use]
    pub fn with_timing(timing: DismissTiming) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    /// One-time initialization hook, to be called once the page content is
    /// available.
    ///
    /// Queries the toasts matching `selector` and schedules each exactly once,
    /// the toast at index `idx` fading `base_delay + idx * stagger` after
    /// `now`. Returns the number of toasts scheduled. Later calls do nothing
    /// and return 0; toasts added to the page afterwards are never picked up.
    pub fn arm(&mut self, document: &Document, selector: &Selector, now: Instant) -> usize {
        if self.armed {
            log::debug!("toast manager already armed, ignoring");
            return 0;
        }
        self.armed = true;

        self.entries = document
            .query_selector_all(selector)
            .into_iter()
            .enumerate()
            .map(|(index, node)| {
                let category = document
                    .element(node)
                    .map(Category::from_element)
                    .unwrap_or_default();
                ScheduledToast::new(node, index, category, now + self.timing.fade_delay(index))
            })
            .collect();

        log::info!(
            "scheduled {} toast(s) matching `{}`",
            self.entries.len(),
            selector
        );
        self.entries.len()
    }

    /// Advances every toast whose deadline has passed at `now`.
    ///
    /// A visible toast that is due gets the fade style and its removal is
    /// chained `removal_delay` after this moment, so a toast is never removed
    /// in the tick that started its fade. A fading toast that is due is
    /// removed from `document`. Events are returned in index order.
    pub fn tick(&mut self, document: &mut Document, now: Instant) -> Vec<DismissEvent> {
        let mut events = Vec::new();

        for entry in &mut self.entries {
            match entry.phase() {
                Phase::Visible if now >= entry.fade_at() => {
                    document.set_style(entry.node(), self.timing.fade_style(), now);
                    entry.start_fade(now, now + self.timing.removal_delay());
                    log::debug!("toast {} fading", entry.index());
                    events.push(DismissEvent::FadeStarted {
                        node: entry.node(),
                        index: entry.index(),
                    });
                }
                Phase::Fading if entry.remove_at().is_some_and(|at| now >= at) => {
                    if !document.remove(entry.node()) {
                        log::debug!("toast {} already left the page", entry.index());
                    }
                    entry.finish(now);
                    log::debug!(
                        "toast {} removed {:?} after its fade",
                        entry.index(),
                        entry.faded_at().map(|faded| now.saturating_duration_since(faded)).unwrap_or_default()
                    );
                    events.push(DismissEvent::Removed {
                        node: entry.node(),
                        index: entry.index(),
                    });
                }
                _ => {}
            }
        }

        events
    }

    /// Returns whether `arm` has run.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Returns whether any toast has not been removed yet.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.entries.iter().any(|e| e.phase() != Phase::Removed)
    }

    /// Returns the number of toasts not removed yet.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.phase() != Phase::Removed)
            .count()
    }

    /// Returns the phase of the toast at `index`.
    #[must_use]
    pub fn phase(&self, index: usize) -> Option<Phase> {
        self.entries.get(index).map(ScheduledToast::phase)
    }

    /// Returns the scheduled toast for a page element, if any.
    #[must_use]
    pub fn entry_for(&self, node: NodeId) -> Option<&ScheduledToast> {
        self.entries.iter().find(|e| e.node() == node)
    }

    /// Returns all scheduled toasts in index order.
    pub fn entries(&self) -> impl Iterator<Item = &ScheduledToast> {
        self.entries.iter()
    }

    #[must_use]
    pub fn timing(&self) -> &DismissTiming {
        &self.timing
    }
}
