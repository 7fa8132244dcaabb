// SPDX-License-Identifier: MPL-2.0
//! Core data structures for scheduled toasts.
//!
//! This module defines the `Category` enum read from a toast's markup and
//! the `ScheduledToast` entry tracked by the manager.

use crate::page::{Element, NodeId};
use crate::ui::design_tokens::accent;
use iced::Color;
use std::time::Instant;

/// Flash category of a toast, taken from its class list.
///
/// The category only affects styling; every category is dismissed on the
/// same schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    /// Operation completed successfully (green).
    Success,
    /// Informational message (blue).
    #[default]
    Info,
    /// Something was removed or needs attention (orange).
    Warning,
    /// Operation failed (red).
    Danger,
}

impl Category {
    /// Reads the category from an element's classes. `error` is accepted as
    /// an alias of `danger`; elements without a known class are `Info`.
    #[must_use]
    pub fn from_element(element: &Element) -> Self {
        element
            .classes()
            .iter()
            .find_map(|class| match class.as_str() {
                "success" => Some(Category::Success),
                "info" => Some(Category::Info),
                "warning" => Some(Category::Warning),
                "danger" | "error" => Some(Category::Danger),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Returns the accent color for this category.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Category::Success => accent::SUCCESS,
            Category::Info => accent::INFO,
            Category::Warning => accent::WARNING,
            Category::Danger => accent::DANGER,
        }
    }
}

/// Position of a toast in its dismissal sequence. Only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Fading,
    Removed,
}

/// A toast found at arming time together with its schedule.
#[derive(Debug, Clone)]
pub struct ScheduledToast {
    node: NodeId,
    index: usize,
    category: Category,
    phase: Phase,
    fade_at: Instant,
    faded_at: Option<Instant>,
    remove_at: Option<Instant>,
    removed_at: Option<Instant>,
}

impl ScheduledToast {
    pub(super) fn new(node: NodeId, index: usize, category: Category, fade_at: Instant) -> Self {
        Self {
            node,
            index,
            category,
            phase: Phase::Visible,
            fade_at,
            faded_at: None,
            remove_at: None,
            removed_at: None,
        }
    }

    pub(super) fn start_fade(&mut self, now: Instant, remove_at: Instant) {
        self.phase = Phase::Fading;
        self.faded_at = Some(now);
        self.remove_at = Some(remove_at);
    }

    pub(super) fn finish(&mut self, now: Instant) {
        self.phase = Phase::Removed;
        self.removed_at = Some(now);
    }

    /// Page element this toast refers to.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Position in the set queried at arming time (0-based).
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// When the fade is due.
    #[must_use]
    pub fn fade_at(&self) -> Instant {
        self.fade_at
    }

    /// When the fade actually started.
    #[must_use]
    pub fn faded_at(&self) -> Option<Instant> {
        self.faded_at
    }

    /// When removal is due, once fading.
    #[must_use]
    pub fn remove_at(&self) -> Option<Instant> {
        self.remove_at
    }

    /// When the element actually left the page.
    #[must_use]
    pub fn removed_at(&self) -> Option<Instant> {
        self.removed_at
    }
}
