// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast lookup**: Structural pattern identifying notification elements
//! - **Toast timing**: Fade delay, stagger, fade duration and removal delay
//! - **Toast motion**: Upward shift applied while fading
//! - **Host loop**: Tick interval of the hosting application

// ==========================================================================
// Toast Lookup Defaults
// ==========================================================================

/// Pattern matching the message region nested in a toast container.
pub const DEFAULT_TOAST_SELECTOR: &str = ".toast .msg";

// ==========================================================================
// Toast Timing Defaults (milliseconds)
// ==========================================================================

/// Delay before the first toast starts fading.
pub const DEFAULT_BASE_DELAY_MS: u64 = 2200;

/// Longest accepted base delay.
pub const MAX_BASE_DELAY_MS: u64 = 60_000;

/// Extra delay added per toast index so toasts leave one after another.
pub const DEFAULT_STAGGER_MS: u64 = 150;

/// Longest accepted stagger.
pub const MAX_STAGGER_MS: u64 = 5_000;

/// Duration of the fade transition.
pub const DEFAULT_FADE_MS: u64 = 250;

/// Longest accepted fade transition.
pub const MAX_FADE_MS: u64 = 5_000;

/// Time between the start of the fade and removal from the page.
pub const DEFAULT_REMOVAL_DELAY_MS: u64 = 300;

/// Longest accepted removal delay.
pub const MAX_REMOVAL_DELAY_MS: u64 = 5_000;

// ==========================================================================
// Toast Motion Defaults
// ==========================================================================

/// Upward shift applied while fading (logical pixels).
pub const DEFAULT_SHIFT_PX: f32 = 6.0;

/// Smallest accepted shift.
pub const MIN_SHIFT_PX: f32 = 0.0;

/// Largest accepted shift; a fading toast never leaves its slot margin.
pub const MAX_SHIFT_PX: f32 = 8.0;

// ==========================================================================
// Host Loop Defaults
// ==========================================================================

/// Interval between ticks while toasts are pending or animating.
pub const TICK_INTERVAL_MS: u64 = 16;
