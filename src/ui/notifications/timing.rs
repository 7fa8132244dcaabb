// SPDX-License-Identifier: MPL-2.0
//! Dismissal timing for toasts.
//!
//! A toast at index `idx` starts fading after `base_delay + idx * stagger`
//! and is removed `removal_delay` after its fade actually began.

use crate::config::{
    ToastConfig, DEFAULT_BASE_DELAY_MS, DEFAULT_FADE_MS, DEFAULT_REMOVAL_DELAY_MS,
    DEFAULT_SHIFT_PX, DEFAULT_STAGGER_MS, MAX_BASE_DELAY_MS, MAX_FADE_MS, MAX_REMOVAL_DELAY_MS,
    MAX_SHIFT_PX, MAX_STAGGER_MS, MIN_SHIFT_PX,
};
use crate::page::{Easing, Style, Transition};
use std::time::Duration;

/// Timing and motion of the auto-dismiss sequence.
///
/// Values are clamped to the bounds in [`crate::config::defaults`] at
/// construction, so a hand-edited config cannot schedule a toast hours away.
///
/// # Example
///
/// ```
/// use flash_cues::ui::notifications::DismissTiming;
/// use std::time::Duration;
///
/// let timing = DismissTiming::default();
/// assert_eq!(timing.fade_delay(2), Duration::from_millis(2500));
/// assert_eq!(timing.total_lifetime(2), Duration::from_millis(2800));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DismissTiming {
    base_delay: Duration,
    stagger: Duration,
    fade: Duration,
    removal_delay: Duration,
    shift: f32,
}

impl Default for DismissTiming {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_millis(DEFAULT_BASE_DELAY_MS),
            stagger: Duration::from_millis(DEFAULT_STAGGER_MS),
            fade: Duration::from_millis(DEFAULT_FADE_MS),
            removal_delay: Duration::from_millis(DEFAULT_REMOVAL_DELAY_MS),
            shift: DEFAULT_SHIFT_PX,
        }
    }
}

impl DismissTiming {
    /// Builds timing from millisecond values, clamping each to its bound.
    #[must_use]
    pub fn new(
        base_delay_ms: u64,
        stagger_ms: u64,
        fade_ms: u64,
        removal_delay_ms: u64,
        shift_px: f32,
    ) -> Self {
        let shift = if shift_px.is_finite() {
            shift_px.clamp(MIN_SHIFT_PX, MAX_SHIFT_PX)
        } else {
            DEFAULT_SHIFT_PX
        };
        Self {
            base_delay: Duration::from_millis(base_delay_ms.min(MAX_BASE_DELAY_MS)),
            stagger: Duration::from_millis(stagger_ms.min(MAX_STAGGER_MS)),
            fade: Duration::from_millis(fade_ms.min(MAX_FADE_MS)),
            removal_delay: Duration::from_millis(removal_delay_ms.min(MAX_REMOVAL_DELAY_MS)),
            shift,
        }
    }

    /// Builds timing from the `[toasts]` config section; unset keys use defaults.
    #[must_use]
    pub fn from_config(config: &ToastConfig) -> Self {
        Self::new(
            config.base_delay_ms.unwrap_or(DEFAULT_BASE_DELAY_MS),
            config.stagger_ms.unwrap_or(DEFAULT_STAGGER_MS),
            config.fade_ms.unwrap_or(DEFAULT_FADE_MS),
            config.removal_delay_ms.unwrap_or(DEFAULT_REMOVAL_DELAY_MS),
            config.shift_px.unwrap_or(DEFAULT_SHIFT_PX),
        )
    }

    /// Delay between arming and the fade of the toast at `index`.
    #[must_use]
    pub fn fade_delay(&self, index: usize) -> Duration {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_delay
            .saturating_add(self.stagger.saturating_mul(steps))
    }

    /// Delay between arming and removal when the fade starts on time.
    #[must_use]
    pub fn total_lifetime(&self, index: usize) -> Duration {
        self.fade_delay(index).saturating_add(self.removal_delay)
    }

    #[must_use]
    pub fn removal_delay(&self) -> Duration {
        self.removal_delay
    }

    #[must_use]
    pub fn fade(&self) -> Duration {
        self.fade
    }

    #[must_use]
    pub fn shift(&self) -> f32 {
        self.shift
    }

    /// Style applied when a toast starts fading: transparent, shifted up,
    /// animated with an `ease` curve.
    #[must_use]
    pub fn fade_style(&self) -> Style {
        Style {
            opacity: 0.0,
            translate_y: -self.shift,
            transition: Some(Transition::new(self.fade, Easing::Ease)),
        }
    }
}
