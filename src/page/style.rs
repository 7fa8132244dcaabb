// SPDX-License-Identifier: MPL-2.0
//! Inline style model for page elements.
//!
//! Only the properties the toast fade touches are modelled: opacity and a
//! vertical translation. A [`Transition`] animates a style change from the
//! values rendered at the time of the change toward the new ones.

use std::time::{Duration, Instant};

/// Timing curve of a transition, matching the CSS keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Cubic-bezier control points `(x1, y1, x2, y2)`.
    fn control_points(self) -> (f32, f32, f32, f32) {
        match self {
            Easing::Linear => (0.0, 0.0, 1.0, 1.0),
            Easing::Ease => (0.25, 0.1, 0.25, 1.0),
            Easing::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => (0.42, 0.0, 0.58, 1.0),
        }
    }

    /// Maps linear progress in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, progress: f32) -> f32 {
        let x = progress.clamp(0.0, 1.0);
        if self == Easing::Linear || x == 0.0 || x == 1.0 {
            return x;
        }

        let (x1, y1, x2, y2) = self.control_points();
        let t = solve_curve_x(x, x1, x2);
        bezier(t, y1, y2)
    }
}

/// One-dimensional cubic bezier through (0, 0) and (1, 1).
fn bezier(t: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - t;
    3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
}

fn bezier_derivative(t: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - t;
    3.0 * inv * inv * p1 + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// Finds the curve parameter whose x coordinate equals `x`.
fn solve_curve_x(x: f32, x1: f32, x2: f32) -> f32 {
    const EPSILON: f32 = 1e-5;

    let mut t = x;
    for _ in 0..8 {
        let error = bezier(t, x1, x2) - x;
        if error.abs() < EPSILON {
            return t;
        }
        let slope = bezier_derivative(t, x1, x2);
        if slope.abs() < EPSILON {
            break;
        }
        t -= error / slope;
    }

    // Newton did not converge, fall back to bisection
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    t = x;
    while hi - lo > EPSILON {
        let value = bezier(t, x1, x2);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    t
}

/// Animation applied when a style changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    #[must_use]
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

/// Rendered values of an element at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    /// 0.0 is fully transparent, 1.0 fully opaque.
    pub opacity: f32,
    /// Vertical offset in logical pixels; negative moves the element up.
    pub translate_y: f32,
}

impl Default for Visual {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_y: 0.0,
        }
    }
}

impl Visual {
    fn lerp(self, target: Visual, amount: f32) -> Visual {
        Visual {
            opacity: self.opacity + (target.opacity - self.opacity) * amount,
            translate_y: self.translate_y + (target.translate_y - self.translate_y) * amount,
        }
    }
}

/// Inline style of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub opacity: f32,
    pub translate_y: f32,
    pub transition: Option<Transition>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_y: 0.0,
            transition: None,
        }
    }
}

impl Style {
    /// Values this style renders once any transition has settled.
    #[must_use]
    pub fn visual(&self) -> Visual {
        Visual {
            opacity: self.opacity,
            translate_y: self.translate_y,
        }
    }
}

/// An in-flight transition between two rendered states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Animation {
    from: Visual,
    to: Visual,
    started_at: Instant,
    transition: Transition,
}

impl Animation {
    pub(crate) fn new(from: Visual, to: Visual, started_at: Instant, transition: Transition) -> Self {
        Self {
            from,
            to,
            started_at,
            transition,
        }
    }

    pub(crate) fn sample(&self, now: Instant) -> Visual {
        if self.transition.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let progress = elapsed.as_secs_f32() / self.transition.duration.as_secs_f32();
        if progress >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, self.transition.easing.apply(progress))
    }

    pub(crate) fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.transition.duration
    }
}
