// SPDX-License-Identifier: MPL-2.0
//! Auto-dismissal of flash toasts rendered by the server.
//!
//! Toasts are page elements matching a structural pattern (by default a
//! `msg` element nested in a `toast` container). Once the page is loaded,
//! the manager schedules each of them to fade out and then leave the page,
//! staggered so simultaneous toasts do not vanish at once.
//!
//! # Components
//!
//! - [`DismissTiming`]: delays, stagger, fade curve and shift
//! - [`Category`], [`Phase`] and the per-toast [`ScheduledToast`] entry
//! - [`Manager`]: one-shot scan and tick-driven lifecycle, reporting
//!   [`DismissEvent`]s
//! - [`Toast`]: widget rendering a toast with its current opacity/offset
//!
//! # Usage
//!
//! ```
//! use flash_cues::page::{markup, Selector};
//! use flash_cues::ui::notifications::{Manager, Phase};
//! use std::time::{Duration, Instant};
//!
//! let mut page = markup::parse(r#"<div class="toast"><div class="msg">Saved.</div></div>"#).unwrap();
//! let mut manager = Manager::new();
//! let start = Instant::now();
//!
//! assert_eq!(manager.arm(&page, &".toast .msg".parse::<Selector>().unwrap(), start), 1);
//! manager.tick(&mut page, start + Duration::from_millis(2200));
//! assert_eq!(manager.phase(0), Some(Phase::Fading));
//! manager.tick(&mut page, start + Duration::from_millis(2500));
//! assert!(!manager.has_pending());
//! ```

mod manager;
mod notification;
mod timing;
mod toast;

pub use manager::{DismissEvent, Manager};
pub use notification::{Category, Phase, ScheduledToast};
pub use timing::DismissTiming;
pub use toast::Toast;
