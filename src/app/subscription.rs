// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick driving toast dismissal.
///
/// Ticks only run while a toast is still scheduled or a transition is still
/// playing; an idle page costs nothing.
pub fn create_tick_subscription(has_pending_toasts: bool, is_animating: bool) -> Subscription<Message> {
    if has_pending_toasts || is_animating {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
