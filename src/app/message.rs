// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::page_view;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Page(page_view::Message),
    Tick(Instant), // Periodic tick for toast dismissal and transitions
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional UI language (e.g. `it`).
    pub lang: Option<String>,
    /// Markup file to host. The embedded demo page is used when absent.
    pub page_path: Option<PathBuf>,
}
