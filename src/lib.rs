// SPDX-License-Identifier: MPL-2.0
//! `flash_cues` hosts server-rendered pages built with the Iced GUI framework.
//!
//! It dismisses flash notifications a short while after the page loads,
//! staggering them so they leave one after another, and gates destructive
//! actions behind a native yes/no prompt. Text is localized with Fluent.

#![doc(html_root_url = "https://docs.rs/flash_cues/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod page;
pub mod ui;
