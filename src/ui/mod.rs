// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks.

pub mod confirm;
pub mod design_tokens;
pub mod notifications;
pub mod page_view;
