// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::page::Document;
use crate::ui::notifications::Manager;
use crate::ui::page_view::{self, ViewContext as PageViewContext};
use iced::{widget::Container, Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub document: &'a Document,
    pub notifications: &'a Manager,
    pub now: Instant,
}

/// Renders the hosted page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = page_view::view(PageViewContext {
        document: ctx.document,
        notifications: ctx.notifications,
        i18n: ctx.i18n,
        now: ctx.now,
    })
    .map(Message::Page);

    Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
