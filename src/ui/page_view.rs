// SPDX-License-Identifier: MPL-2.0
//! Renders a [`Document`] as Iced widgets.
//!
//! Scheduled toasts are drawn with the toast widget at their current
//! opacity and offset. Elements with class `delete` become buttons that
//! request a confirmed deletion. Table rows and `.row` elements lay their
//! children out horizontally, headings use the title size, and every other
//! element stacks its children vertically.

use crate::i18n::fluent::I18n;
use crate::page::{Document, NodeId};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{Manager, Toast};
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Class marking elements that trigger a confirmed deletion.
pub const DELETE_CLASS: &str = "delete";

/// Attribute holding the confirmation question of a delete element.
pub const CONFIRM_ATTRIBUTE: &str = "data-confirm";

#[derive(Debug, Clone)]
pub enum Message {
    /// A delete element was pressed.
    DeleteRequested(NodeId),
}

/// Context required to render a page.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub document: &'a Document,
    pub notifications: &'a Manager,
    pub i18n: &'a I18n,
    /// Instant at which transitions are sampled.
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let root = ctx.document.root();
    let children = render_children(ctx, root);

    let content: Element<'_, Message> = if children.is_empty() {
        Text::new(ctx.i18n.tr("page-empty"))
            .size(typography::BODY)
            .into()
    } else {
        Column::with_children(children)
            .spacing(spacing::XS)
            .width(Length::Fill)
            .into()
    };

    scrollable(
        Container::new(content)
            .padding(spacing::MD)
            .width(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

fn render_children<'a>(ctx: ViewContext<'a>, id: NodeId) -> Vec<Element<'a, Message>> {
    ctx.document
        .children(id)
        .iter()
        .map(|child| render_node(ctx, *child))
        .collect()
}

fn render_node<'a>(ctx: ViewContext<'a>, id: NodeId) -> Element<'a, Message> {
    let document = ctx.document;

    if let Some(text) = document.text(id) {
        return Text::new(text.to_string()).size(typography::BODY).into();
    }

    let Some(element) = document.element(id) else {
        return Column::with_children(render_children(ctx, id)).into();
    };

    if let Some(entry) = ctx.notifications.entry_for(id) {
        return Toast::view(
            document.text_content(id),
            entry.category(),
            document.visual(id, ctx.now),
        );
    }

    if element.has_class(DELETE_CLASS) {
        return button(Text::new(document.text_content(id)).size(typography::BODY))
            .on_press(Message::DeleteRequested(id))
            .padding(spacing::XXS)
            .into();
    }

    match element.tag() {
        "h1" | "h2" | "h3" => Text::new(document.text_content(id))
            .size(typography::HEADING)
            .into(),
        "tr" => Row::with_children(render_children(ctx, id))
            .spacing(spacing::LG)
            .align_y(alignment::Vertical::Center)
            .into(),
        _ if element.has_class("row") => Row::with_children(render_children(ctx, id))
            .spacing(spacing::LG)
            .align_y(alignment::Vertical::Center)
            .into(),
        _ => Column::with_children(render_children(ctx, id))
            .spacing(spacing::XXS)
            .into(),
    }
}

/// Node removed when the delete element `id` is confirmed: the nearest
/// `.row` ancestor, or the element's parent when there is none.
#[must_use]
pub fn deletion_target(document: &Document, id: NodeId) -> Option<NodeId> {
    document
        .closest(id, |element| element.has_class("row"))
        .or_else(|| document.parent(id))
        .filter(|target| *target != document.root())
}

/// Confirmation question carried by the delete element `id`, if any.
#[must_use]
pub fn confirm_message(document: &Document, id: NodeId) -> Option<&str> {
    document
        .element(id)
        .and_then(|element| element.attribute(CONFIRM_ATTRIBUTE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::page::markup;

    const PAGE: &str = r#"
        <div class="toast"><div class="msg success">Saved.</div></div>
        <table>
            <tr class="row"><td>Mario</td><td><button class="delete" data-confirm="Delete user?">x</button></td></tr>
        </table>
        <div><button class="delete">orphan</button></div>
        <button class="delete">top</button>
    "#;

    fn find(document: &Document, selector: &str) -> Vec<NodeId> {
        document.query_selector_all(&selector.parse().unwrap())
    }

    #[test]
    fn deletion_target_prefers_row_ancestor() {
        let doc = markup::parse(PAGE).unwrap();
        let buttons = find(&doc, "button.delete");
        let row = find(&doc, "tr.row")[0];

        assert_eq!(deletion_target(&doc, buttons[0]), Some(row));
    }

    #[test]
    fn deletion_target_falls_back_to_parent() {
        let doc = markup::parse(PAGE).unwrap();
        let buttons = find(&doc, "button.delete");

        assert_eq!(deletion_target(&doc, buttons[1]), doc.parent(buttons[1]));
    }

    #[test]
    fn deletion_target_never_removes_root() {
        let doc = markup::parse(PAGE).unwrap();
        let buttons = find(&doc, "button.delete");

        assert_eq!(deletion_target(&doc, buttons[2]), None);
    }

    #[test]
    fn confirm_message_reads_attribute() {
        let doc = markup::parse(PAGE).unwrap();
        let buttons = find(&doc, "button.delete");

        assert_eq!(confirm_message(&doc, buttons[0]), Some("Delete user?"));
        assert_eq!(confirm_message(&doc, buttons[1]), None);
    }

    #[test]
    fn view_renders_page_and_empty_page() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let manager = Manager::new();
        let now = Instant::now();

        let doc = markup::parse(PAGE).unwrap();
        let _page = view(ViewContext {
            document: &doc,
            notifications: &manager,
            i18n: &i18n,
            now,
        });

        let empty = Document::new();
        let _empty = view(ViewContext {
            document: &empty,
            notifications: &manager,
            i18n: &i18n,
            now,
        });
    }
}
