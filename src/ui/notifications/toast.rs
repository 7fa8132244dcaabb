// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering a flash message.
//!
//! Toasts appear as small cards with a category-colored accent. While a toast
//! fades, its opacity scales every color of the card and its vertical offset
//! moves the card inside a fixed-height slot, so neighbours do not jump.

use super::notification::Category;
use crate::page::Visual;
use crate::ui::design_tokens::{spacing, toast, typography};
use iced::widget::{text, Container, Text};
use iced::{Color, Element, Length, Padding, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a toast showing `message` as it looks with `visual` applied.
    pub fn view<'a, M: 'a>(message: String, category: Category, visual: Visual) -> Element<'a, M> {
        let accent_color = category.color();
        let opacity = visual.opacity.clamp(0.0, 1.0);

        let message_widget = Text::new(message)
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(with_opacity(theme.palette().text, opacity)),
            });

        let card = Container::new(message_widget)
            .width(Length::Fixed(toast::WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, opacity));

        Container::new(card)
            .padding(slot_padding(visual.translate_y))
            .into()
    }
}

/// Padding of the slot holding a toast card, moving the card by
/// `translate_y` while keeping the slot height constant. Every configurable
/// shift fits in the margin.
fn slot_padding(translate_y: f32) -> Padding {
    let offset = translate_y.clamp(-toast::SLOT_MARGIN, toast::SLOT_MARGIN);
    Padding {
        top: toast::SLOT_MARGIN + offset,
        right: 0.0,
        bottom: toast::SLOT_MARGIN - offset,
        left: 0.0,
    }
}

fn with_opacity(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, opacity: f32) -> iced::widget::container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    iced::widget::container::Style {
        background: Some(iced::Background::Color(with_opacity(bg_color, opacity))),
        border: iced::Border {
            color: with_opacity(accent_color, opacity),
            width: toast::BORDER_WIDTH,
            radius: toast::RADIUS.into(),
        },
        shadow: iced::Shadow {
            color: with_opacity(toast::SHADOW.color, opacity * 0.3),
            ..toast::SHADOW
        },
        text_color: Some(with_opacity(theme.palette().text, opacity)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_SHIFT_PX;
    use crate::ui::design_tokens::accent;
    use crate::ui::notifications::DismissTiming;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let style = toast_container_style(&Theme::Dark, accent::SUCCESS, 1.0);

        assert_eq!(style.border.color, accent::SUCCESS);
        assert!(style.background.is_some());
    }

    #[test]
    fn faded_toast_is_fully_transparent() {
        let style = toast_container_style(&Theme::Dark, accent::WARNING, 0.0);

        assert_eq!(style.border.color.a, 0.0);
        assert_eq!(style.text_color.map(|c| c.a), Some(0.0));
        match style.background {
            Some(iced::Background::Color(color)) => assert_eq!(color.a, 0.0),
            other => panic!("expected color background, got {other:?}"),
        }
    }

    #[test]
    fn slot_padding_keeps_height_constant() {
        for offset in [0.0, -3.0, -6.0, -20.0] {
            let padding = slot_padding(offset);
            assert_eq!(padding.top + padding.bottom, toast::SLOT_MARGIN * 2.0);
        }
        assert_eq!(slot_padding(-6.0).top, toast::SLOT_MARGIN - 6.0);
    }

    #[test]
    fn largest_configured_shift_is_rendered_in_full() {
        let timing = DismissTiming::new(0, 0, 0, 0, 1_000.0);
        assert_eq!(timing.shift(), MAX_SHIFT_PX);

        let padding = slot_padding(timing.fade_style().translate_y);
        assert_eq!(padding.top, toast::SLOT_MARGIN - MAX_SHIFT_PX);
        assert_eq!(padding.bottom, toast::SLOT_MARGIN + MAX_SHIFT_PX);
    }

    #[test]
    fn view_builds_for_every_category() {
        for category in [
            Category::Success,
            Category::Info,
            Category::Warning,
            Category::Danger,
        ] {
            let _element: Element<'_, ()> =
                Toast::view("Saved.".to_string(), category, Visual::default());
        }
    }
}
