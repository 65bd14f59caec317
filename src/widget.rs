// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering a surface's active toast.
//!
//! The toast renders as centered white text on an opaque black rounded
//! card, spanning the surface between its leading and trailing margins and
//! anchored to the bottom margin. Text and card both carry the animation's
//! current opacity, so the whole element fades as one.

use crate::design_tokens::{palette, radius, spacing};
use crate::surface::Surface;
use iced::widget::{container, text, Container, Stack};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders the surface's active toast, or `None` when it has none.
///
/// The returned element fills the surface and carries no interactions, so
/// it is generic over the host message type.
pub fn view<'a, Message: 'a>(surface: &'a Surface) -> Option<Element<'a, Message>> {
    let toast = surface.toast()?;
    let opacity = surface.opacity();

    let label = text(toast.message())
        .size(toast.size().text_size())
        .style(move |_theme: &Theme| text::Style {
            color: Some(Color {
                a: opacity,
                ..palette::WHITE
            }),
        });

    // Width follows the surface; height follows the wrapped text.
    let card = Container::new(
        Container::new(label)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .clip(true)
    .style(move |_theme: &Theme| card_style(opacity));

    Some(
        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into(),
    )
}

/// Stacks the surface's toast over arbitrary host content.
///
/// With no active toast the content is returned unchanged.
pub fn overlay<'a, Message: 'a>(
    surface: &'a Surface,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    match view(surface) {
        Some(toast) => Stack::new().push(content).push(toast).into(),
        None => content.into(),
    }
}

/// Style function for the toast card.
fn card_style(opacity: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity,
            ..palette::BLACK
        })),
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::TOAST.into(),
        },
        ..container::Style::default()
    }
}
