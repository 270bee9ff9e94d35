// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Tooltips carry the accessible labels of the lightbox controls (paging
//! thumbnails, arrows, alternative text), so they must stay readable on top
//! of the dark backdrop.

use crate::ui::design_tokens::{opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Light label box with a soft border and shadow.
pub fn label_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_PRESSED,
            ..palette::WHITE
        })),
        text_color: Some(palette::GRAY_900),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Wraps `content` with a labelled tooltip.
pub fn labelled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    label: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let label_box = Container::new(Text::new(label.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(label_container);

    tooltip(content, label_box, position).gap(spacing::XXS)
}
