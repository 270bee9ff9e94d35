// SPDX-License-Identifier: MPL-2.0
//! Placeholder displayed when the gallery has no valid image.
//!
//! The message is addressed to whoever edits the manifest, so it is the only
//! thing rendered: no tag bar, no grid, no lightbox.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let icon = icons::tinted(icons::camera(), sizing::ICON_XL, palette::GRAY_400);

    let message = Text::new(i18n.tr("gallery-placeholder"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(message);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::placeholder)
        .into()
}
