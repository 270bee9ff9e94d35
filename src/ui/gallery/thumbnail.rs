// SPDX-License-Identifier: MPL-2.0
//! Thumbnail tile of the gallery grid.
//!
//! The whole tile is one button: pressing anywhere opens the lightbox at the
//! tile's own index, and the press is consumed so nothing underneath reacts.

use super::component::Message;
use crate::gallery::ImageItem;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub item: &'a ImageItem,
    /// Position of the item in the visible list, shared with the slide deck.
    pub index: usize,
    /// Rendered de-emphasized when it does not match the active tag.
    pub squeezed: bool,
    pub height: f32,
}

/// Opacity and inset of a tile.
#[must_use]
pub fn appearance(squeezed: bool) -> (f32, f32) {
    if squeezed {
        (opacity::SQUEEZED, sizing::SQUEEZE_INSET)
    } else {
        (opacity::OPAQUE, 0.0)
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let (alpha, inset) = appearance(ctx.squeezed);

    let background: Element<'a, Message> = match &ctx.item.image {
        Some(asset) => Image::new(Handle::from_path(asset.path()))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .opacity(alpha)
            .into(),
        None => Space::new().width(Length::Fill).height(Length::Fill).into(),
    };

    let labels = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.item.title.as_str()).size(typography::BODY))
        .push(
            Text::new(ctx.item.subtitle.as_str())
                .size(typography::CAPTION)
                .color(palette::GRAY_200),
        );

    let caption = Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::tinted(icons::camera(), sizing::ICON_SM, palette::WHITE))
            .push(labels),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .style(styles::container::tile_overlay);

    let overlay = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Space::new().height(Length::Fill))
        .push(caption);

    let tile = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(background)
        .push(overlay);

    button(Container::new(tile).padding(inset))
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.height))
        .style(styles::button::thumbnail)
        .on_press(Message::OpenLightbox(ctx.index))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_tile_is_opaque_and_full_size() {
        assert_eq!(appearance(false), (opacity::OPAQUE, 0.0));
    }

    #[test]
    fn squeezed_tile_is_faded_and_inset() {
        let (alpha, inset) = appearance(true);
        assert!(alpha < opacity::OPAQUE);
        assert!(inset > 0.0);
    }
}
