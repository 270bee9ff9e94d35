// SPDX-License-Identifier: MPL-2.0
//! Lightbox modal presenting the visible images as a circular slide deck.
//!
//! The modal is stacked above the grid. The outer `opaque` layer swallows
//! every pointer event aimed at the grid; the inner one keeps presses on the
//! dialog from reaching the backdrop.

use super::component::Message;
use crate::gallery::{ImageItem, SlideDeck};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::svg::Svg;
use iced::widget::{
    button, center, mouse_area, opaque, tooltip, Column, Container, Row, Space, Text,
};
use iced::{alignment, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a [ImageItem],
    pub deck: SlideDeck,
    pub show_paging: bool,
    pub close_on_backdrop: bool,
}

/// Assistive label of the paging control for `item`.
#[must_use]
pub fn paging_label(i18n: &I18n, item: &ImageItem) -> String {
    let caption = item.caption();
    i18n.tr_with_args("lightbox-show-slide", &[("caption", caption.as_str())])
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(item) = ctx.images.get(ctx.deck.current()) else {
        return Space::new().into();
    };

    let close_button = styles::tooltip::labelled(
        button(icons::tinted(icons::close(), sizing::ICON_SM, palette::WHITE))
            .padding(spacing::XS)
            .style(styles::button::overlay)
            .on_press(Message::CloseLightbox),
        ctx.i18n.tr("lightbox-close"),
        tooltip::Position::Left,
    );

    let header = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(close_button);

    let slide = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(arrow(
            icons::chevron_left(),
            ctx.i18n.tr("lightbox-previous"),
            Message::PreviousSlide,
        ))
        .push(slide_image(item))
        .push(arrow(
            icons::chevron_right(),
            ctx.i18n.tr("lightbox-next"),
            Message::NextSlide,
        ));

    let caption = Container::new(Text::new(item.caption()).size(typography::TITLE_MD))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let mut dialog = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(slide)
        .push(caption);

    if ctx.show_paging {
        dialog = dialog.push(paging(&ctx));
    }

    let dialog = Container::new(dialog)
        .max_width(sizing::MODAL_XL_WIDTH)
        .padding(spacing::MD)
        .style(styles::container::dialog);

    let backdrop = mouse_area(
        center(opaque(dialog))
            .padding(spacing::LG)
            .style(styles::container::backdrop),
    );
    let backdrop = if ctx.close_on_backdrop {
        backdrop.on_press(Message::CloseLightbox)
    } else {
        backdrop
    };

    opaque(backdrop)
}

fn arrow<'a>(icon: Svg<'a>, label: String, message: Message) -> Element<'a, Message> {
    styles::tooltip::labelled(
        button(icons::tinted(icon, sizing::ICON_MD, palette::WHITE))
            .padding(spacing::SM)
            .style(styles::button::overlay)
            .on_press(message),
        label,
        tooltip::Position::Bottom,
    )
    .into()
}

fn slide_image(item: &ImageItem) -> Element<'_, Message> {
    let image: Element<'_, Message> = match &item.image {
        Some(asset) => Image::new(Handle::from_path(asset.path()))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::SLIDE_HEIGHT))
            .into(),
        None => Space::new()
            .width(Length::Fill)
            .height(Length::Fixed(sizing::SLIDE_HEIGHT))
            .into(),
    };

    if item.alternative_text.is_empty() {
        image
    } else {
        styles::tooltip::labelled(
            image,
            item.alternative_text.as_str(),
            tooltip::Position::FollowCursor,
        )
        .into()
    }
}

fn paging<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.deck.current();

    ctx.images
        .iter()
        .enumerate()
        .fold(
            Row::new().spacing(spacing::XS),
            |row, (index, item)| {
                let thumb: Element<'a, Message> = match &item.image {
                    Some(asset) => Image::new(Handle::from_path(asset.path()))
                        .content_fit(ContentFit::Cover)
                        .width(Length::Fixed(sizing::PAGING_THUMB_WIDTH))
                        .height(Length::Fixed(sizing::PAGING_THUMB_HEIGHT))
                        .into(),
                    None => Space::new()
                        .width(Length::Fixed(sizing::PAGING_THUMB_WIDTH))
                        .height(Length::Fixed(sizing::PAGING_THUMB_HEIGHT))
                        .into(),
                };

                let page = button(thumb)
                    .padding(2)
                    .style(styles::button::paging(index == current))
                    .on_press(Message::GoToSlide(index));

                row.push(styles::tooltip::labelled(
                    page,
                    paging_label(ctx.i18n, item),
                    tooltip::Position::Top,
                ))
            },
        )
        .wrap()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn paging_label_announces_caption() {
        let i18n = english();
        let item = ImageItem {
            title: "Beach".into(),
            subtitle: "Day one".into(),
            ..ImageItem::default()
        };
        assert_eq!(paging_label(&i18n, &item), "Show Beach - Day one");
    }

    #[test]
    fn paging_label_keeps_literal_separator() {
        let i18n = english();
        let item = ImageItem {
            title: "Beach".into(),
            ..ImageItem::default()
        };
        assert_eq!(paging_label(&i18n, &item), "Show Beach - ");
    }
}
