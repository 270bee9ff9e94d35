// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window holds an optional error banner above the gallery.

use super::Message;
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::gallery;
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub gallery: &'a gallery::State,
    /// i18n key of the message shown in the error banner.
    pub banner: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery_view = ctx
        .gallery
        .view(gallery::ViewContext {
            i18n: ctx.i18n,
            thumbnail_height: ctx.config.display.effective_thumbnail_height(),
            show_paging: ctx.config.lightbox.shows_paging(),
            close_on_backdrop: ctx.config.lightbox.closes_on_backdrop(),
        })
        .map(Message::Gallery);

    let mut column = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(key) = ctx.banner {
        column = column.push(banner(ctx.i18n, key));
    }

    Container::new(column.push(gallery_view))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .into()
}

fn banner<'a>(i18n: &'a I18n, key: &str) -> Element<'a, Message> {
    let dismiss = button(icons::tinted(icons::close(), sizing::ICON_SM, palette::WHITE))
        .padding(spacing::XXS)
        .style(styles::button::overlay)
        .on_press(Message::DismissBanner);

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(i18n.tr(key)).size(typography::BODY))
            .push(Space::new().width(Length::Fill))
            .push(dismiss),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::SM])
    .style(styles::container::error_banner)
    .into()
}
