// SPDX-License-Identifier: MPL-2.0
//! Gallery container: owns the UI state and composes the tag bar, the
//! thumbnail grid and the lightbox.
//!
//! The grid and the slide deck iterate over the same visible list in the same
//! order, so an index emitted by a thumbnail always addresses its own slide.

use super::{lightbox, placeholder, tag_list, thumbnail};
use crate::gallery::{all_tags, GalleryWidget, ImageItem, ImageValidator, SlideDeck, TagFilter};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{breakpoint, spacing};
use iced::widget::{responsive, Column, Row, Scrollable, Space, Stack};
use iced::{Element, Length, Size};

/// Messages emitted by the gallery views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OpenLightbox(usize),
    CloseLightbox,
    SelectTag(TagFilter),
    NextSlide,
    PreviousSlide,
    GoToSlide(usize),
}

/// Rendering settings supplied by the host.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub thumbnail_height: f32,
    pub show_paging: bool,
    pub close_on_backdrop: bool,
}

/// What the container renders for its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// No valid image: the placeholder alone.
    Placeholder,
    Gallery { tag_bar: bool, lightbox: bool },
}

/// Number of grid columns for an available width.
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    if width >= breakpoint::MD {
        breakpoint::COLUMNS_MD
    } else if width >= breakpoint::SM {
        breakpoint::COLUMNS_SM
    } else {
        breakpoint::COLUMNS_XS
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    gallery: GalleryWidget,
    visible: Vec<ImageItem>,
    tags: Vec<String>,
    current_image_index: usize,
    lightbox_open: bool,
    active_tag: TagFilter,
    deck: SlideDeck,
}

impl State {
    /// Mounts the container on `gallery`.
    pub fn new(gallery: GalleryWidget, validator: &impl ImageValidator) -> Self {
        let mut state = Self::default();
        state.set_gallery(gallery, validator);
        state
    }

    /// Replaces the configuration and resets the UI state to its defaults.
    pub fn set_gallery(&mut self, gallery: GalleryWidget, validator: &impl ImageValidator) {
        let visible = gallery.visible_images(validator);
        let tags = all_tags(&visible);

        tracing::info!(
            configured = gallery.images.len(),
            visible = visible.len(),
            tags = tags.len(),
            "gallery mounted"
        );

        *self = Self {
            gallery,
            visible,
            tags,
            ..Self::default()
        };
    }

    pub fn gallery(&self) -> &GalleryWidget {
        &self.gallery
    }

    pub fn visible_images(&self) -> &[ImageItem] {
        &self.visible
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn current_image_index(&self) -> usize {
        self.current_image_index
    }

    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox_open
    }

    pub fn active_tag(&self) -> &TagFilter {
        &self.active_tag
    }

    pub fn deck(&self) -> SlideDeck {
        self.deck
    }

    /// Whether the tile at `index` is rendered de-emphasized.
    #[must_use]
    pub fn is_squeezed(&self, index: usize) -> bool {
        self.visible
            .get(index)
            .is_some_and(|item| self.active_tag.squeezes(item))
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        if self.visible.is_empty() {
            return Layout::Placeholder;
        }

        Layout::Gallery {
            tag_bar: self.gallery.show_tags && !self.tags.is_empty(),
            lightbox: self.lightbox_open,
        }
    }

    /// Opens the lightbox on the visible image at `index`.
    ///
    /// Out-of-range indices are ignored so the current index always addresses
    /// a slide while the lightbox is open.
    pub fn open_lightbox(&mut self, index: usize) {
        if index >= self.visible.len() {
            tracing::warn!(index, len = self.visible.len(), "ignoring lightbox index");
            return;
        }

        self.current_image_index = index;
        self.lightbox_open = true;
        self.deck = SlideDeck::starting_at(index, self.visible.len());
        tracing::debug!(index, "lightbox opened");
    }

    pub fn close_lightbox(&mut self) {
        self.current_image_index = 0;
        self.lightbox_open = false;
        tracing::debug!(last_slide = self.deck.current(), "lightbox closed");
    }

    pub fn select_tag(&mut self, filter: TagFilter) {
        tracing::debug!(filter = %filter, "tag filter changed");
        self.active_tag = filter;
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::OpenLightbox(index) => self.open_lightbox(index),
            Message::CloseLightbox => self.close_lightbox(),
            Message::SelectTag(filter) => self.select_tag(filter),
            Message::NextSlide if self.lightbox_open => {
                self.deck.next();
            }
            Message::PreviousSlide if self.lightbox_open => {
                self.deck.previous();
            }
            Message::GoToSlide(index) if self.lightbox_open => {
                self.deck.go_to(index);
            }
            Message::NextSlide | Message::PreviousSlide | Message::GoToSlide(_) => {}
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let (tag_bar, lightbox_open) = match self.layout() {
            Layout::Placeholder => return placeholder::view(ctx.i18n),
            Layout::Gallery { tag_bar, lightbox } => (tag_bar, lightbox),
        };

        let mut content = Column::new()
            .spacing(spacing::SM)
            .width(Length::Fill)
            .height(Length::Fill);

        if tag_bar {
            content = content.push(tag_list::view(tag_list::ViewContext {
                i18n: ctx.i18n,
                tags: &self.tags,
                active: &self.active_tag,
            }));
        }

        let thumbnail_height = ctx.thumbnail_height;
        content = content.push(responsive(move |size: Size| {
            self.grid(thumbnail_height, size.width)
        }));

        if !lightbox_open {
            return content.into();
        }

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(content)
            .push(lightbox::view(lightbox::ViewContext {
                i18n: ctx.i18n,
                images: &self.visible,
                deck: self.deck,
                show_paging: ctx.show_paging,
                close_on_backdrop: ctx.close_on_backdrop,
            }))
            .into()
    }

    fn grid<'a>(&'a self, thumbnail_height: f32, width: f32) -> Element<'a, Message> {
        let columns = columns_for_width(width);

        let rows = self
            .visible
            .chunks(columns)
            .enumerate()
            .map(|(row_index, chunk)| -> Element<'a, Message> {
                let tiles = chunk.iter().enumerate().fold(
                    Row::new().width(Length::Fill),
                    |row, (offset, item)| {
                        let index = row_index * columns + offset;
                        row.push(thumbnail::view(thumbnail::ViewContext {
                            item,
                            index,
                            squeezed: self.active_tag.squeezes(item),
                            height: thumbnail_height,
                        }))
                    },
                );

                // Keep tile widths equal on a short last row.
                (chunk.len()..columns)
                    .fold(tiles, |row, _| row.push(Space::new().width(Length::Fill)))
                    .into()
            });

        Scrollable::new(Column::with_children(rows).width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{ImageAsset, ImageItem};

    fn accept_all(_: &ImageAsset) -> bool {
        true
    }

    fn item(title: &str, tags: &[&str]) -> ImageItem {
        ImageItem {
            image: Some(ImageAsset::new(format!("{title}.jpg"))),
            title: title.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..ImageItem::default()
        }
    }

    fn gallery(images: Vec<ImageItem>, show_tags: bool) -> GalleryWidget {
        GalleryWidget {
            title: None,
            images,
            show_tags,
        }
    }

    fn colors() -> State {
        State::new(
            gallery(
                vec![item("a", &["red"]), item("b", &["blue"]), item("c", &["red", "blue"])],
                true,
            ),
            &accept_all,
        )
    }

    #[test]
    fn default_state_is_closed_and_unfiltered() {
        let state = colors();
        assert_eq!(state.current_image_index(), 0);
        assert!(!state.is_lightbox_open());
        assert!(state.active_tag().is_all());
    }

    #[test]
    fn no_valid_image_renders_only_placeholder() {
        let mut without_asset = item("a", &["red"]);
        without_asset.image = None;
        let state = State::new(gallery(vec![without_asset], true), &accept_all);

        assert!(state.visible_images().is_empty());
        assert_eq!(state.layout(), Layout::Placeholder);
    }

    #[test]
    fn placeholder_wins_over_open_lightbox() {
        let mut state = State::new(gallery(Vec::new(), true), &accept_all);
        state.open_lightbox(0);
        assert_eq!(state.layout(), Layout::Placeholder);
        assert!(!state.is_lightbox_open());
    }

    #[test]
    fn tags_are_sorted_union_of_visible_images() {
        let state = colors();
        assert_eq!(state.tags(), ["blue", "red"]);
    }

    #[test]
    fn invalid_items_do_not_contribute_tags() {
        let only_a = |asset: &ImageAsset| asset.path().ends_with("a.jpg");
        let state = State::new(
            gallery(vec![item("a", &["red"]), item("b", &["blue"])], true),
            &only_a,
        );
        assert_eq!(state.tags(), ["red"]);
    }

    #[test]
    fn tag_bar_follows_show_tags_flag() {
        let shown = colors();
        assert_eq!(
            shown.layout(),
            Layout::Gallery {
                tag_bar: true,
                lightbox: false
            }
        );

        let hidden = State::new(gallery(vec![item("a", &["red"])], false), &accept_all);
        assert_eq!(
            hidden.layout(),
            Layout::Gallery {
                tag_bar: false,
                lightbox: false
            }
        );
    }

    #[test]
    fn tag_bar_is_hidden_without_tags() {
        let state = State::new(gallery(vec![item("a", &[])], true), &accept_all);
        assert_eq!(
            state.layout(),
            Layout::Gallery {
                tag_bar: false,
                lightbox: false
            }
        );
    }

    #[test]
    fn selecting_red_squeezes_only_second_image() {
        let mut state = colors();
        state.handle_message(Message::SelectTag(TagFilter::tag("red")));

        let squeezed: Vec<bool> = (0..3).map(|i| state.is_squeezed(i)).collect();
        assert_eq!(squeezed, vec![false, true, false]);
    }

    #[test]
    fn selecting_all_clears_squeeze() {
        let mut state = colors();
        state.select_tag(TagFilter::tag("blue"));
        state.select_tag(TagFilter::All);
        assert!((0..3).all(|i| !state.is_squeezed(i)));
    }

    #[test]
    fn filtering_never_removes_items() {
        let mut state = colors();
        state.select_tag(TagFilter::tag("missing"));
        assert_eq!(state.visible_images().len(), 3);
        assert!((0..3).all(|i| state.is_squeezed(i)));
    }

    #[test]
    fn opening_seeds_deck_with_clicked_index() {
        let mut state = colors();
        state.handle_message(Message::OpenLightbox(2));

        assert!(state.is_lightbox_open());
        assert_eq!(state.current_image_index(), 2);
        assert_eq!(state.deck().current(), 2);
        assert_eq!(state.deck().len(), 3);
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let mut state = colors();
        state.open_lightbox(3);
        assert!(!state.is_lightbox_open());
        assert_eq!(state.current_image_index(), 0);
    }

    #[test]
    fn closing_resets_index_regardless_of_last_slide() {
        let mut state = colors();
        state.open_lightbox(1);
        state.handle_message(Message::NextSlide);
        state.handle_message(Message::NextSlide);
        state.handle_message(Message::CloseLightbox);

        assert!(!state.is_lightbox_open());
        assert_eq!(state.current_image_index(), 0);
    }

    #[test]
    fn reopening_starts_from_new_index() {
        let mut state = colors();
        state.open_lightbox(2);
        state.close_lightbox();
        state.open_lightbox(1);
        assert_eq!(state.deck().current(), 1);
    }

    #[test]
    fn deck_navigation_wraps_around() {
        let mut state = colors();
        state.open_lightbox(2);
        state.handle_message(Message::NextSlide);
        assert_eq!(state.deck().current(), 0);
        state.handle_message(Message::PreviousSlide);
        assert_eq!(state.deck().current(), 2);
    }

    #[test]
    fn paging_jumps_to_slide() {
        let mut state = colors();
        state.open_lightbox(0);
        state.handle_message(Message::GoToSlide(1));
        assert_eq!(state.deck().current(), 1);

        state.handle_message(Message::GoToSlide(9));
        assert_eq!(state.deck().current(), 1);
    }

    #[test]
    fn navigation_is_ignored_while_closed() {
        let mut state = colors();
        state.handle_message(Message::NextSlide);
        state.handle_message(Message::GoToSlide(2));
        assert_eq!(state.deck(), SlideDeck::default());
    }

    #[test]
    fn set_gallery_resets_ui_state() {
        let mut state = colors();
        state.select_tag(TagFilter::tag("red"));
        state.open_lightbox(2);

        state.set_gallery(gallery(vec![item("z", &["green"])], true), &accept_all);

        assert!(!state.is_lightbox_open());
        assert_eq!(state.current_image_index(), 0);
        assert!(state.active_tag().is_all());
        assert_eq!(state.tags(), ["green"]);
    }

    #[test]
    fn columns_follow_breakpoints() {
        assert_eq!(columns_for_width(320.0), 2);
        assert_eq!(columns_for_width(575.9), 2);
        assert_eq!(columns_for_width(576.0), 3);
        assert_eq!(columns_for_width(767.0), 3);
        assert_eq!(columns_for_width(768.0), 4);
        assert_eq!(columns_for_width(1920.0), 4);
    }
}
