// SPDX-License-Identifier: MPL-2.0
//! Tag filter bar.
//!
//! Stateless: the container owns the active filter and passes it in. Every
//! control emits the filter it stands for.

use super::component::Message;
use crate::gallery::TagFilter;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Row, Space, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tags: &'a [String],
    pub active: &'a TagFilter,
}

/// Filters offered by the bar, in display order: "all" first, then every tag.
#[must_use]
pub fn entries(tags: &[String]) -> Vec<TagFilter> {
    if tags.is_empty() {
        return Vec::new();
    }

    std::iter::once(TagFilter::All)
        .chain(tags.iter().map(TagFilter::tag))
        .collect()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let entries = entries(ctx.tags);
    if entries.is_empty() {
        return Space::new().width(Length::Fill).into();
    }

    entries
        .into_iter()
        .fold(
            Row::new().spacing(spacing::XS).padding([spacing::XS, 0.0]),
            |row, filter| {
                let label = match &filter {
                    TagFilter::All => ctx.i18n.tr("tag-filter-all"),
                    TagFilter::Tag(tag) => tag.clone(),
                };
                let style = if &filter == ctx.active {
                    styles::button::selected
                } else {
                    styles::button::unselected
                };

                row.push(
                    button(Text::new(label).size(typography::BODY))
                        .padding([spacing::XXS, spacing::SM])
                        .style(style)
                        .on_press(Message::SelectTag(filter)),
                )
            },
        )
        .wrap()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_start_with_all_then_tags_in_order() {
        let tags = vec!["blue".to_string(), "red".to_string()];
        assert_eq!(
            entries(&tags),
            vec![TagFilter::All, TagFilter::tag("blue"), TagFilter::tag("red")]
        );
    }

    #[test]
    fn no_tags_means_no_entries() {
        assert!(entries(&[]).is_empty());
    }

    #[test]
    fn empty_tag_gets_its_own_entry() {
        let tags = vec![String::new()];
        assert_eq!(entries(&tags), vec![TagFilter::All, TagFilter::tag("")]);
    }
}
