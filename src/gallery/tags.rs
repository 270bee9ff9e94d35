// SPDX-License-Identifier: MPL-2.0
//! Tag filtering.
//!
//! Filtering is advisory: a non-matching item stays in the grid and is only
//! rendered de-emphasized.

use super::item::ImageItem;
use std::collections::BTreeSet;
use std::fmt;

/// Active tag selection of the filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TagFilter {
    /// No filter, every item is shown normally.
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    pub fn tag(tag: impl Into<String>) -> Self {
        TagFilter::Tag(tag.into())
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, TagFilter::All)
    }

    /// Whether `item` should be rendered de-emphasized under this filter.
    #[must_use]
    pub fn squeezes(&self, item: &ImageItem) -> bool {
        match self {
            TagFilter::All => false,
            TagFilter::Tag(tag) => !item.has_tag(tag),
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagFilter::All => write!(f, "*"),
            TagFilter::Tag(tag) => write!(f, "{tag}"),
        }
    }
}

/// Sorted, duplicate-free union of the tags of `images`.
#[must_use]
pub fn all_tags(images: &[ImageItem]) -> Vec<String> {
    images
        .iter()
        .flat_map(|image| image.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(tags: &[&str]) -> ImageItem {
        ImageItem {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..ImageItem::default()
        }
    }

    #[test]
    fn all_tags_sorts_and_deduplicates() {
        let images = vec![tagged(&["red"]), tagged(&["blue"]), tagged(&["red", "blue"])];
        assert_eq!(all_tags(&images), vec!["blue", "red"]);
    }

    #[test]
    fn all_tags_of_untagged_images_is_empty() {
        let images = vec![tagged(&[]), tagged(&[])];
        assert!(all_tags(&images).is_empty());
    }

    #[test]
    fn all_tags_keeps_empty_tag_as_regular_value() {
        let images = vec![tagged(&["", "a"])];
        assert_eq!(all_tags(&images), vec!["", "a"]);
    }

    #[test]
    fn all_filter_squeezes_nothing() {
        assert!(!TagFilter::All.squeezes(&tagged(&[])));
        assert!(!TagFilter::All.squeezes(&tagged(&["red"])));
    }

    #[test]
    fn tag_filter_squeezes_items_without_the_tag() {
        let red = TagFilter::tag("red");
        assert!(!red.squeezes(&tagged(&["red"])));
        assert!(red.squeezes(&tagged(&["blue"])));
        assert!(!red.squeezes(&tagged(&["red", "blue"])));
        assert!(red.squeezes(&tagged(&[])));
    }

    #[test]
    fn empty_tag_is_distinct_from_all() {
        let empty = TagFilter::tag("");
        assert!(!empty.is_all());
        assert!(empty.squeezes(&tagged(&["red"])));
        assert!(!empty.squeezes(&tagged(&[""])));
    }
}
