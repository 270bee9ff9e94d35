// SPDX-License-Identifier: MPL-2.0
//! Image items as supplied by the gallery manifest.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Separator placed between title and subtitle in captions and paging labels.
pub const CAPTION_SEPARATOR: &str = " - ";

/// Reference to an image file backing a gallery item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ImageAsset(PathBuf);

impl ImageAsset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Rebases a relative asset path onto `base`. Absolute paths are kept.
    #[must_use]
    pub fn resolved_against(self, base: &Path) -> Self {
        if self.0.is_absolute() {
            self
        } else {
            Self(base.join(self.0))
        }
    }
}

/// One entry of the gallery. Every text field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImageItem {
    pub image: Option<ImageAsset>,
    pub title: String,
    pub subtitle: String,
    pub tags: Vec<String>,
    pub alternative_text: String,
}

impl ImageItem {
    /// Title and subtitle joined by [`CAPTION_SEPARATOR`].
    ///
    /// Empty parts are not skipped: an item without subtitle yields `"Title - "`.
    #[must_use]
    pub fn caption(&self) -> String {
        [self.title.as_str(), self.subtitle.as_str()].join(CAPTION_SEPARATOR)
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, subtitle: &str) -> ImageItem {
        ImageItem {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            ..ImageItem::default()
        }
    }

    #[test]
    fn caption_joins_title_and_subtitle() {
        assert_eq!(item("A", "B").caption(), "A - B");
    }

    #[test]
    fn caption_keeps_separator_when_subtitle_is_empty() {
        assert_eq!(item("A", "").caption(), "A - ");
    }

    #[test]
    fn caption_keeps_separator_when_both_are_empty() {
        assert_eq!(item("", "").caption(), " - ");
    }

    #[test]
    fn has_tag_is_exact_match() {
        let item = ImageItem {
            tags: vec!["red".into(), "blue".into()],
            ..ImageItem::default()
        };
        assert!(item.has_tag("red"));
        assert!(!item.has_tag("Red"));
        assert!(!item.has_tag("re"));
    }

    #[test]
    fn relative_asset_is_resolved_against_base() {
        let asset = ImageAsset::new("photos/a.jpg").resolved_against(Path::new("/gallery"));
        assert_eq!(asset.path(), Path::new("/gallery/photos/a.jpg"));
    }

    #[test]
    fn absolute_asset_is_not_rebased() {
        let absolute = std::env::temp_dir().join("a.jpg");
        let asset = ImageAsset::new(&absolute).resolved_against(Path::new("/gallery"));
        assert_eq!(asset.path(), absolute.as_path());
    }
}
