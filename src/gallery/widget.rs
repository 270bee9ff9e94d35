// SPDX-License-Identifier: MPL-2.0
//! Gallery widget configuration and manifest loading.
//!
//! A manifest is a TOML document listing the gallery's images in display
//! order. Relative image paths are resolved against the manifest's directory
//! at load time so the rest of the crate only deals with usable paths.

use super::item::ImageItem;
use super::validity::ImageValidator;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Read-only configuration handed to the gallery container by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GalleryWidget {
    pub title: Option<String>,
    pub images: Vec<ImageItem>,
    pub show_tags: bool,
}

impl GalleryWidget {
    /// Parses a manifest document. Relative image paths are resolved against
    /// `base_dir`.
    pub fn from_toml(content: &str, base_dir: &Path) -> Result<Self> {
        let mut widget: GalleryWidget =
            toml::from_str(content).map_err(|e| Error::Manifest(e.to_string()))?;

        for item in &mut widget.images {
            item.image = item
                .image
                .take()
                .map(|asset| asset.resolved_against(base_dir));
        }

        Ok(widget)
    }

    /// Items whose asset is present and accepted by `validator`, in manifest
    /// order.
    #[must_use]
    pub fn visible_images(&self, validator: &impl ImageValidator) -> Vec<ImageItem> {
        self.images
            .iter()
            .filter(|item| match &item.image {
                Some(asset) if validator.is_image(asset) => true,
                Some(asset) => {
                    tracing::debug!(asset = %asset.path().display(), "discarding non-image asset");
                    false
                }
                None => {
                    tracing::debug!(title = %item.title, "discarding item without image");
                    false
                }
            })
            .cloned()
            .collect()
    }
}

/// Loads a manifest file on the async executor.
///
/// Takes an owned path so it can be used directly with `Task::perform`.
pub async fn load_manifest(path: PathBuf) -> Result<GalleryWidget> {
    let content = tokio::fs::read_to_string(&path).await?;
    let widget = GalleryWidget::from_toml(&content, manifest_dir(&path))?;
    tracing::info!(
        path = %path.display(),
        items = widget.images.len(),
        "gallery manifest loaded"
    );
    Ok(widget)
}

fn manifest_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new(""))
}
