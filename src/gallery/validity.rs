// SPDX-License-Identifier: MPL-2.0
//! Image validity predicate.
//!
//! The gallery does not decode anything itself: it only asks an
//! [`ImageValidator`] whether an asset is something the image pipeline can
//! render. Items failing the check are dropped from the visible list instead of
//! producing an error.

use super::item::ImageAsset;
use image_rs::ImageFormat;

/// Decides whether an asset is a renderable image.
pub trait ImageValidator {
    fn is_image(&self, asset: &ImageAsset) -> bool;
}

/// Recognises raster formats known to the `image` crate, plus SVG.
///
/// Detection is based on the file extension only (case-insensitive).
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatValidator;

impl ImageValidator for FormatValidator {
    fn is_image(&self, asset: &ImageAsset) -> bool {
        let path = asset.path();
        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

        is_svg || ImageFormat::from_path(path).is_ok_and(|format| format.reading_enabled())
    }
}

impl<F> ImageValidator for F
where
    F: Fn(&ImageAsset) -> bool,
{
    fn is_image(&self, asset: &ImageAsset) -> bool {
        self(asset)
    }
}
