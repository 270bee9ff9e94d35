// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Default height of a grid thumbnail, in logical pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: f32 = 180.0;

/// Minimum allowed thumbnail height.
pub const MIN_THUMBNAIL_HEIGHT: f32 = 80.0;

/// Maximum allowed thumbnail height.
pub const MAX_THUMBNAIL_HEIGHT: f32 = 480.0;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Whether a press on the dimmed backdrop dismisses the lightbox.
pub const DEFAULT_CLOSE_ON_BACKDROP: bool = true;

/// Whether the lightbox shows its row of paging thumbnails.
pub const DEFAULT_SHOW_PAGING: bool = true;

const _: () = {
    assert!(MIN_THUMBNAIL_HEIGHT > 0.0);
    assert!(MIN_THUMBNAIL_HEIGHT <= DEFAULT_THUMBNAIL_HEIGHT);
    assert!(DEFAULT_THUMBNAIL_HEIGHT <= MAX_THUMBNAIL_HEIGHT);
};
