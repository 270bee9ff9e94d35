// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::GalleryWidget;
use crate::ui::gallery;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    /// Result of an asynchronous manifest load.
    ManifestLoaded {
        path: PathBuf,
        result: Result<GalleryWidget, Error>,
    },
    /// Open the native file dialog to pick another manifest.
    OpenManifestDialog,
    /// Result from the open manifest dialog.
    ManifestPicked(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    DismissBanner,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `THUMBNAIL_GALLERY_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Gallery manifest to load on startup.
    pub manifest_path: Option<String>,
}
