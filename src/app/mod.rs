// SPDX-License-Identifier: MPL-2.0
//! Application root: wires configuration, localization, manifest loading and
//! the gallery component into the iced runtime.
//!
//! The gallery only ever sees a read-only [`GalleryWidget`]; everything that
//! can fail (reading settings, reading or parsing a manifest) happens here and
//! is reported through logs and a dismissible banner.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::Error;
use crate::gallery::{load_manifest, FormatValidator, GalleryWidget};
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::{Path, PathBuf};

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

/// Extension of the files accepted as gallery manifests.
pub const MANIFEST_EXTENSION: &str = "toml";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    gallery: gallery::State,
    /// Manifest currently displayed.
    manifest_path: Option<PathBuf>,
    /// Most recently requested manifest; results for any other path are stale.
    pending_manifest: Option<PathBuf>,
    /// i18n key of the message shown in the error banner.
    banner: Option<String>,
    /// Resolved once at startup; `System` queries the desktop.
    theme: Theme,
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            gallery: gallery::State::default(),
            manifest_path: None,
            pending_manifest: None,
            banner: None,
            theme: Theme::Dark,
        }
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and localization, then starts loading the manifest
    /// passed on the command line, if any.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let theme = config.general.theme_mode.to_theme();

        let mut app = App {
            i18n,
            config,
            banner: config_warning,
            theme,
            ..Self::default()
        };

        let task = match flags.manifest_path {
            Some(path) => app.request_manifest(PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.gallery.gallery().title.as_deref() {
            Some(title) if !title.is_empty() => format!("{title} - {app_name}"),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let events = subscription::create_event_subscription();

        if self.gallery.is_lightbox_open() {
            Subscription::batch([events, subscription::create_lightbox_subscription()])
        } else {
            events
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => {
                self.gallery.handle_message(message);
                Task::none()
            }
            Message::ManifestLoaded { path, result } => {
                self.on_manifest_loaded(path, result);
                Task::none()
            }
            Message::OpenManifestDialog => {
                let title = self.i18n.tr("manifest-open-dialog-title");
                let filter = self.i18n.tr("manifest-open-filter");
                Task::perform(pick_manifest(title, filter), Message::ManifestPicked)
            }
            Message::ManifestPicked(Some(path)) => self.request_manifest(path),
            Message::ManifestPicked(None) => Task::none(),
            Message::FileDropped(path) => {
                if is_manifest_path(&path) {
                    self.request_manifest(path)
                } else {
                    tracing::debug!(path = %path.display(), "ignoring dropped file");
                    Task::none()
                }
            }
            Message::DismissBanner => {
                self.banner = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            config: &self.config,
            gallery: &self.gallery,
            banner: self.banner.as_deref(),
        })
    }

    fn request_manifest(&mut self, path: PathBuf) -> Task<Message> {
        tracing::info!(path = %path.display(), "loading gallery manifest");
        self.pending_manifest = Some(path.clone());
        let task_path = path.clone();
        Task::perform(load_manifest(task_path), move |result| {
            Message::ManifestLoaded {
                path: path.clone(),
                result,
            }
        })
    }

    /// Applies the result of the latest request only. A failed load keeps the
    /// gallery currently on screen.
    fn on_manifest_loaded(&mut self, path: PathBuf, result: Result<GalleryWidget, Error>) {
        if self.pending_manifest.as_deref() != Some(path.as_path()) {
            tracing::debug!(path = %path.display(), "dropping stale manifest load");
            return;
        }
        self.pending_manifest = None;

        match result {
            Ok(widget) => {
                self.gallery.set_gallery(widget, &FormatValidator);
                self.manifest_path = Some(path);
                self.banner = None;
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to load gallery manifest");
                self.banner = Some(err.i18n_key().to_string());
            }
        }
    }

    pub fn manifest_path(&self) -> Option<&Path> {
        self.manifest_path.as_deref()
    }
}

async fn pick_manifest(title: String, filter: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title(title)
        .add_filter(filter, &[MANIFEST_EXTENSION])
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

fn is_manifest_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(MANIFEST_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{ImageAsset, ImageItem};

    fn english_app() -> App {
        App {
            i18n: I18n::new(Some("en-US".to_string()), &Config::default()),
            ..App::default()
        }
    }

    fn load(app: &mut App, path: &str, result: Result<GalleryWidget, Error>) {
        let _ = app.request_manifest(PathBuf::from(path));
        app.on_manifest_loaded(PathBuf::from(path), result);
    }

    fn widget(title: Option<&str>) -> GalleryWidget {
        GalleryWidget {
            title: title.map(str::to_string),
            images: vec![ImageItem {
                image: Some(ImageAsset::new("/g/a.png")),
                title: "A".to_string(),
                ..ImageItem::default()
            }],
            show_tags: false,
        }
    }

    #[test]
    fn title_is_app_name_without_gallery() {
        let app = english_app();
        assert_eq!(app.title(), "Thumbnail Gallery");
    }

    #[test]
    fn title_includes_gallery_title() {
        let mut app = english_app();
        load(&mut app, "/g/gallery.toml", Ok(widget(Some("Trip"))));
        assert_eq!(app.title(), "Trip - Thumbnail Gallery");
    }

    #[test]
    fn loaded_manifest_replaces_gallery() {
        let mut app = english_app();
        load(&mut app, "/g/gallery.toml", Ok(widget(None)));

        assert_eq!(app.gallery.visible_images().len(), 1);
        assert_eq!(app.manifest_path(), Some(Path::new("/g/gallery.toml")));
        assert!(app.banner.is_none());
    }

    #[test]
    fn failed_load_keeps_previous_gallery_and_shows_banner() {
        let mut app = english_app();
        load(&mut app, "/g/gallery.toml", Ok(widget(None)));
        load(
            &mut app,
            "/g/broken.toml",
            Err(Error::Manifest("bad".to_string())),
        );

        assert_eq!(app.gallery.visible_images().len(), 1);
        assert_eq!(app.manifest_path(), Some(Path::new("/g/gallery.toml")));
        assert_eq!(app.banner.as_deref(), Some("error-manifest-invalid"));
    }

    #[test]
    fn late_result_of_earlier_request_is_dropped() {
        let mut app = english_app();
        let _ = app.request_manifest(PathBuf::from("/g/a.toml"));
        let _ = app.request_manifest(PathBuf::from("/g/b.toml"));

        app.on_manifest_loaded(PathBuf::from("/g/b.toml"), Ok(widget(Some("B"))));
        app.on_manifest_loaded(PathBuf::from("/g/a.toml"), Ok(widget(Some("A"))));

        assert_eq!(app.manifest_path(), Some(Path::new("/g/b.toml")));
        assert_eq!(app.title(), "B - Thumbnail Gallery");
    }

    #[test]
    fn late_failure_of_earlier_request_raises_no_banner() {
        let mut app = english_app();
        let _ = app.request_manifest(PathBuf::from("/g/a.toml"));
        let _ = app.request_manifest(PathBuf::from("/g/b.toml"));

        app.on_manifest_loaded(PathBuf::from("/g/b.toml"), Ok(widget(Some("B"))));
        app.on_manifest_loaded(
            PathBuf::from("/g/a.toml"),
            Err(Error::Io("missing".to_string())),
        );

        assert!(app.banner.is_none());
        assert_eq!(app.manifest_path(), Some(Path::new("/g/b.toml")));
    }

    #[test]
    fn dismissing_banner_clears_it() {
        let mut app = english_app();
        app.banner = Some("error-manifest-io".to_string());
        let _ = app.update(Message::DismissBanner);
        assert!(app.banner.is_none());
    }

    #[test]
    fn gallery_messages_reach_component() {
        let mut app = english_app();
        load(&mut app, "/g/gallery.toml", Ok(widget(None)));
        let _ = app.update(Message::Gallery(gallery::Message::OpenLightbox(0)));
        assert!(app.gallery.is_lightbox_open());
    }

    #[test]
    fn only_toml_files_are_manifests() {
        assert!(is_manifest_path(Path::new("gallery.toml")));
        assert!(is_manifest_path(Path::new("GALLERY.TOML")));
        assert!(!is_manifest_path(Path::new("photo.jpg")));
        assert!(!is_manifest_path(Path::new("gallery")));
    }

    #[test]
    fn dropped_non_manifest_is_ignored() {
        let mut app = english_app();
        let _ = app.update(Message::FileDropped(PathBuf::from("/g/photo.jpg")));
        assert!(app.manifest_path().is_none());
    }
}
