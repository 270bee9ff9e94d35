// SPDX-License-Identifier: MPL-2.0
use std::path::Path;
use thumbnail_gallery::config::{self, Config, GeneralConfig};
use thumbnail_gallery::gallery::{load_manifest, FormatValidator, GalleryWidget, TagFilter};
use thumbnail_gallery::i18n::fluent::I18n;
use thumbnail_gallery::ui::gallery::{Layout, Message, State};
use tempfile::tempdir;

const COLORS_MANIFEST: &str = r#"
title = "Colors"
show_tags = true

[[images]]
image = "red.jpg"
title = "Red"
subtitle = "Warm"
tags = ["red"]

[[images]]
image = "blue.png"
title = "Blue"
subtitle = "Cold"
tags = ["blue"]

[[images]]
image = "readme.txt"
title = "Not an image"
tags = ["green"]

[[images]]
image = "purple.webp"
title = "Purple"
tags = ["red", "blue"]
"#;

fn colors() -> State {
    let widget = GalleryWidget::from_toml(COLORS_MANIFEST, Path::new("/gallery"))
        .expect("valid manifest");
    State::new(widget, &FormatValidator)
}

#[test]
fn manifest_tags_are_sorted_union_of_valid_images() {
    let state = colors();

    let titles: Vec<_> = state
        .visible_images()
        .iter()
        .map(|item| item.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Red", "Blue", "Purple"]);
    assert_eq!(state.tags(), ["blue", "red"]);
    assert_eq!(
        state.layout(),
        Layout::Gallery {
            tag_bar: true,
            lightbox: false
        }
    );
}

#[test]
fn selecting_red_squeezes_only_the_blue_image() {
    let mut state = colors();
    state.handle_message(Message::SelectTag(TagFilter::tag("red")));

    let squeezed: Vec<bool> = (0..state.visible_images().len())
        .map(|index| state.is_squeezed(index))
        .collect();
    assert_eq!(squeezed, vec![false, true, false]);
}

#[test]
fn lightbox_round_trip_resets_index() {
    let mut state = colors();

    state.handle_message(Message::OpenLightbox(1));
    assert_eq!(state.deck().current(), 1);
    assert_eq!(state.visible_images()[state.deck().current()].caption(), "Blue - Cold");

    state.handle_message(Message::NextSlide);
    state.handle_message(Message::NextSlide);
    assert_eq!(state.visible_images()[state.deck().current()].caption(), "Red - Warm");

    state.handle_message(Message::CloseLightbox);
    assert!(!state.is_lightbox_open());
    assert_eq!(state.current_image_index(), 0);
}

#[test]
fn caption_without_subtitle_keeps_separator() {
    let state = colors();
    assert_eq!(state.visible_images()[2].caption(), "Purple - ");
}

#[test]
fn manifest_without_valid_image_shows_placeholder() {
    let widget = GalleryWidget::from_toml(
        "show_tags = true\n[[images]]\ntitle = \"Draft\"\ntags = [\"x\"]\n",
        Path::new(""),
    )
    .expect("valid manifest");
    let state = State::new(widget, &FormatValidator);

    assert_eq!(state.layout(), Layout::Placeholder);
    assert!(state.tags().is_empty());
}

#[tokio::test]
async fn manifest_file_resolves_images_next_to_it() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let manifest_path = dir.path().join("gallery.toml");
    std::fs::write(&manifest_path, COLORS_MANIFEST).expect("Failed to write manifest");

    let widget = load_manifest(manifest_path)
        .await
        .expect("manifest should load");
    let first = widget.images[0].image.as_ref().expect("first item has an image");
    assert_eq!(first.path(), dir.path().join("red.jpg"));
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    let i18n_en = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(
        i18n_en.tr("gallery-placeholder"),
        "Select images in the widget properties."
    );
}
