// SPDX-License-Identifier: MPL-2.0
//! Vector icons used by the gallery.
//!
//! Icons are inline SVG documents; handles are created once and cached with
//! `OnceLock`. The fill color is applied at render time through the svg style
//! so the same icon works on light and dark surfaces.

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function returning an `Svg` with a cached handle.
macro_rules! define_icon {
    ($name:ident, $source:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($source.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

const CLOSE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill-rule="evenodd" d="M23.25 24c-.19 0-.38-.07-.53-.22L12 13.06 1.28 23.78c-.29.29-.77.29-1.06 0s-.29-.77 0-1.06L10.94 12 .22 1.28C-.07.99-.07.51.22.22s.77-.29 1.06 0L12 10.94 22.72.22c.29-.29.77-.29 1.06 0s.29.77 0 1.06L13.06 12l10.72 10.72c.29.29.29.77 0 1.06-.15.15-.34.22-.53.22"/></svg>"#;

const CHEVRON_RIGHT_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 18 18"><path fill-rule="evenodd" d="M4.29 1.71A1 1 0 1 1 5.71.3l8 8a1 1 0 0 1 0 1.41l-8 8a1 1 0 1 1-1.42-1.41l7.29-7.29z"/></svg>"#;

const CHEVRON_LEFT_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 18 18"><path fill-rule="evenodd" d="M13.7 16.29a1 1 0 1 1-1.42 1.41l-8-8a1 1 0 0 1 0-1.41l8-8A1 1 0 1 1 13.7 1.7L6.41 8.99z"/></svg>"#;

const CAMERA_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M9 3 7.17 5H4a2 2 0 0 0-2 2v12a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V7a2 2 0 0 0-2-2h-3.17L15 3H9zm3 15a5 5 0 1 1 0-10 5 5 0 0 1 0 10zm0-2a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"/></svg>"#;

define_icon!(close, CLOSE_SVG, "Close icon: thin diagonal cross.");
define_icon!(
    chevron_right,
    CHEVRON_RIGHT_SVG,
    "Chevron pointing right: next slide."
);
define_icon!(
    chevron_left,
    CHEVRON_LEFT_SVG,
    "Chevron pointing left: previous slide."
);
define_icon!(camera, CAMERA_SVG, "Camera icon: thumbnail affordance.");

/// Sizes an icon to a square of `size` logical pixels.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Sizes and tints an icon.
pub fn tinted(icon: Svg<'_>, size: f32, color: Color) -> Svg<'_> {
    sized(icon, size).style(move |_theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(color),
    })
}
