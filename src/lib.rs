// SPDX-License-Identifier: MPL-2.0
//! `thumbnail_gallery` is a thumbnail gallery with tag filtering and a
//! lightbox slideshow, built with the Iced GUI framework.
//!
//! A gallery is described by a TOML manifest listing images with a title,
//! subtitle, tags and alternative text. The [`gallery`] module holds the
//! framework-independent model (validity, tags, slide deck); [`ui::gallery`]
//! renders it.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
