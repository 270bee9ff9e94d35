// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Views follow the Elm-style "state down, messages up" pattern: components
//! expose a `Message` enum, a `State` with `handle_message`, and `view`
//! functions taking a `ViewContext` of borrowed data.
//!
//! - [`gallery`] - Tag filter bar, thumbnail grid and lightbox
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icons

pub mod design_tokens;
pub mod gallery;
pub mod icons;
pub mod styles;
pub mod theming;
