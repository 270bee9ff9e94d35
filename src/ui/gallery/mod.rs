// SPDX-License-Identifier: MPL-2.0
//! Thumbnail gallery views: tag filter bar, thumbnail grid and lightbox.

pub mod component;
pub mod lightbox;
pub mod placeholder;
pub mod tag_list;
pub mod thumbnail;

pub use component::{columns_for_width, Layout, Message, State, ViewContext};
