// SPDX-License-Identifier: MPL-2.0
//! Gallery content model and the UI-independent rules applied to it.
//!
//! - [`item`]: image items and caption formatting
//! - [`widget`]: the gallery configuration and manifest loading
//! - [`validity`]: the image validity predicate
//! - [`tags`]: tag union and advisory filtering
//! - [`deck`]: circular slide position for the lightbox

pub mod deck;
pub mod item;
pub mod tags;
pub mod validity;
pub mod widget;

pub use deck::SlideDeck;
pub use item::{ImageAsset, ImageItem, CAPTION_SEPARATOR};
pub use tags::{all_tags, TagFilter};
pub use validity::{FormatValidator, ImageValidator};
pub use widget::{load_manifest, GalleryWidget};
