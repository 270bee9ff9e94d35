// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and window events are mapped to application messages.
//! Lightbox keys are only listened to while the lightbox is open.

use super::Message;
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, Subscription};

/// Shortcuts and file drops, active on every state.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            shortcut(&key, modifiers)
        }
        _ => None,
    })
}

/// Carousel navigation and dismissal keys.
pub fn create_lightbox_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            lightbox_key(&key).map(Message::Gallery)
        }
        _ => None,
    })
}

fn shortcut(key: &Key, modifiers: Modifiers) -> Option<Message> {
    match key.as_ref() {
        Key::Character(c) if modifiers.command() && c.eq_ignore_ascii_case("o") => {
            Some(Message::OpenManifestDialog)
        }
        _ => None,
    }
}

/// Maps a key press to a lightbox action.
pub fn lightbox_key(key: &Key) -> Option<gallery::Message> {
    match key {
        Key::Named(Named::Escape) => Some(gallery::Message::CloseLightbox),
        Key::Named(Named::ArrowLeft) => Some(gallery::Message::PreviousSlide),
        Key::Named(Named::ArrowRight) => Some(gallery::Message::NextSlide),
        _ => None,
    }
}
