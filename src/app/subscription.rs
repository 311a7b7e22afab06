// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::media_viewer::Viewer;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Window sizing and the Escape key.
///
/// Escape is routed even when a focused text input captured it, so it
/// cancels the password form in one press.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Periodic tick used to expire toasts; idle when none are shown.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Video playback for the open viewer, if it plays one.
pub fn create_viewer_subscription(viewer: Option<&Viewer>) -> Subscription<Message> {
    viewer.map_or_else(Subscription::none, |viewer| {
        viewer.subscription().map(Message::Viewer)
    })
}
