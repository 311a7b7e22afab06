// SPDX-License-Identifier: MPL-2.0
//! Update logic and effect routing for the application.
//!
//! Components return effects; this module turns them into navigation,
//! background tasks and toasts.

use super::{grid_size, App, Message, Screen};
use crate::ui::gallery::{self, Effect as GalleryEffect};
use crate::ui::media_viewer::{self, Effect as ViewerEffect, PhotoViewer, Viewer, VideoViewer};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{Notification, Severity};
use crate::ui::password::{self, Effect as PasswordEffect, PasswordForm};
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(message) => {
            let (effect, task) = app.gallery.handle_message(message);
            let task = task.map(Message::Gallery);
            Task::batch([task, handle_gallery_effect(app, effect)])
        }
        Message::Viewer(message) => handle_viewer_message(app, message),
        Message::Password(message) => handle_password_message(app, message),
        Message::Navbar(message) => match navbar::update(message) {
            NavbarEvent::OpenPassword => app.open_password(),
            NavbarEvent::Reload => app.gallery.load().map(Message::Gallery),
        },
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::Tick(now) => {
            app.notifications.tick(now);
            Task::none()
        }
        Message::WindowResized(size) => {
            let (_, task) = app
                .gallery
                .handle_message(gallery::Message::Resized(grid_size(size)));
            task.map(Message::Gallery)
        }
        Message::EscapePressed => {
            if app.viewer.is_some() {
                app.close_viewer();
                Task::none()
            } else if app.password.is_some() {
                handle_password_message(app, password::Message::Cancel)
            } else {
                Task::none()
            }
        }
    }
}

fn handle_gallery_effect(app: &mut App, effect: GalleryEffect) -> Task<Message> {
    match effect {
        GalleryEffect::None => Task::none(),
        GalleryEffect::OpenPhoto {
            chat_id,
            message_id,
            path,
            created_at,
        } => {
            app.close_viewer();
            tracing::debug!(message = %message_id, "opening photo viewer");
            let (viewer, task) = PhotoViewer::open(
                chat_id,
                message_id,
                path,
                created_at,
                app.services.decoder.clone(),
            );
            app.viewer = Some(Viewer::Photo(viewer));
            app.screen = Screen::Viewer;
            task.map(|message| Message::Viewer(media_viewer::Message::Photo(message)))
        }
        GalleryEffect::OpenVideo { message_id, path } => {
            app.close_viewer();
            tracing::debug!(message = %message_id, "opening video player");
            app.viewer = Some(Viewer::Video(VideoViewer::open(message_id, path)));
            app.screen = Screen::Viewer;
            Task::none()
        }
    }
}

fn handle_viewer_message(app: &mut App, message: media_viewer::Message) -> Task<Message> {
    let Some(viewer) = app.viewer.as_mut() else {
        tracing::debug!("viewer message without an open viewer dropped");
        return Task::none();
    };
    match viewer.handle_message(message) {
        ViewerEffect::None => {}
        ViewerEffect::Close => app.close_viewer(),
    }
    Task::none()
}

fn handle_password_message(app: &mut App, message: password::Message) -> Task<Message> {
    let Some(form) = app.password.as_mut() else {
        tracing::debug!("password message without an open form dropped");
        return Task::none();
    };
    let (effect, task) = form.handle_message(message);
    let task = task.map(Message::Password);

    let follow_up = match effect {
        PasswordEffect::None => Task::none(),
        PasswordEffect::Remote(call) => {
            Task::perform(password::perform(call, app.auth.clone()), Message::Password)
        }
        PasswordEffect::Invalid(err) => {
            app.notifications.push(Notification::error(err.i18n_key()));
            Task::none()
        }
        PasswordEffect::RemoteFailed(err) => {
            let notification = match err.service_message() {
                Some(text) => Notification::literal(Severity::Error, text),
                None => Notification::error(err.i18n_key()),
            };
            app.notifications.push(notification);
            Task::none()
        }
        PasswordEffect::Completed => {
            app.notifications
                .push(Notification::success("notification-password-changed"));
            app.close_password();
            Task::none()
        }
        PasswordEffect::Cancelled => {
            app.close_password();
            Task::none()
        }
    };
    Task::batch([task, follow_up])
}

impl App {
    /// Shows the Change Password form, keeping an already open one.
    pub(super) fn open_password(&mut self) -> Task<Message> {
        if self.viewer.is_some() {
            self.close_viewer();
        }
        self.screen = Screen::Password;
        if self.password.is_some() {
            return Task::none();
        }
        let (form, task) = PasswordForm::open();
        tracing::debug!(session = form.session(), "password form opened");
        self.password = Some(form);
        task.map(Message::Password)
    }

    fn close_password(&mut self) {
        self.password = None;
        self.screen = Screen::Gallery;
    }

    fn close_viewer(&mut self) {
        if let Some(mut viewer) = self.viewer.take() {
            viewer.close();
        }
        self.screen = if self.password.is_some() {
            Screen::Password
        } else {
            Screen::Gallery
        };
    }
}
