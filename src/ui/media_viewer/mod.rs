// SPDX-License-Identifier: MPL-2.0
//! Full-screen viewers opened from the gallery.
//!
//! Both close on Escape or the Close button; decode and playback failures
//! are shown inside the viewer instead of as toasts.

pub mod photo;
pub mod video;

pub use photo::PhotoViewer;
pub use video::VideoViewer;

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length, Subscription};

#[derive(Debug, Clone)]
pub enum Message {
    Photo(photo::Message),
    Video(video::Message),
    Close,
}

/// Side effects the application should perform after a viewer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Close,
}

#[derive(Debug)]
pub enum Viewer {
    Photo(PhotoViewer),
    Video(VideoViewer),
}

impl Viewer {
    pub fn handle_message(&mut self, message: Message) -> Effect {
        match (self, message) {
            (_, Message::Close) => Effect::Close,
            (Viewer::Photo(viewer), Message::Photo(message)) => {
                viewer.handle_message(message);
                Effect::None
            }
            (Viewer::Video(viewer), Message::Video(message)) => {
                viewer.handle_message(message);
                Effect::None
            }
            // Left over from a viewer that was replaced.
            _ => Effect::None,
        }
    }

    /// Releases playback resources before the viewer is dropped.
    pub fn close(&mut self) {
        if let Viewer::Video(viewer) = self {
            viewer.close();
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match self {
            Viewer::Photo(_) => Subscription::none(),
            Viewer::Video(viewer) => viewer.subscription().map(Message::Video),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let (media, caption, controls) = match self {
            Viewer::Photo(viewer) => (
                photo_content(viewer, i18n),
                viewer.caption(i18n),
                None,
            ),
            Viewer::Video(viewer) => (
                video_content(viewer, i18n),
                None,
                Some(video_controls(viewer, i18n)),
            ),
        };

        let close = button(Text::new(i18n.tr("viewer-close")).size(typography::BODY))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::overlay)
            .on_press(Message::Close);

        let mut top_bar = Row::new()
            .spacing(spacing::SM)
            .padding(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(close)
            .push(Space::new().width(Length::Fill));
        if let Some(caption) = caption {
            top_bar = top_bar.push(
                Text::new(caption)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_200),
            );
        }

        let mut overlay = Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(top_bar)
            .push(Space::new().height(Length::Fill));
        if let Some(controls) = controls {
            overlay = overlay.push(controls);
        }

        Container::new(Stack::new().push(media).push(overlay))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::media_backdrop)
            .into()
    }
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn status_text<'a>(text: String) -> Element<'a, Message> {
    centered(Text::new(text).size(typography::BODY).color(palette::GRAY_200))
}

fn fitted<'a>(handle: &image::Handle) -> Element<'a, Message> {
    centered(
        image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain),
    )
}

fn photo_content<'a>(viewer: &'a PhotoViewer, i18n: &'a I18n) -> Element<'a, Message> {
    match viewer.content() {
        photo::Content::Loading => status_text(i18n.tr("viewer-loading")),
        photo::Content::Ready(handle) => fitted(handle),
        photo::Content::Failed(err) => status_text(i18n.tr(err.i18n_key())),
    }
}

fn video_content<'a>(viewer: &'a VideoViewer, i18n: &'a I18n) -> Element<'a, Message> {
    let player = viewer.player();
    if let Some(message) = player.state().error_message() {
        return status_text(format!("{}\n{message}", i18n.tr("viewer-video-error")));
    }
    match player.frame() {
        Some(handle) => fitted(handle),
        None => status_text(i18n.tr("viewer-loading")),
    }
}

fn video_controls<'a>(viewer: &'a VideoViewer, i18n: &'a I18n) -> Element<'a, Message> {
    let state = viewer.player().state();
    let label = if state.is_playing() {
        i18n.tr("video-pause")
    } else {
        i18n.tr("video-play")
    };
    let toggle = button(Text::new(label).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::overlay)
        .on_press_maybe(
            state
                .error_message()
                .is_none()
                .then_some(Message::Video(video::Message::TogglePlayback)),
        );

    Container::new(toggle)
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .into()
}
