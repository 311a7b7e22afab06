// SPDX-License-Identifier: MPL-2.0
//! Full-screen photo viewer.

use crate::application::port::ImageDecoder;
use crate::domain::error::MediaError;
use crate::domain::media::RawImage;
use crate::domain::message::{ChatId, MessageId};
use crate::i18n::fluent::I18n;
use crate::media::image::to_handle;
use chrono::{DateTime, Local};
use iced::widget::image;
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        message_id: MessageId,
        result: Result<RawImage, MediaError>,
    },
}

#[derive(Debug, Clone)]
pub enum Content {
    Loading,
    Ready(image::Handle),
    Failed(MediaError),
}

/// The photo of one message, decoded at full size in the background.
#[derive(Debug)]
pub struct PhotoViewer {
    pub chat_id: ChatId,
    pub message_id: MessageId,
    created_at: i64,
    content: Content,
}

impl PhotoViewer {
    pub fn open(
        chat_id: ChatId,
        message_id: MessageId,
        path: PathBuf,
        created_at: i64,
        decoder: Arc<dyn ImageDecoder>,
    ) -> (Self, Task<Message>) {
        let viewer = Self {
            chat_id,
            message_id,
            created_at,
            content: Content::Loading,
        };
        let message_id = viewer.message_id.clone();
        let task = Task::perform(
            async move {
                tokio::task::spawn_blocking(move || decoder.decode(&path))
                    .await
                    .map_err(|e| MediaError::DecodingFailed(e.to_string()))?
            },
            move |result| Message::Loaded { message_id, result },
        );
        (viewer, task)
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn handle_message(&mut self, message: Message) {
        let Message::Loaded { message_id, result } = message;
        if message_id != self.message_id {
            tracing::debug!(message = %message_id, "photo for a closed viewer dropped");
            return;
        }
        match result {
            Ok(raw) => self.content = Content::Ready(to_handle(raw)),
            Err(err) => {
                tracing::warn!(message = %self.message_id, error = %err, "photo decode failed");
                self.content = Content::Failed(err);
            }
        }
    }

    /// "Sent <date>" caption in local time.
    pub fn caption(&self, i18n: &I18n) -> Option<String> {
        format_sent_date(self.created_at)
            .map(|date| i18n.tr_with_args("viewer-sent-on", &[("date", date.as_str())]))
    }
}

/// Formats a Unix millisecond timestamp as a local date and time.
pub fn format_sent_date(created_at_ms: i64) -> Option<String> {
    let utc = DateTime::from_timestamp_millis(created_at_ms)?;
    Some(utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer(created_at: i64) -> PhotoViewer {
        PhotoViewer {
            chat_id: ChatId::new("c"),
            message_id: MessageId::new("m"),
            created_at,
            content: Content::Loading,
        }
    }

    fn loaded(id: &str, result: Result<RawImage, MediaError>) -> Message {
        Message::Loaded {
            message_id: MessageId::new(id),
            result,
        }
    }

    #[test]
    fn loaded_photo_becomes_ready() {
        let mut viewer = viewer(0);
        viewer.handle_message(loaded("m", RawImage::from_rgba(1, 1, vec![0; 4])));
        assert!(matches!(viewer.content(), Content::Ready(_)));
    }

    #[test]
    fn decode_error_is_kept_for_display() {
        let mut viewer = viewer(0);
        viewer.handle_message(loaded("m", Err(MediaError::NoFrame)));
        assert!(matches!(viewer.content(), Content::Failed(MediaError::NoFrame)));
    }

    #[test]
    fn result_for_another_photo_is_ignored() {
        let mut viewer = viewer(0);
        viewer.handle_message(loaded("other", RawImage::from_rgba(1, 1, vec![0; 4])));
        assert!(matches!(viewer.content(), Content::Loading));
    }

    #[test]
    fn sent_date_has_minute_precision() {
        let formatted = format_sent_date(1_700_000_000_000).unwrap();
        assert_eq!(formatted.len(), "2023-11-14 22:13".len());
        assert!(formatted.starts_with("2023-11-1"));
    }

    #[test]
    fn caption_uses_localized_template() {
        let viewer = viewer(1_700_000_000_000);
        let caption = viewer.caption(&I18n::default()).unwrap();
        assert!(caption.starts_with("Sent 2023-11-1"));
    }
}
