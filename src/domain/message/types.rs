// SPDX-License-Identifier: MPL-2.0
//! Core message types for the domain layer.

use crate::domain::media::MediaKind;
use std::fmt;

/// Identifier of a single message in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(String);

impl MessageId {
    /// Creates a new message identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a chat (conversation) in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChatId(String);

impl ChatId {
    /// Creates a new chat identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of content carried by a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Photo,
    Video,
    /// Text, audio, location, stickers and anything else the gallery ignores.
    Other,
}

impl MessageKind {
    /// Parses the type tag used by the message store.
    ///
    /// Unknown tags map to [`MessageKind::Other`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("photo") {
            MessageKind::Photo
        } else if tag.eq_ignore_ascii_case("video") {
            MessageKind::Video
        } else {
            MessageKind::Other
        }
    }

    /// Returns the type tag used by the message store.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            MessageKind::Photo => "photo",
            MessageKind::Video => "video",
            MessageKind::Other => "other",
        }
    }

    /// Returns the media kind to resolve for this message, if any.
    #[must_use]
    pub fn media_kind(self) -> Option<MediaKind> {
        match self {
            MessageKind::Photo => Some(MediaKind::Photo),
            MessageKind::Video => Some(MediaKind::Video),
            MessageKind::Other => None,
        }
    }
}

/// A persisted chat message as seen by the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    pub id: MessageId,
    pub chat_id: ChatId,
    pub kind: MessageKind,
    /// Soft-delete flag. Deleted messages stay in the store but are never shown.
    pub is_deleted: bool,
    /// Creation time in Unix milliseconds.
    pub created_at: i64,
}

impl MessageRecord {
    /// Creates a live (non-deleted) message record.
    #[must_use]
    pub fn new(id: MessageId, chat_id: ChatId, kind: MessageKind, created_at: i64) -> Self {
        Self {
            id,
            chat_id,
            kind,
            is_deleted: false,
            created_at,
        }
    }
}
