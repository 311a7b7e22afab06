// SPDX-License-Identifier: MPL-2.0
//! Gallery item list for one chat.
//!
//! The list is a snapshot: it is rebuilt wholesale on each load and never
//! patched in place.

use crate::application::port::{MediaResolver, MessageStore};
use crate::domain::media::MediaKind;
use crate::domain::message::{ChatId, MessageId, MessageRecord};
use std::path::PathBuf;

/// A photo or video message whose media was present at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub message_id: MessageId,
    pub chat_id: ChatId,
    pub kind: MediaKind,
    /// Creation time in Unix milliseconds.
    pub created_at: i64,
    /// Path resolved while loading. Selection re-resolves before use.
    pub path: PathBuf,
}

impl GalleryItem {
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// Builds the gallery list for `chat`.
///
/// Keeps photo and video messages whose media resolves, in store order
/// (creation time ascending). Everything else is dropped silently. A store
/// failure is logged and yields an empty list.
pub fn load_gallery(
    store: &dyn MessageStore,
    resolver: &dyn MediaResolver,
    chat: &ChatId,
) -> Vec<GalleryItem> {
    let records = match store.messages_for_chat(chat) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(chat = %chat, error = %err, "gallery load failed");
            return Vec::new();
        }
    };

    let total = records.len();
    let items: Vec<GalleryItem> = records
        .into_iter()
        .filter_map(|record| to_item(record, resolver))
        .collect();

    tracing::info!(chat = %chat, messages = total, items = items.len(), "gallery loaded");
    items
}

fn to_item(record: MessageRecord, resolver: &dyn MediaResolver) -> Option<GalleryItem> {
    // The store already filters deleted rows; a test double might not.
    if record.is_deleted {
        return None;
    }
    let kind = record.kind.media_kind()?;
    let path = resolver.resolve(&record.id, kind)?;

    Some(GalleryItem {
        message_id: record.id,
        chat_id: record.chat_id,
        kind,
        created_at: record.created_at,
        path,
    })
}
