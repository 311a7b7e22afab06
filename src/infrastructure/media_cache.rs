// SPDX-License-Identifier: MPL-2.0
//! Filesystem adapter for the [`MediaResolver`] port.
//!
//! Downloaded media lives under `<root>/media/<message id>.<ext>`, with `jpg`
//! for photos and `mp4` for videos. Small photo previews, when the client
//! cached them, live under `<root>/thumbs/<message id>.jpg`. A file that
//! exists but is empty is a download still in progress and does not resolve.

use crate::application::port::MediaResolver;
use crate::domain::media::MediaKind;
use crate::domain::message::MessageId;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct MediaDirectory {
    root: PathBuf,
}

impl MediaDirectory {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path where the media for `id` is (or would be) stored.
    ///
    /// Returns `None` for identifiers that would escape the media directory.
    #[must_use]
    pub fn path_for(&self, id: &MessageId, kind: MediaKind) -> Option<PathBuf> {
        let id = id.as_str();
        if id.is_empty() || id.contains(['/', '\\']) || id == "." || id == ".." {
            return None;
        }
        Some(
            self.root
                .join("media")
                .join(format!("{id}.{}", kind.extension())),
        )
    }

    /// Path of the cached photo preview for `id`.
    #[must_use]
    pub fn thumbnail_path_for(&self, id: &MessageId) -> Option<PathBuf> {
        let full = self.path_for(id, MediaKind::Photo)?;
        let name = full.file_name()?;
        Some(self.root.join("thumbs").join(name))
    }
}

fn non_empty_file(path: PathBuf) -> Option<PathBuf> {
    match std::fs::metadata(&path) {
        Ok(meta) if meta.is_file() && meta.len() > 0 => Some(path),
        _ => None,
    }
}

impl MediaResolver for MediaDirectory {
    fn resolve(&self, id: &MessageId, kind: MediaKind) -> Option<PathBuf> {
        non_empty_file(self.path_for(id, kind)?)
    }

    fn resolve_thumbnail(&self, id: &MessageId) -> Option<PathBuf> {
        non_empty_file(self.thumbnail_path_for(id)?)
    }
}
