// SPDX-License-Identifier: MPL-2.0
//! Media ports: local path resolution and pixel production.
//!
//! All methods are synchronous. Decoding is CPU-bound and is run from a
//! blocking task by the caller, never on the UI update loop (except the
//! small photo thumbnail scale, see `ui::gallery`).

use crate::domain::error::MediaError;
use crate::domain::media::{MediaKind, RawImage};
use crate::domain::message::MessageId;
use std::path::{Path, PathBuf};

/// Maps a message to its locally stored media file.
pub trait MediaResolver: Send + Sync {
    /// Returns the local path of the media for `id`, or `None` when the file
    /// has not been downloaded (or is empty).
    fn resolve(&self, id: &MessageId, kind: MediaKind) -> Option<PathBuf>;

    /// Small cached preview of the photo for `id`, if the client wrote one.
    fn resolve_thumbnail(&self, _id: &MessageId) -> Option<PathBuf> {
        None
    }
}

/// Extracts a representative frame from a video file.
pub trait ThumbnailExtractor: Send + Sync {
    /// Decodes the first video frame of `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`MediaError`] if the file has no decodable video frame.
    fn extract(&self, path: &Path) -> Result<RawImage, MediaError>;
}

/// Decodes still images.
pub trait ImageDecoder: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`MediaError`] if the file cannot be read or decoded.
    fn decode(&self, path: &Path) -> Result<RawImage, MediaError>;
}

/// Produces square thumbnails.
pub trait ImageScaler: Send + Sync {
    /// Center-crops `image` to a square and resizes it to `side` pixels.
    fn square(&self, image: &RawImage, side: u32) -> RawImage;
}
