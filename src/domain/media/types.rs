// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use crate::domain::error::MediaError;
use std::sync::Arc;

/// Kind of locally stored media attached to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Still photo (stored as JPEG).
    Photo,
    /// Video clip (stored as MP4).
    Video,
}

impl MediaKind {
    /// File extension used by the local media directory.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            MediaKind::Photo => "jpg",
            MediaKind::Video => "mp4",
        }
    }
}

/// Raw RGBA image data without presentation dependencies.
///
/// Thumbnails and full-size photos travel through the application as
/// `RawImage` and are converted to `iced::widget::image::Handle` only at
/// the view boundary.
///
/// # Example
///
/// ```
/// use chat_lens::domain::media::RawImage;
///
/// let image = RawImage::from_rgba(4, 2, vec![0u8; 4 * 2 * 4]).unwrap();
/// assert_eq!(image.width(), 4);
/// assert!(!image.is_square());
/// ```
#[derive(Debug, Clone)]
pub struct RawImage {
    width: u32,
    height: u32,
    /// RGBA pixel data (4 bytes per pixel), shared between clones.
    rgba_bytes: Arc<Vec<u8>>,
}

impl RawImage {
    /// Creates a `RawImage` from dimensions and owned RGBA pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::InvalidPixels`] if the buffer length is not
    /// `width * height * 4` or if either dimension is zero.
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Result<Self, MediaError> {
        let expected = (width as usize) * (height as usize) * 4;
        if width == 0 || height == 0 || rgba_bytes.len() != expected {
            return Err(MediaError::InvalidPixels {
                expected,
                actual: rgba_bytes.len(),
            });
        }

        Ok(Self {
            width,
            height,
            rgba_bytes: Arc::new(rgba_bytes),
        })
    }

    /// Returns the image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the RGBA pixel data.
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Returns an owned copy of the RGBA pixel data, cloning only when shared.
    #[must_use]
    pub fn into_rgba_bytes(self) -> Vec<u8> {
        Arc::try_unwrap(self.rgba_bytes).unwrap_or_else(|shared| (*shared).clone())
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

impl PartialEq for RawImage {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.rgba_bytes == other.rgba_bytes
    }
}

impl Eq for RawImage {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_matches_media_layout() {
        assert_eq!(MediaKind::Photo.extension(), "jpg");
        assert_eq!(MediaKind::Video.extension(), "mp4");
    }

    #[test]
    fn raw_image_rejects_wrong_length() {
        let err = RawImage::from_rgba(10, 10, vec![0u8; 100]).unwrap_err();
        assert_eq!(
            err,
            MediaError::InvalidPixels {
                expected: 400,
                actual: 100
            }
        );
    }

    #[test]
    fn raw_image_rejects_zero_dimension() {
        assert!(RawImage::from_rgba(0, 10, Vec::new()).is_err());
    }

    #[test]
    fn raw_image_equality_compares_pixels() {
        let a = RawImage::from_rgba(2, 2, vec![0u8; 16]).unwrap();
        let b = RawImage::from_rgba(2, 2, vec![0u8; 16]).unwrap();
        let c = RawImage::from_rgba(2, 2, vec![1u8; 16]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn into_rgba_bytes_survives_shared_clone() {
        let a = RawImage::from_rgba(1, 1, vec![1, 2, 3, 4]).unwrap();
        let b = a.clone();
        assert_eq!(a.into_rgba_bytes(), vec![1, 2, 3, 4]);
        assert_eq!(b.rgba_bytes(), &[1, 2, 3, 4]);
    }
}
