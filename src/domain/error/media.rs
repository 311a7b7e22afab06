// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failure while decoding a photo or extracting a video frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// The file could not be read.
    Io(String),
    /// Container or image format is not supported.
    UnsupportedFormat(String),
    /// The container has no video stream.
    NoVideoStream,
    /// The stream ended before a frame could be decoded.
    NoFrame,
    /// Decoding failed mid-stream.
    DecodingFailed(String),
    /// Pixel buffer length does not match its dimensions.
    InvalidPixels { expected: usize, actual: usize },
}

impl MediaError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            MediaError::Io(_) => "error-media-io",
            MediaError::UnsupportedFormat(_) => "error-media-unsupported",
            MediaError::NoVideoStream => "error-media-no-video-stream",
            MediaError::NoFrame => "error-media-no-frame",
            MediaError::DecodingFailed(_) | MediaError::InvalidPixels { .. } => {
                "error-media-decoding-failed"
            }
        }
    }

    /// Categorizes a raw decoder message.
    ///
    /// FFmpeg reports most failures as free text; this maps the common
    /// phrasings onto a variant so the viewer can show a useful message.
    #[must_use]
    pub fn from_message(msg: &str) -> Self {
        let lower = msg.to_lowercase();

        if lower.contains("no such file") || lower.contains("permission denied") {
            return MediaError::Io(msg.to_string());
        }
        if lower.contains("no video stream") || lower.contains("stream not found") {
            return MediaError::NoVideoStream;
        }
        if lower.contains("invalid data found") || lower.contains("unsupported") {
            return MediaError::UnsupportedFormat(msg.to_string());
        }

        MediaError::DecodingFailed(msg.to_string())
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::Io(msg) => write!(f, "I/O error: {msg}"),
            MediaError::UnsupportedFormat(msg) => write!(f, "Unsupported format: {msg}"),
            MediaError::NoVideoStream => write!(f, "No video stream found"),
            MediaError::NoFrame => write!(f, "No frame could be decoded"),
            MediaError::DecodingFailed(msg) => write!(f, "Decoding failed: {msg}"),
            MediaError::InvalidPixels { expected, actual } => {
                write!(f, "RGBA data length mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

impl std::error::Error for MediaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_message_categorizes_io() {
        assert!(matches!(
            MediaError::from_message("No such file or directory"),
            MediaError::Io(_)
        ));
    }

    #[test]
    fn from_message_categorizes_missing_stream() {
        assert_eq!(
            MediaError::from_message("Stream not found"),
            MediaError::NoVideoStream
        );
    }

    #[test]
    fn from_message_falls_back_to_decoding_failed() {
        assert_eq!(
            MediaError::from_message("packet error").i18n_key(),
            "error-media-decoding-failed"
        );
    }
}
