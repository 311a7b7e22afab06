// SPDX-License-Identifier: MPL-2.0
//! `FFmpeg` adapter implementing the [`ThumbnailExtractor`] port.
//!
//! Also hosts the helpers shared with the playback decoder in
//! `video_player`: one-time library initialization and stride-aware
//! RGBA frame copies.
//!
//! [`ThumbnailExtractor`]: crate::application::port::ThumbnailExtractor

use crate::application::port::ThumbnailExtractor;
use crate::domain::error::MediaError;
use crate::domain::media::RawImage;
use std::path::Path;
use std::sync::OnceLock;

static FFMPEG_INIT: OnceLock<Result<(), String>> = OnceLock::new();

/// Initializes `FFmpeg` once per process.
///
/// Sets the library log level to ERROR so container warnings such as
/// "Detected creation time before 1970" stay out of the terminal.
///
/// # Errors
///
/// Returns [`MediaError::DecodingFailed`] if the library failed to initialize.
pub fn init_ffmpeg() -> Result<(), MediaError> {
    FFMPEG_INIT
        .get_or_init(|| {
            ffmpeg_next::init().map_err(|e| e.to_string())?;
            // SAFETY: av_log_set_level only stores an integer and is thread-safe.
            unsafe {
                ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
            }
            Ok(())
        })
        .clone()
        .map_err(|e| MediaError::DecodingFailed(format!("FFmpeg initialization failed: {e}")))
}

/// Scaler converting decoded frames of the given format to RGBA.
pub(crate) fn rgba_scaler(
    format: ffmpeg_next::format::Pixel,
    width: u32,
    height: u32,
) -> Result<ffmpeg_next::software::scaling::Context, MediaError> {
    ffmpeg_next::software::scaling::Context::get(
        format,
        width,
        height,
        ffmpeg_next::format::Pixel::RGBA,
        width,
        height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| MediaError::DecodingFailed(format!("Failed to create scaler: {e}")))
}

/// Copies an RGBA frame into a tightly packed [`RawImage`], dropping row padding.
pub(crate) fn frame_to_raw(frame: &ffmpeg_next::frame::Video) -> Result<RawImage, MediaError> {
    let width = frame.width();
    let height = frame.height();
    let data = frame.data(0);
    let stride = frame.stride(0);
    let row_len = width as usize * 4;

    let mut rgba = Vec::with_capacity(row_len * height as usize);
    for y in 0..height as usize {
        let start = y * stride;
        let row = data
            .get(start..start + row_len)
            .ok_or(MediaError::NoFrame)?;
        rgba.extend_from_slice(row);
    }

    RawImage::from_rgba(width, height, rgba)
}

/// Opens `path` and returns its input context, best video stream index and decoder.
pub(crate) fn open_video(
    path: &Path,
) -> Result<
    (
        ffmpeg_next::format::context::Input,
        usize,
        ffmpeg_next::decoder::Video,
    ),
    MediaError,
> {
    init_ffmpeg()?;

    let input = ffmpeg_next::format::input(&path)
        .map_err(|e| MediaError::from_message(&format!("Failed to open video: {e}")))?;
    let (stream_index, parameters) = {
        let stream = input
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or(MediaError::NoVideoStream)?;
        (stream.index(), stream.parameters())
    };

    let decoder = ffmpeg_next::codec::context::Context::from_parameters(parameters)
        .and_then(|context| context.decoder().video())
        .map_err(|e| MediaError::UnsupportedFormat(format!("Failed to create decoder: {e}")))?;

    if decoder.width() == 0 || decoder.height() == 0 {
        return Err(MediaError::UnsupportedFormat(format!(
            "Invalid video dimensions: {}x{}",
            decoder.width(),
            decoder.height()
        )));
    }

    Ok((input, stream_index, decoder))
}

/// Extracts the first decodable frame of a video.
#[derive(Debug, Clone, Copy, Default)]
pub struct FfmpegThumbnailExtractor;

impl ThumbnailExtractor for FfmpegThumbnailExtractor {
    fn extract(&self, path: &Path) -> Result<RawImage, MediaError> {
        let (mut input, stream_index, mut decoder) = open_video(path)?;
        let mut scaler = rgba_scaler(decoder.format(), decoder.width(), decoder.height())?;

        let mut decoded = ffmpeg_next::frame::Video::empty();
        let mut rgba = ffmpeg_next::frame::Video::empty();

        for (stream, packet) in input.packets() {
            if stream.index() != stream_index {
                continue;
            }
            decoder
                .send_packet(&packet)
                .map_err(|e| MediaError::DecodingFailed(format!("Failed to send packet: {e}")))?;
            if decoder.receive_frame(&mut decoded).is_ok() {
                scaler
                    .run(&decoded, &mut rgba)
                    .map_err(|e| MediaError::DecodingFailed(format!("Scaling failed: {e}")))?;
                return frame_to_raw(&rgba);
            }
        }

        // Short clips may only yield their frame once the decoder is drained.
        decoder.send_eof().ok();
        if decoder.receive_frame(&mut decoded).is_ok() {
            scaler
                .run(&decoded, &mut rgba)
                .map_err(|e| MediaError::DecodingFailed(format!("Scaling failed: {e}")))?;
            return frame_to_raw(&rgba);
        }

        Err(MediaError::NoFrame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FfmpegThumbnailExtractor.extract(&dir.path().join("absent.mp4"));
        assert!(result.is_err());
    }

    #[test]
    fn non_video_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.mp4");
        std::fs::write(&path, b"definitely not a video container").unwrap();
        assert!(FfmpegThumbnailExtractor.extract(&path).is_err());
    }

    #[test]
    fn init_is_idempotent() {
        assert_eq!(init_ffmpeg().is_ok(), init_ffmpeg().is_ok());
    }
}
