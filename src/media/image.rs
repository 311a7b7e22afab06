// SPDX-License-Identifier: MPL-2.0
//! Photo decoding and square thumbnail scaling with the `image` crate.

use crate::application::port::{ImageDecoder, ImageScaler};
use crate::domain::error::MediaError;
use crate::domain::media::RawImage;
use iced::widget::image;
use image_rs::imageops::FilterType;
use image_rs::{DynamicImage, GenericImageView, ImageError, RgbaImage};
use std::fs;
use std::path::Path;

/// Decodes photos and produces square thumbnails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageProcessor;

impl ImageDecoder for ImageProcessor {
    fn decode(&self, path: &Path) -> Result<RawImage, MediaError> {
        let bytes = fs::read(path).map_err(|e| MediaError::Io(e.to_string()))?;
        let img = image_rs::load_from_memory(&bytes).map_err(media_error)?;
        let (width, height) = img.dimensions();
        RawImage::from_rgba(width, height, img.into_rgba8().into_vec())
    }
}

impl ImageScaler for ImageProcessor {
    fn square(&self, image: &RawImage, side: u32) -> RawImage {
        let side = side.max(1);
        let (width, height) = (image.width(), image.height());
        if width == side && height == side {
            return image.clone();
        }

        let Some(rgba) = RgbaImage::from_raw(width, height, image.rgba_bytes().to_vec()) else {
            // RawImage guarantees the buffer length, so this is unreachable in practice.
            return image.clone();
        };
        let edge = width.min(height);
        let x = (width - edge) / 2;
        let y = (height - edge) / 2;

        let cropped = DynamicImage::ImageRgba8(rgba).crop_imm(x, y, edge, edge);
        let scaled = cropped.resize_exact(side, side, FilterType::Triangle);

        match RawImage::from_rgba(side, side, scaled.into_rgba8().into_vec()) {
            Ok(raw) => raw,
            Err(_) => image.clone(),
        }
    }
}

/// Converts domain pixels into an Iced image handle.
#[must_use]
pub fn to_handle(raw: RawImage) -> image::Handle {
    let (width, height) = (raw.width(), raw.height());
    image::Handle::from_rgba(width, height, raw.into_rgba_bytes())
}

fn media_error(err: ImageError) -> MediaError {
    match err {
        ImageError::IoError(e) => MediaError::Io(e.to_string()),
        ImageError::Unsupported(e) => MediaError::UnsupportedFormat(e.to_string()),
        other => MediaError::DecodingFailed(other.to_string()),
    }
}
