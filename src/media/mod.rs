// SPDX-License-Identifier: MPL-2.0
//! Pixel work for photos: decoding, square thumbnails and conversion to
//! Iced image handles.
//!
//! Video frames come from `infrastructure::ffmpeg`; everything that turns a
//! [`RawImage`](crate::domain::media::RawImage) into something drawable lives here.

pub mod image;

pub use image::{to_handle, ImageProcessor};
