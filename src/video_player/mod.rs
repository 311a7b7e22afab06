// SPDX-License-Identifier: MPL-2.0
//! Video playback engine for the full-screen player.
//!
//! `FFmpeg` decodes in a blocking thread; frames reach the UI through an
//! Iced subscription. Audio is not played.

mod decoder;
mod state;
pub mod subscription;

pub use decoder::{AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent};
pub use state::{PlaybackState, VideoPlayer};
pub use subscription::{video_playback, DecoderCommandSender, PlaybackMessage, VideoPlaybackId};
