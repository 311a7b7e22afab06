// SPDX-License-Identifier: MPL-2.0
//! Playback state for the full-screen video player.
//!
//! - Loading: subscription starting, no frame yet
//! - Playing / Paused: frames flowing or held
//! - Ended: last frame shown; Play restarts from the top
//! - Error: playback failed, message shown in the player

use super::subscription::{video_playback, DecoderCommandSender, PlaybackMessage};
use super::DecoderCommand;
use crate::media::image::to_handle;
use iced::widget::image;
use iced::Subscription;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackState {
    Loading,
    Playing { position_secs: f64 },
    Paused { position_secs: f64 },
    Ended,
    Error { message: String },
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn position(&self) -> Option<f64> {
        match self {
            Self::Playing { position_secs } | Self::Paused { position_secs } => {
                Some(*position_secs)
            }
            _ => None,
        }
    }
}

/// Video player bound to one file and one playback session.
#[derive(Debug)]
pub struct VideoPlayer {
    session_id: u64,
    path: PathBuf,
    state: PlaybackState,
    frame: Option<image::Handle>,
    command_sender: Option<DecoderCommandSender>,
}

impl VideoPlayer {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            session_id: NEXT_SESSION.fetch_add(1, Ordering::Relaxed),
            path,
            state: PlaybackState::Loading,
            frame: None,
            command_sender: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Most recent frame, if any has been decoded.
    pub fn frame(&self) -> Option<&image::Handle> {
        self.frame.as_ref()
    }

    /// Playback ends once the state turns to `Error`.
    pub fn subscription(&self) -> Subscription<PlaybackMessage> {
        if self.state.error_message().is_some() {
            return Subscription::none();
        }
        video_playback(self.path.clone(), self.session_id)
    }

    pub fn handle_playback(&mut self, message: PlaybackMessage) {
        match message {
            PlaybackMessage::Started(sender) => {
                // Autoplay on open.
                if sender.send(DecoderCommand::Play) {
                    self.state = PlaybackState::Playing { position_secs: 0.0 };
                }
                self.command_sender = Some(sender);
            }
            PlaybackMessage::FrameReady(frame) => {
                self.frame = Some(to_handle(frame.image));
                if let PlaybackState::Playing { position_secs } = &mut self.state {
                    *position_secs = frame.pts_secs;
                }
            }
            PlaybackMessage::EndOfStream => {
                self.state = PlaybackState::Ended;
            }
            PlaybackMessage::Error(message) => {
                tracing::warn!(path = %self.path.display(), error = %message, "video playback failed");
                self.state = PlaybackState::Error { message };
            }
        }
    }

    pub fn play(&mut self) {
        let position_secs = match &self.state {
            PlaybackState::Paused { position_secs } => *position_secs,
            PlaybackState::Ended => 0.0,
            _ => return,
        };
        if self.send(DecoderCommand::Play) {
            self.state = PlaybackState::Playing { position_secs };
        }
    }

    pub fn pause(&mut self) {
        if let PlaybackState::Playing { position_secs } = self.state {
            if self.send(DecoderCommand::Pause) {
                self.state = PlaybackState::Paused { position_secs };
            }
        }
    }

    pub fn toggle(&mut self) {
        if self.state.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Stops the decoder thread. Called when the player closes.
    pub fn stop(&mut self) {
        self.send(DecoderCommand::Stop);
        self.command_sender = None;
    }

    fn send(&self, command: DecoderCommand) -> bool {
        self.command_sender
            .as_ref()
            .is_some_and(|sender| sender.send(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::RawImage;
    use crate::video_player::DecodedFrame;

    fn frame(pts_secs: f64) -> PlaybackMessage {
        PlaybackMessage::FrameReady(DecodedFrame {
            image: RawImage::from_rgba(1, 1, vec![0; 4]).unwrap(),
            pts_secs,
        })
    }

    #[test]
    fn new_player_is_loading() {
        let player = VideoPlayer::new(PathBuf::from("/v.mp4"));
        assert_eq!(player.state(), &PlaybackState::Loading);
        assert!(player.frame().is_none());
    }

    #[test]
    fn controls_without_decoder_do_nothing() {
        let mut player = VideoPlayer::new(PathBuf::from("/v.mp4"));
        player.toggle();
        assert_eq!(player.state(), &PlaybackState::Loading);
    }

    #[test]
    fn frames_update_image_and_position() {
        let mut player = VideoPlayer::new(PathBuf::from("/v.mp4"));
        player.state = PlaybackState::Playing { position_secs: 0.0 };
        player.handle_playback(frame(1.5));
        assert!(player.frame().is_some());
        assert_eq!(player.state().position(), Some(1.5));
    }

    #[test]
    fn end_of_stream_then_error() {
        let mut player = VideoPlayer::new(PathBuf::from("/v.mp4"));
        player.handle_playback(PlaybackMessage::EndOfStream);
        assert_eq!(player.state(), &PlaybackState::Ended);

        player.handle_playback(PlaybackMessage::Error("boom".into()));
        assert_eq!(player.state().error_message(), Some("boom"));
    }
}
