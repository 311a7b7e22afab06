// SPDX-License-Identifier: MPL-2.0
//! Full-screen video player screen.

use crate::domain::message::MessageId;
use crate::video_player::{PlaybackMessage, VideoPlayer};
use iced::Subscription;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    Playback(PlaybackMessage),
    TogglePlayback,
}

#[derive(Debug)]
pub struct VideoViewer {
    pub message_id: MessageId,
    player: VideoPlayer,
}

impl VideoViewer {
    pub fn open(message_id: MessageId, path: PathBuf) -> Self {
        Self {
            message_id,
            player: VideoPlayer::new(path),
        }
    }

    pub fn player(&self) -> &VideoPlayer {
        &self.player
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Playback(playback) => self.player.handle_playback(playback),
            Message::TogglePlayback => self.player.toggle(),
        }
    }

    pub fn close(&mut self) {
        self.player.stop();
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.player.subscription().map(Message::Playback)
    }
}
