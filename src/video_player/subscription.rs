// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for video playback events.
//!
//! Connects the async decoder to the UI event loop, delivering frames and
//! end-of-stream notices.

use super::{AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent};
use iced::futures::SinkExt;
use iced::stream;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Subscription ID for video playback.
/// Each playback session gets a unique ID so the subscription is recreated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VideoPlaybackId(u64);

/// Handle for sending commands to the decoder from the UI.
#[derive(Clone)]
pub struct DecoderCommandSender {
    tx: mpsc::UnboundedSender<DecoderCommand>,
}

impl DecoderCommandSender {
    /// Returns `false` if the subscription has already shut down.
    pub fn send(&self, command: DecoderCommand) -> bool {
        self.tx.send(command).is_ok()
    }
}

impl std::fmt::Debug for DecoderCommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoderCommandSender")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

/// Messages emitted by the video playback subscription.
#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    /// Subscription started; carries the command sender for play/pause.
    Started(DecoderCommandSender),
    FrameReady(DecodedFrame),
    EndOfStream,
    Error(String),
}

/// Creates a video playback subscription for one playback session.
pub fn video_playback(video_path: PathBuf, session_id: u64) -> iced::Subscription<PlaybackMessage> {
    iced::Subscription::run_with_id(
        VideoPlaybackId(session_id),
        stream::channel(100, move |mut output| async move {
            let mut decoder = match AsyncDecoder::new(&video_path) {
                Ok(decoder) => decoder,
                Err(err) => {
                    let _ = output.send(PlaybackMessage::Error(err.to_string())).await;
                    std::future::pending::<()>().await;
                    return;
                }
            };

            let (command_tx, mut command_rx) = mpsc::unbounded_channel();
            let _ = output
                .send(PlaybackMessage::Started(DecoderCommandSender { tx: command_tx }))
                .await;

            loop {
                tokio::select! {
                    command = command_rx.recv() => {
                        let Some(command) = command else { break };
                        if let Err(err) = decoder.send_command(command) {
                            let _ = output.send(PlaybackMessage::Error(err.to_string())).await;
                        }
                    }
                    event = decoder.recv_event() => {
                        let Some(event) = event else { break };
                        let message = match event {
                            DecoderEvent::FrameReady(frame) => PlaybackMessage::FrameReady(frame),
                            DecoderEvent::EndOfStream => PlaybackMessage::EndOfStream,
                            DecoderEvent::Error(msg) => PlaybackMessage::Error(msg),
                        };
                        let _ = output.send(message).await;
                    }
                }
            }

            // Keep subscription alive but idle
            std::future::pending::<()>().await;
        }),
    )
}
