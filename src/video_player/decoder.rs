// SPDX-License-Identifier: MPL-2.0
//! Async video frame decoder using `FFmpeg`.
//!
//! Decoding runs in a blocking thread; commands and frames travel over
//! Tokio channels so the UI never waits on the decoder.

use crate::domain::error::MediaError;
use crate::domain::media::RawImage;
use crate::infrastructure::ffmpeg::{frame_to_raw, open_video, rgba_scaler};
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// A decoded video frame ready for display.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    pub image: RawImage,
    /// Presentation timestamp in seconds.
    pub pts_secs: f64,
}

/// Commands sent to the decoder task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderCommand {
    /// Start or resume. After the end of the stream, restarts from the top.
    Play,
    Pause,
    /// Stop decoding and release the file.
    Stop,
}

/// Events sent from the decoder to the UI.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    FrameReady(DecodedFrame),
    EndOfStream,
    Error(String),
}

/// Handle to a decoder running in a blocking thread.
pub struct AsyncDecoder {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,
    /// Bounded so a slow UI applies backpressure to decoding.
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl AsyncDecoder {
    /// Spawns a decoder for `video_path`. Nothing is decoded until `Play`.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::Io`] if the file does not exist.
    pub fn new<P: AsRef<Path>>(video_path: P) -> Result<Self, MediaError> {
        let path = video_path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(MediaError::Io(format!("Video file not found: {}", path.display())));
        }

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(2);

        // FFmpeg contexts are not Send; everything lives on this thread.
        tokio::task::spawn_blocking(move || {
            if let Err(err) = decoder_loop_blocking(&path, command_rx, &event_tx) {
                tracing::warn!(path = %path.display(), error = %err, "video decoder stopped");
                let _ = event_tx.blocking_send(DecoderEvent::Error(err.to_string()));
            }
        });

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    /// # Errors
    ///
    /// Returns [`MediaError::DecodingFailed`] if the decoder thread has exited.
    pub fn send_command(&self, command: DecoderCommand) -> Result<(), MediaError> {
        self.command_tx
            .send(command)
            .map_err(|_| MediaError::DecodingFailed("Decoder task is not running".into()))
    }

    /// Next decoder event, or `None` once the decoder thread is gone.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }
}

fn decoder_loop_blocking(
    path: &Path,
    mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
    event_tx: &mpsc::Sender<DecoderEvent>,
) -> Result<(), MediaError> {
    let (mut input, stream_index, mut decoder) = open_video(path)?;
    let mut scaler = rgba_scaler(decoder.format(), decoder.width(), decoder.height())?;

    let time_base = input
        .stream(stream_index)
        .map(|stream| stream.time_base())
        .map_or(0.0, |tb| {
            f64::from(tb.numerator()) / f64::from(tb.denominator().max(1))
        });

    let mut is_playing = false;
    let mut at_end = false;
    // Set once the demuxer ran dry and the decoder was told to drain.
    let mut eof_sent = false;
    // Wall clock and pts of the first frame since the last Play.
    let mut clock: Option<(Instant, f64)> = None;

    loop {
        match command_rx.try_recv() {
            Ok(DecoderCommand::Play) => {
                if at_end {
                    input
                        .seek(0, ..0)
                        .map_err(|e| MediaError::DecodingFailed(format!("Rewind failed: {e}")))?;
                    decoder.flush();
                    at_end = false;
                    eof_sent = false;
                }
                is_playing = true;
                clock = None;
            }
            Ok(DecoderCommand::Pause) => {
                is_playing = false;
                clock = None;
            }
            Ok(DecoderCommand::Stop) | Err(mpsc::error::TryRecvError::Disconnected) => break,
            Err(mpsc::error::TryRecvError::Empty) => {}
        }

        if !is_playing {
            std::thread::sleep(Duration::from_millis(10));
            continue;
        }

        let mut feed = PacketFeed {
            input: &mut input,
            decoder: &mut decoder,
            stream_index,
        };
        let Some(decoded) = pull_frame(&mut feed, &mut eof_sent) else {
            at_end = true;
            is_playing = false;
            clock = None;
            let _ = event_tx.blocking_send(DecoderEvent::EndOfStream);
            continue;
        };

        let mut rgba = ffmpeg_next::frame::Video::empty();
        scaler
            .run(&decoded, &mut rgba)
            .map_err(|e| MediaError::DecodingFailed(format!("Scaling failed: {e}")))?;
        let pts_secs = decoded.timestamp().map_or(0.0, |pts| pts as f64 * time_base);
        let frame = DecodedFrame {
            image: frame_to_raw(&rgba)?,
            pts_secs,
        };

        // Pace frames against the wall clock.
        let (started, first_pts) = *clock.get_or_insert((Instant::now(), frame.pts_secs));
        let due = started + Duration::from_secs_f64((frame.pts_secs - first_pts).max(0.0));
        let now = Instant::now();
        if due > now {
            std::thread::sleep(due - now);
        }

        if event_tx.blocking_send(DecoderEvent::FrameReady(frame)).is_err() {
            break;
        }
    }

    Ok(())
}

/// Packet side of a decoder: frames come out, packets go in.
trait FrameSource {
    type Frame;

    /// Next frame the decoder has ready, if any.
    fn receive(&mut self) -> Option<Self::Frame>;

    /// Sends the next packet of the stream. `false` once the input is exhausted.
    fn feed(&mut self) -> bool;

    /// Tells the decoder no more packets follow so it releases buffered frames.
    fn finish(&mut self);
}

/// Returns the next decoded frame, feeding packets as needed.
///
/// Decoders with reordering or frame delay hold frames back until more input
/// arrives, so at the end of the input the decoder is drained before `None`
/// is reported.
fn pull_frame<S: FrameSource>(source: &mut S, eof_sent: &mut bool) -> Option<S::Frame> {
    loop {
        if let Some(frame) = source.receive() {
            return Some(frame);
        }
        if *eof_sent {
            return None;
        }
        if !source.feed() {
            source.finish();
            *eof_sent = true;
        }
    }
}

struct PacketFeed<'a> {
    input: &'a mut ffmpeg_next::format::context::Input,
    decoder: &'a mut ffmpeg_next::decoder::Video,
    stream_index: usize,
}

impl FrameSource for PacketFeed<'_> {
    type Frame = ffmpeg_next::frame::Video;

    fn receive(&mut self) -> Option<Self::Frame> {
        let mut decoded = ffmpeg_next::frame::Video::empty();
        self.decoder.receive_frame(&mut decoded).ok().map(|()| decoded)
    }

    fn feed(&mut self) -> bool {
        for (stream, packet) in self.input.packets() {
            if stream.index() != self.stream_index {
                continue;
            }
            match self.decoder.send_packet(&packet) {
                Ok(()) => return true,
                Err(e) => tracing::debug!(error = %e, "packet rejected by decoder"),
            }
        }
        false
    }

    fn finish(&mut self) {
        if let Err(e) = self.decoder.send_eof() {
            tracing::debug!(error = %e, "decoder refused end of stream");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Holds back `delay` frames until more packets arrive or input ends.
    struct DelayedSource {
        packets: VecDeque<u32>,
        buffered: VecDeque<u32>,
        delay: usize,
        finished: bool,
        eof_calls: usize,
    }

    impl DelayedSource {
        fn new(frames: u32, delay: usize) -> Self {
            Self {
                packets: (0..frames).collect(),
                buffered: VecDeque::new(),
                delay,
                finished: false,
                eof_calls: 0,
            }
        }
    }

    impl FrameSource for DelayedSource {
        type Frame = u32;

        fn receive(&mut self) -> Option<u32> {
            if self.finished || self.buffered.len() > self.delay {
                self.buffered.pop_front()
            } else {
                None
            }
        }

        fn feed(&mut self) -> bool {
            match self.packets.pop_front() {
                Some(packet) => {
                    self.buffered.push_back(packet);
                    true
                }
                None => false,
            }
        }

        fn finish(&mut self) {
            self.finished = true;
            self.eof_calls += 1;
        }
    }

    #[test]
    fn delayed_frames_are_drained_at_end_of_input() {
        let mut source = DelayedSource::new(5, 2);
        let mut eof_sent = false;

        let mut frames = Vec::new();
        while let Some(frame) = pull_frame(&mut source, &mut eof_sent) {
            frames.push(frame);
        }

        assert_eq!(frames, vec![0, 1, 2, 3, 4]);
        assert!(eof_sent);
        assert_eq!(source.eof_calls, 1);
        assert_eq!(pull_frame(&mut source, &mut eof_sent), None);
        assert_eq!(source.eof_calls, 1);
    }

    #[test]
    fn stream_shorter_than_decoder_delay_still_yields_frames() {
        let mut source = DelayedSource::new(2, 4);
        let mut eof_sent = false;

        assert_eq!(pull_frame(&mut source, &mut eof_sent), Some(0));
        assert!(eof_sent);
        assert_eq!(pull_frame(&mut source, &mut eof_sent), Some(1));
        assert_eq!(pull_frame(&mut source, &mut eof_sent), None);
    }

    #[test]
    fn empty_input_ends_without_frames() {
        let mut source = DelayedSource::new(0, 0);
        let mut eof_sent = false;

        assert_eq!(pull_frame(&mut source, &mut eof_sent), None);
        assert_eq!(source.eof_calls, 1);
    }

    #[tokio::test]
    async fn decoder_fails_for_nonexistent_file() {
        let result = AsyncDecoder::new("/nonexistent/video.mp4");
        assert!(matches!(result, Err(MediaError::Io(_))));
    }

    #[tokio::test]
    async fn garbage_file_reports_error_once_playing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.mp4");
        std::fs::write(&path, b"not a video at all").unwrap();

        let mut decoder = AsyncDecoder::new(&path).unwrap();
        let event = tokio::time::timeout(Duration::from_secs(5), decoder.recv_event())
            .await
            .unwrap();

        assert!(matches!(event, Some(DecoderEvent::Error(_))));
    }
}
