// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like SQLite,
//! `FFmpeg`, the filesystem and HTTP.
//!
//! # Available Adapters
//!
//! - [`sqlite`]: Message store over SQLite (implements [`MessageStore`])
//! - [`media_cache`]: Downloaded media directory (implements [`MediaResolver`])
//! - [`ffmpeg`]: First-frame extraction via `FFmpeg` (implements [`ThumbnailExtractor`])
//! - [`auth`]: Remote password service over HTTP (implements [`AuthService`])
//!
//! [`MessageStore`]: crate::application::port::MessageStore
//! [`MediaResolver`]: crate::application::port::MediaResolver
//! [`ThumbnailExtractor`]: crate::application::port::ThumbnailExtractor
//! [`AuthService`]: crate::application::port::AuthService

pub mod auth;
pub mod ffmpeg;
pub mod media_cache;
pub mod sqlite;

pub use auth::{HttpAuthService, UnconfiguredAuthService};
pub use ffmpeg::FfmpegThumbnailExtractor;
pub use media_cache::MediaDirectory;
pub use sqlite::{SqliteMessageStore, UnavailableStore};
